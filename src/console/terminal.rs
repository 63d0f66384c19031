use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};

use super::Console;
use crate::app::View;
use crate::input::{InputHandler, Key};
use crate::render::Renderer;

/// The real terminal, in raw mode on the alternate screen
pub struct TerminalConsole {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl TerminalConsole {
    /// Take over the terminal. Call [`TerminalConsole::restore`] before exiting.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        Self::take_over().inspect_err(|_| {
            // Already failing, the setup error is the one to report
            let _ = execute!(stderr(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })
    }

    fn take_over() -> Result<Self> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        Ok(Self {
            terminal,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
        })
    }

    /// Hand the terminal back to the shell.
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl Console for TerminalConsole {
    fn draw(&mut self, view: &View<'_>) -> Result<()> {
        let renderer = &self.renderer;
        self.terminal
            .draw(|frame| renderer.render(frame, view))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining).context("Failed to poll for input")? {
                return Ok(None);
            }
            // Resizes, releases and unmapped keys do not end the wait
            if let Event::Key(key) = event::read().context("Failed to read input")? {
                if let Some(key) = self.input_handler.handle_key_event(key) {
                    return Ok(Some(key));
                }
            }
            if remaining.is_zero() {
                return Ok(None);
            }
        }
    }

    fn flush_input(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO).context("Failed to poll for input")? {
            event::read().context("Failed to read input")?;
        }
        Ok(())
    }
}
