use anyhow::{Result, bail};
use std::collections::VecDeque;
use std::time::Duration;

use super::Console;
use crate::app::View;
use crate::input::Key;

/// Console that replays a fixed key sequence and records what was drawn
pub struct ScriptedConsole {
    keys: VecDeque<Option<Key>>,
    frames: Vec<&'static str>,
    idle: Duration,
    flushes: usize,
}

impl ScriptedConsole {
    /// Each entry answers one poll; `None` is a poll that timed out.
    pub fn new(keys: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            frames: Vec::new(),
            idle: Duration::ZERO,
            flushes: 0,
        }
    }

    /// Screen names in draw order
    pub fn frames(&self) -> &[&'static str] {
        &self.frames
    }

    pub fn idle_time(&self) -> Duration {
        self.idle
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Console for ScriptedConsole {
    fn draw(&mut self, view: &View<'_>) -> Result<()> {
        self.frames.push(view.screen.name());
        Ok(())
    }

    fn poll_key(&mut self, _timeout: Duration) -> Result<Option<Key>> {
        match self.keys.pop_front() {
            Some(key) => Ok(key),
            None => bail!("key script ran out after {} frames", self.frames.len()),
        }
    }

    fn flush_input(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn idle(&mut self, duration: Duration) {
        self.idle += duration;
    }
}
