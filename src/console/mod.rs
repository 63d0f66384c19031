//! Where frames go and keys come from
//!
//! The game never talks to the terminal directly. It draws a [`View`] and
//! asks for keys through [`Console`], so the whole state machine can be run
//! against a scripted console in tests.

pub mod terminal;

#[cfg(test)]
pub(crate) mod scripted;

pub use terminal::TerminalConsole;

use anyhow::Result;
use std::thread;
use std::time::{Duration, Instant};

use crate::app::View;
use crate::input::Key;

pub trait Console {
    fn draw(&mut self, view: &View<'_>) -> Result<()>;

    /// Block until a key is pressed or `timeout` passes. `None` means the
    /// time ran out.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>>;

    /// Throw away keys pressed but not read yet.
    fn flush_input(&mut self) -> Result<()> {
        Ok(())
    }

    /// Sit out the rest of a tick.
    fn idle(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Wait one full game tick for a key.
///
/// Returns as soon as a key arrives but only after idling away whatever is
/// left of `budget`, so ticks keep a steady pace whether or not the player
/// pressed anything. Keys pressed during the idle time are dropped.
pub fn wait_for_tick<C: Console + ?Sized>(console: &mut C, budget: Duration) -> Result<Option<Key>> {
    let started = Instant::now();

    let key = console.poll_key(budget)?;

    let rest = budget.saturating_sub(started.elapsed());
    if !rest.is_zero() {
        console.idle(rest);
    }
    console.flush_input()?;

    Ok(key)
}
