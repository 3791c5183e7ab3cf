use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;
use tracing::debug;

/// Keeps the terminal in raw mode until dropped.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("Raw mode enabled");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            debug!("Failed to disable raw mode: {}", e);
        }
    }
}

/// Block until the next key press.
///
/// Release and repeat events are ignored so that Windows terminals do not
/// report every key twice.
pub fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()?
            && is_press(&key)
        {
            return Ok(key);
        }
    }
}

fn is_press(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press
}
