use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Guard that keeps the terminal in raw mode until dropped.
pub struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { enabled: true })
    }

    /// Leave raw mode early (also happens on drop).
    pub fn disable(&mut self) {
        if self.enabled {
            let _ = disable_raw_mode();
            self.enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
