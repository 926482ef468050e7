//! Terminal plumbing: the console the menu draws on, cursor visibility,
//! raw-mode key input and log setup.

mod console;
mod cursor;
pub mod debug_log;
#[cfg(test)]
pub(crate) mod fake;
mod keys;
mod raw_mode;

pub use console::{Console, CrosstermConsole, Output};
pub use cursor::CursorGuard;
pub use keys::{CrosstermKeys, KeyError, KeySource, translate_event, translate_key};
pub use raw_mode::RawModeGuard;
