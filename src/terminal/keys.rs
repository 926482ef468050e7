use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

use super::raw_mode::RawModeGuard;
use crate::menu::Key;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("failed to read key press: {0}")]
    Io(#[from] io::Error),

    #[error("interrupted by Ctrl+C")]
    Interrupted,
}

/// A blocking source of key presses.
pub trait KeySource {
    /// Block until the next key press.
    fn read_key(&mut self) -> Result<Key, KeyError>;
}

/// Reads key presses from the controlling terminal.
///
/// Raw mode is entered on the first read and left when this value is
/// dropped.
#[derive(Default)]
pub struct CrosstermKeys {
    raw_mode: Option<RawModeGuard>,
}

impl CrosstermKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> Result<Key, KeyError> {
        if self.raw_mode.is_none() {
            self.raw_mode = Some(RawModeGuard::new()?);
        }

        loop {
            if let Some(key) = translate_event(event::read()?) {
                return key;
            }
        }
    }
}

/// Map a terminal event to a menu key, or None for events the menu does
/// not react to.
///
/// A resize counts as an unbound key so the menu is redrawn at the new
/// width. Release and repeat events are reported on some platforms and
/// are skipped.
pub fn translate_event(event: Event) -> Option<Result<Key, KeyError>> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(translate_key(key)),
        Event::Resize(..) => Some(Ok(Key::Other)),
        _ => None,
    }
}

/// Map a crossterm key event to a menu key.
pub fn translate_key(event: KeyEvent) -> Result<Key, KeyError> {
    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            return Err(KeyError::Interrupted);
        }
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    };
    Ok(key)
}
