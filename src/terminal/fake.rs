//! In-memory console and scripted key source for tests.

use std::collections::VecDeque;
use std::io::{self, Write};

use super::{Console, KeyError, KeySource};
use crate::menu::Key;

/// Console that records output and the cursor flag in memory.
///
/// The first `set_cursor_visible` call is treated as the hide, every later
/// call as a restore.
pub struct FakeConsole {
    pub buf: Vec<u8>,
    pub visible: bool,
    pub width: Option<u16>,
    pub fail_hide: bool,
    pub fail_restore: bool,
    pub fail_write: bool,
    set_calls: usize,
}

impl FakeConsole {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            visible: true,
            width: None,
            fail_hide: false,
            fail_restore: false,
            fail_write: false,
            set_calls: 0,
        }
    }

    pub fn restore_calls(&self) -> usize {
        self.set_calls.saturating_sub(1)
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }

    /// Screen contents after replaying everything written so far.
    pub fn screen(&self) -> vt100::Parser {
        let mut parser = vt100::Parser::new(24, 80, 0);
        parser.process(&self.buf);
        parser
    }
}

impl Write for FakeConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_write {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Console for FakeConsole {
    fn cursor_visible(&self) -> bool {
        self.visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.set_calls += 1;
        let is_hide = self.set_calls == 1;
        if (is_hide && self.fail_hide) || (!is_hide && self.fail_restore) {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "no cursor"));
        }
        self.visible = visible;
        Ok(())
    }

    fn width(&self) -> Option<u16> {
        self.width
    }
}

/// Key source that replays a fixed script, then fails like a closed input.
pub struct ScriptedKeys {
    keys: VecDeque<Result<Key, KeyError>>,
    pub reads: usize,
}

impl ScriptedKeys {
    pub fn new(keys: &[Key]) -> Self {
        Self {
            keys: keys.iter().copied().map(Ok).collect(),
            reads: 0,
        }
    }

    pub fn then_interrupt(mut self) -> Self {
        self.keys.push_back(Err(KeyError::Interrupted));
        self
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Result<Key, KeyError> {
        self.reads += 1;
        self.keys.pop_front().unwrap_or_else(|| {
            Err(KeyError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no interactive input",
            )))
        })
    }
}
