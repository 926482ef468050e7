use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal;
use crossterm::tty::IsTty;

/// Which standard stream a menu is drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
}

/// A text console the menu can draw on.
///
/// Besides accepting output, a console owns the text cursor visibility
/// flag that the menu hides while it is shown.
pub trait Console: Write {
    /// Current cursor visibility as far as this console knows it.
    fn cursor_visible(&self) -> bool;

    /// Show or hide the text cursor.
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Width of the console in columns, if known.
    fn width(&self) -> Option<u16> {
        None
    }
}

/// A console backed by a real terminal stream through crossterm.
///
/// Terminals cannot report whether the cursor is visible, so the flag is
/// tracked here and starts out visible.
pub struct CrosstermConsole<W: Write> {
    out: W,
    is_tty: bool,
    cursor_visible: bool,
}

impl CrosstermConsole<io::Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let is_tty = out.is_tty();
        Self::new(out, is_tty)
    }
}

impl CrosstermConsole<io::Stderr> {
    pub fn stderr() -> Self {
        let out = io::stderr();
        let is_tty = out.is_tty();
        Self::new(out, is_tty)
    }
}

impl<W: Write> CrosstermConsole<W> {
    pub fn new(out: W, is_tty: bool) -> Self {
        Self {
            out,
            is_tty,
            cursor_visible: true,
        }
    }
}

impl<W: Write> Write for CrosstermConsole<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Console for CrosstermConsole<W> {
    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if !self.is_tty {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "output is not a terminal",
            ));
        }

        if visible {
            execute!(self.out, Show)?;
        } else {
            execute!(self.out, Hide)?;
        }
        self.cursor_visible = visible;
        Ok(())
    }

    fn width(&self) -> Option<u16> {
        if !self.is_tty {
            return None;
        }
        // A pty without a window size reports zero columns.
        terminal::size()
            .ok()
            .map(|(cols, _)| cols)
            .filter(|&cols| cols > 0)
    }
}
