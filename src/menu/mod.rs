//! Interactive arrow-key selection menu.
//!
//! [`show_menu`] and [`Menu`] draw a title and a list of labels, move a
//! highlight with Up/Down (wrapping at both ends), and finish on Enter or
//! Escape. The text cursor is hidden while the menu is up and restored on
//! every exit path.

mod help;
mod provider;
mod render;
mod show;
mod state;

pub use help::write_usage;
pub use provider::{MenuProvider, TerminalMenu};
pub use render::{CANCEL_NOTICE, HINT, RenderStyle, draw_frame, fit_width};
pub use show::{DEFAULT_TITLE, Menu, MenuError, show_menu};
pub use state::{Key, MenuOutcome, MenuState, MenuStatus};
