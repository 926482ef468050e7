//! Arrow-key selection menu for the terminal.
//!
//! ```no_run
//! use pickmenu::{MenuOutcome, show_menu};
//!
//! match show_menu(&["Red", "Green", "Blue"], Some("Pick a color"), false)? {
//!     MenuOutcome::Selected(color) => println!("you picked {color}"),
//!     _ => println!("nothing picked"),
//! }
//! # Ok::<(), pickmenu::MenuError>(())
//! ```

pub mod config;
pub mod media;
pub mod menu;
pub mod process;
pub mod terminal;

pub use menu::{Menu, MenuError, MenuOutcome, MenuProvider, TerminalMenu, show_menu};
