mod command;

pub use command::{CommandError, CommandResult, ToolCommand};
