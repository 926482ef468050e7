use std::io::{self, BufRead};
use std::path::PathBuf;

use thiserror::Error;

use pickmenu::media::PlayOptions;
use pickmenu::menu::MenuOutcome;

/// Exit code when the user picked something.
pub const EXIT_SELECTED: u8 = 0;

/// Exit code when the user pressed Escape.
pub const EXIT_CANCELLED: u8 = 1;

/// Exit code for errors.
pub const EXIT_ERROR: u8 = 2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("'{0}' needs a value")]
    MissingValue(String),

    #[error("invalid number '{value}' for '{flag}'")]
    InvalidNumber { flag: String, value: String },

    #[error("stream needs a search query")]
    MissingQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuArgs {
    pub title: Option<String>,
    pub return_index: bool,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamArgs {
    pub query: String,
    pub play: PlayOptions,
    pub results: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Menu(MenuArgs),
    Stream(StreamArgs),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub command: Command,
    pub config: Option<PathBuf>,
    pub debug: bool,
}

/// Parse arguments, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let stream = args.peek().is_some_and(|a| a == "stream");
    if stream {
        args.next();
    }

    let mut config = None;
    let mut debug = false;
    let mut title = None;
    let mut return_index = false;
    let mut play = PlayOptions::default();
    let mut results = None;
    let mut positional = Vec::new();
    let mut only_positional = false;

    while let Some(arg) = args.next() {
        if only_positional {
            positional.push(arg);
            continue;
        }

        match arg.as_str() {
            "--" => only_positional = true,
            "-h" | "--help" => return Ok(cli(Command::Help, config, debug)),
            "-V" | "--version" => return Ok(cli(Command::Version, config, debug)),
            "-c" | "--config" => config = Some(PathBuf::from(value(&arg, args.next())?)),
            "--debug" => debug = true,
            "-t" | "--title" if !stream => title = Some(value(&arg, args.next())?),
            "-i" | "--index" if !stream => return_index = true,
            "--no-video" if stream => play.no_video = true,
            "--loop" if stream => play.loop_playback = true,
            "-n" | "--results" if stream => {
                let raw = value(&arg, args.next())?;
                let count = raw.parse::<u32>().map_err(|_| CliError::InvalidNumber {
                    flag: arg.clone(),
                    value: raw.clone(),
                })?;
                results = Some(count);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::UnknownArgument(flag.to_string()));
            }
            _ => positional.push(arg.clone()),
        }
    }

    let command = if stream {
        if positional.is_empty() {
            return Err(CliError::MissingQuery);
        }
        Command::Stream(StreamArgs {
            query: positional.join(" "),
            play,
            results,
        })
    } else {
        Command::Menu(MenuArgs {
            title,
            return_index,
            options: positional,
        })
    };

    Ok(cli(command, config, debug))
}

fn cli(command: Command, config: Option<PathBuf>, debug: bool) -> Cli {
    Cli {
        command,
        config,
        debug,
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, CliError> {
    next.ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

/// Read menu options from piped input, one per non-blank line.
pub fn read_options<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut options = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if !line.trim().is_empty() {
            options.push(line.to_string());
        }
    }
    Ok(options)
}

/// What to print on stdout for a finished menu.
pub fn result_line(outcome: &MenuOutcome) -> Option<String> {
    match outcome {
        MenuOutcome::Selected(value) => Some(value.clone()),
        MenuOutcome::SelectedIndex(index) => Some(index.to_string()),
        MenuOutcome::Cancelled | MenuOutcome::Usage => None,
    }
}

/// Process exit code for a finished menu.
pub fn exit_status(outcome: &MenuOutcome) -> u8 {
    match outcome {
        MenuOutcome::Selected(_) | MenuOutcome::SelectedIndex(_) | MenuOutcome::Usage => {
            EXIT_SELECTED
        }
        MenuOutcome::Cancelled => EXIT_CANCELLED,
    }
}
