use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use crossterm::tty::IsTty;

use pickmenu::TerminalMenu;
use pickmenu::config::Config;
use pickmenu::media;
use pickmenu::menu::Menu;
use pickmenu::terminal::{Output, debug_log};

mod cli;

use cli::{Cli, Command, EXIT_CANCELLED, EXIT_ERROR, MenuArgs, StreamArgs};

fn main() -> ExitCode {
    let cli = match cli::parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run 'pickmenu --help' for usage");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match cli.command {
        Command::Help => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("pickmenu {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    match debug_log::init(cli.debug) {
        Ok(Some(path)) => eprintln!("debug log: {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("warning: cannot open debug log: {e}"),
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config =
        Config::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Command::Menu(args) => run_menu(&config, args),
        Command::Stream(args) => run_stream(&config, args),
        Command::Help | Command::Version => Ok(ExitCode::SUCCESS),
    }
}

fn run_menu(config: &Config, args: MenuArgs) -> Result<ExitCode> {
    let mut options = args.options;
    if options.is_empty() && !io::stdin().is_tty() {
        options = cli::read_options(io::stdin().lock()).context("failed to read options")?;
    }

    // The menu goes to stderr so stdout only carries the result.
    let title = args.title.as_deref().unwrap_or(&config.title);
    let outcome = Menu::new(&options)
        .title(title)
        .return_index(args.return_index)
        .style(config.render_style())
        .output(Output::Stderr)
        .show()?;

    if let Some(line) = cli::result_line(&outcome) {
        println!("{line}");
    }
    Ok(ExitCode::from(cli::exit_status(&outcome)))
}

fn run_stream(config: &Config, args: StreamArgs) -> Result<ExitCode> {
    let mut config = config.clone();
    if let Some(count) = args.results {
        config.search_results = count;
    }

    eprintln!("Searching for '{}'...", args.query);
    let results = media::search(&config, &args.query).context("search failed")?;

    let mut menu = TerminalMenu::from_config(&config, Output::Stderr);
    let picked = media::pick_result(&mut menu, "Select a result:", &args.query, &results)?;
    let Some(picked) = picked else {
        return Ok(ExitCode::from(EXIT_CANCELLED));
    };

    eprintln!("Playing: {}", picked.title);
    media::play(&config, &media::watch_url(&picked.id), args.play).context("playback failed")?;
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "pickmenu {} - Arrow-key selection menu for the terminal

USAGE:
    pickmenu [OPTIONS] [--] <OPTION>...
    <command> | pickmenu [OPTIONS]
    pickmenu stream [STREAM OPTIONS] <QUERY>...

OPTIONS:
    -t, --title <TEXT>      Line shown above the options
    -i, --index             Print the zero-based index instead of the label
    -c, --config <PATH>     Config file (default: <config dir>/pickmenu/config.json)
    --debug                 Write a debug log to ~/.pickmenu/debug.log
    -h, --help              Print help information
    -V, --version           Print version information

STREAM OPTIONS:
    -n, --results <N>       Number of search results to offer
    --no-video              Play audio only
    --loop                  Repeat the chosen video

KEYS:
    Up/Down move, Enter selects, Esc cancels.

EXIT STATUS:
    0 on selection, 1 when cancelled, 2 on error.

The menu is drawn on stderr; the selection is printed on stdout.",
        env!("CARGO_PKG_VERSION")
    );
}
