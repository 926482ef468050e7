use std::io;

use thiserror::Error;
use tracing::{debug, info};

use super::help;
use super::render::{self, CANCEL_NOTICE, RenderStyle};
use super::state::{MenuOutcome, MenuState, MenuStatus};
use crate::terminal::{
    Console, CrosstermConsole, CrosstermKeys, CursorGuard, KeyError, KeySource, Output,
};

/// Title used when the caller does not give one.
pub const DEFAULT_TITLE: &str = "Please select an option:";

/// Errors that end a menu invocation early.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("failed to read key press: {0}")]
    ReadKey(#[source] io::Error),

    #[error("menu interrupted")]
    Interrupted,

    #[error("failed to draw menu: {0}")]
    Render(#[source] io::Error),
}

impl From<KeyError> for MenuError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::Io(e) => Self::ReadKey(e),
            KeyError::Interrupted => Self::Interrupted,
        }
    }
}

/// Builder for one interactive menu invocation.
pub struct Menu<'a, S> {
    options: &'a [S],
    title: Option<&'a str>,
    return_index: bool,
    style: RenderStyle,
    output: Output,
}

impl<'a, S: AsRef<str>> Menu<'a, S> {
    pub fn new(options: &'a [S]) -> Self {
        Self {
            options,
            title: None,
            return_index: false,
            style: RenderStyle::default(),
            output: Output::Stdout,
        }
    }

    /// Set the line shown above the options.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Return the selected index instead of the label.
    pub fn return_index(mut self, return_index: bool) -> Self {
        self.return_index = return_index;
        self
    }

    pub fn style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Draw on stderr instead of stdout.
    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Show the menu on the real terminal and block until it finishes.
    pub fn show(self) -> Result<MenuOutcome, MenuError> {
        let mut keys = CrosstermKeys::new();
        match self.output {
            Output::Stdout => self.run(&mut CrosstermConsole::stdout(), &mut keys),
            Output::Stderr => self.run(&mut CrosstermConsole::stderr(), &mut keys),
        }
    }

    /// Run the menu against the given console and key source.
    ///
    /// With no options this prints usage help and returns
    /// [`MenuOutcome::Usage`] without reading any input.
    pub fn run<C: Console, K: KeySource>(
        self,
        console: &mut C,
        keys: &mut K,
    ) -> Result<MenuOutcome, MenuError> {
        if self.options.is_empty() {
            debug!("menu called without options, printing usage");
            let _ = help::write_usage(console);
            return Ok(MenuOutcome::Usage);
        }

        let title = self.title.unwrap_or(DEFAULT_TITLE);
        let mut state = MenuState::new(self.options, title, self.return_index);
        debug!(
            options = self.options.len(),
            return_index = self.return_index,
            "menu started"
        );

        let mut console = CursorGuard::hide(console);
        run_loop(&mut *console, keys, &mut state, &self.style)
    }
}

fn run_loop<C: Console, K: KeySource, S: AsRef<str>>(
    console: &mut C,
    keys: &mut K,
    state: &mut MenuState<'_, S>,
    style: &RenderStyle,
) -> Result<MenuOutcome, MenuError> {
    while state.is_running() {
        let width = console.width();
        render::draw_frame(console, state, style, width).map_err(MenuError::Render)?;

        let key = keys.read_key()?;
        debug!(?key, selected = state.selected(), "key pressed");
        state.apply(key);
    }

    match state.status() {
        MenuStatus::Cancelled => {
            info!("menu cancelled");
            let _ = render::write_notice(console, CANCEL_NOTICE);
        }
        MenuStatus::Confirmed => info!(index = state.selected(), "menu confirmed"),
        MenuStatus::Running => {}
    }

    Ok(state.outcome().unwrap_or(MenuOutcome::Cancelled))
}

/// Show a menu on stdout.
///
/// `title` falls back to [`DEFAULT_TITLE`]. With `return_index` the
/// outcome is [`MenuOutcome::SelectedIndex`], otherwise
/// [`MenuOutcome::Selected`].
pub fn show_menu<S: AsRef<str>>(
    options: &[S],
    title: Option<&str>,
    return_index: bool,
) -> Result<MenuOutcome, MenuError> {
    let mut menu = Menu::new(options).return_index(return_index);
    if let Some(title) = title {
        menu = menu.title(title);
    }
    menu.show()
}
