use super::render::RenderStyle;
use super::show::{Menu, MenuError};
use super::state::MenuOutcome;
use crate::config::Config;
use crate::terminal::Output;

/// Something that can ask the user to pick one of several labels.
///
/// Consumers take a provider instead of reaching for a terminal directly,
/// so they can be driven by a script in tests or by another front end.
pub trait MenuProvider {
    /// Returns the index of the chosen label, or None if the user cancelled.
    fn select_index(&mut self, title: &str, options: &[String])
    -> Result<Option<usize>, MenuError>;
}

impl<F> MenuProvider for F
where
    F: FnMut(&str, &[String]) -> Result<Option<usize>, MenuError>,
{
    fn select_index(
        &mut self,
        title: &str,
        options: &[String],
    ) -> Result<Option<usize>, MenuError> {
        self(title, options)
    }
}

/// Provider backed by the interactive terminal menu.
#[derive(Debug, Clone, Default)]
pub struct TerminalMenu {
    style: RenderStyle,
    output: Output,
}

impl TerminalMenu {
    pub fn new(style: RenderStyle, output: Output) -> Self {
        Self { style, output }
    }

    pub fn from_config(config: &Config, output: Output) -> Self {
        Self::new(config.render_style(), output)
    }
}

impl MenuProvider for TerminalMenu {
    fn select_index(
        &mut self,
        title: &str,
        options: &[String],
    ) -> Result<Option<usize>, MenuError> {
        let outcome = Menu::new(options)
            .title(title)
            .return_index(true)
            .style(self.style.clone())
            .output(self.output)
            .show()?;

        Ok(match outcome {
            MenuOutcome::SelectedIndex(index) => Some(index),
            _ => None,
        })
    }
}
