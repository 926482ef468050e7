/// A key press the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    /// Any other key; causes a redraw and nothing else.
    Other,
}

/// Lifecycle of one menu invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStatus {
    Running,
    Confirmed,
    Cancelled,
}

/// What a menu invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The selected label (index mode off).
    Selected(String),

    /// Zero-based index of the selected label (index mode on).
    SelectedIndex(usize),

    /// Escape was pressed.
    Cancelled,

    /// No options were given; usage help was printed instead of a menu.
    Usage,
}

impl MenuOutcome {
    /// Returns true if the user picked something.
    pub fn is_selection(&self) -> bool {
        matches!(self, Self::Selected(_) | Self::SelectedIndex(_))
    }
}

/// Transient state for a single menu invocation.
#[derive(Debug)]
pub struct MenuState<'a, S> {
    options: &'a [S],
    title: &'a str,
    return_index: bool,
    selected: usize,
    status: MenuStatus,
}

impl<'a, S: AsRef<str>> MenuState<'a, S> {
    /// Create a running state with the first option selected.
    ///
    /// An empty slice is tolerated: only Escape can end such a menu.
    pub fn new(options: &'a [S], title: &'a str, return_index: bool) -> Self {
        Self {
            options,
            title,
            return_index,
            selected: 0,
            status: MenuStatus::Running,
        }
    }

    pub fn options(&self) -> &'a [S] {
        self.options
    }

    pub fn title(&self) -> &'a str {
        self.title
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status(&self) -> MenuStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == MenuStatus::Running
    }

    /// Apply one key press. Keys are ignored once the menu has left `Running`.
    pub fn apply(&mut self, key: Key) -> MenuStatus {
        if !self.is_running() {
            return self.status;
        }

        let len = self.options.len();
        if len == 0 {
            if key == Key::Escape {
                self.status = MenuStatus::Cancelled;
            }
            return self.status;
        }

        match key {
            Key::Up => self.selected = (self.selected + len - 1) % len,
            Key::Down => self.selected = (self.selected + 1) % len,
            Key::Enter => self.status = MenuStatus::Confirmed,
            Key::Escape => self.status = MenuStatus::Cancelled,
            Key::Other => {}
        }
        self.status
    }

    /// The outcome for a finished menu, or None while still running.
    pub fn outcome(&self) -> Option<MenuOutcome> {
        match self.status {
            MenuStatus::Running => None,
            MenuStatus::Cancelled => Some(MenuOutcome::Cancelled),
            MenuStatus::Confirmed if self.return_index => {
                Some(MenuOutcome::SelectedIndex(self.selected))
            }
            MenuStatus::Confirmed => Some(MenuOutcome::Selected(
                self.options[self.selected].as_ref().to_string(),
            )),
        }
    }
}
