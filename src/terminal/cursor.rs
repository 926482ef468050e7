use std::ops::{Deref, DerefMut};

use tracing::{debug, warn};

use super::Console;

/// Guard that hides the console cursor and puts the previous visibility
/// back when dropped.
///
/// Failing to hide is not fatal: the guard logs a warning and the menu
/// carries on with a visible cursor. Failing to restore is ignored.
pub struct CursorGuard<'a, C: Console> {
    console: &'a mut C,
    prior: bool,
}

impl<'a, C: Console> CursorGuard<'a, C> {
    /// Hide the cursor, remembering whether it was visible before.
    pub fn hide(console: &'a mut C) -> Self {
        let prior = console.cursor_visible();
        if let Err(e) = console.set_cursor_visible(false) {
            warn!("cannot hide cursor, continuing with it visible: {e}");
        }
        Self { console, prior }
    }

    /// Visibility that will be restored on drop.
    pub fn prior(&self) -> bool {
        self.prior
    }
}

impl<C: Console> Deref for CursorGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.console
    }
}

impl<C: Console> DerefMut for CursorGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.console
    }
}

impl<C: Console> Drop for CursorGuard<'_, C> {
    fn drop(&mut self) {
        if let Err(e) = self.console.set_cursor_visible(self.prior) {
            debug!("cursor restore failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::fake::FakeConsole;

    #[test]
    fn test_hides_then_restores_visible() {
        let mut console = FakeConsole::new();
        {
            let guard = CursorGuard::hide(&mut console);
            assert!(guard.prior());
            assert!(!guard.cursor_visible());
        }
        assert!(console.cursor_visible());
    }

    #[test]
    fn test_restores_hidden_cursor_as_hidden() {
        let mut console = FakeConsole::new();
        console.visible = false;
        {
            let guard = CursorGuard::hide(&mut console);
            assert!(!guard.prior());
        }
        assert!(!console.cursor_visible());
    }

    #[test]
    fn test_hide_failure_still_restores() {
        let mut console = FakeConsole::new();
        console.fail_hide = true;
        {
            let guard = CursorGuard::hide(&mut console);
            assert!(guard.cursor_visible());
        }
        assert!(console.cursor_visible());
        assert_eq!(console.restore_calls(), 1);
    }

    #[test]
    fn test_restore_failure_is_swallowed() {
        let mut console = FakeConsole::new();
        console.fail_restore = true;
        {
            let _guard = CursorGuard::hide(&mut console);
        }
        assert_eq!(console.restore_calls(), 1);
        assert!(!console.cursor_visible());
    }

    #[test]
    fn test_restores_during_unwind() {
        let mut console = FakeConsole::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = CursorGuard::hide(&mut console);
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(console.cursor_visible());
    }
}
