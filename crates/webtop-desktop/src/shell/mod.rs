//! Desktop shell surface
//!
//! The pieces of the desktop that sit outside window management proper:
//! the taskbar clock and the global keyboard shortcuts. Hosts feed raw key
//! chords and wall-clock reads here and apply the results through the
//! controller they own.

mod clock;
mod shortcuts;

pub use clock::TaskbarClock;
pub use shortcuts::{handle_key, Shortcut};

use crate::input::InputResult;

/// Record a taskbar button press
pub fn taskbar_click(id: &str) {
    tracing::info!(button = id, "taskbar click");
}

/// Handle a right-click, given whether it landed on the desktop surface
/// or an icon
///
/// The native context menu is suppressed there; right-clicks inside window
/// content keep their normal behavior.
pub fn handle_context_menu(on_desktop: bool) -> InputResult {
    if on_desktop {
        InputResult::Handled
    } else {
        InputResult::Unhandled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_menu_suppressed_on_desktop_only() {
        assert!(handle_context_menu(true).is_handled());
        assert!(!handle_context_menu(false).is_handled());
    }
}
