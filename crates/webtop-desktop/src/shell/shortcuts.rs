//! Global keyboard shortcuts
//!
//! Shortcuts act on the live controller, so they always see the current
//! registry rather than a snapshot taken when the listener was installed.

use crate::controller::DesktopController;
use crate::input::InputResult;

/// A recognized global shortcut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Alt+F4: close the topmost shown window
    CloseActive,
    /// Meta+D: minimize every shown window
    ShowDesktop,
}

impl Shortcut {
    /// Match a key chord against the shortcut table
    ///
    /// `key` is the DOM `KeyboardEvent.key` value; matching is
    /// case-insensitive for letter keys.
    pub fn from_chord(key: &str, alt: bool, meta: bool) -> Option<Shortcut> {
        if alt && key.eq_ignore_ascii_case("F4") {
            return Some(Shortcut::CloseActive);
        }
        if meta && key.eq_ignore_ascii_case("d") {
            return Some(Shortcut::ShowDesktop);
        }
        None
    }
}

/// Apply a key chord to the desktop
///
/// Returns [`InputResult::Handled`] when the chord matched a shortcut, in
/// which case the host should swallow the event before the browser or OS
/// acts on it.
pub fn handle_key(
    controller: &mut DesktopController,
    key: &str,
    alt: bool,
    meta: bool,
    now_ms: f64,
) -> InputResult {
    let shortcut = match Shortcut::from_chord(key, alt, meta) {
        Some(s) => s,
        None => return InputResult::Unhandled,
    };

    tracing::debug!(?shortcut, "shortcut fired");
    match shortcut {
        Shortcut::CloseActive => controller.close_active(),
        Shortcut::ShowDesktop => controller.minimize_all(now_ms),
    }
    InputResult::Handled
}
