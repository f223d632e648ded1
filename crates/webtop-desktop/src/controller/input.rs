//! Input routing
//!
//! Presses arrive targeted (the host knows which icon or window chrome was
//! hit); moves, releases and cancels arrive untargeted from the document
//! stream and are routed to whichever drag engine holds the gesture.

use crate::error::DesktopError;
use crate::input::{InputResult, MoveOutcome, PressOutcome, RawPointer, ReleaseOutcome};
use crate::window::ChromeTarget;

use super::DesktopController;

impl DesktopController {
    /// Handle a press on a desktop icon
    pub fn icon_press(&mut self, raw: RawPointer, icon_id: &str) -> PressOutcome {
        let origin = match self.icons.get(icon_id) {
            Some(icon) => icon.position,
            None => return PressOutcome::Ignored,
        };
        self.icon_drag.press(raw, icon_id, origin)
    }

    /// Handle a press on a window's chrome
    ///
    /// A session starts only from a drag handle on a shown, non-maximized
    /// window; starting one raises the window whether the press later
    /// resolves into a drag or a click. Presses on controls or form
    /// elements neither raise nor drag.
    pub fn chrome_press(
        &mut self,
        raw: RawPointer,
        window_id: &str,
        target: ChromeTarget,
    ) -> PressOutcome {
        let entry = match self.registry.get(window_id) {
            Some(e) if e.open => e,
            _ => return PressOutcome::Ignored,
        };
        if !target.is_drag_handle() || entry.maximized {
            return PressOutcome::Ignored;
        }

        let origin = entry.position;
        let outcome = self.chrome_drag.press(raw, window_id, origin);
        if matches!(outcome, PressOutcome::Started { .. }) {
            self.bring_to_front(window_id);
        }
        outcome
    }

    /// Handle a document-level move event
    pub fn pointer_move(&mut self, raw: RawPointer) -> InputResult {
        if self.icon_drag.is_active() {
            let element = match self
                .icon_drag
                .state()
                .target()
                .and_then(|id| self.icons.get(id))
            {
                Some(icon) => icon.size,
                None => return InputResult::Unhandled,
            };
            match self.icon_drag.motion(raw, element, &self.viewport) {
                MoveOutcome::Position { target, position } => {
                    if let Some(icon) = self.icons.get_mut(&target) {
                        icon.position = position;
                        icon.dragging = true;
                    }
                    InputResult::Handled
                }
                MoveOutcome::Ignored => InputResult::Unhandled,
            }
        } else if self.chrome_drag.is_active() {
            let element = match self
                .chrome_drag
                .state()
                .target()
                .and_then(|id| self.registry.get(id))
            {
                Some(entry) => entry.size,
                None => return InputResult::Unhandled,
            };
            match self.chrome_drag.motion(raw, element, &self.viewport) {
                MoveOutcome::Position { target, position } => {
                    self.registry.move_to(&target, position);
                    InputResult::Handled
                }
                MoveOutcome::Ignored => InputResult::Unhandled,
            }
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle a document-level release event
    ///
    /// An icon press that never exceeded the drag threshold resolves here
    /// as a click, which toggles the icon's window.
    pub fn pointer_release(&mut self, raw: RawPointer, now_ms: f64) -> InputResult {
        if self.icon_drag.is_active() {
            match self.icon_drag.release(raw) {
                ReleaseOutcome::Click { target } => {
                    self.toggle_window(&target, now_ms);
                    InputResult::Handled
                }
                ReleaseOutcome::Dropped { target, .. } => {
                    if let Some(icon) = self.icons.get_mut(&target) {
                        icon.dragging = false;
                    }
                    InputResult::Handled
                }
                ReleaseOutcome::Ignored => InputResult::Unhandled,
            }
        } else if self.chrome_drag.is_active() {
            match self.chrome_drag.release(raw) {
                ReleaseOutcome::Ignored => InputResult::Unhandled,
                _ => InputResult::Handled,
            }
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle a pointer-cancel event
    pub fn pointer_cancel(&mut self, raw: RawPointer) -> InputResult {
        if self.icon_drag.is_active() {
            let target = self.icon_drag.state().target().map(str::to_string);
            if self.icon_drag.cancel(raw) {
                if let Some(icon) = target.and_then(|id| self.icons.get_mut(&id)) {
                    icon.dragging = false;
                }
                return InputResult::Handled;
            }
            InputResult::Unhandled
        } else if self.chrome_drag.is_active() {
            if self.chrome_drag.cancel(raw) {
                InputResult::Handled
            } else {
                InputResult::Unhandled
            }
        } else {
            InputResult::Unhandled
        }
    }

    /// Record that pointer capture failed for the gesture just started
    pub fn capture_failed(&mut self, err: DesktopError) {
        if self.icon_drag.is_active() {
            self.icon_drag.capture_failed(err);
        } else if self.chrome_drag.is_active() {
            self.chrome_drag.capture_failed(err);
        }
    }
}
