//! Window lifecycle operations
//!
//! Open, close, minimize and maximize, plus the taskbar toggle that ties
//! them together. Every operation acts on the registry owned by the
//! controller; ids with no entry (or no attachment) are silent no-ops.

use crate::tasks::{TaskKind, MINIMIZE_DELAY_MS, OPEN_TRANSITION_MS};

use super::DesktopController;

impl DesktopController {
    /// Toggle a window from its taskbar button or desktop icon
    ///
    /// A shown window closes; a hidden or never-opened one opens. A window
    /// hidden by minimize keeps its entry, so toggling it back restores the
    /// old geometry instead of re-running cascade placement. Ids that were
    /// never attached are ignored, so a stale taskbar button cannot conjure
    /// a window out of nothing.
    pub fn toggle_window(&mut self, id: &str, now_ms: f64) {
        if !self.attached.contains(id) {
            tracing::debug!(window = id, "toggle ignored, window not attached");
            return;
        }

        if self.registry.is_open(id) {
            self.close_window(id);
        } else {
            self.open_window(id, now_ms);
        }
    }

    /// Open a window, creating it at the next cascade slot on first open
    pub fn open_window(&mut self, id: &str, now_ms: f64) {
        // A pending minimize completion would hide the window again
        self.tasks.cancel_window(id);

        let z = self.bump_z();
        self.registry.open(id, &self.viewport, z);
        self.tasks
            .schedule(id, TaskKind::ClearOpening, now_ms + OPEN_TRANSITION_MS);

        tracing::debug!(window = id, z_order = z, "window opened");
    }

    /// Begin minimizing a shown window
    ///
    /// The shrink transform applies immediately; the window is hidden when
    /// the scheduled completion fires [`MINIMIZE_DELAY_MS`] later.
    pub fn minimize_window(&mut self, id: &str, now_ms: f64) {
        if !self.registry.begin_minimize(id) {
            return;
        }
        self.tasks
            .schedule(id, TaskKind::FinishMinimize, now_ms + MINIMIZE_DELAY_MS);

        tracing::debug!(window = id, "window minimizing");
    }

    /// Close a window, discarding its entry and any pending tasks
    pub fn close_window(&mut self, id: &str) {
        if !self.registry.close(id) {
            return;
        }
        self.tasks.cancel_window(id);

        // A drag on the vanished chrome has nothing left to move
        if self.chrome_drag.state().target() == Some(id) {
            self.chrome_drag.reset();
        }

        tracing::debug!(window = id, "window closed");
    }

    /// Close every window, discarding all entries and pending tasks
    pub fn close_all(&mut self) {
        self.registry.close_all();
        self.tasks.clear();
        self.chrome_drag.reset();
    }

    /// Toggle maximize on a shown window
    pub fn maximize_window(&mut self, id: &str) {
        if !self.registry.is_open(id) {
            return;
        }
        self.registry.maximize(id, self.viewport.work_area());

        if let Some(entry) = self.registry.get(id) {
            tracing::debug!(window = id, maximized = entry.maximized, "maximize toggled");
        }
    }

    /// Raise a shown window above every other
    pub fn bring_to_front(&mut self, id: &str) {
        if !self.registry.is_open(id) {
            return;
        }
        let z = self.bump_z();
        if let Some(entry) = self.registry.get_mut(id) {
            entry.z_order = z;
        }
    }

    /// Id of the shown window with the highest z-order
    pub fn topmost_open(&self) -> Option<&str> {
        self.registry
            .open_windows()
            .max_by_key(|e| e.z_order)
            .map(|e| e.id.as_str())
    }

    /// Close whichever window is on top
    pub fn close_active(&mut self) {
        if let Some(id) = self.topmost_open().map(str::to_string) {
            self.close_window(&id);
        }
    }

    /// Minimize every shown window
    pub fn minimize_all(&mut self, now_ms: f64) {
        let open: Vec<String> = self
            .registry
            .open_windows()
            .map(|e| e.id.clone())
            .collect();
        for id in open {
            self.minimize_window(&id, now_ms);
        }
    }
}
