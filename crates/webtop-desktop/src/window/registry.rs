//! Window registry for lifecycle and geometry

use std::collections::HashMap;

use crate::math::{Rect, Size, Vec2};
use crate::viewport::Viewport;

use super::{WindowEntry, WindowFx};

/// Default size for windows opened without explicit geometry
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(600.0, 400.0);

/// Top-left position of the first cascaded window
pub const CASCADE_ORIGIN: Vec2 = Vec2::new(100.0, 100.0);

/// Diagonal offset per already-open window
pub const CASCADE_STEP: f32 = 30.0;

/// Registry of open windows
///
/// Holds one entry per window that has been opened and not yet closed.
/// All operations silently no-op when given an id with no entry; callers
/// never see an error for a stale or unknown window.
pub struct WindowRegistry {
    entries: HashMap<String, WindowEntry>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Get an entry by id
    pub fn get(&self, id: &str) -> Option<&WindowEntry> {
        self.entries.get(id)
    }

    /// Get a mutable entry by id
    pub fn get_mut(&mut self, id: &str) -> Option<&mut WindowEntry> {
        self.entries.get_mut(id)
    }

    /// Whether the window is currently shown
    pub fn is_open(&self, id: &str) -> bool {
        self.entries.get(id).map(|e| e.open).unwrap_or(false)
    }

    /// Number of entries (open or minimized)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of currently shown windows (drives cascade placement)
    pub fn open_count(&self) -> usize {
        self.entries.values().filter(|e| e.open).count()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = &WindowEntry> {
        self.entries.values()
    }

    /// Iterate over currently shown windows
    pub fn open_windows(&self) -> impl Iterator<Item = &WindowEntry> {
        self.entries.values().filter(|e| e.open)
    }

    /// Cascade position for the next window to open
    ///
    /// Each open window pushes the next one diagonally by [`CASCADE_STEP`],
    /// capped so the new window's right and bottom edges stay inside the
    /// work area.
    pub fn cascade_position(&self, viewport: &Viewport) -> Vec2 {
        let offset = self.open_count() as f32 * CASCADE_STEP;
        let position = CASCADE_ORIGIN + Vec2::new(offset, offset);
        viewport.clamp(position, DEFAULT_WINDOW_SIZE)
    }

    /// Open a window, creating its entry on first open
    ///
    /// Re-opening an existing entry never duplicates it or re-runs cascade
    /// placement; the window reappears where it was left.
    pub fn open(&mut self, id: &str, viewport: &Viewport, z_order: u32) {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.open = true;
                entry.opening = true;
                entry.z_order = z_order;
                entry.fx = WindowFx::default();
            }
            None => {
                let position = self.cascade_position(viewport);
                let entry = WindowEntry::new(id, position, DEFAULT_WINDOW_SIZE, z_order);
                self.entries.insert(id.to_string(), entry);
            }
        }
    }

    /// Close a window, removing its entry. Returns false if no entry exists.
    pub fn close(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Close every window and clear all entries
    pub fn close_all(&mut self) {
        self.entries.clear();
    }

    /// Start the minimize animation. Returns false for unknown/hidden windows.
    pub fn begin_minimize(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) if entry.open => {
                entry.fx = WindowFx::MINIMIZING;
                true
            }
            _ => false,
        }
    }

    /// Finish a minimize: hide the window and reset its transform
    ///
    /// Tolerant of the entry having been closed in the meantime.
    pub fn finish_minimize(&mut self, id: &str) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.open = false;
            entry.fx = WindowFx::default();
        }
    }

    /// Clear the open-transition flag once the animation completes
    pub fn clear_opening(&mut self, id: &str) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.opening = false;
        }
    }

    /// Toggle maximize for a window
    ///
    /// Maximizing captures the current geometry into `restore_rect` before
    /// filling the work area; un-maximizing restores exactly what was
    /// captured, not the cascade default.
    pub fn maximize(&mut self, id: &str, work_area: Rect) {
        let entry = match self.entries.get_mut(id) {
            Some(e) => e,
            None => return,
        };

        if entry.maximized {
            if let Some((position, size)) = entry.restore_rect.take() {
                entry.position = position;
                entry.size = size;
            }
            entry.maximized = false;
        } else {
            entry.restore_rect = Some((entry.position, entry.size));
            entry.maximized = true;
            entry.position = work_area.position();
            entry.size = work_area.size();
        }
    }

    /// Move a window to a new position
    pub fn move_to(&mut self, id: &str, position: Vec2) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.position = position;
        }
    }
}
