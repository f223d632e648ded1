//! Desktop controller
//!
//! Owns every piece of desktop state: the viewport, the window registry,
//! the icon set, the z-order counter, the two drag engines, and the queue
//! of deferred transition tasks. Hosts construct one controller and route
//! all input and clock ticks through it; nothing here touches globals.

mod input;
mod windows;

use std::collections::{HashMap, HashSet};

use crate::error::{DesktopError, DesktopResult};
use crate::icon::Icon;
use crate::input::{DragConfig, DragEngine};
use crate::math::{Rect, Vec2};
use crate::tasks::{TaskKind, TaskQueue};
use crate::viewport::Viewport;
use crate::window::WindowRegistry;

/// First z-order handed out; chrome sits below this
const Z_ORDER_BASE: u32 = 100;

/// Authoritative state and logic for one desktop
pub struct DesktopController {
    pub(crate) viewport: Viewport,
    pub(crate) registry: WindowRegistry,
    pub(crate) icons: HashMap<String, Icon>,
    /// Windows whose chrome has been wired up and may be toggled
    pub(crate) attached: HashSet<String>,
    pub(crate) icon_drag: DragEngine,
    pub(crate) chrome_drag: DragEngine,
    pub(crate) tasks: TaskQueue,
    next_z: u32,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl DesktopController {
    /// Create a controller for the given viewport
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            registry: WindowRegistry::new(),
            icons: HashMap::new(),
            attached: HashSet::new(),
            icon_drag: DragEngine::new(DragConfig::ICON),
            chrome_drag: DragEngine::new(DragConfig::CHROME),
            tasks: TaskQueue::new(),
            next_z: Z_ORDER_BASE,
        }
    }

    /// Current viewport
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The window registry
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Pending deferred tasks
    pub fn tasks(&self) -> &TaskQueue {
        &self.tasks
    }

    /// Next z-order value, consuming it
    pub(crate) fn bump_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Register a window id whose chrome exists and can receive toggles
    ///
    /// Toggling an unattached id is a silent no-op; hosts call this as they
    /// build each window's chrome.
    pub fn attach_window(&mut self, id: &str) {
        if self.attached.insert(id.to_string()) {
            tracing::debug!(window = id, "window attached");
        }
    }

    /// Check whether a window id has been attached
    pub fn is_attached(&self, id: &str) -> bool {
        self.attached.contains(id)
    }

    /// Add a desktop icon
    pub fn add_icon(&mut self, icon: Icon) {
        self.icons.insert(icon.id.clone(), icon);
    }

    /// Get an icon by id
    pub fn icon(&self, id: &str) -> Option<&Icon> {
        self.icons.get(id)
    }

    /// Iterate over all icons
    pub fn icons(&self) -> impl Iterator<Item = &Icon> {
        self.icons.values()
    }

    /// Bounding rectangle of a window, for render-layer queries by id
    pub fn window_rect(&self, id: &str) -> DesktopResult<Rect> {
        self.registry
            .get(id)
            .map(|entry| entry.rect())
            .ok_or_else(|| DesktopError::WindowNotFound(id.to_string()))
    }

    /// Bounding rectangle of an icon, for render-layer queries by id
    pub fn icon_rect(&self, id: &str) -> DesktopResult<Rect> {
        self.icons
            .get(id)
            .map(|icon| Rect::from_pos_size(icon.position, icon.size))
            .ok_or_else(|| DesktopError::IconNotFound(id.to_string()))
    }

    /// Apply a viewport resize, pulling every element back into bounds
    ///
    /// Maximized windows are re-fit to the new work area; everything else
    /// keeps its position, clamped.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);

        let work_area = self.viewport.work_area();
        for id in self.registry.iter().map(|e| e.id.clone()).collect::<Vec<_>>() {
            if let Some(entry) = self.registry.get_mut(&id) {
                if entry.maximized {
                    entry.position = work_area.position();
                    entry.size = work_area.size();
                } else {
                    entry.position = self.viewport.clamp(entry.position, entry.size);
                }
            }
        }

        for icon in self.icons.values_mut() {
            icon.position = self.viewport.clamp(icon.position, icon.size);
        }
    }

    /// Run every deferred task that has come due
    ///
    /// `now_ms` is the host's monotonic clock in milliseconds; it must be
    /// the same clock passed to the scheduling operations.
    pub fn tick(&mut self, now_ms: f64) {
        for task in self.tasks.take_due(now_ms) {
            match task.kind {
                TaskKind::ClearOpening => self.registry.clear_opening(&task.window_id),
                TaskKind::FinishMinimize => self.registry.finish_minimize(&task.window_id),
            }
        }
    }

    /// Move an icon directly, clamped into the viewport
    pub fn move_icon(&mut self, id: &str, position: Vec2) {
        let clamped = match self.icons.get(id) {
            Some(icon) => self.viewport.clamp(position, icon.size),
            None => return,
        };
        if let Some(icon) = self.icons.get_mut(id) {
            icon.position = clamped;
        }
    }
}
