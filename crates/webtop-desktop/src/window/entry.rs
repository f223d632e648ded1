//! Registry entry for a single window

use serde::Serialize;

use crate::math::{Rect, Size, Vec2};

/// Transient visual transform used by the minimize animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WindowFx {
    /// Uniform scale applied to the element
    pub scale: f32,
    /// Element opacity
    pub opacity: f32,
}

impl Default for WindowFx {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl WindowFx {
    /// The shrunk-and-faded state a window animates through while minimizing
    pub const MINIMIZING: WindowFx = WindowFx {
        scale: 0.1,
        opacity: 0.0,
    };

    /// True when no transform is applied
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

/// State the registry tracks for one window
///
/// An entry exists from the window's first open until `close` removes it.
/// Minimize hides the window but leaves the entry intact (`open` drops to
/// false once the hide task fires), so re-opening restores the window at
/// its last position instead of re-running cascade placement.
#[derive(Clone, Debug, Serialize)]
pub struct WindowEntry {
    /// Logical window identifier (matches the element id in the markup)
    pub id: String,
    /// Top-left position in viewport pixels
    pub position: Vec2,
    /// Current size
    pub size: Size,
    /// Stacking value, assigned from the shared z-order counter
    pub z_order: u32,
    /// Whether the window is currently shown
    pub open: bool,
    /// Whether the open transition is still playing
    pub opening: bool,
    /// Whether the window fills the work area
    pub maximized: bool,
    /// Geometry captured by the last maximize, restored on un-maximize
    pub restore_rect: Option<(Vec2, Size)>,
    /// Transient minimize transform
    pub fx: WindowFx,
}

impl WindowEntry {
    /// Create a new entry at the given position with the given stacking value
    pub fn new(id: &str, position: Vec2, size: Size, z_order: u32) -> Self {
        Self {
            id: id.to_string(),
            position,
            size,
            z_order,
            open: true,
            opening: true,
            maximized: false,
            restore_rect: None,
            fx: WindowFx::default(),
        }
    }

    /// Bounding rectangle of the window
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }
}
