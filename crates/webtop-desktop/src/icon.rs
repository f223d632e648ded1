//! Desktop icons

use serde::Serialize;

use crate::math::{Size, Vec2};

/// Default icon footprint in pixels
pub const DEFAULT_ICON_SIZE: Size = Size {
    width: 64.0,
    height: 64.0,
};

/// A draggable desktop icon
#[derive(Clone, Debug, Serialize)]
pub struct Icon {
    /// Stable identifier (doubles as the window id it opens)
    pub id: String,
    /// Top-left corner in desktop pixels
    pub position: Vec2,
    /// Icon footprint
    pub size: Size,
    /// Whether the icon is under an active drag
    pub dragging: bool,
}

impl Icon {
    /// Create an icon at the given position with the default footprint
    pub fn new(id: impl Into<String>, position: Vec2) -> Self {
        Self {
            id: id.into(),
            position,
            size: DEFAULT_ICON_SIZE,
            dragging: false,
        }
    }

    /// Create an icon with an explicit footprint
    pub fn with_size(id: impl Into<String>, position: Vec2, size: Size) -> Self {
        Self {
            id: id.into(),
            position,
            size,
            dragging: false,
        }
    }
}
