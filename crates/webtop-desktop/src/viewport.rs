//! Viewport bounds for element placement
//!
//! The viewport is the browser client area. A fixed strip at the bottom is
//! reserved for the taskbar; icons and windows are clamped so they never
//! slide under it. Bounds are recomputed from current dimensions on every
//! move rather than cached.

use crate::math::{Rect, Size, Vec2};

/// Height in pixels reserved for the taskbar at the bottom of the screen
pub const TASKBAR_HEIGHT: f32 = 48.0;

/// Current viewport dimensions plus the taskbar reservation
#[derive(Clone, Debug)]
pub struct Viewport {
    /// Client area size in pixels
    pub size: Size,
    /// Height reserved for the taskbar
    pub taskbar_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a viewport with the given client area
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            taskbar_height: TASKBAR_HEIGHT,
        }
    }

    /// Update the client area after a page resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }

    /// The area available to windows and icons (everything above the taskbar)
    pub fn work_area(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.size.width,
            (self.size.height - self.taskbar_height).max(0.0),
        )
    }

    /// Largest allowed top-left position for an element of the given size
    pub fn max_position(&self, element: Size) -> Vec2 {
        Vec2::new(
            (self.size.width - element.width).max(0.0),
            (self.size.height - element.height - self.taskbar_height).max(0.0),
        )
    }

    /// Clamp an element's top-left position into the viewport bounds
    ///
    /// Both axes land in `[0, dimension - element]`, with the vertical
    /// maximum further reduced by the taskbar height.
    pub fn clamp(&self, position: Vec2, element: Size) -> Vec2 {
        position.clamp(Vec2::ZERO, self.max_position(element))
    }
}
