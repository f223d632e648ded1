//! Core geometry types
//!
//! Screen-space math for the desktop: positions, sizes, and rectangles.
//! All coordinates are f32 CSS pixels with the origin at the top-left.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
