//! webtop-desktop: a simulated desktop for the browser
//!
//! Pure-Rust state and logic for a desktop environment rendered by a web
//! page: draggable icons, overlapping windows with open/close/minimize/
//! maximize, a bottom taskbar, and the pointer gesture handling that ties
//! them together.
//!
//! The crate holds the authoritative model; a thin host layer (DOM or
//! otherwise) forwards raw input events in and mirrors positions, z-order
//! and effects back out. Nothing here touches the DOM, timers, or global
//! state, so the whole stack is testable on native targets.
//!
//! # Architecture
//!
//! - [`math`]: vectors, sizes, rectangles
//! - [`viewport`]: screen bounds and the taskbar reservation
//! - [`window`]: window entries and the lifecycle registry
//! - [`icon`]: desktop icons
//! - [`input`]: event-model normalization and the drag state machine
//! - [`tasks`]: deferred transition completions
//! - [`controller`]: the [`DesktopController`] that owns all of the above
//! - [`shell`]: taskbar clock and global keyboard shortcuts

pub mod controller;
pub mod error;
pub mod icon;
pub mod input;
pub mod math;
pub mod shell;
pub mod tasks;
pub mod viewport;
pub mod window;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use controller::DesktopController;
pub use error::{DesktopError, DesktopResult};
pub use icon::Icon;
pub use input::{InputResult, PointerPhase, RawPointer};
pub use math::{Rect, Size, Vec2};
pub use viewport::{Viewport, TASKBAR_HEIGHT};
pub use window::{ChromeTarget, WindowEntry, WindowRegistry};
