//! Pointer input module
//!
//! Normalizes the two browser input models (pointer events, legacy mouse
//! events) into one canonical press/move/release/cancel stream and runs the
//! drag state machine over it. One [`DragEngine`] is instantiated per
//! draggable class: desktop icons and window chrome.

mod engine;
mod event;
mod result;
mod session;

pub use engine::{DragEngine, MoveOutcome, PressOutcome, ReleaseOutcome};
pub use event::{EventNormalizer, InputModel, PointerPhase, RawPointer};
pub use result::InputResult;
pub use session::{DragConfig, DragSession, DragState};
