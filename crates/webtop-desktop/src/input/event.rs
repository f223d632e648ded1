//! Event-model normalization
//!
//! A browser can deliver the same physical gesture through both the pointer
//! event model and the legacy mouse model. The normalizer admits exactly one
//! model per gesture: whichever model wins the press owns the session, and
//! the other model's events are discarded until release or cancel. Runtimes
//! without pointer events fall back to the mouse model transparently.

use crate::math::Vec2;

/// Which browser input model delivered an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputModel {
    /// Pointer events (pointerdown/pointermove/...)
    Pointer,
    /// Legacy mouse events (mousedown/mousemove/...)
    Mouse,
}

/// Canonical phases of a pointer gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
    Cancel,
}

/// A raw input event before normalization
#[derive(Clone, Copy, Debug)]
pub struct RawPointer {
    pub model: InputModel,
    pub phase: PointerPhase,
    /// Pointer position in viewport pixels
    pub position: Vec2,
    /// Button index (0 = primary); only meaningful for presses
    pub button: u8,
    /// Pointer id for capture, if the model provides one
    pub pointer_id: Option<i32>,
}

impl RawPointer {
    /// Convenience constructor for a primary-button pointer-model event
    pub fn pointer(phase: PointerPhase, position: Vec2, pointer_id: i32) -> Self {
        Self {
            model: InputModel::Pointer,
            phase,
            position,
            button: 0,
            pointer_id: Some(pointer_id),
        }
    }

    /// Convenience constructor for a primary-button mouse-model event
    pub fn mouse(phase: PointerPhase, position: Vec2) -> Self {
        Self {
            model: InputModel::Mouse,
            phase,
            position,
            button: 0,
            pointer_id: None,
        }
    }
}

/// A normalized event admitted into the drag state machine
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
    pub pointer_id: Option<i32>,
}

/// Admits one input model's events per gesture, suppressing the duplicate
/// stream from the other model
#[derive(Debug, Default)]
pub struct EventNormalizer {
    owner: Option<InputModel>,
}

impl EventNormalizer {
    /// Create a normalizer with no gesture in progress
    pub fn new() -> Self {
        Self::default()
    }

    /// The model that owns the current gesture, if any
    pub fn owner(&self) -> Option<InputModel> {
        self.owner
    }

    /// Normalize a raw event, or discard it as a duplicate/foreign stream
    pub fn normalize(&mut self, raw: RawPointer) -> Option<PointerEvent> {
        let admitted = match raw.phase {
            PointerPhase::Press => {
                // Primary button only; a press while another model owns the
                // gesture is the duplicate fired by the second event model.
                if raw.button != 0 {
                    return None;
                }
                match self.owner {
                    Some(owner) => owner == raw.model,
                    None => {
                        self.owner = Some(raw.model);
                        true
                    }
                }
            }
            PointerPhase::Move => match self.owner {
                Some(owner) => owner == raw.model,
                // No gesture in progress: hover moves pass through and the
                // state machine ignores them while idle.
                None => true,
            },
            PointerPhase::Release | PointerPhase::Cancel => match self.owner {
                Some(owner) if owner == raw.model => {
                    self.owner = None;
                    true
                }
                _ => false,
            },
        };

        admitted.then_some(PointerEvent {
            phase: raw.phase,
            position: raw.position,
            pointer_id: raw.pointer_id,
        })
    }

    /// Drop any gesture ownership
    pub fn reset(&mut self) {
        self.owner = None;
    }
}
