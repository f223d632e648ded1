//! Drag session state

use crate::math::Vec2;

/// Tuning for one draggable class
#[derive(Clone, Copy, Debug)]
pub struct DragConfig {
    /// Per-axis displacement (px) a press must exceed before it becomes a
    /// drag. Zero means the press itself starts the drag.
    pub threshold: f32,
}

impl DragConfig {
    /// Desktop icons: a 5 px slop zone disambiguates clicks from drags
    pub const ICON: DragConfig = DragConfig { threshold: 5.0 };

    /// Window chrome: the press is the drag start
    pub const CHROME: DragConfig = DragConfig { threshold: 0.0 };

    /// Whether presses go straight to the dragging state
    #[inline]
    pub fn immediate(&self) -> bool {
        self.threshold <= 0.0
    }
}

/// State carried across one press-move-release gesture
#[derive(Clone, Debug)]
pub struct DragSession {
    /// Id of the element being dragged
    pub target: String,
    /// Pointer position at press time
    pub press: Vec2,
    /// Offset from the element's top-left corner to the pointer at press
    pub offset: Vec2,
    /// Whether any move event has been processed (diagnostics for chrome,
    /// click-vs-drag disambiguation for icons)
    pub moved: bool,
    /// Pointer id held for capture, if any
    pub pointer_id: Option<i32>,
    /// Whether pointer capture is in effect
    pub captured: bool,
}

impl DragSession {
    /// Create a session for a press at `press` on an element whose top-left
    /// corner is at `origin`
    pub fn new(target: &str, press: Vec2, origin: Vec2, pointer_id: Option<i32>) -> Self {
        Self {
            target: target.to_string(),
            press,
            offset: press - origin,
            moved: false,
            pointer_id,
            captured: pointer_id.is_some(),
        }
    }
}

/// Drag state machine states
#[derive(Clone, Debug, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pressed but below the movement threshold; may resolve into a click
    Pressed(DragSession),
    /// Actively dragging; every move repositions the target
    Dragging(DragSession),
}

impl DragState {
    /// Check if no gesture is in progress
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Check if a move event would reposition the target
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// The session, if a gesture is in progress
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Pressed(s) | DragState::Dragging(s) => Some(s),
        }
    }

    /// Id of the element under the gesture, if any
    pub fn target(&self) -> Option<&str> {
        self.session().map(|s| s.target.as_str())
    }
}
