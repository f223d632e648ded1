//! Drag state machine
//!
//! Converts the normalized pointer stream into bounded repositioning for one
//! draggable class. The engine owns no element geometry; the caller supplies
//! the pressed element's origin and size, and applies the positions the
//! engine returns.

use crate::error::DesktopError;
use crate::math::{Size, Vec2};
use crate::viewport::Viewport;

use super::event::{EventNormalizer, PointerPhase, RawPointer};
use super::session::{DragConfig, DragSession, DragState};

/// Outcome of a press event
#[derive(Clone, Debug)]
pub enum PressOutcome {
    /// Press did not start a session (duplicate model, non-primary button,
    /// or a gesture already in progress)
    Ignored,
    /// A session started; `capture` asks the host to capture the pointer
    Started { capture: bool },
}

/// Outcome of a move event
#[derive(Clone, Debug)]
pub enum MoveOutcome {
    /// Nothing to do
    Ignored,
    /// Write this clamped position to the target element
    Position { target: String, position: Vec2 },
}

/// Outcome of a release event
#[derive(Clone, Debug)]
pub enum ReleaseOutcome {
    /// No session was in progress for this event's model
    Ignored,
    /// Press and release without exceeding the threshold: a plain click
    Click { target: String },
    /// A drag ended; `moved` reports whether any move was processed
    Dropped { target: String, moved: bool },
}

/// Reusable drag state machine for one draggable class
pub struct DragEngine {
    config: DragConfig,
    normalizer: EventNormalizer,
    state: DragState,
}

impl DragEngine {
    /// Create an engine with the given class tuning
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            normalizer: EventNormalizer::new(),
            state: DragState::Idle,
        }
    }

    /// Current state machine state
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Check if a gesture is in progress
    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    /// Handle a press on a qualifying element whose top-left corner is at
    /// `origin`
    pub fn press(&mut self, raw: RawPointer, target: &str, origin: Vec2) -> PressOutcome {
        let event = match self.normalizer.normalize(raw) {
            Some(e) if e.phase == PointerPhase::Press => e,
            _ => return PressOutcome::Ignored,
        };

        if !self.state.is_idle() {
            return PressOutcome::Ignored;
        }

        let session = DragSession::new(target, event.position, origin, event.pointer_id);
        let capture = event.pointer_id.is_some();

        self.state = if self.config.immediate() {
            DragState::Dragging(session)
        } else {
            DragState::Pressed(session)
        };

        PressOutcome::Started { capture }
    }

    /// Handle a move event, clamping the target into the viewport bounds
    pub fn motion(&mut self, raw: RawPointer, element: Size, viewport: &Viewport) -> MoveOutcome {
        let event = match self.normalizer.normalize(raw) {
            Some(e) if e.phase == PointerPhase::Move => e,
            _ => return MoveOutcome::Ignored,
        };

        match std::mem::take(&mut self.state) {
            DragState::Idle => MoveOutcome::Ignored,
            DragState::Pressed(session) => {
                let delta = (event.position - session.press).abs();
                if delta.x > self.config.threshold || delta.y > self.config.threshold {
                    self.apply_move(session, event.position, element, viewport)
                } else {
                    // Still within the slop zone; may yet resolve as a click
                    self.state = DragState::Pressed(session);
                    MoveOutcome::Ignored
                }
            }
            DragState::Dragging(session) => {
                if !session.moved {
                    tracing::debug!(target = %session.target, "drag move stream started");
                }
                self.apply_move(session, event.position, element, viewport)
            }
        }
    }

    fn apply_move(
        &mut self,
        mut session: DragSession,
        pointer: Vec2,
        element: Size,
        viewport: &Viewport,
    ) -> MoveOutcome {
        session.moved = true;
        let position = viewport.clamp(pointer - session.offset, element);
        let target = session.target.clone();
        self.state = DragState::Dragging(session);
        MoveOutcome::Position { target, position }
    }

    /// Handle a release event
    pub fn release(&mut self, raw: RawPointer) -> ReleaseOutcome {
        match self.normalizer.normalize(raw) {
            Some(e) if e.phase == PointerPhase::Release => {}
            _ => return ReleaseOutcome::Ignored,
        }

        match std::mem::take(&mut self.state) {
            DragState::Idle => ReleaseOutcome::Ignored,
            // Never exceeded the threshold: reinterpret as a click
            DragState::Pressed(session) => ReleaseOutcome::Click {
                target: session.target,
            },
            DragState::Dragging(session) => ReleaseOutcome::Dropped {
                target: session.target,
                moved: session.moved,
            },
        }
    }

    /// Handle a pointer-cancel event; returns true if a session was dropped
    pub fn cancel(&mut self, raw: RawPointer) -> bool {
        match self.normalizer.normalize(raw) {
            Some(e) if e.phase == PointerPhase::Cancel => {}
            _ => return false,
        }

        let was_active = !self.state.is_idle();
        self.state = DragState::Idle;
        was_active
    }

    /// Abort any gesture and forget event-model ownership
    ///
    /// Used when the drag target disappears out from under the gesture,
    /// e.g. its window is closed by a keyboard shortcut mid-drag.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
        self.normalizer.reset();
    }

    /// Record that the host could not capture the pointer
    ///
    /// The drag continues uncaptured; moves that leave the originating
    /// element still reach the engine through the document-level stream.
    pub fn capture_failed(&mut self, err: DesktopError) {
        tracing::debug!(error = %err, "pointer capture unavailable, dragging without capture");
        match &mut self.state {
            DragState::Pressed(session) | DragState::Dragging(session) => {
                session.captured = false;
            }
            DragState::Idle => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::event::PointerPhase;

    fn viewport() -> Viewport {
        Viewport::new(1920.0, 1080.0)
    }

    fn icon_engine() -> DragEngine {
        DragEngine::new(DragConfig::ICON)
    }

    fn chrome_engine() -> DragEngine {
        DragEngine::new(DragConfig::CHROME)
    }

    #[test]
    fn test_icon_press_is_tentative() {
        let mut engine = icon_engine();
        let press = RawPointer::pointer(PointerPhase::Press, Vec2::new(110.0, 110.0), 1);

        let outcome = engine.press(press, "files", Vec2::new(100.0, 100.0));
        assert!(matches!(outcome, PressOutcome::Started { capture: true }));
        assert!(!engine.state().is_dragging());
        assert_eq!(engine.state().target(), Some("files"));
    }

    #[test]
    fn test_chrome_press_drags_immediately() {
        let mut engine = chrome_engine();
        let press = RawPointer::pointer(PointerPhase::Press, Vec2::new(150.0, 110.0), 1);

        let outcome = engine.press(press, "about", Vec2::new(100.0, 100.0));
        assert!(matches!(outcome, PressOutcome::Started { .. }));
        assert!(engine.state().is_dragging());
    }

    #[test]
    fn test_sub_threshold_release_is_click() {
        let mut engine = icon_engine();
        engine.press(
            RawPointer::pointer(PointerPhase::Press, Vec2::new(100.0, 100.0), 1),
            "files",
            Vec2::new(96.0, 96.0),
        );

        // 4 px of travel on each axis stays inside the slop zone
        let mv = RawPointer::pointer(PointerPhase::Move, Vec2::new(104.0, 104.0), 1);
        assert!(matches!(
            engine.motion(mv, Size::new(64.0, 64.0), &viewport()),
            MoveOutcome::Ignored
        ));

        let up = RawPointer::pointer(PointerPhase::Release, Vec2::new(104.0, 104.0), 1);
        match engine.release(up) {
            ReleaseOutcome::Click { target } => assert_eq!(target, "files"),
            other => panic!("expected click, got {:?}", other),
        }
        assert!(engine.state().is_idle());
    }

    #[test]
    fn test_over_threshold_becomes_drag() {
        let mut engine = icon_engine();
        engine.press(
            RawPointer::pointer(PointerPhase::Press, Vec2::new(100.0, 100.0), 1),
            "files",
            Vec2::new(96.0, 96.0),
        );

        let mv = RawPointer::pointer(PointerPhase::Move, Vec2::new(110.0, 100.0), 1);
        match engine.motion(mv, Size::new(64.0, 64.0), &viewport()) {
            MoveOutcome::Position { target, position } => {
                assert_eq!(target, "files");
                // pointer - offset = (110,100) - (4,4)
                assert!((position.x - 106.0).abs() < 0.001);
                assert!((position.y - 96.0).abs() < 0.001);
            }
            other => panic!("expected position, got {:?}", other),
        }

        let up = RawPointer::pointer(PointerPhase::Release, Vec2::new(110.0, 100.0), 1);
        assert!(matches!(
            engine.release(up),
            ReleaseOutcome::Dropped { moved: true, .. }
        ));
    }

    #[test]
    fn test_motion_clamps_to_viewport() {
        let mut engine = chrome_engine();
        let vp = viewport();
        engine.press(
            RawPointer::pointer(PointerPhase::Press, Vec2::new(150.0, 110.0), 1),
            "about",
            Vec2::new(100.0, 100.0),
        );

        let mv = RawPointer::pointer(PointerPhase::Move, Vec2::new(99999.0, 99999.0), 1);
        match engine.motion(mv, Size::new(600.0, 400.0), &vp) {
            MoveOutcome::Position { position, .. } => {
                let max = vp.max_position(Size::new(600.0, 400.0));
                assert_eq!(position, max);
            }
            other => panic!("expected position, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_model_events_suppressed() {
        let mut engine = icon_engine();
        engine.press(
            RawPointer::pointer(PointerPhase::Press, Vec2::new(100.0, 100.0), 1),
            "files",
            Vec2::new(100.0, 100.0),
        );

        // Mouse-model fallback events for the same gesture must be inert
        let mouse_press = RawPointer::mouse(PointerPhase::Press, Vec2::new(100.0, 100.0));
        assert!(matches!(
            engine.press(mouse_press, "files", Vec2::new(100.0, 100.0)),
            PressOutcome::Ignored
        ));

        let mouse_move = RawPointer::mouse(PointerPhase::Move, Vec2::new(500.0, 500.0));
        assert!(matches!(
            engine.motion(mouse_move, Size::new(64.0, 64.0), &viewport()),
            MoveOutcome::Ignored
        ));

        let mouse_up = RawPointer::mouse(PointerPhase::Release, Vec2::new(500.0, 500.0));
        assert!(matches!(engine.release(mouse_up), ReleaseOutcome::Ignored));
        assert!(engine.is_active());
    }

    #[test]
    fn test_cancel_clears_session() {
        let mut engine = chrome_engine();
        engine.press(
            RawPointer::pointer(PointerPhase::Press, Vec2::new(150.0, 110.0), 1),
            "about",
            Vec2::new(100.0, 100.0),
        );
        assert!(engine.is_active());

        let cancel = RawPointer::pointer(PointerPhase::Cancel, Vec2::new(150.0, 110.0), 1);
        assert!(engine.cancel(cancel));
        assert!(engine.state().is_idle());
    }

    #[test]
    fn test_capture_failure_keeps_drag_alive() {
        let mut engine = chrome_engine();
        engine.press(
            RawPointer::pointer(PointerPhase::Press, Vec2::new(150.0, 110.0), 1),
            "about",
            Vec2::new(100.0, 100.0),
        );

        engine.capture_failed(DesktopError::CaptureUnsupported);
        assert!(engine.is_active());
        assert!(!engine.state().session().unwrap().captured);

        let mv = RawPointer::pointer(PointerPhase::Move, Vec2::new(200.0, 200.0), 1);
        assert!(matches!(
            engine.motion(mv, Size::new(600.0, 400.0), &viewport()),
            MoveOutcome::Position { .. }
        ));
    }

    #[test]
    fn test_press_during_session_ignored() {
        let mut engine = icon_engine();
        engine.press(
            RawPointer::pointer(PointerPhase::Press, Vec2::ZERO, 1),
            "files",
            Vec2::ZERO,
        );

        let second = RawPointer::pointer(PointerPhase::Press, Vec2::new(10.0, 10.0), 1);
        assert!(matches!(
            engine.press(second, "music", Vec2::ZERO),
            PressOutcome::Ignored
        ));
        assert_eq!(engine.state().target(), Some("files"));
    }
}
