//! Browser bindings
//!
//! A thin wasm-bindgen wrapper over [`DesktopController`]. The page's glue
//! code forwards DOM events as primitives, pulls a JSON snapshot each
//! animation frame, and mirrors it into element styles. All state lives on
//! this side of the boundary.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::controller::DesktopController;
use crate::icon::Icon;
use crate::input::{InputModel, PointerPhase, PressOutcome, RawPointer};
use crate::math::Vec2;
use crate::shell::{self, TaskbarClock};
use chrono::NaiveTime;
use crate::viewport::Viewport;
use crate::window::{ChromeTarget, WindowEntry};

#[derive(Serialize)]
struct Snapshot<'a> {
    icons: Vec<&'a Icon>,
    windows: Vec<&'a WindowEntry>,
}

fn parse_model(model: &str) -> InputModel {
    if model == "mouse" {
        InputModel::Mouse
    } else {
        InputModel::Pointer
    }
}

fn parse_target(target: &str) -> ChromeTarget {
    match target {
        "header" => ChromeTarget::Header,
        "tab" => ChromeTarget::Tab,
        "input" => ChromeTarget::Input,
        "button" => ChromeTarget::Button,
        "link" => ChromeTarget::Link,
        _ => ChromeTarget::Controls,
    }
}

fn raw(model: &str, phase: PointerPhase, x: f32, y: f32, button: u8, pointer_id: i32) -> RawPointer {
    RawPointer {
        model: parse_model(model),
        phase,
        position: Vec2::new(x, y),
        button,
        pointer_id: (pointer_id >= 0).then_some(pointer_id),
    }
}

/// The desktop, exported to JavaScript
#[wasm_bindgen]
pub struct WebtopDesktop {
    controller: DesktopController,
}

#[wasm_bindgen]
impl WebtopDesktop {
    /// Create a desktop sized to the browser client area
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebtopDesktop {
        WebtopDesktop {
            controller: DesktopController::new(Viewport::new(width, height)),
        }
    }

    /// Register a window whose chrome exists in the page
    pub fn attach_window(&mut self, id: &str) {
        self.controller.attach_window(id);
    }

    /// Add a desktop icon at the given position
    pub fn add_icon(&mut self, id: &str, x: f32, y: f32) {
        self.controller.add_icon(Icon::new(id, Vec2::new(x, y)));
    }

    /// Press on an icon; returns true if the page should capture the pointer
    pub fn icon_press(
        &mut self,
        model: &str,
        x: f32,
        y: f32,
        button: u8,
        pointer_id: i32,
        icon_id: &str,
    ) -> bool {
        let event = raw(model, PointerPhase::Press, x, y, button, pointer_id);
        matches!(
            self.controller.icon_press(event, icon_id),
            PressOutcome::Started { capture: true }
        )
    }

    /// Press on window chrome; returns true if the page should capture
    pub fn chrome_press(
        &mut self,
        model: &str,
        x: f32,
        y: f32,
        button: u8,
        pointer_id: i32,
        window_id: &str,
        target: &str,
    ) -> bool {
        let event = raw(model, PointerPhase::Press, x, y, button, pointer_id);
        matches!(
            self.controller
                .chrome_press(event, window_id, parse_target(target)),
            PressOutcome::Started { capture: true }
        )
    }

    /// Document-level move; returns true if the event was consumed
    pub fn pointer_move(&mut self, model: &str, x: f32, y: f32, pointer_id: i32) -> bool {
        let event = raw(model, PointerPhase::Move, x, y, 0, pointer_id);
        self.controller.pointer_move(event).is_handled()
    }

    /// Document-level release
    pub fn pointer_release(
        &mut self,
        model: &str,
        x: f32,
        y: f32,
        pointer_id: i32,
        now_ms: f64,
    ) -> bool {
        let event = raw(model, PointerPhase::Release, x, y, 0, pointer_id);
        self.controller.pointer_release(event, now_ms).is_handled()
    }

    /// Pointer cancel
    pub fn pointer_cancel(&mut self, model: &str, x: f32, y: f32, pointer_id: i32) -> bool {
        let event = raw(model, PointerPhase::Cancel, x, y, 0, pointer_id);
        self.controller.pointer_cancel(event).is_handled()
    }

    /// Report that `setPointerCapture` threw
    pub fn capture_failed(&mut self) {
        self.controller
            .capture_failed(crate::error::DesktopError::CaptureUnsupported);
    }

    /// Toggle a window from the taskbar
    pub fn toggle_window(&mut self, id: &str, now_ms: f64) {
        self.controller.toggle_window(id, now_ms);
    }

    /// Close a window from its close button
    pub fn close_window(&mut self, id: &str) {
        self.controller.close_window(id);
    }

    /// Minimize a window from its minimize button
    pub fn minimize_window(&mut self, id: &str, now_ms: f64) {
        self.controller.minimize_window(id, now_ms);
    }

    /// Close every window
    pub fn close_all(&mut self) {
        self.controller.close_all();
    }

    /// Toggle maximize from the window's maximize button
    pub fn maximize_window(&mut self, id: &str) {
        self.controller.maximize_window(id);
    }

    /// Global keydown; returns true if the page should swallow the event
    pub fn key_down(&mut self, key: &str, alt: bool, meta: bool, now_ms: f64) -> bool {
        shell::handle_key(&mut self.controller, key, alt, meta, now_ms).is_handled()
    }

    /// Record a taskbar button press
    pub fn taskbar_click(&self, id: &str) {
        shell::taskbar_click(id);
    }

    /// Right-click; returns true to suppress the native menu
    pub fn context_menu(&mut self, on_desktop: bool) -> bool {
        shell::handle_context_menu(on_desktop).is_handled()
    }

    /// Page resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.controller.resize(width, height);
    }

    /// Run deferred transition completions
    pub fn tick(&mut self, now_ms: f64) {
        self.controller.tick(now_ms);
    }

    /// Taskbar clock label for the page's wall clock
    ///
    /// The page reads hour and minute from `Date`; system-time access is
    /// not assumed inside the wasm module.
    pub fn clock_label(&self, hour: u32, minute: u32) -> String {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(time) => TaskbarClock::label_at(time),
            None => String::new(),
        }
    }

    /// JSON rectangle of one window, for targeted geometry queries
    ///
    /// Rejects with the error message when no window with the id exists.
    pub fn window_rect(&self, id: &str) -> Result<String, JsValue> {
        let rect = self
            .controller
            .window_rect(id)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(&rect).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// JSON snapshot of every icon and window for the render pass
    pub fn snapshot(&self) -> Result<String, JsValue> {
        let snapshot = Snapshot {
            icons: self.controller.icons().collect(),
            windows: self.controller.registry().iter().collect(),
        };
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
