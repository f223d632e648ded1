//! End-to-end tests driving the desktop through its public API

use webtop_desktop::controller::DesktopController;
use webtop_desktop::icon::Icon;
use webtop_desktop::input::{InputResult, PointerPhase, PressOutcome, RawPointer};
use webtop_desktop::math::{Size, Vec2};
use webtop_desktop::shell;
use webtop_desktop::tasks::{MINIMIZE_DELAY_MS, OPEN_TRANSITION_MS};
use webtop_desktop::viewport::{Viewport, TASKBAR_HEIGHT};
use webtop_desktop::window::ChromeTarget;

fn desktop() -> DesktopController {
    let mut ctl = DesktopController::new(Viewport::new(1920.0, 1080.0));
    for id in ["about", "projects", "contact"] {
        ctl.attach_window(id);
    }
    ctl.add_icon(Icon::new("about", Vec2::new(20.0, 20.0)));
    ctl.add_icon(Icon::new("projects", Vec2::new(20.0, 120.0)));
    ctl.add_icon(Icon::new("contact", Vec2::new(20.0, 220.0)));
    ctl
}

fn press(pos: Vec2) -> RawPointer {
    RawPointer::pointer(PointerPhase::Press, pos, 1)
}

fn mv(pos: Vec2) -> RawPointer {
    RawPointer::pointer(PointerPhase::Move, pos, 1)
}

fn release(pos: Vec2) -> RawPointer {
    RawPointer::pointer(PointerPhase::Release, pos, 1)
}

// ============================================================
// Icon gestures
// ============================================================

#[test]
fn test_icon_click_opens_window_at_cascade() {
    let mut ctl = desktop();

    ctl.icon_press(press(Vec2::new(30.0, 30.0)), "about");
    ctl.pointer_release(release(Vec2::new(30.0, 30.0)), 0.0);

    let entry = ctl.registry().get("about").unwrap();
    assert!(entry.open);
    assert!(entry.opening);
    assert_eq!(entry.position, Vec2::new(100.0, 100.0));
    assert!((entry.size.width - 600.0).abs() < 0.001);
    assert!((entry.size.height - 400.0).abs() < 0.001);
}

#[test]
fn test_icon_drag_does_not_open_window() {
    let mut ctl = desktop();

    ctl.icon_press(press(Vec2::new(30.0, 30.0)), "about");
    ctl.pointer_move(mv(Vec2::new(400.0, 400.0)));
    ctl.pointer_release(release(Vec2::new(400.0, 400.0)), 0.0);

    assert!(ctl.registry().get("about").is_none());
    let icon = ctl.icon("about").unwrap();
    assert!((icon.position.x - 390.0).abs() < 0.001);
    assert!((icon.position.y - 390.0).abs() < 0.001);
}

#[test]
fn test_icon_jitter_still_counts_as_click() {
    let mut ctl = desktop();

    // 5 px of travel on one axis is exactly at the threshold, not over it
    ctl.icon_press(press(Vec2::new(30.0, 30.0)), "about");
    ctl.pointer_move(mv(Vec2::new(35.0, 30.0)));
    ctl.pointer_release(release(Vec2::new(35.0, 30.0)), 0.0);

    assert!(ctl.registry().is_open("about"));
    assert_eq!(ctl.icon("about").unwrap().position, Vec2::new(20.0, 20.0));
}

#[test]
fn test_icon_drag_clamps_above_taskbar() {
    let mut ctl = desktop();

    ctl.icon_press(press(Vec2::new(30.0, 30.0)), "about");
    ctl.pointer_move(mv(Vec2::new(5000.0, 5000.0)));
    ctl.pointer_release(release(Vec2::new(5000.0, 5000.0)), 0.0);

    let icon = ctl.icon("about").unwrap();
    assert!((icon.position.x - (1920.0 - icon.size.width)).abs() < 0.001);
    assert!(
        (icon.position.y - (1080.0 - icon.size.height - TASKBAR_HEIGHT)).abs() < 0.001
    );
}

// ============================================================
// Window lifecycle
// ============================================================

#[test]
fn test_cascade_walks_diagonally() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.toggle_window("projects", 0.0);
    ctl.toggle_window("contact", 0.0);

    assert_eq!(
        ctl.registry().get("about").unwrap().position,
        Vec2::new(100.0, 100.0)
    );
    assert_eq!(
        ctl.registry().get("projects").unwrap().position,
        Vec2::new(130.0, 130.0)
    );
    assert_eq!(
        ctl.registry().get("contact").unwrap().position,
        Vec2::new(160.0, 160.0)
    );
}

#[test]
fn test_minimize_restores_at_same_place_and_size() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.tick(OPEN_TRANSITION_MS);

    // Drag the window somewhere, then minimize and reopen
    let origin = ctl.registry().get("about").unwrap().position;
    ctl.chrome_press(press(origin + Vec2::new(10.0, 10.0)), "about", ChromeTarget::Header);
    ctl.pointer_move(mv(Vec2::new(700.0, 500.0)));
    ctl.pointer_release(release(Vec2::new(700.0, 500.0)), 50.0);
    let moved = ctl.registry().get("about").unwrap().position;

    ctl.minimize_window("about", 100.0);
    ctl.tick(100.0 + MINIMIZE_DELAY_MS);
    assert!(!ctl.registry().is_open("about"));

    ctl.toggle_window("about", 500.0);
    let entry = ctl.registry().get("about").unwrap();
    assert!(entry.open);
    assert_eq!(entry.position, moved);
}

#[test]
fn test_open_transition_flag_lifecycle() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    assert!(ctl.registry().get("about").unwrap().opening);

    ctl.tick(OPEN_TRANSITION_MS - 1.0);
    assert!(ctl.registry().get("about").unwrap().opening);

    ctl.tick(OPEN_TRANSITION_MS);
    assert!(!ctl.registry().get("about").unwrap().opening);
}

#[test]
fn test_reopen_during_minimize_animation_stays_open() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.tick(OPEN_TRANSITION_MS);
    ctl.minimize_window("about", 300.0);
    ctl.tick(300.0 + MINIMIZE_DELAY_MS);
    assert!(!ctl.registry().is_open("about"));

    // Reopen, then advance past where a stale hide would have fired
    ctl.toggle_window("about", 520.0);
    ctl.tick(520.0 + MINIMIZE_DELAY_MS + 1.0);

    assert!(ctl.registry().is_open("about"));
    assert!(ctl.registry().get("about").unwrap().fx.is_neutral());
}

#[test]
fn test_close_forgets_geometry() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.toggle_window("projects", 0.0);
    ctl.close_window("about");
    ctl.close_window("projects");

    // A fresh open cascades from the origin again
    ctl.toggle_window("about", 0.0);
    assert_eq!(
        ctl.registry().get("about").unwrap().position,
        Vec2::new(100.0, 100.0)
    );
}

// ============================================================
// Z-order
// ============================================================

#[test]
fn test_every_raise_goes_above_all_previous() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.toggle_window("projects", 0.0);
    ctl.toggle_window("contact", 0.0);

    let mut seen = Vec::new();
    for id in ["about", "contact", "projects", "about"] {
        let origin = ctl.registry().get(id).unwrap().position;
        ctl.chrome_press(press(origin + Vec2::new(20.0, 8.0)), id, ChromeTarget::Header);
        ctl.pointer_release(release(origin + Vec2::new(20.0, 8.0)), 0.0);
        seen.push(ctl.registry().get(id).unwrap().z_order);
    }

    for pair in seen.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_control_press_leaves_stacking_alone() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.toggle_window("projects", 0.0);
    let about_z = ctl.registry().get("about").unwrap().z_order;

    // Pressing the button cluster of a background window must not raise it
    let origin = ctl.registry().get("about").unwrap().position;
    ctl.chrome_press(press(origin + Vec2::new(580.0, 10.0)), "about", ChromeTarget::Controls);
    ctl.pointer_release(release(origin + Vec2::new(580.0, 10.0)), 0.0);

    assert_eq!(ctl.registry().get("about").unwrap().z_order, about_z);
}

#[test]
fn test_z_orders_are_unique() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.toggle_window("projects", 0.0);
    ctl.toggle_window("contact", 0.0);

    let mut zs: Vec<u32> = ctl.registry().iter().map(|e| e.z_order).collect();
    zs.sort_unstable();
    zs.dedup();
    assert_eq!(zs.len(), 3);
}

// ============================================================
// Maximize
// ============================================================

#[test]
fn test_maximize_fills_work_area() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.maximize_window("about");

    let entry = ctl.registry().get("about").unwrap();
    assert!(entry.maximized);
    assert_eq!(entry.position, Vec2::ZERO);
    assert!((entry.size.width - 1920.0).abs() < 0.001);
    assert!((entry.size.height - (1080.0 - TASKBAR_HEIGHT)).abs() < 0.001);
}

#[test]
fn test_maximized_header_press_does_not_drag() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.maximize_window("about");

    let outcome = ctl.chrome_press(press(Vec2::new(400.0, 10.0)), "about", ChromeTarget::Header);
    assert!(matches!(outcome, PressOutcome::Ignored));

    ctl.pointer_move(mv(Vec2::new(900.0, 600.0)));
    assert_eq!(ctl.registry().get("about").unwrap().position, Vec2::ZERO);
}

#[test]
fn test_restore_returns_pre_maximize_geometry() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.tick(OPEN_TRANSITION_MS);

    let origin = ctl.registry().get("about").unwrap().position;
    ctl.chrome_press(press(origin), "about", ChromeTarget::Header);
    ctl.pointer_move(mv(Vec2::new(450.0, 320.0)));
    ctl.pointer_release(release(Vec2::new(450.0, 320.0)), 50.0);
    let dragged = ctl.registry().get("about").unwrap().position;

    ctl.maximize_window("about");
    ctl.maximize_window("about");

    let entry = ctl.registry().get("about").unwrap();
    assert!(!entry.maximized);
    assert_eq!(entry.position, dragged);
    assert!((entry.size.width - 600.0).abs() < 0.001);
}

// ============================================================
// Viewport resize
// ============================================================

#[test]
fn test_resize_pulls_windows_back_on_screen() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.tick(OPEN_TRANSITION_MS);
    let origin = ctl.registry().get("about").unwrap().position;
    ctl.chrome_press(press(origin), "about", ChromeTarget::Header);
    ctl.pointer_move(mv(Vec2::new(1900.0, 1000.0)));
    ctl.pointer_release(release(Vec2::new(1900.0, 1000.0)), 50.0);

    ctl.resize(1024.0, 768.0);

    let entry = ctl.registry().get("about").unwrap();
    assert!(entry.rect().right() <= 1024.0 + 0.001);
    assert!(entry.rect().bottom() <= 768.0 - TASKBAR_HEIGHT + 0.001);
}

#[test]
fn test_resize_refits_maximized_window() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.maximize_window("about");
    ctl.resize(1280.0, 720.0);

    let entry = ctl.registry().get("about").unwrap();
    assert_eq!(entry.position, Vec2::ZERO);
    assert!((entry.size.width - 1280.0).abs() < 0.001);
    assert!((entry.size.height - (720.0 - TASKBAR_HEIGHT)).abs() < 0.001);
}

// ============================================================
// Dual input models
// ============================================================

#[test]
fn test_mouse_fallback_drives_a_full_drag() {
    let mut ctl = desktop();

    let down = RawPointer::mouse(PointerPhase::Press, Vec2::new(30.0, 30.0));
    let outcome = ctl.icon_press(down, "about");
    assert!(matches!(outcome, PressOutcome::Started { capture: false }));

    ctl.pointer_move(RawPointer::mouse(PointerPhase::Move, Vec2::new(300.0, 300.0)));
    ctl.pointer_release(
        RawPointer::mouse(PointerPhase::Release, Vec2::new(300.0, 300.0)),
        0.0,
    );

    assert!((ctl.icon("about").unwrap().position.x - 290.0).abs() < 0.001);
}

#[test]
fn test_duplicate_mouse_stream_cannot_hijack_drag() {
    let mut ctl = desktop();

    ctl.icon_press(press(Vec2::new(30.0, 30.0)), "about");
    ctl.pointer_move(mv(Vec2::new(200.0, 200.0)));

    // The browser mirrors the gesture through mouse events; they must not
    // move the icon or end the drag
    let hijack = ctl.pointer_move(RawPointer::mouse(PointerPhase::Move, Vec2::new(999.0, 50.0)));
    assert_eq!(hijack, InputResult::Unhandled);
    assert!((ctl.icon("about").unwrap().position.x - 190.0).abs() < 0.001);

    let mouse_up = RawPointer::mouse(PointerPhase::Release, Vec2::new(999.0, 50.0));
    assert_eq!(ctl.pointer_release(mouse_up, 0.0), InputResult::Unhandled);
    assert!(ctl.icon("about").unwrap().dragging);

    ctl.pointer_release(release(Vec2::new(200.0, 200.0)), 0.0);
    assert!(!ctl.icon("about").unwrap().dragging);
}

#[test]
fn test_secondary_button_press_starts_nothing() {
    let mut ctl = desktop();

    let right_click = RawPointer {
        model: webtop_desktop::input::InputModel::Pointer,
        phase: PointerPhase::Press,
        position: Vec2::new(30.0, 30.0),
        button: 2,
        pointer_id: Some(1),
    };
    assert!(matches!(
        ctl.icon_press(right_click, "about"),
        PressOutcome::Ignored
    ));
    assert_eq!(ctl.pointer_move(mv(Vec2::new(300.0, 300.0))), InputResult::Unhandled);
}

// ============================================================
// Shortcuts and shell
// ============================================================

#[test]
fn test_alt_f4_closes_in_z_order() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.toggle_window("projects", 0.0);
    ctl.bring_to_front("about");

    shell::handle_key(&mut ctl, "F4", true, false, 0.0);
    assert!(ctl.registry().get("about").is_none());

    shell::handle_key(&mut ctl, "F4", true, false, 0.0);
    assert!(ctl.registry().is_empty());
}

#[test]
fn test_show_desktop_keeps_taskbar_entries() {
    let mut ctl = desktop();

    ctl.toggle_window("about", 0.0);
    ctl.toggle_window("projects", 0.0);

    shell::handle_key(&mut ctl, "d", false, true, 100.0);
    ctl.tick(100.0 + MINIMIZE_DELAY_MS);

    // Minimized, not closed: both windows can come back
    assert_eq!(ctl.registry().open_count(), 0);
    ctl.toggle_window("about", 600.0);
    assert!(ctl.registry().is_open("about"));
}

// ============================================================
// Late attachment
// ============================================================

#[test]
fn test_window_attached_after_startup_drags_identically() {
    let mut ctl = desktop();

    // A window assembled later is registered through the same call
    ctl.attach_window("settings");
    ctl.toggle_window("settings", 0.0);

    let origin = ctl.registry().get("settings").unwrap().position;
    ctl.chrome_press(press(origin + Vec2::new(30.0, 8.0)), "settings", ChromeTarget::Header);
    ctl.pointer_move(mv(origin + Vec2::new(130.0, 58.0)));

    let moved = ctl.registry().get("settings").unwrap().position;
    assert!((moved.x - (origin.x + 100.0)).abs() < 0.001);
    assert!((moved.y - (origin.y + 50.0)).abs() < 0.001);
}

#[test]
fn test_double_attach_does_not_double_move() {
    let mut ctl = desktop();

    ctl.attach_window("about");
    ctl.toggle_window("about", 0.0);

    let origin = ctl.registry().get("about").unwrap().position;
    ctl.chrome_press(press(origin), "about", ChromeTarget::Header);

    // One move event produces exactly one position delta
    ctl.pointer_move(mv(origin + Vec2::new(10.0, 10.0)));
    let after = ctl.registry().get("about").unwrap().position;
    assert_eq!(after, origin + Vec2::new(10.0, 10.0));
}

// ============================================================
// Snapshot serialization
// ============================================================

#[test]
fn test_window_entry_serializes_render_fields() {
    let mut ctl = desktop();
    ctl.toggle_window("about", 0.0);

    let entry = ctl.registry().get("about").unwrap();
    let json = serde_json::to_value(entry).unwrap();

    assert_eq!(json["id"], "about");
    assert_eq!(json["open"], true);
    assert!(json["position"]["x"].is_number());
    assert!(json["z_order"].is_number());
    assert!(json["fx"]["scale"].is_number());
}

#[test]
fn test_icon_serializes_position() {
    let ctl = desktop();
    let json = serde_json::to_value(ctl.icon("about").unwrap()).unwrap();
    assert_eq!(json["id"], "about");
    assert_eq!(json["dragging"], false);
}

// ============================================================
// Oversized content
// ============================================================

#[test]
fn test_tiny_viewport_pins_everything_to_origin() {
    let mut ctl = DesktopController::new(Viewport::new(320.0, 240.0));
    ctl.attach_window("about");
    ctl.add_icon(Icon::with_size("about", Vec2::new(10.0, 10.0), Size::new(64.0, 64.0)));

    ctl.toggle_window("about", 0.0);
    let entry = ctl.registry().get("about").unwrap();

    // Default window exceeds the viewport; the cascade clamps to the origin
    assert_eq!(entry.position, Vec2::ZERO);
}
