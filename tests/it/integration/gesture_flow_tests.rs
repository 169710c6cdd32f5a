//! Gesture flow tests: drag activation paths, pinch/pan, tap handling,
//! and the tie-breaks between note-level and canvas-level intent.

use crate::helpers::{FINGER, FINGER_2, TestWorkspaceBuilder, at, drag, ms, pinch, tap};
use ideaboard::workspace::CanvasEvent;
use std::time::Instant;

#[test]
fn test_drag_moves_note_by_screen_delta_at_zoom_one() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_note("movable", (100.0, 100.0))
        .build();
    let t0 = Instant::now();

    drag(&mut ws, at(110.0, 110.0), at(150.0, 90.0), t0);

    assert_eq!(ws.store.get(0).unwrap().position, (140.0, 80.0));
    assert!(ws.input_state.is_idle());
}

#[test]
fn test_drag_delta_scales_with_zoom() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_note("movable", (100.0, 100.0))
        .build();
    let t0 = Instant::now();

    // At zoom 1.0: screen delta (40, -20) moves the note by (40, -20).
    drag(&mut ws, at(110.0, 110.0), at(150.0, 90.0), t0);
    assert_eq!(ws.store.get(0).unwrap().position, (140.0, 80.0));

    // At zoom 2.0 the same screen delta is half the logical distance.
    ws.transform.zoom = 2.0;
    drag(&mut ws, at(290.0, 170.0), at(330.0, 150.0), t0 + ms(2_000));
    assert_eq!(ws.store.get(0).unwrap().position, (160.0, 70.0));
}

#[test]
fn test_drag_and_inverse_drag_restore_position_exactly() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_note("boomerang", (100.0, 100.0))
        .with_zoom(2.0)
        .build();
    let t0 = Instant::now();

    drag(&mut ws, at(210.0, 210.0), at(250.0, 190.0), t0);
    drag(&mut ws, at(250.0, 190.0), at(210.0, 210.0), t0 + ms(2_000));

    let (x, y) = ws.store.get(0).unwrap().position;
    assert!((x - 100.0).abs() < 1e-4);
    assert!((y - 100.0).abs() < 1e-4);
}

#[test]
fn test_long_press_activates_drag_without_movement() {
    let (mut ws, storage) = TestWorkspaceBuilder::new()
        .with_note("slow", (100.0, 100.0))
        .build();
    let t0 = Instant::now();

    ws.handle_touch_down(FINGER, at(110.0, 110.0), t0);
    assert!(!ws.input_state.is_dragging_note());

    // The long-press deadline is the safety activation path.
    ws.tick(t0 + ms(250));
    assert!(ws.input_state.is_dragging_note());

    ws.handle_touch_move(FINGER, at(130.0, 110.0), t0 + ms(300));
    ws.handle_touch_up(FINGER, at(130.0, 110.0), t0 + ms(350));

    assert_eq!(ws.store.get(0).unwrap().position, (120.0, 100.0));
    // Release-commit flushes with zero delay.
    assert_eq!(storage.write_count(), 1);
}

#[test]
fn test_second_touch_aborts_note_drag_on_the_same_event() {
    let (mut ws, storage) = TestWorkspaceBuilder::new()
        .with_note("immovable", (100.0, 100.0))
        .build();
    let t0 = Instant::now();

    ws.handle_touch_down(FINGER, at(110.0, 110.0), t0);
    ws.handle_touch_move(FINGER, at(160.0, 110.0), t0 + ms(30));
    assert!(ws.input_state.is_dragging_note());

    // Second finger: canvas intent wins immediately.
    ws.handle_touch_down(FINGER_2, at(300.0, 300.0), t0 + ms(40));
    assert!(ws.input_state.is_canvas_gesture());
    assert_eq!(ws.store.get(0).unwrap().position, (100.0, 100.0));

    // The 2-touch gesture drives the transform, not the note.
    ws.handle_touch_move(FINGER, at(60.0, 110.0), t0 + ms(60));
    ws.handle_touch_move(FINGER_2, at(350.0, 300.0), t0 + ms(60));
    assert_ne!(ws.transform.zoom, 1.0);
    assert_eq!(ws.store.get(0).unwrap().position, (100.0, 100.0));

    // The aborted drag never wrote anything.
    ws.handle_touch_up(FINGER, at(60.0, 110.0), t0 + ms(80));
    ws.handle_touch_up(FINGER_2, at(350.0, 300.0), t0 + ms(85));
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn test_pinch_keeps_focal_point_fixed() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_offset(30.0, -40.0)
        .build();
    let t0 = Instant::now();

    ws.handle_touch_down(FINGER, at(100.0, 200.0), t0);
    ws.handle_touch_down(FINGER_2, at(300.0, 200.0), t0 + ms(5));

    let midpoint = at(200.0, 200.0);
    let anchor = ws.transform.screen_to_canvas(midpoint);

    // Spread symmetrically, then spread and translate: after every frame
    // the original anchor point projects back onto the current midpoint.
    let frames = [
        (at(50.0, 200.0), at(350.0, 200.0)),
        (at(100.0, 250.0), at(400.0, 250.0)),
    ];
    for (i, (a, b)) in frames.into_iter().enumerate() {
        let t = t0 + ms(30 + i as u64 * 16);
        ws.handle_touch_move(FINGER, a, t);
        ws.handle_touch_move(FINGER_2, b, t);

        let projected = ws.transform.canvas_to_screen(anchor);
        let mid = a.midpoint(b);
        assert!((projected.x - mid.x).abs() < 0.1, "frame {i}");
        assert!((projected.y - mid.y).abs() < 0.1, "frame {i}");
    }
}

#[test]
fn test_pinch_survivor_pans_and_never_drags_a_note() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_note("bystander", (0.0, 0.0))
        .build();
    let t0 = Instant::now();

    ws.handle_touch_down(FINGER, at(50.0, 50.0), t0);
    ws.handle_touch_down(FINGER_2, at(250.0, 50.0), t0 + ms(5));
    ws.handle_touch_up(FINGER_2, at(250.0, 50.0), t0 + ms(100));

    // The survivor inherits a canvas pan - even over a note.
    assert!(ws.input_state.is_canvas_gesture());
    let offset_before = ws.transform.offset;
    ws.handle_touch_move(FINGER, at(90.0, 70.0), t0 + ms(130));
    assert_ne!(ws.transform.offset, offset_before);
    assert_eq!(ws.store.get(0).unwrap().position, (0.0, 0.0));

    ws.handle_touch_up(FINGER, at(90.0, 70.0), t0 + ms(160));
    assert!(ws.input_state.is_idle());
}

#[test]
fn test_double_tap_opens_editor_exactly_once() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_note("editable", (100.0, 100.0))
        .build();
    let t0 = Instant::now();

    tap(&mut ws, at(110.0, 110.0), t0);
    ws.handle_touch_down(FINGER, at(110.0, 110.0), t0 + ms(100));
    ws.handle_touch_up(FINGER, at(110.0, 110.0), t0 + ms(140));

    assert_eq!(
        ws.drain_events(),
        vec![CanvasEvent::EditorRequested { note_id: 0 }]
    );

    // No deferred duplicate fires later.
    ws.tick(t0 + ms(10_000));
    assert!(ws.drain_events().is_empty());
}

#[test]
fn test_single_tap_opens_editor_after_the_window() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_note("editable", (100.0, 100.0))
        .build();
    let t0 = Instant::now();

    tap(&mut ws, at(110.0, 110.0), t0); // release at t0+40
    assert!(ws.drain_events().is_empty());

    ws.tick(t0 + ms(200));
    assert!(ws.drain_events().is_empty());

    ws.tick(t0 + ms(40 + 220));
    assert_eq!(
        ws.drain_events(),
        vec![CanvasEvent::EditorRequested { note_id: 0 }]
    );
}

#[test]
fn test_canvas_double_tap_resets_view_animated() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_offset(120.0, 90.0)
        .with_zoom(2.0)
        .build();
    let t0 = Instant::now();

    tap(&mut ws, at(300.0, 400.0), t0);
    ws.handle_touch_down(FINGER, at(300.0, 400.0), t0 + ms(100));
    ws.handle_touch_up(FINGER, at(300.0, 400.0), t0 + ms(140));

    assert!(ws.pan_animation.is_some());
    ws.tick(t0 + ms(1_000));

    assert_eq!(ws.transform.zoom, 1.0);
    assert_eq!(ws.transform.offset, at(0.0, 0.0));
    assert!(ws.drain_events().contains(&CanvasEvent::ViewSettled));
}

#[test]
fn test_lone_canvas_tap_reports_logical_position() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_offset(10.0, 20.0)
        .with_zoom(2.0)
        .build();
    let t0 = Instant::now();

    tap(&mut ws, at(50.0, 60.0), t0); // release at t0+40
    ws.tick(t0 + ms(40 + 220));

    assert_eq!(
        ws.drain_events(),
        vec![CanvasEvent::CanvasTapped {
            position: (20.0, 20.0)
        }]
    );
}

#[test]
fn test_visual_position_tracks_the_live_drag() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_note("ghost", (100.0, 100.0))
        .with_zoom(2.0)
        .build();
    let t0 = Instant::now();

    ws.handle_touch_down(FINGER, at(210.0, 210.0), t0);
    ws.handle_touch_move(FINGER, at(250.0, 210.0), t0 + ms(30));

    // Stored position untouched; the visual one carries the delta.
    assert_eq!(ws.store.get(0).unwrap().position, (100.0, 100.0));
    assert_eq!(ws.visual_position(0), Some((120.0, 100.0)));

    // After release the committed position equals the last visual one,
    // so there is no snap.
    ws.handle_touch_up(FINGER, at(250.0, 210.0), t0 + ms(60));
    assert_eq!(ws.store.get(0).unwrap().position, (120.0, 100.0));
    assert_eq!(ws.visual_position(0), Some((120.0, 100.0)));
}

#[test]
fn test_cancelled_gesture_leaves_no_residue() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new()
        .with_note("n", (100.0, 100.0))
        .build();
    let t0 = Instant::now();

    ws.handle_touch_down(FINGER, at(110.0, 110.0), t0);
    ws.handle_touch_move(FINGER, at(180.0, 110.0), t0 + ms(30));
    assert!(ws.input_state.is_dragging_note());

    // Abnormal termination (interruption, app switch).
    ws.cancel_active_gesture(t0 + ms(40));
    assert!(ws.input_state.is_idle());
    assert_eq!(ws.visual_position(0), Some((100.0, 100.0)));
    assert_eq!(ws.store.get(0).unwrap().position, (100.0, 100.0));
}

#[test]
fn test_full_pinch_ends_idle() {
    let (mut ws, _storage) = TestWorkspaceBuilder::new().build();
    let t0 = Instant::now();
    pinch(
        &mut ws,
        (at(100.0, 100.0), at(300.0, 100.0)),
        (at(50.0, 100.0), at(350.0, 100.0)),
        t0,
    );
    assert!(ws.input_state.is_idle());
    assert!(ws.touches.is_empty());
    assert!(ws.transform.zoom > 1.0);
}
