//! Touch move event handling - drag deltas, panning, pinch frames.
//!
//! ## Performance Notes
//!
//! Touch move arrives at input-event rate (60-120Hz) during gestures.
//! Each frame does O(1) work against the copied gesture state; the store
//! is never touched here - a note's position is only written at release.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::DRAG_ACTIVATION_DISTANCE;
use crate::input::state::InputState;
use crate::profile_scope;
use crate::types::Point2;
use crate::workspace::IdeaWorkspace;
use std::time::Instant;

impl IdeaWorkspace {
    pub fn handle_touch_move(&mut self, touch_id: u64, position: Point2, _now: Instant) {
        profile_scope!("handle_touch_move");

        self.touches.update(touch_id, position);

        match self.input_state {
            InputState::PendingNoteDrag {
                note_id,
                touch_id: owner,
                start,
                ..
            } if owner == touch_id => {
                // Eager activation: a deliberate drag should not have to
                // wait out the long-press timer.
                if start.distance(position) > DRAG_ACTIVATION_DISTANCE {
                    self.activate_note_drag(note_id, touch_id, start, position);
                }
            }
            InputState::NoteDragging {
                note_id,
                touch_id: owner,
                start,
                ..
            } if owner == touch_id => {
                self.input_state = InputState::NoteDragging {
                    note_id,
                    touch_id,
                    start,
                    delta: position - start,
                };
            }
            InputState::CanvasPanning {
                touch_id: owner,
                last,
                pressed_at,
            } if owner == touch_id => {
                self.transform.pan_by(position - last);
                self.input_state = InputState::CanvasPanning {
                    touch_id,
                    last: position,
                    pressed_at,
                };
            }
            InputState::CanvasPinching {
                touch_a,
                touch_b,
                baseline,
            } if touch_id == touch_a || touch_id == touch_b => {
                if let (Some(a), Some(b)) = (
                    self.touches.position_of(touch_a),
                    self.touches.position_of(touch_b),
                ) {
                    self.transform = baseline.apply(a, b);
                }
            }
            _ => {}
        }
    }
}
