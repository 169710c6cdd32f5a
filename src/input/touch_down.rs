//! Touch down event handling - gesture intent selection.
//!
//! The first finger decides between note intent (landed on a note) and
//! canvas intent (landed on empty canvas). Any second finger settles the
//! question in favor of the canvas, cancelling note intent on the spot.

use crate::constants::LONG_PRESS_MS;
use crate::input::state::InputState;
use crate::input::transform::PinchBaseline;
use crate::profile_scope;
use crate::types::Point2;
use crate::workspace::IdeaWorkspace;
use std::time::{Duration, Instant};

impl IdeaWorkspace {
    pub fn handle_touch_down(&mut self, touch_id: u64, position: Point2, now: Instant) {
        profile_scope!("handle_touch_down");

        // A new touch grabs the canvas out of any in-flight reset tween.
        self.interrupt_animation(now);
        self.touches.insert(touch_id, position);

        if self.touches.len() >= 2 {
            // Multi-touch: canvas intent preempts note intent on this same
            // event. An aborted drag leaves the note's position exactly as
            // it was before the drag began.
            self.cancel_active_gesture(now);
            if let Some(((a_id, a), (b_id, b))) = self.touches.first_two() {
                self.input_state = InputState::CanvasPinching {
                    touch_a: a_id,
                    touch_b: b_id,
                    baseline: PinchBaseline::capture(&self.transform, a, b),
                };
            }
            return;
        }

        match self.note_at_screen(position) {
            Some(note_id) => {
                // Arm both activation paths: the movement threshold (eager)
                // and the long-press deadline (safety).
                self.input_state = InputState::PendingNoteDrag {
                    note_id,
                    touch_id,
                    start: position,
                    deadline: now + Duration::from_millis(LONG_PRESS_MS),
                };
            }
            None => {
                self.input_state = InputState::CanvasPanning {
                    touch_id,
                    last: position,
                    pressed_at: Some(position),
                };
            }
        }
    }
}
