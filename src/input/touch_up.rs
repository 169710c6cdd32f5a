//! Touch up event handling - finalize gestures, commit drags, detect taps.

use crate::constants::DRAG_ACTIVATION_DISTANCE;
use crate::input::coords::CoordinateConverter;
use crate::input::state::InputState;
use crate::profile_scope;
use crate::types::Point2;
use crate::workspace::{CanvasEvent, IdeaWorkspace};
use std::time::Instant;
use tracing::warn;

impl IdeaWorkspace {
    pub fn handle_touch_up(&mut self, touch_id: u64, position: Point2, now: Instant) {
        profile_scope!("handle_touch_up");

        self.touches.remove(touch_id);

        match self.input_state {
            InputState::PendingNoteDrag {
                note_id,
                touch_id: owner,
                ..
            } if owner == touch_id => {
                // Released before either activation path fired: a tap.
                self.input_state.reset();
                if self.taps.note_tap(note_id, now) {
                    self.push_event(CanvasEvent::EditorRequested { note_id });
                }
            }

            InputState::NoteDragging {
                note_id,
                touch_id: owner,
                start,
                ..
            } if owner == touch_id => {
                self.input_state.reset();
                self.finish_note_drag(note_id, position - start, now);
            }

            InputState::CanvasPanning {
                touch_id: owner,
                pressed_at,
                ..
            } if owner == touch_id => {
                self.input_state.reset();
                // A pan that never really moved is a tap on empty canvas.
                if let Some(pressed) = pressed_at {
                    if pressed.distance(position) <= DRAG_ACTIVATION_DISTANCE {
                        let canvas_pos = self.transform.screen_to_canvas(position);
                        if self.taps.canvas_tap(canvas_pos, now) {
                            self.start_view_reset(now);
                        }
                    }
                }
            }

            InputState::CanvasPinching {
                touch_a, touch_b, ..
            } if touch_id == touch_a || touch_id == touch_b => {
                // The survivor continues as a one-finger canvas pan; it can
                // never turn into a note drag.
                let survivor = if touch_id == touch_a { touch_b } else { touch_a };
                self.input_state = match self.touches.position_of(survivor) {
                    Some(last) => InputState::CanvasPanning {
                        touch_id: survivor,
                        last,
                        pressed_at: None,
                    },
                    None => InputState::Idle,
                };
            }

            _ => {}
        }

        // Safety net: no gesture may stay armed once every finger is up.
        if self.touches.is_empty() && !self.input_state.is_idle() {
            self.cancel_active_gesture(now);
        }
    }

    /// Commit a finished drag: screen delta to logical delta at the
    /// current zoom, write through the store, then flush with zero delay
    /// so the new position survives an immediate app close.
    fn finish_note_drag(&mut self, note_id: u64, delta: Point2, now: Instant) {
        let (dx, dy) = CoordinateConverter::delta_screen_to_canvas(delta, self.transform.zoom);

        match self.store.get(note_id).map(|n| n.position) {
            Some((x, y)) => {
                if self.store.update_position(note_id, (x + dx, y + dy)).is_ok() {
                    self.scheduler.note_mutation(now);
                }
            }
            None => warn!(note_id, "dragged note vanished before commit"),
        }

        self.scheduler.end_drag(now);
        if self.scheduler.is_dirty() {
            self.flush();
        }
    }
}
