//! Gesture state machine - unified state management for touch interactions.
//!
//! A single explicit state machine per workspace session, replacing the
//! scattered "last tap time" / "currently dragging id" mutable refs the
//! interaction design otherwise accumulates. Impossible states are
//! unrepresentable: a note drag and a canvas pinch cannot coexist.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> PendingNoteDrag      (touch down on a note)
//! PendingNoteDrag -> NoteDragging
//!                              (movement > threshold, or long-press fires)
//! PendingNoteDrag -> Idle      (release before either: it was a tap)
//! Idle -> CanvasPanning        (touch down on empty canvas)
//! Any  -> CanvasPinching       (second touch down - canvas intent wins)
//! CanvasPinching -> CanvasPanning
//!                              (touch count drops to 1; the survivor pans,
//!                               it can never become a note drag)
//! Any  -> Idle                 (all touches up - finalizes operation)
//! ```

use crate::input::transform::PinchBaseline;
use crate::types::Point2;
use std::time::Instant;

/// Unified gesture state for all touch interactions.
#[derive(Debug, Clone, Copy)]
pub enum InputState {
    /// No active touch operation
    Idle,

    /// Finger down on a note; not yet committed to a drag. Either the
    /// movement threshold or the long-press deadline promotes it.
    PendingNoteDrag {
        note_id: u64,
        touch_id: u64,
        /// Touch-down position, for the movement threshold
        start: Point2,
        /// When the long-press safety path activates the drag
        deadline: Instant,
    },

    /// A note is being dragged. The note's stored position is untouched
    /// until release; only this screen-space delta moves.
    NoteDragging {
        note_id: u64,
        touch_id: u64,
        /// Touch-down position the delta is measured from
        start: Point2,
        /// Accumulated screen-space delta
        delta: Point2,
    },

    /// One-finger canvas pan (initial, or inherited from a pinch)
    CanvasPanning {
        touch_id: u64,
        /// Last touch position for delta calculation
        last: Point2,
        /// Screen position of the initial touch-down, if this pan started
        /// from one (None when inherited from a pinch). Used to tell a tap
        /// from a pan at release time.
        pressed_at: Option<Point2>,
    },

    /// Two-finger pan/zoom against a captured baseline
    CanvasPinching {
        touch_a: u64,
        touch_b: u64,
        baseline: PinchBaseline,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a note drag is active (committed, not pending)
    pub fn is_dragging_note(&self) -> bool {
        matches!(self, Self::NoteDragging { .. })
    }

    /// Returns true if any canvas-level gesture is active
    pub fn is_canvas_gesture(&self) -> bool {
        matches!(self, Self::CanvasPanning { .. } | Self::CanvasPinching { .. })
    }

    /// Get the note id being dragged or pending a drag, if any
    pub fn active_note_id(&self) -> Option<u64> {
        match self {
            Self::PendingNoteDrag { note_id, .. } | Self::NoteDragging { note_id, .. } => {
                Some(*note_id)
            }
            _ => None,
        }
    }

    /// Get the current drag delta, if a note drag is active
    pub fn drag_delta(&self) -> Option<Point2> {
        match self {
            Self::NoteDragging { delta, .. } => Some(*delta),
            _ => None,
        }
    }

    /// Get the long-press deadline, if a drag is pending
    pub fn long_press_deadline(&self) -> Option<Instant> {
        match self {
            Self::PendingNoteDrag { deadline, .. } => Some(*deadline),
            _ => None,
        }
    }

    /// Reset to Idle. Every gesture-termination path funnels through this
    /// so no residual delta can survive an abnormal end.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// The set of touches currently on the screen, in touch-down order.
#[derive(Debug, Default)]
pub struct TouchSet {
    touches: Vec<(u64, Point2)>,
}

impl TouchSet {
    pub fn insert(&mut self, id: u64, position: Point2) {
        if let Some(entry) = self.touches.iter_mut().find(|(tid, _)| *tid == id) {
            entry.1 = position;
        } else {
            self.touches.push((id, position));
        }
    }

    pub fn update(&mut self, id: u64, position: Point2) {
        if let Some(entry) = self.touches.iter_mut().find(|(tid, _)| *tid == id) {
            entry.1 = position;
        }
    }

    pub fn remove(&mut self, id: u64) -> Option<Point2> {
        let index = self.touches.iter().position(|(tid, _)| *tid == id)?;
        Some(self.touches.remove(index).1)
    }

    pub fn position_of(&self, id: u64) -> Option<Point2> {
        self.touches
            .iter()
            .find(|(tid, _)| *tid == id)
            .map(|(_, p)| *p)
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// The two oldest touches, for seeding a pinch.
    pub fn first_two(&self) -> Option<((u64, Point2), (u64, Point2))> {
        match self.touches.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Any touch other than `id`, oldest first.
    pub fn other_than(&self, id: u64) -> Option<(u64, Point2)> {
        self.touches.iter().copied().find(|(tid, _)| *tid != id)
    }
}

/// Double-tap bookkeeping for notes and the empty canvas.
///
/// A first tap arms a deferred action; a second tap inside the window
/// upgrades it to the immediate double-tap action and disarms the
/// deferred one, so exactly one action fires per tap pair.
#[derive(Debug, Default)]
pub struct TapTracker {
    window: std::time::Duration,
    last_note_tap: Option<(u64, Instant)>,
    pending_editor: Option<(u64, Instant)>,
    last_canvas_tap: Option<Instant>,
    pending_canvas_tap: Option<((f32, f32), Instant)>,
}

impl TapTracker {
    pub fn new(window: std::time::Duration) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    /// Register a tap release on a note. Returns true when this tap
    /// completes a double-tap (open the editor now).
    pub fn note_tap(&mut self, note_id: u64, now: Instant) -> bool {
        if let Some((last_id, at)) = self.last_note_tap {
            if last_id == note_id && now.duration_since(at) <= self.window {
                self.last_note_tap = None;
                self.pending_editor = None;
                return true;
            }
        }
        self.last_note_tap = Some((note_id, now));
        self.pending_editor = Some((note_id, now + self.window));
        false
    }

    /// Register a tap release on empty canvas. Returns true on double-tap
    /// (reset the view now).
    pub fn canvas_tap(&mut self, canvas_pos: (f32, f32), now: Instant) -> bool {
        if let Some(at) = self.last_canvas_tap {
            if now.duration_since(at) <= self.window {
                self.last_canvas_tap = None;
                self.pending_canvas_tap = None;
                return true;
            }
        }
        self.last_canvas_tap = Some(now);
        self.pending_canvas_tap = Some((canvas_pos, now + self.window));
        false
    }

    /// Deferred editor open whose window has elapsed, if any.
    pub fn take_due_editor(&mut self, now: Instant) -> Option<u64> {
        let (note_id, deadline) = self.pending_editor?;
        if now >= deadline {
            self.pending_editor = None;
            self.last_note_tap = None;
            Some(note_id)
        } else {
            None
        }
    }

    /// Deferred empty-canvas tap whose window has elapsed, if any.
    pub fn take_due_canvas_tap(&mut self, now: Instant) -> Option<(f32, f32)> {
        let (pos, deadline) = self.pending_canvas_tap?;
        if now >= deadline {
            self.pending_canvas_tap = None;
            self.last_canvas_tap = None;
            Some(pos)
        } else {
            None
        }
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        let editor = self.pending_editor.map(|(_, d)| d);
        let canvas = self.pending_canvas_tap.map(|(_, d)| d);
        match (editor, canvas) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
