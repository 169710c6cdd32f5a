//! The idea workspace - the engine behind the notes canvas panel.
//!
//! Owns the in-memory note store, the view transform, the gesture state
//! machine, and the save scheduler, and wires them together. The UI shell
//! feeds it raw touch events and timer ticks; it answers with store/
//! transform state to render and a queue of [`CanvasEvent`]s to act on.
//!
//! Everything here runs on the UI event loop. The only external I/O is the
//! durable write behind [`IdeaStorage`], which is fire-and-forget from the
//! gesture flow's perspective: failures are logged and retried on the next
//! natural mutation, never surfaced mid-gesture.

use crate::animations::{PanAnimation, reset_view};
use crate::constants::{DOUBLE_TAP_MS, NOTE_HEIGHT, NOTE_WIDTH};
use crate::error::{StorageError, WorkspaceError, WorkspaceResult};
use crate::input::state::{InputState, TapTracker, TouchSet};
use crate::input::transform::CanvasTransform;
use crate::profile_scope;
use crate::store::{NotePatch, NoteStore};
use crate::storage::IdeaStorage;
use crate::sync::SaveScheduler;
use crate::types::{CategoryData, Point2};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Outbound notifications for the UI shell.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// Open the note editor modal (tap or double-tap on a note)
    EditorRequested { note_id: u64 },
    /// A lone tap landed on empty canvas at this logical position; the
    /// shell may offer note creation there
    CanvasTapped { position: (f32, f32) },
    /// The view-reset animation finished
    ViewSettled,
}

/// The notes canvas engine for one open idea.
pub struct IdeaWorkspace {
    /// Id of the owning idea record
    pub idea_id: String,
    /// Display name of the idea, as loaded
    pub idea_name: String,
    /// The working copy of the idea's notes
    pub store: NoteStore,
    /// Session-local pan/zoom
    pub transform: CanvasTransform,
    /// Gesture state machine
    pub input_state: InputState,
    /// Touches currently on screen
    pub touches: TouchSet,
    /// Double-tap bookkeeping
    pub taps: TapTracker,
    /// Debounced save scheduling
    pub scheduler: SaveScheduler,
    /// Viewport size in screen pixels, for center placement and culling
    pub viewport: (f32, f32),
    /// In-flight view-reset tween
    pub pan_animation: Option<PanAnimation>,
    storage: Arc<dyn IdeaStorage>,
    events: VecDeque<CanvasEvent>,
}

impl IdeaWorkspace {
    /// Open the workspace for an idea, hydrating the note store.
    ///
    /// A missing idea is fatal: the panel cannot function without its
    /// record, so the caller is expected to alert and navigate back.
    pub fn open(idea_id: &str, storage: Arc<dyn IdeaStorage>) -> WorkspaceResult<Self> {
        let record = match storage.fetch_idea(idea_id) {
            Ok(record) => record,
            Err(StorageError::NotFound(id)) => return Err(WorkspaceError::IdeaNotFound(id)),
            Err(e) => return Err(e.into()),
        };
        debug!(idea = %record.id, notes = record.notes.len(), "workspace opened");

        Ok(Self {
            idea_id: record.id,
            idea_name: record.name,
            store: NoteStore::from_parts(record.notes, record.next_note_id),
            transform: CanvasTransform::default(),
            input_state: InputState::default(),
            touches: TouchSet::default(),
            taps: TapTracker::new(Duration::from_millis(DOUBLE_TAP_MS)),
            scheduler: SaveScheduler::new(),
            viewport: (390.0, 700.0),
            pan_animation: None,
            storage,
            events: VecDeque::new(),
        })
    }

    /// Tell the engine how large the viewport is (screen pixels).
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    // ==================== Note Operations ====================

    /// Create a note at the logical point currently under the viewport
    /// center (the "new note" button path).
    pub fn create_note(
        &mut self,
        title: &str,
        category: CategoryData,
        content: impl Into<String>,
        now: Instant,
    ) -> WorkspaceResult<u64> {
        let center = crate::types::point2(self.viewport.0 / 2.0, self.viewport.1 / 2.0);
        let center_canvas = self.transform.screen_to_canvas(center);
        let position = (
            center_canvas.0 - NOTE_WIDTH / 2.0,
            center_canvas.1 - NOTE_HEIGHT / 2.0,
        );
        self.create_note_at(title, category, content, position, now)
    }

    /// Create a note at an explicit logical position (the tap-on-canvas
    /// path).
    pub fn create_note_at(
        &mut self,
        title: &str,
        category: CategoryData,
        content: impl Into<String>,
        position: (f32, f32),
        now: Instant,
    ) -> WorkspaceResult<u64> {
        let id = self.store.create(title, category, content, position)?;
        self.scheduler.note_mutation(now);
        Ok(id)
    }

    /// Apply an editor patch to a note.
    pub fn edit_note(&mut self, id: u64, patch: NotePatch, now: Instant) -> WorkspaceResult<()> {
        self.store.update(id, patch)?;
        self.scheduler.note_mutation(now);
        Ok(())
    }

    /// Remove a note. Not bound to any gesture; exposed for shells that
    /// offer deletion from the editor.
    pub fn remove_note(&mut self, id: u64, now: Instant) -> WorkspaceResult<()> {
        self.store.remove(id)?;
        self.scheduler.note_mutation(now);
        Ok(())
    }

    /// Where a note should be drawn right now: its committed position,
    /// displaced by the live drag delta if this note is mid-drag. The
    /// committed position only changes at release, at which point it
    /// already includes the delta - so the handoff is seamless.
    pub fn visual_position(&self, note_id: u64) -> Option<(f32, f32)> {
        let note = self.store.get(note_id)?;
        let (x, y) = note.position;
        match self.input_state {
            InputState::NoteDragging {
                note_id: id, delta, ..
            } if id == note_id => {
                let (dx, dy) = crate::input::coords::CoordinateConverter::delta_screen_to_canvas(
                    delta,
                    self.transform.zoom,
                );
                Some((x + dx, y + dy))
            }
            _ => Some((x, y)),
        }
    }

    // ==================== Persistence ====================

    /// Write the full note collection through to the idea record.
    ///
    /// Failures are absorbed: logged, left dirty, retried on the next
    /// mutation cycle. In-memory state stays the source of truth for the
    /// session either way.
    pub fn flush(&mut self) {
        profile_scope!("flush_notes");
        let result = self.storage.update_notes(
            &self.idea_id,
            self.store.all(),
            self.store.next_note_id(),
        );
        match result {
            Ok(()) => {
                debug!(idea = %self.idea_id, notes = self.store.len(), "notes flushed");
                self.scheduler.flush_finished(true);
            }
            Err(e) => {
                warn!(idea = %self.idea_id, error = %e, "note flush failed; will retry on next mutation");
                self.scheduler.flush_finished(false);
            }
        }
    }

    /// Force-save on the way out (leaving the panel, app backgrounding).
    ///
    /// Unlike the in-session flush, a failure here is returned so the
    /// shell can tell the user their last edits did not land.
    pub fn close(&mut self) -> anyhow::Result<()> {
        self.cancel_active_gesture(Instant::now());
        self.touches = TouchSet::default();
        if !self.scheduler.is_dirty() {
            return Ok(());
        }
        let result = self.storage.update_notes(
            &self.idea_id,
            self.store.all(),
            self.store.next_note_id(),
        );
        self.scheduler.flush_finished(result.is_ok());
        result.map_err(Into::into)
    }

    // ==================== Timers & Events ====================

    /// Drive every pending deadline that has elapsed: long-press
    /// promotion, deferred tap actions, animation frames, debounced
    /// flushes. Call at least once per rendered frame while
    /// [`Self::next_deadline`] returns a time.
    pub fn tick(&mut self, now: Instant) {
        // Long-press safety path into a drag.
        if let InputState::PendingNoteDrag {
            note_id,
            touch_id,
            start,
            deadline,
        } = self.input_state
        {
            if now >= deadline {
                let current = self.touches.position_of(touch_id).unwrap_or(start);
                self.activate_note_drag(note_id, touch_id, start, current);
            }
        }

        // Deferred single-tap actions.
        if let Some(note_id) = self.taps.take_due_editor(now) {
            self.events.push_back(CanvasEvent::EditorRequested { note_id });
        }
        if let Some(position) = self.taps.take_due_canvas_tap(now) {
            self.events.push_back(CanvasEvent::CanvasTapped { position });
        }

        // View-reset tween.
        if let Some(anim) = self.pan_animation {
            self.transform = anim.sample(now);
            if anim.is_finished(now) {
                self.pan_animation = None;
                self.events.push_back(CanvasEvent::ViewSettled);
            }
        }

        // Debounced flush.
        if self.scheduler.poll_due(now) {
            self.flush();
        }
    }

    /// The earliest instant at which `tick` has work to do, if any.
    /// An in-flight animation wants a tick every frame; its end time is
    /// the latest useful bound.
    pub fn next_deadline(&self) -> Option<Instant> {
        let candidates = [
            self.input_state.long_press_deadline(),
            self.taps.next_deadline(),
            self.scheduler.next_deadline(),
            self.pan_animation.map(|a| a.ends_at()),
        ];
        candidates.into_iter().flatten().min()
    }

    /// Take everything the shell should react to since the last call.
    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        self.events.drain(..).collect()
    }

    // ==================== Gesture Support ====================
    // (the handlers themselves live in src/input/touch_*.rs)

    /// Topmost note under a screen point, if any.
    pub fn note_at_screen(&self, position: Point2) -> Option<u64> {
        let canvas_pos = self.transform.screen_to_canvas(position);
        self.store.note_at(canvas_pos).map(|n| n.id)
    }

    /// Commit to a note drag from either activation path (movement
    /// threshold or long-press).
    pub(crate) fn activate_note_drag(
        &mut self,
        note_id: u64,
        touch_id: u64,
        start: Point2,
        current: Point2,
    ) {
        self.input_state = InputState::NoteDragging {
            note_id,
            touch_id,
            start,
            delta: current - start,
        };
        self.scheduler.begin_drag();
    }

    /// Begin the animated view reset (double-tap on empty canvas).
    pub(crate) fn start_view_reset(&mut self, now: Instant) {
        if self.transform == CanvasTransform::default() {
            return;
        }
        self.pan_animation = Some(reset_view(self.transform, now));
    }

    /// Stop an in-flight reset tween where it is (a new touch grabs the
    /// canvas mid-animation).
    pub(crate) fn interrupt_animation(&mut self, now: Instant) {
        if let Some(anim) = self.pan_animation.take() {
            self.transform = anim.sample(now);
        }
    }

    pub(crate) fn push_event(&mut self, event: CanvasEvent) {
        self.events.push_back(event);
    }

    /// Abort whatever gesture is active and converge to Idle with no
    /// residual delta. Used by the second-touch preemption path and by
    /// shells on abnormal termination (interruption, app switch).
    pub fn cancel_active_gesture(&mut self, now: Instant) {
        if self.input_state.is_dragging_note() {
            // The store was never touched mid-drag; lifting the
            // suppression is all the scheduler needs.
            self.scheduler.end_drag(now);
        }
        self.input_state.reset();
    }
}
