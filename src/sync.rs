//! Save scheduling for the note collection.
//!
//! An explicit debounce scheduler rather than a reactive dependency list:
//! one deadline slot, re-armed on every mutation, with two exceptions the
//! drag flow needs - scheduling is suppressed entirely while a drag is in
//! flight, and the drag-release flush bypasses the window altogether.
//!
//! The scheduler only decides *when* to write; the workspace performs the
//! write and reports the outcome back.

use crate::constants::SAVE_DEBOUNCE_MS;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SaveScheduler {
    debounce: Duration,
    dirty: bool,
    due: Option<Instant>,
    drag_active: bool,
}

impl Default for SaveScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveScheduler {
    pub fn new() -> Self {
        Self::with_debounce(Duration::from_millis(SAVE_DEBOUNCE_MS))
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            debounce,
            dirty: false,
            due: None,
            drag_active: false,
        }
    }

    /// A note mutation happened. Restarts the debounce clock unless a drag
    /// is holding writes back.
    pub fn note_mutation(&mut self, now: Instant) {
        self.dirty = true;
        self.due = if self.drag_active {
            None
        } else {
            Some(now + self.debounce)
        };
    }

    /// A note drag started: no writes until it ends, regardless of elapsed
    /// time.
    pub fn begin_drag(&mut self) {
        self.drag_active = true;
        self.due = None;
    }

    /// The drag ended (release or cancel). Lifts the suppression and, if
    /// anything is dirty, re-arms the window so dirt accumulated during the
    /// drag cannot be stranded. The release path follows up with an
    /// immediate flush; the cancel path just lets the window run.
    pub fn end_drag(&mut self, now: Instant) {
        self.drag_active = false;
        if self.dirty {
            self.due = Some(now + self.debounce);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// True when the debounce window has elapsed and a flush should run.
    pub fn poll_due(&self, now: Instant) -> bool {
        if !self.dirty || self.drag_active {
            return false;
        }
        self.due.is_some_and(|due| now >= due)
    }

    /// When the host should call back, if a flush is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.dirty && !self.drag_active {
            self.due
        } else {
            None
        }
    }

    /// Record a flush attempt's outcome.
    ///
    /// Success clears the dirty flag. Failure keeps it set but disarms the
    /// timer - the write is retried opportunistically on the next mutation,
    /// never on a timer of its own.
    pub fn flush_finished(&mut self, ok: bool) {
        self.due = None;
        if ok {
            self.dirty = false;
        }
    }
}
