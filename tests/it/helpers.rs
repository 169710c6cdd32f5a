//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestWorkspaceBuilder` - Builder pattern for creating hydrated workspaces
//! - Gesture-driving functions (`tap`, `drag`, `pinch`) for touch sequences
//! - Category fixtures

use ideaboard::storage::{IdeaRecord, MemoryIdeaStorage};
use ideaboard::types::{CategoryData, Note, Point2, Priority, TodoPriority, point2};
use ideaboard::workspace::IdeaWorkspace;
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Test-scoped tracing subscriber, installed once. Set `RUST_LOG` to see
/// engine logs while debugging a failing test.
static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Milliseconds, for readable deadline arithmetic.
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Builder for creating hydrated test workspaces.
///
/// # Example
/// ```ignore
/// let (ws, storage) = TestWorkspaceBuilder::new()
///     .with_note("First", (0.0, 0.0))
///     .with_note("Second", (300.0, 0.0))
///     .with_zoom(1.5)
///     .build();
/// ```
pub struct TestWorkspaceBuilder {
    notes: Vec<(String, CategoryData, (f32, f32))>,
    zoom: f32,
    offset: (f32, f32),
}

impl Default for TestWorkspaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspaceBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            zoom: 1.0,
            offset: (0.0, 0.0),
        }
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = (x, y);
        self
    }

    /// Add a todo note at the specified logical position.
    pub fn with_note(mut self, title: impl Into<String>, pos: (f32, f32)) -> Self {
        self.notes.push((title.into(), todo_medium(), pos));
        self
    }

    /// Build the workspace, hydrated through a `MemoryIdeaStorage`.
    pub fn build(self) -> (IdeaWorkspace, Arc<MemoryIdeaStorage>) {
        Lazy::force(&TRACING);
        let storage = Arc::new(MemoryIdeaStorage::new());
        let mut record = IdeaRecord::new("Test Idea");
        record.id = "idea-1".to_string();

        for (i, (title, category, position)) in self.notes.into_iter().enumerate() {
            record.notes.push(Note {
                id: i as u64,
                title,
                content: String::new(),
                position,
                category,
            });
        }
        record.next_note_id = record.notes.len() as u64;
        storage.put_idea(record);

        let mut ws = IdeaWorkspace::open("idea-1", storage.clone()).unwrap();
        ws.transform.zoom = self.zoom;
        ws.transform.offset = point2(self.offset.0, self.offset.1);
        (ws, storage)
    }
}

/// Empty workspace backed by in-memory storage.
pub fn empty_workspace() -> (IdeaWorkspace, Arc<MemoryIdeaStorage>) {
    TestWorkspaceBuilder::new().build()
}

// ============================================================================
// Category fixtures
// ============================================================================

pub fn todo_medium() -> CategoryData {
    CategoryData::Todo {
        priority: TodoPriority::Medium,
    }
}

pub fn todo_high() -> CategoryData {
    CategoryData::Todo {
        priority: TodoPriority::High,
    }
}

pub fn feature_critical() -> CategoryData {
    CategoryData::Feature {
        priority: Priority::Critical,
    }
}

// ============================================================================
// Gesture drivers
// ============================================================================

/// Touch id used for single-finger gestures.
pub const FINGER: u64 = 1;
/// Touch id used for the second finger in pinch gestures.
pub const FINGER_2: u64 = 2;

/// Quick tap (down + up at the same point) with finger 1.
pub fn tap(ws: &mut IdeaWorkspace, at: Point2, t: Instant) {
    ws.handle_touch_down(FINGER, at, t);
    ws.handle_touch_up(FINGER, at, t + ms(40));
}

/// Full drag with finger 1. The travel distance must exceed the drag
/// activation threshold or this degrades into a tap.
pub fn drag(ws: &mut IdeaWorkspace, from: Point2, to: Point2, t: Instant) {
    ws.handle_touch_down(FINGER, from, t);
    ws.handle_touch_move(FINGER, to, t + ms(30));
    ws.handle_touch_up(FINGER, to, t + ms(60));
}

/// Two-finger pinch: fingers land at `a0`/`b0` and lift at `a1`/`b1`.
pub fn pinch(
    ws: &mut IdeaWorkspace,
    (a0, b0): (Point2, Point2),
    (a1, b1): (Point2, Point2),
    t: Instant,
) {
    ws.handle_touch_down(FINGER, a0, t);
    ws.handle_touch_down(FINGER_2, b0, t + ms(5));
    ws.handle_touch_move(FINGER, a1, t + ms(30));
    ws.handle_touch_move(FINGER_2, b1, t + ms(30));
    ws.handle_touch_up(FINGER, a1, t + ms(60));
    ws.handle_touch_up(FINGER_2, b1, t + ms(65));
}

/// Screen point helper mirroring `point2`.
pub fn at(x: f32, y: f32) -> Point2 {
    point2(x, y)
}
