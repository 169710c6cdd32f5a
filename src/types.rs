//! Core types for the ideaboard notes canvas.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: screen-space points, sticky notes, and the category variant
//! records notes carry.

use serde::{Deserialize, Serialize};

/// A point in screen space (pixels).
///
/// Note positions are stored as plain `(f32, f32)` tuples in *logical*
/// canvas space; `Point2` is the type the input layer uses for raw touch
/// positions and screen-space deltas so the two spaces cannot be mixed up
/// silently.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

/// Create a `Point2` from raw coordinates.
#[inline]
pub fn point2(x: f32, y: f32) -> Point2 {
    Point2 { x, y }
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between two points.
    pub fn midpoint(&self, other: Point2) -> Point2 {
        point2((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl std::ops::Add for Point2 {
    type Output = Point2;
    fn add(self, rhs: Point2) -> Point2 {
        point2(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        point2(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Priority levels for feature notes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn all() -> &'static [Priority] {
        &[
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical,
        ]
    }
}

/// Priority levels for todo notes (no critical tier)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TodoPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TodoPriority::Low => "Low",
            TodoPriority::Medium => "Medium",
            TodoPriority::High => "High",
        }
    }

    pub fn all() -> &'static [TodoPriority] {
        &[TodoPriority::Low, TodoPriority::Medium, TodoPriority::High]
    }
}

/// Urgency levels for question notes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }

    pub fn all() -> &'static [Urgency] {
        &[Urgency::Low, Urgency::Medium, Urgency::High]
    }
}

/// The closed set of note categories, used for display and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    Feature,
    Question,
    Todo,
    Risk,
    Insight,
}

impl NoteCategory {
    pub fn label(&self) -> &'static str {
        match self {
            NoteCategory::Feature => "Feature",
            NoteCategory::Question => "Question",
            NoteCategory::Todo => "To-do",
            NoteCategory::Risk => "Risk",
            NoteCategory::Insight => "Insight",
        }
    }

    /// Display color for the note body as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            NoteCategory::Feature => "#4f9cf9",
            NoteCategory::Question => "#f9a84f",
            NoteCategory::Todo => "#5fc77f",
            NoteCategory::Risk => "#f96b5f",
            NoteCategory::Insight => "#b58cf9",
        }
    }

    pub fn all() -> &'static [NoteCategory] {
        &[
            NoteCategory::Feature,
            NoteCategory::Question,
            NoteCategory::Todo,
            NoteCategory::Risk,
            NoteCategory::Insight,
        ]
    }
}

/// The category variant record a note carries.
///
/// The variant *is* the note's category; only the fields of the active
/// variant are meaningful. Switching category replaces the record with the
/// new variant's defaults - the editor only ever edits the active one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryData {
    #[serde(rename_all = "camelCase")]
    Feature { priority: Priority },
    #[serde(rename_all = "camelCase")]
    Question {
        urgency: Urgency,
        blocking: bool,
        who_to_ask: String,
    },
    #[serde(rename_all = "camelCase")]
    Todo { priority: TodoPriority },
    Risk,
    Insight,
}

impl CategoryData {
    /// The category this record belongs to.
    pub fn category(&self) -> NoteCategory {
        match self {
            CategoryData::Feature { .. } => NoteCategory::Feature,
            CategoryData::Question { .. } => NoteCategory::Question,
            CategoryData::Todo { .. } => NoteCategory::Todo,
            CategoryData::Risk => NoteCategory::Risk,
            CategoryData::Insight => NoteCategory::Insight,
        }
    }

    /// Default record for a category, used when the editor switches a note
    /// to a category it has no stored fields for.
    pub fn default_for(category: NoteCategory) -> Self {
        match category {
            NoteCategory::Feature => CategoryData::Feature {
                priority: Priority::default(),
            },
            NoteCategory::Question => CategoryData::Question {
                urgency: Urgency::default(),
                blocking: false,
                who_to_ask: String::new(),
            },
            NoteCategory::Todo => CategoryData::Todo {
                priority: TodoPriority::default(),
            },
            NoteCategory::Risk => CategoryData::Risk,
            NoteCategory::Insight => CategoryData::Insight,
        }
    }
}

/// A sticky note on the canvas.
///
/// Each note has a unique id, a non-empty title, free-text content, a
/// position in logical canvas space (independent of pan/zoom), and a
/// category record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned at creation and never reused
    pub id: u64,
    /// Short non-empty label shown on the note face
    pub title: String,
    /// Free-text body, may be empty
    pub content: String,
    /// Position in logical canvas space (x, y)
    pub position: (f32, f32),
    /// Category variant record
    pub category: CategoryData,
}

impl Note {
    /// The note's category, derived from its variant record.
    pub fn category(&self) -> NoteCategory {
        self.category.category()
    }

    /// Display color for this note.
    pub fn color(&self) -> &'static str {
        self.category().color()
    }

    /// True if `canvas_point` (logical space) falls inside the note's
    /// fixed-size body.
    pub fn contains(&self, canvas_point: (f32, f32)) -> bool {
        let (x, y) = self.position;
        canvas_point.0 >= x
            && canvas_point.0 <= x + crate::constants::NOTE_WIDTH
            && canvas_point.1 >= y
            && canvas_point.1 <= y + crate::constants::NOTE_HEIGHT
    }
}
