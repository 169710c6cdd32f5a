//! Renderer support - pure geometry for the UI binding.
//!
//! The engine does no drawing; this module answers the questions a
//! renderer asks every frame: where does a note land on screen, which
//! notes are worth drawing at all, and how far apart are grid lines at
//! the current zoom. Culling is an optimization only - skipping it
//! changes nothing about stored state.

use crate::constants::{CULLING_MARGIN, GRID_STEP, NOTE_HEIGHT, NOTE_WIDTH};
use crate::input::transform::CanvasTransform;
use crate::types::{Note, Point2};

/// A note's on-screen footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub origin: Point2,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// True if this rect intersects a viewport of the given size, padded
    /// by `margin` on every side.
    pub fn intersects_viewport(&self, viewport: (f32, f32), margin: f32) -> bool {
        self.origin.x + self.width >= -margin
            && self.origin.y + self.height >= -margin
            && self.origin.x <= viewport.0 + margin
            && self.origin.y <= viewport.1 + margin
    }
}

/// Screen-space rectangle a note occupies under the given transform.
pub fn note_screen_rect(note: &Note, transform: &CanvasTransform) -> ScreenRect {
    ScreenRect {
        origin: transform.canvas_to_screen(note.position),
        width: NOTE_WIDTH * transform.zoom,
        height: NOTE_HEIGHT * transform.zoom,
    }
}

/// Notes whose bodies touch the (margin-padded) viewport, in paint order.
pub fn visible_notes<'a>(
    notes: &'a [Note],
    transform: &'a CanvasTransform,
    viewport: (f32, f32),
) -> impl Iterator<Item = &'a Note> {
    notes.iter().filter(move |note| {
        note_screen_rect(note, transform).intersects_viewport(viewport, CULLING_MARGIN)
    })
}

/// On-screen spacing between background grid lines.
///
/// The logical step doubles as the view zooms out so line density stays
/// roughly constant instead of collapsing into a moire patch.
pub fn grid_spacing(zoom: f32) -> f32 {
    let mut step = GRID_STEP;
    while step * zoom < GRID_STEP / 2.0 {
        step *= 2.0;
    }
    while step * zoom > GRID_STEP * 2.0 {
        step /= 2.0;
    }
    step * zoom
}
