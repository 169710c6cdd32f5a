//! Canvas transform - pan offset and zoom, plus pinch gesture math.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_PINCH_DISTANCE, MIN_ZOOM};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::types::Point2;

/// Session-local view state. Never persisted; a freshly opened workspace
/// starts at the origin at zoom 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    /// Pan offset in screen pixels
    pub offset: Point2,
    /// Scale factor, clamped to [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            offset: Point2::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CanvasTransform {
    pub fn ctx(&self) -> CoordinateContext {
        CoordinateContext::new(self.offset, self.zoom)
    }

    pub fn screen_to_canvas(&self, screen_pos: Point2) -> (f32, f32) {
        CoordinateConverter::screen_to_canvas(screen_pos, &self.ctx())
    }

    pub fn canvas_to_screen(&self, canvas_pos: (f32, f32)) -> Point2 {
        CoordinateConverter::canvas_to_screen(canvas_pos, &self.ctx())
    }

    /// Translate the view by a screen-space delta.
    pub fn pan_by(&mut self, delta: Point2) {
        self.offset = self.offset + delta;
    }

    /// Set zoom while keeping `focal` (screen space) visually fixed.
    ///
    /// The requested zoom is clamped first, then the offset is solved at
    /// the clamped value, so the point under the user's fingers stays put
    /// even when the request saturates. Returns false if nothing changed.
    pub fn zoom_around(&mut self, new_zoom: f32, focal: Point2) -> bool {
        let clamped = new_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if (clamped - self.zoom).abs() < f32::EPSILON {
            return false;
        }
        self.offset = CoordinateConverter::offset_for_zoom(focal, clamped, &self.ctx());
        self.zoom = clamped;
        true
    }

    /// Back to the origin at default zoom.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot of state at the moment a 2-finger gesture begins.
#[derive(Clone, Copy, Debug)]
pub struct PinchBaseline {
    /// Pixel distance between the two fingers at gesture start
    pub distance: f32,
    /// Midpoint in screen coordinates at gesture start
    pub midpoint: Point2,
    /// Transform at gesture start
    pub offset: Point2,
    pub zoom: f32,
}

impl PinchBaseline {
    /// Capture a baseline from the current transform and two touch points.
    pub fn capture(transform: &CanvasTransform, a: Point2, b: Point2) -> Self {
        Self {
            distance: a.distance(b),
            midpoint: a.midpoint(b),
            offset: transform.offset,
            zoom: transform.zoom,
        }
    }

    /// Transform for the current finger positions.
    ///
    /// Zoom scales with the finger-distance ratio; the canvas point that
    /// sat under the baseline midpoint is re-anchored to the *current*
    /// midpoint, which folds two-finger panning into the same formula.
    pub fn apply(&self, a: Point2, b: Point2) -> CanvasTransform {
        if self.distance < MIN_PINCH_DISTANCE {
            return CanvasTransform {
                offset: self.offset,
                zoom: self.zoom,
            };
        }

        let scale = a.distance(b) / self.distance;
        let zoom = (self.zoom * scale).clamp(MIN_ZOOM, MAX_ZOOM);

        let baseline_ctx = CoordinateContext::new(self.offset, self.zoom);
        let anchor = CoordinateConverter::screen_to_canvas(self.midpoint, &baseline_ctx);

        let mid = a.midpoint(b);
        CanvasTransform {
            offset: crate::types::point2(mid.x - anchor.0 * zoom, mid.y - anchor.1 * zoom),
            zoom,
        }
    }
}
