//! Coordinate conversion utilities for canvas interactions.
//!
//! This module provides centralized coordinate conversion functions to
//! eliminate duplicated formulas across input handling code. Screen space
//! is viewport pixels; canvas space is the logical plane note positions
//! live in, independent of pan and zoom.

use crate::types::{Point2, point2};

/// Context needed for coordinate conversions
pub struct CoordinateContext {
    pub offset: Point2,
    pub zoom: f32,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(offset: Point2, zoom: f32) -> Self {
        Self { offset, zoom }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to canvas position
    #[inline]
    pub fn screen_to_canvas(screen_pos: Point2, ctx: &CoordinateContext) -> (f32, f32) {
        (
            (screen_pos.x - ctx.offset.x) / ctx.zoom,
            (screen_pos.y - ctx.offset.y) / ctx.zoom,
        )
    }

    /// Convert canvas position to screen position
    #[inline]
    pub fn canvas_to_screen(canvas_pos: (f32, f32), ctx: &CoordinateContext) -> Point2 {
        point2(
            canvas_pos.0 * ctx.zoom + ctx.offset.x,
            canvas_pos.1 * ctx.zoom + ctx.offset.y,
        )
    }

    /// Convert a delta from screen to canvas (for drag operations)
    #[inline]
    pub fn delta_screen_to_canvas(delta: Point2, zoom: f32) -> (f32, f32) {
        (delta.x / zoom, delta.y / zoom)
    }

    /// Convert a delta from canvas to screen
    #[inline]
    pub fn delta_canvas_to_screen(delta: (f32, f32), zoom: f32) -> Point2 {
        point2(delta.0 * zoom, delta.1 * zoom)
    }

    /// Offset that keeps `focal` (screen space) projecting onto the same
    /// canvas point when zoom changes from `ctx.zoom` to `new_zoom`.
    ///
    /// Callers must clamp `new_zoom` *before* this call so the focal-point
    /// invariant holds at the zoom actually applied.
    #[inline]
    pub fn offset_for_zoom(focal: Point2, new_zoom: f32, ctx: &CoordinateContext) -> Point2 {
        let anchor = Self::screen_to_canvas(focal, ctx);
        point2(focal.x - anchor.0 * new_zoom, focal.y - anchor.1 * new_zoom)
    }
}
