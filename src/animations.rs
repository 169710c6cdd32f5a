//! View animations.
//!
//! The only animated value in the engine is the double-tap view reset:
//! an eased tween of offset and zoom back to the origin. The animation is
//! explicit numeric state sampled on each tick - nothing reads a "current
//! value" off a rendering-interpolation mechanism.

use crate::constants::PAN_ANIMATION_DURATION;
use crate::input::transform::CanvasTransform;
use crate::types::point2;
use std::time::{Duration, Instant};

/// Cubic ease-out: fast start, gentle settle.
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// An in-flight tween between two canvas transforms.
#[derive(Clone, Copy, Debug)]
pub struct PanAnimation {
    from: CanvasTransform,
    to: CanvasTransform,
    start: Instant,
    duration: Duration,
}

impl PanAnimation {
    pub fn new(from: CanvasTransform, to: CanvasTransform, start: Instant) -> Self {
        Self {
            from,
            to,
            start,
            duration: Duration::from_secs_f64(PAN_ANIMATION_DURATION),
        }
    }

    /// When the tween lands on its target.
    pub fn ends_at(&self) -> Instant {
        self.start + self.duration
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.ends_at()
    }

    /// Transform at `now`. Clamped to the endpoints outside the window.
    pub fn sample(&self, now: Instant) -> CanvasTransform {
        if now <= self.start {
            return self.from;
        }
        if self.is_finished(now) {
            return self.to;
        }
        let t = now.duration_since(self.start).as_secs_f32() / self.duration.as_secs_f32();
        let k = ease_out(t);

        let lerp = |a: f32, b: f32| a + (b - a) * k;
        CanvasTransform {
            offset: point2(
                lerp(self.from.offset.x, self.to.offset.x),
                lerp(self.from.offset.y, self.to.offset.y),
            ),
            zoom: lerp(self.from.zoom, self.to.zoom),
        }
    }
}

/// Tween the view back to the origin at default zoom.
pub fn reset_view(from: CanvasTransform, start: Instant) -> PanAnimation {
    PanAnimation::new(from, CanvasTransform::default(), start)
}
