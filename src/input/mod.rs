//! Touch input handling for the notes canvas.
//!
//! This module implements all touch interaction logic for the canvas:
//! note dragging, tap/double-tap editor opening, and two-finger pan/zoom.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. Per-session tap bookkeeping lives in
//! `TapTracker`; nothing is captured in per-note closures, so note
//! identity and list-order changes cannot leave stale handlers behind.
//!
//! The tie-break between intents is fixed: multi-touch canvas intent
//! always preempts single-note intent, never the reverse.
//!
//! ## Modules
//!
//! - `coords` - Screen/canvas coordinate conversion
//! - `transform` - Canvas transform (pan offset + zoom) and pinch math
//! - `state` - Input state machine enum, touch set, tap tracking
//! - `touch_down` - Touch down handling (intent selection, pinch seeding)
//! - `touch_move` - Touch move handling (drag deltas, pan, pinch frames)
//! - `touch_up` - Touch up handling (drag commit, tap detection)

pub mod coords;
pub mod state;
mod touch_down;
mod touch_move;
mod touch_up;
pub mod transform;

pub use state::{InputState, TapTracker, TouchSet};
pub use transform::{CanvasTransform, PinchBaseline};
