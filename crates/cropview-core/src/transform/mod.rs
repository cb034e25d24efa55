//! Zoom/pan transform of the displayed image.
//!
//! This module provides the transform applied to the image while the user
//! works the crop screen, split into:
//! - [`display`](DisplayTransform): the transform value and the pure update and
//!   settle rules for pinch and pan
//! - [`TransformStateMachine`]: owns the live transform, tracks which gestures
//!   are active and produces [`Reaction`]s when a gesture settles
//!
//! # Settling
//!
//! During a gesture every update is applied as-is, so the image can overshoot
//! the zoom range or leave parts of the crop window uncovered. When the gesture
//! ends the transform is corrected:
//! 1. Pinch: zoom clamped into `[min_zoom, max_zoom]` (1.0 to 3.0 by default)
//! 2. Pan: image moved so it covers the crop window again

mod display;
mod state;

pub use display::{
    apply_pan_delta, apply_zoom_delta, settle_pan, settle_pinch, DisplayTransform,
    PinchSettlement,
};
pub use state::{HapticStyle, InteractionState, Reaction, TransformStateMachine, Transition};
