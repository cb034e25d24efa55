//! Transform state machine driving the displayed image.
//!
//! The machine owns the only mutable piece of crop state, the
//! [`DisplayTransform`]. Gesture updates change it immediately and without
//! bounds; settling a gesture jumps the model straight to the corrected value
//! and reports a [`Transition`] so the renderer can animate towards it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::display::{
    apply_pan_delta, apply_zoom_delta, settle_pan, settle_pinch, DisplayTransform,
};
use crate::geometry::Rect;
use crate::settings::{CropSettings, ZoomBounds};

/// Which gestures are currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    PinchActive,
    PanActive,
    /// Pinch and pan recognised simultaneously.
    PinchAndPanActive,
}

/// Strength of a tactile feedback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HapticStyle {
    Light,
}

/// Animated move of the image between two transforms.
///
/// Fire-and-forget: nothing waits for it and gestures keep flowing while the
/// host animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: DisplayTransform,
    pub to: DisplayTransform,
    pub duration: Duration,
}

/// Side effect the host should perform after a gesture update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reaction {
    /// Animate the image towards a corrected transform.
    Animate(Transition),
    /// Play tactile feedback.
    Haptic(HapticStyle),
}

/// State machine for the zoom/pan transform of one crop screen.
#[derive(Debug, Clone)]
pub struct TransformStateMachine {
    transform: DisplayTransform,
    base_frame: Rect,
    crop_window: Rect,
    bounds: ZoomBounds,
    settle_duration: Duration,
    haptics_available: bool,
    pinch_active: bool,
    pan_active: bool,
}

impl TransformStateMachine {
    /// Create a machine for an image laid out at `base_frame` under a fixed
    /// `crop_window`.
    pub fn new(base_frame: Rect, crop_window: Rect, settings: &CropSettings) -> Self {
        Self {
            transform: DisplayTransform::IDENTITY,
            base_frame,
            crop_window,
            bounds: settings.zoom_bounds(),
            settle_duration: settings.settle_duration(),
            haptics_available: settings.haptics_available,
            pinch_active: false,
            pan_active: false,
        }
    }

    pub fn transform(&self) -> DisplayTransform {
        self.transform
    }

    pub fn crop_window(&self) -> Rect {
        self.crop_window
    }

    /// Current on-screen frame of the image.
    pub fn image_frame(&self) -> Rect {
        self.transform.apply_to(self.base_frame)
    }

    pub fn state(&self) -> InteractionState {
        match (self.pinch_active, self.pan_active) {
            (false, false) => InteractionState::Idle,
            (true, false) => InteractionState::PinchActive,
            (false, true) => InteractionState::PanActive,
            (true, true) => InteractionState::PinchAndPanActive,
        }
    }

    /// Apply an incremental pinch factor.
    ///
    /// Factors that are not finite or not positive are dropped; the pinch
    /// still counts as active.
    pub fn zoom_by(&mut self, factor: f64) {
        self.pinch_active = true;
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("ignoring pinch factor {factor}");
            return;
        }
        self.transform = apply_zoom_delta(self.transform, factor);
        log::trace!("zoom by {factor}: scale {}", self.transform.scale());
    }

    /// Finish a pinch, clamping the zoom back into bounds.
    pub fn end_pinch(&mut self) -> Vec<Reaction> {
        self.pinch_active = false;

        let settlement = settle_pinch(self.transform, self.bounds);
        if !settlement.went_out_of_bounds {
            return Vec::new();
        }

        log::debug!(
            "pinch ended out of bounds at scale {}, settling to {}",
            self.transform.scale(),
            settlement.transform.scale()
        );

        let mut reactions = Vec::with_capacity(2);
        if self.haptics_available {
            reactions.push(Reaction::Haptic(HapticStyle::Light));
        }
        reactions.push(Reaction::Animate(self.move_to(settlement.transform)));
        reactions
    }

    /// Abandon a pinch. The transform keeps whatever the pinch left behind.
    pub fn cancel_pinch(&mut self) {
        self.pinch_active = false;
    }

    /// Apply an incremental pan translation.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            log::warn!("ignoring pan delta ({dx}, {dy})");
            return;
        }
        self.transform = apply_pan_delta(self.transform, dx, dy);
        log::trace!("pan by ({dx}, {dy}): frame {:?}", self.image_frame());
    }

    pub fn begin_pan(&mut self) {
        self.pan_active = true;
    }

    /// Finish a pan, moving the image back over the crop window if needed.
    pub fn end_pan(&mut self) -> Vec<Reaction> {
        self.pan_active = false;

        let offset = settle_pan(self.image_frame(), self.crop_window);
        if offset.is_zero() {
            return Vec::new();
        }

        log::debug!("pan ended off the crop window, correcting by {offset:?}");
        let target = apply_pan_delta(self.transform, offset.dx, offset.dy);
        vec![Reaction::Animate(self.move_to(target))]
    }

    /// Abandon a pan without settling.
    pub fn cancel_pan(&mut self) {
        self.pan_active = false;
    }

    fn move_to(&mut self, target: DisplayTransform) -> Transition {
        let transition = Transition {
            from: self.transform,
            to: target,
            duration: self.settle_duration,
        };
        self.transform = target;
        transition
    }
}
