//! The display transform and the pure zoom/pan update and settle rules.

use serde::{Deserialize, Serialize};

use crate::geometry::{clamp_rect_into, Offset, Rect, Size};
use crate::settings::ZoomBounds;

/// Zoom and pan applied to the displayed image, relative to its base frame.
///
/// Zoom is uniform: `scale_x` and `scale_y` are only ever changed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for DisplayTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DisplayTransform {
    pub const IDENTITY: DisplayTransform = DisplayTransform {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Uniform zoom level.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale_x
    }

    pub fn translation(&self) -> Offset {
        Offset::new(self.translate_x, self.translate_y)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Project `base` through this transform.
    ///
    /// The base frame is scaled about its own centre, then moved by the
    /// translation.
    pub fn apply_to(&self, base: Rect) -> Rect {
        let center = base.center();
        let size = Size::new(base.width * self.scale_x, base.height * self.scale_y);
        Rect::from_center_size(center, size).translate(self.translation())
    }
}

/// Multiply the current zoom by `factor` on both axes.
///
/// No bounds are enforced; a pinch may overshoot until it is settled.
pub fn apply_zoom_delta(transform: DisplayTransform, factor: f64) -> DisplayTransform {
    DisplayTransform {
        scale_x: transform.scale_x * factor,
        scale_y: transform.scale_y * factor,
        ..transform
    }
}

/// Add `(dx, dy)` to the translation. Never rejected, never clamped.
pub fn apply_pan_delta(transform: DisplayTransform, dx: f64, dy: f64) -> DisplayTransform {
    DisplayTransform {
        translate_x: transform.translate_x + dx,
        translate_y: transform.translate_y + dy,
        ..transform
    }
}

/// Result of settling a pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSettlement {
    /// Transform to settle on.
    pub transform: DisplayTransform,
    /// The gesture ended outside the allowed zoom range.
    pub went_out_of_bounds: bool,
}

/// Bring a transform back into the allowed zoom range after a pinch.
///
/// - Within `bounds`: returned unchanged.
/// - Above `bounds.max`: zoom clamped to `bounds.max` on both axes, translation
///   kept.
/// - Below `bounds.min` or not a number: reset to the minimum zoom, centred
///   (the identity transform under the default bounds).
pub fn settle_pinch(transform: DisplayTransform, bounds: ZoomBounds) -> PinchSettlement {
    let scale = transform.scale();

    if bounds.contains(scale) {
        return PinchSettlement {
            transform,
            went_out_of_bounds: false,
        };
    }

    let settled = if scale > bounds.max {
        DisplayTransform {
            scale_x: bounds.max,
            scale_y: bounds.max,
            ..transform
        }
    } else {
        DisplayTransform {
            scale_x: bounds.min,
            scale_y: bounds.min,
            ..DisplayTransform::IDENTITY
        }
    };

    PinchSettlement {
        transform: settled,
        went_out_of_bounds: true,
    }
}

/// Correction that puts `image_frame` back over the whole `crop_window`.
pub fn settle_pan(image_frame: Rect, crop_window: Rect) -> Offset {
    clamp_rect_into(crop_window, image_frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoomed(scale: f64) -> DisplayTransform {
        DisplayTransform {
            scale_x: scale,
            scale_y: scale,
            ..DisplayTransform::IDENTITY
        }
    }

    #[test]
    fn test_zoom_delta_is_uniform() {
        let t = apply_zoom_delta(DisplayTransform::IDENTITY, 1.5);
        assert_eq!(t.scale_x, 1.5);
        assert_eq!(t.scale_y, 1.5);

        let t = apply_zoom_delta(t, 2.0);
        assert_eq!(t.scale(), 3.0);
    }

    #[test]
    fn test_zoom_delta_keeps_translation() {
        let t = apply_pan_delta(DisplayTransform::IDENTITY, 10.0, -5.0);
        let t = apply_zoom_delta(t, 2.0);
        assert_eq!(t.translation(), Offset::new(10.0, -5.0));
    }

    #[test]
    fn test_pan_delta_accumulates() {
        let t = apply_pan_delta(DisplayTransform::IDENTITY, 10.0, 20.0);
        let t = apply_pan_delta(t, -4.0, 1.0);
        assert_eq!(t.translation(), Offset::new(6.0, 21.0));
        assert_eq!(t.scale(), 1.0);
    }

    #[test]
    fn test_settle_pinch_zoomed_out_resets_to_identity() {
        let t = apply_pan_delta(zoomed(0.5), 30.0, 30.0);
        let settled = settle_pinch(t, ZoomBounds::default());
        assert!(settled.went_out_of_bounds);
        assert!(settled.transform.is_identity());
    }

    #[test]
    fn test_settle_pinch_zoomed_in_clamps_to_max() {
        let t = apply_pan_delta(zoomed(4.0), 12.0, 0.0);
        let settled = settle_pinch(t, ZoomBounds::default());
        assert!(settled.went_out_of_bounds);
        assert_eq!(settled.transform.scale_x, 3.0);
        assert_eq!(settled.transform.scale_y, 3.0);
        assert_eq!(settled.transform.translate_x, 12.0);
    }

    #[test]
    fn test_settle_pinch_within_bounds_unchanged() {
        let t = zoomed(2.2);
        let settled = settle_pinch(t, ZoomBounds::default());
        assert!(!settled.went_out_of_bounds);
        assert_eq!(settled.transform, t);
    }

    #[test]
    fn test_settle_pinch_boundaries_inclusive() {
        assert!(!settle_pinch(zoomed(1.0), ZoomBounds::default()).went_out_of_bounds);
        assert!(!settle_pinch(zoomed(3.0), ZoomBounds::default()).went_out_of_bounds);
    }

    #[test]
    fn test_settle_pinch_custom_min() {
        let bounds = ZoomBounds { min: 1.5, max: 4.0 };
        let settled = settle_pinch(zoomed(1.2), bounds);
        assert!(settled.went_out_of_bounds);
        assert_eq!(settled.transform.scale(), 1.5);
        assert_eq!(settled.transform.translation(), Offset::ZERO);
    }

    #[test]
    fn test_settle_pinch_nan_scale_resets() {
        let t = apply_pan_delta(zoomed(f64::NAN), 5.0, 5.0);
        let settled = settle_pinch(t, ZoomBounds::default());
        assert!(settled.went_out_of_bounds);
        assert!(settled.transform.is_identity());
    }

    #[test]
    fn test_settle_pinch_infinite_scale_clamps() {
        let settled = settle_pinch(zoomed(f64::INFINITY), ZoomBounds::default());
        assert!(settled.went_out_of_bounds);
        assert_eq!(settled.transform.scale(), 3.0);
    }

    #[test]
    fn test_apply_to_scales_about_center() {
        let base = Rect::new(0.0, 100.0, 300.0, 300.0);
        let frame = zoomed(2.0).apply_to(base);
        assert_eq!(frame, Rect::new(-150.0, -50.0, 600.0, 600.0));
    }

    #[test]
    fn test_apply_to_translates() {
        let base = Rect::new(0.0, 100.0, 300.0, 300.0);
        let frame = apply_pan_delta(DisplayTransform::IDENTITY, 0.0, 20.0).apply_to(base);
        assert_eq!(frame, Rect::new(0.0, 120.0, 300.0, 300.0));
    }

    #[test]
    fn test_settle_pan_top_gap() {
        let crop = Rect::new(0.0, 100.0, 300.0, 300.0);
        let image = Rect::new(0.0, 120.0, 300.0, 300.0);
        // Top cap moves the frame up, the now exposed bottom is not re-checked
        assert_eq!(settle_pan(image, crop).dy, -20.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
