//! Geometry utilities for the crop screen.
//!
//! Pure functions over [`Rect`] values:
//! - [`clamp_rect_into`] computes the correction that makes the image cover
//!   the crop window again after a pan.
//! - [`map_view_rect_to_image_pixels`] converts a rectangle measured in the
//!   image view's coordinate space into source-image pixel units.
//! - [`clamp_pixel_rect`] snaps a pixel-space rectangle onto the pixel grid
//!   and keeps it inside the image.
//!
//! # Coordinate System
//!
//! - Origin is top-left, y grows downwards
//! - View space is measured in display points, pixel space in source pixels

mod layout;
mod rect;

pub use layout::{CropLayout, CropType};
pub use rect::{Offset, PixelRect, Point, Rect, Size};

/// Compute the minimal translation that makes `inner` cover `outer`.
///
/// Each axis is corrected independently. On the vertical axis a gap at the
/// top is closed first and a gap at the bottom second, so the bottom cap wins
/// when `inner` is shorter than `outer`. The horizontal axis does the same with
/// the left and right edges.
///
/// Returns [`Offset::ZERO`] when `inner` already covers `outer`.
///
/// # Example
///
/// ```
/// use cropview_core::geometry::{clamp_rect_into, Offset, Rect};
///
/// let crop = Rect::new(0.0, 100.0, 300.0, 300.0);
/// // Image dragged 20pt too far down
/// let image = Rect::new(0.0, 120.0, 300.0, 400.0);
/// assert_eq!(clamp_rect_into(crop, image), Offset::new(0.0, -20.0));
/// ```
pub fn clamp_rect_into(outer: Rect, inner: Rect) -> Offset {
    if inner.contains_rect(&outer) {
        return Offset::ZERO;
    }

    let mut dy = 0.0;
    if inner.min_y() > outer.min_y() {
        dy = outer.min_y() - inner.min_y();
    }
    if inner.max_y() < outer.max_y() {
        dy = outer.max_y() - inner.max_y();
    }

    let mut dx = 0.0;
    if inner.min_x() > outer.min_x() {
        dx = outer.min_x() - inner.min_x();
    }
    if inner.max_x() < outer.max_x() {
        dx = outer.max_x() - inner.max_x();
    }

    Offset::new(dx, dy)
}

/// Convert a rectangle in the image view's coordinate space to pixel space.
///
/// The view-to-pixel ratio is `image_view.width / original_size.width`. The
/// origin of `view_rect` is clamped to be non-negative before scaling; the far
/// edges are left untouched (see [`clamp_pixel_rect`]).
///
/// A degenerate ratio (zero-width view or image) yields an empty rectangle.
///
/// # Example
///
/// ```
/// use cropview_core::geometry::{map_view_rect_to_image_pixels, Rect, Size};
///
/// // 300pt wide view showing a 1500px wide photo
/// let view = Rect::new(0.0, 0.0, 300.0, 200.0);
/// let crop = Rect::new(50.0, 50.0, 100.0, 100.0);
/// let px = map_view_rect_to_image_pixels(crop, view, Size::new(1500.0, 1000.0));
/// assert!((px.x - 250.0).abs() < 1e-9);
/// assert!((px.width - 500.0).abs() < 1e-9);
/// ```
pub fn map_view_rect_to_image_pixels(view_rect: Rect, image_view: Rect, original_size: Size) -> Rect {
    let scale_ratio = image_view.width / original_size.width;
    if !scale_ratio.is_finite() || scale_ratio <= 0.0 {
        return Rect::default();
    }

    let x = view_rect.x.max(0.0);
    let y = view_rect.y.max(0.0);

    Rect::new(
        x / scale_ratio,
        y / scale_ratio,
        view_rect.width / scale_ratio,
        view_rect.height / scale_ratio,
    )
}

/// Snap a pixel-space rectangle to whole pixels inside an image of `image_size`.
///
/// Edges are rounded to the nearest pixel and the result is intersected with
/// the image bounds. Returns `None` when nothing of the rectangle is left.
pub fn clamp_pixel_rect(rect: Rect, image_size: (u32, u32)) -> Option<PixelRect> {
    let (img_w, img_h) = image_size;
    let bounds = Rect::new(0.0, 0.0, img_w as f64, img_h as f64);
    let visible = rect.intersection(&bounds)?;

    let left = (visible.min_x().round() as u32).min(img_w);
    let top = (visible.min_y().round() as u32).min(img_h);
    let right = (visible.max_x().round() as u32).min(img_w);
    let bottom = (visible.max_y().round() as u32).min(img_h);

    let width = right.saturating_sub(left);
    let height = bottom.saturating_sub(top);
    if width == 0 || height == 0 {
        return None;
    }

    Some(PixelRect::new(left, top, width, height))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
