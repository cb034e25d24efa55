//! Initial layout of the crop screen: the crop window and the image's base frame.

use serde::{Deserialize, Serialize};

use super::{Point, Rect, Size};

/// Shape of the crop window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum CropType {
    /// No fixed ratio: the crop window follows the image's own aspect ratio.
    #[default]
    None,
    /// Fixed aspect ratio (width / height).
    Rectangle { ratio: f64 },
}

impl CropType {
    /// Ratio requested by this crop type, falling back to `image_ratio` for
    /// [`CropType::None`] or a ratio that is not a positive finite number.
    pub fn resolve_ratio(self, image_ratio: f64) -> f64 {
        match self {
            CropType::Rectangle { ratio } if ratio.is_finite() && ratio > 0.0 => ratio,
            _ => image_ratio,
        }
    }
}

/// Geometry of the crop screen at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropLayout {
    /// Size of the view hosting the crop screen.
    pub container: Size,
    /// Fixed crop window, in container coordinates.
    pub crop_window: Rect,
    /// Frame of the image under the identity transform.
    pub base_image_frame: Rect,
}

impl CropLayout {
    /// Lay out a crop screen for an image of `image_size` inside `container`.
    ///
    /// The crop window is the largest rectangle of the requested ratio that
    /// fits the container, centred. The image is scaled to fill the crop window
    /// (the shorter side matches, the longer side overflows) and centred on it,
    /// so the identity transform always satisfies the coverage invariant.
    pub fn new(container: Size, crop_type: CropType, image_size: Size) -> Self {
        let image_ratio = image_size.aspect_ratio().unwrap_or(1.0);
        let ratio = crop_type.resolve_ratio(image_ratio);

        let mut window_w = container.width;
        let mut window_h = window_w / ratio;
        if window_h > container.height {
            window_h = container.height;
            window_w = window_h * ratio;
        }

        let container_center = Point::new(container.width / 2.0, container.height / 2.0);
        let crop_window = Rect::from_center_size(container_center, Size::new(window_w, window_h));

        let image_frame_size = if image_ratio > ratio {
            Size::new(window_h * image_ratio, window_h)
        } else {
            Size::new(window_w, window_w / image_ratio)
        };
        let base_image_frame = Rect::from_center_size(crop_window.center(), image_frame_size);

        log::debug!(
            "crop layout: container {}x{}, window {:?}, image frame {:?}",
            container.width,
            container.height,
            crop_window,
            base_image_frame
        );

        Self {
            container,
            crop_window,
            base_image_frame,
        }
    }
}
