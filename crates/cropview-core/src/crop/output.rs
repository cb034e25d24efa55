//! The cropped image handed back to the host.

use image::{DynamicImage, RgbImage};

use crate::encode::{encode_jpeg, EncodeError};
use crate::geometry::Size;
use crate::source::Orientation;

/// Result of a confirmed crop.
///
/// Pixels stay in the source buffer's stored orientation; `orientation` says
/// how to display them. `scale` is the host display scale (pixels per point).
#[derive(Debug, Clone, PartialEq)]
pub struct CroppedImage {
    pub image: RgbImage,
    pub scale: f64,
    pub orientation: Orientation,
}

impl CroppedImage {
    pub fn new(image: RgbImage, scale: f64, orientation: Orientation) -> Self {
        Self {
            image,
            scale,
            orientation,
        }
    }

    /// Dimensions of the stored pixels.
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Upright size in points (display pixels divided by the scale).
    pub fn point_size(&self) -> Size {
        let (w, h) = self.orientation.display_dimensions(self.image.dimensions());
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        Size::new(w as f64 / scale, h as f64 / scale)
    }

    /// Pixels turned upright.
    pub fn to_oriented(&self) -> RgbImage {
        self.orientation
            .apply(DynamicImage::ImageRgb8(self.image.clone()))
            .into_rgb8()
    }

    /// Encode the upright image as JPEG.
    pub fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, EncodeError> {
        encode_jpeg(&self.to_oriented(), quality)
    }
}
