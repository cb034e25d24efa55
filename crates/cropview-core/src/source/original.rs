//! The immutable source image handed to a crop session.

use image::RgbImage;

use super::{ImageError, Orientation};
use crate::geometry::Size;

/// Source image of a crop session: pixel buffer as stored plus orientation.
///
/// The buffer may be missing for images known only by their size (for example
/// a placeholder shown while pixels are still loading). Such an image can be
/// laid out and manipulated but not cropped.
#[derive(Debug, Clone)]
pub struct OriginalImage {
    buffer: Option<RgbImage>,
    raw_dimensions: (u32, u32),
    orientation: Orientation,
}

impl OriginalImage {
    /// Wrap a decoded buffer.
    pub fn new(buffer: RgbImage, orientation: Orientation) -> Self {
        Self {
            raw_dimensions: buffer.dimensions(),
            buffer: Some(buffer),
            orientation,
        }
    }

    /// Build from raw RGB bytes (3 bytes per pixel, row-major order).
    pub fn from_rgb(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        orientation: Orientation,
    ) -> Result<Self, ImageError> {
        let expected = (width as usize) * (height as usize) * 3;
        let actual = pixels.len();
        let buffer = RgbImage::from_raw(width, height, pixels)
            .filter(|_| actual == expected)
            .ok_or(ImageError::InvalidPixelData { expected, actual })?;
        Ok(Self::new(buffer, orientation))
    }

    /// An image with known dimensions but no pixel data.
    pub fn without_pixels(width: u32, height: u32, orientation: Orientation) -> Self {
        Self {
            buffer: None,
            raw_dimensions: (width, height),
            orientation,
        }
    }

    /// Decode a JPEG, keeping its EXIF orientation.
    pub fn from_jpeg(bytes: &[u8]) -> Result<Self, ImageError> {
        super::load_jpeg(bytes)
    }

    /// Pixel buffer as stored, if available.
    pub fn buffer(&self) -> Option<&RgbImage> {
        self.buffer.as_ref()
    }

    pub fn has_pixels(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Dimensions of the stored buffer.
    pub fn raw_dimensions(&self) -> (u32, u32) {
        self.raw_dimensions
    }

    /// Dimensions of the image as displayed (after orientation).
    pub fn display_dimensions(&self) -> (u32, u32) {
        self.orientation.display_dimensions(self.raw_dimensions)
    }

    /// Display dimensions as a geometry [`Size`].
    pub fn display_size(&self) -> Size {
        Size::from(self.display_dimensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_records_dimensions() {
        let img = OriginalImage::new(RgbImage::new(60, 40), Orientation::Rotate90CW);
        assert_eq!(img.raw_dimensions(), (60, 40));
        assert_eq!(img.display_dimensions(), (40, 60));
        assert_eq!(img.display_size(), Size::new(40.0, 60.0));
        assert!(img.has_pixels());
    }

    #[test]
    fn test_from_rgb_valid() {
        let img = OriginalImage::from_rgb(2, 2, vec![0u8; 12], Orientation::Normal).unwrap();
        assert_eq!(img.raw_dimensions(), (2, 2));
    }

    #[test]
    fn test_from_rgb_too_short() {
        let result = OriginalImage::from_rgb(2, 2, vec![0u8; 3], Orientation::Normal);
        assert!(matches!(
            result,
            Err(ImageError::InvalidPixelData {
                expected: 12,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_from_rgb_too_long() {
        let result = OriginalImage::from_rgb(2, 2, vec![0u8; 15], Orientation::Normal);
        assert!(matches!(result, Err(ImageError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_without_pixels() {
        let img = OriginalImage::without_pixels(1500, 1000, Orientation::Normal);
        assert!(!img.has_pixels());
        assert!(img.buffer().is_none());
        assert_eq!(img.display_dimensions(), (1500, 1000));
    }
}
