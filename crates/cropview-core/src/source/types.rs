//! Core types for the source image.

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::PixelRect;

/// Error types for loading a source image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Bytes are not a JPEG (or any format `image` can guess).
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// Decoding stopped partway, usually a truncated download.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Pixel data length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// EXIF `Orientation` tag (values 1-8).
///
/// The pixel buffer of an [`OriginalImage`](super::OriginalImage) is stored as
/// encoded; the orientation says how to turn it upright for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Stored upright.
    #[default]
    Normal = 1,
    /// Mirrored left-right.
    FlipHorizontal = 2,
    /// Upside down.
    Rotate180 = 3,
    /// Mirrored top-bottom.
    FlipVertical = 4,
    /// Mirrored across the main diagonal.
    Transpose = 5,
    /// Needs a quarter turn clockwise.
    Rotate90CW = 6,
    /// Mirrored across the anti-diagonal.
    Transverse = 7,
    /// Needs a quarter turn counter-clockwise.
    Rotate270CW = 8,
}

impl Orientation {
    /// Whether width and height trade places when shown upright.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }

    /// Dimensions of a buffer of `raw` size once displayed upright.
    pub fn display_dimensions(self, raw: (u32, u32)) -> (u32, u32) {
        if self.swaps_dimensions() {
            (raw.1, raw.0)
        } else {
            raw
        }
    }

    /// Map a rectangle on the upright (displayed) image back onto the stored
    /// buffer of `raw` size.
    ///
    /// Extracting the returned rectangle from the buffer and orienting it yields
    /// the same pixels as extracting `rect` from the oriented image. `rect`
    /// must lie within the displayed dimensions.
    pub fn display_rect_to_buffer(self, rect: PixelRect, raw: (u32, u32)) -> PixelRect {
        let (raw_w, raw_h) = raw;
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);

        // (left, top, right, bottom) in buffer space
        let (left, top, right, bottom) = match self {
            Orientation::Normal => (x0, y0, x1, y1),
            Orientation::FlipHorizontal => (raw_w - x1, y0, raw_w - x0, y1),
            Orientation::Rotate180 => (raw_w - x1, raw_h - y1, raw_w - x0, raw_h - y0),
            Orientation::FlipVertical => (x0, raw_h - y1, x1, raw_h - y0),
            Orientation::Transpose => (y0, x0, y1, x1),
            Orientation::Rotate90CW => (y0, raw_h - x1, y1, raw_h - x0),
            Orientation::Transverse => (raw_w - y1, raw_h - x1, raw_w - y0, raw_h - x0),
            Orientation::Rotate270CW => (raw_w - y1, x0, raw_w - y0, x1),
        };

        PixelRect::new(left, top, right - left, bottom - top)
    }

    /// Turn a stored image upright.
    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Orientation::Normal => img,
            Orientation::FlipHorizontal => img.fliph(),
            Orientation::Rotate180 => img.rotate180(),
            Orientation::FlipVertical => img.flipv(),
            Orientation::Transpose => img.rotate90().fliph(),
            Orientation::Rotate90CW => img.rotate90(),
            Orientation::Transverse => img.rotate270().fliph(),
            Orientation::Rotate270CW => img.rotate270(),
        }
    }

    pub const ALL: [Orientation; 8] = [
        Orientation::Normal,
        Orientation::FlipHorizontal,
        Orientation::Rotate180,
        Orientation::FlipVertical,
        Orientation::Transpose,
        Orientation::Rotate90CW,
        Orientation::Transverse,
        Orientation::Rotate270CW,
    ];
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    /// Buffer where every pixel is unique.
    fn numbered(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| image::Rgb([x as u8, y as u8, 7]))
    }

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_display_dimensions() {
        assert_eq!(Orientation::Normal.display_dimensions((6000, 4000)), (6000, 4000));
        assert_eq!(Orientation::Rotate180.display_dimensions((6000, 4000)), (6000, 4000));
        assert_eq!(Orientation::Rotate90CW.display_dimensions((6000, 4000)), (4000, 6000));
        assert_eq!(Orientation::Transverse.display_dimensions((6000, 4000)), (4000, 6000));
    }

    #[test]
    fn test_rotate90_rect_mapping() {
        // 6x4 buffer shown as 4x6; the top-left display pixel is the buffer's bottom-left
        let rect = Orientation::Rotate90CW.display_rect_to_buffer(PixelRect::new(0, 0, 1, 1), (6, 4));
        assert_eq!(rect, PixelRect::new(0, 3, 1, 1));
    }

    #[test]
    fn test_rect_mapping_matches_oriented_crop() {
        let raw = numbered(7, 5);
        let display_rect = PixelRect::new(1, 2, 3, 2);

        for orientation in Orientation::ALL {
            let upright = orientation.apply(DynamicImage::ImageRgb8(raw.clone())).into_rgb8();
            let expected = image::imageops::crop_imm(
                &upright,
                display_rect.x,
                display_rect.y,
                display_rect.width,
                display_rect.height,
            )
            .to_image();

            let buffer_rect = orientation.display_rect_to_buffer(display_rect, raw.dimensions());
            let from_buffer = image::imageops::crop_imm(
                &raw,
                buffer_rect.x,
                buffer_rect.y,
                buffer_rect.width,
                buffer_rect.height,
            )
            .to_image();
            let actual = orientation
                .apply(DynamicImage::ImageRgb8(from_buffer))
                .into_rgb8();

            assert_eq!(actual, expected, "mismatch for {orientation:?}");
        }
    }

    #[test]
    fn test_apply_orientation_rotate180() {
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb_img = RgbImage::from_raw(2, 1, pixels).unwrap();
        let result = Orientation::Rotate180
            .apply(DynamicImage::ImageRgb8(rgb_img))
            .into_rgb8();

        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0]);
    }

    #[test]
    fn test_image_error_display() {
        let err = ImageError::CorruptedFile("truncated".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: truncated");

        let err = ImageError::InvalidPixelData { expected: 12, actual: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid pixel data: expected 12 bytes (width * height * 3), got 3"
        );
    }
}
