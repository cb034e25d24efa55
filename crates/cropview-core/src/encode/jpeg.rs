//! JPEG export of crop results.

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use thiserror::Error;

/// Reasons a crop cannot be written out as JPEG.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The image has no pixels. Crops never produce this.
    #[error("Cannot encode an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },

    #[error("JPEG encoder failed: {0}")]
    Encoder(#[from] image::ImageError),
}

/// Encode `image` as a baseline JPEG. `quality` is clamped to 1-100.
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::EmptyImage { width, height });
    }

    // Rough guess at the compressed size to avoid most regrowth
    let mut out = Vec::with_capacity(width as usize * height as usize / 4);
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100)).encode_image(image)?;
    Ok(out)
}
