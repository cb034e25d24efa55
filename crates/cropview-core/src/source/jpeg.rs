//! JPEG loading that keeps the buffer as stored and reads the EXIF orientation.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::{ImageError, OriginalImage, Orientation};

/// Decode a JPEG into an [`OriginalImage`].
///
/// The pixel buffer is kept exactly as encoded (orientation not applied); the
/// EXIF orientation travels alongside it.
///
/// # Errors
///
/// Returns `ImageError::CorruptedFile` if the bytes cannot be decoded.
pub fn load_jpeg(bytes: &[u8]) -> Result<OriginalImage, ImageError> {
    let orientation = read_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(ImageError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| ImageError::CorruptedFile(e.to_string()))?;

    log::debug!(
        "loaded {}x{} image, orientation {:?}",
        img.width(),
        img.height(),
        orientation
    );

    Ok(OriginalImage::new(img.into_rgb8(), orientation))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_jpeg;

    fn gray_jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([128, 128, 128]));
        encode_jpeg(&img, 90).unwrap()
    }

    #[test]
    fn test_load_valid_jpeg() {
        let bytes = gray_jpeg(8, 4);
        let img = load_jpeg(&bytes).expect("valid JPEG");

        assert_eq!(img.raw_dimensions(), (8, 4));
        assert_eq!(img.orientation(), Orientation::Normal);
        assert!(img.has_pixels());
    }

    #[test]
    fn test_load_invalid_bytes() {
        let result = load_jpeg(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(ImageError::InvalidFormat)));
    }

    #[test]
    fn test_load_empty_bytes() {
        assert!(load_jpeg(&[]).is_err());
    }

    #[test]
    fn test_load_truncated_jpeg() {
        // Header only, no image data
        let bytes = gray_jpeg(16, 16);
        let result = load_jpeg(&bytes[..20]);
        assert!(result.is_err());
    }

    #[test]
    fn test_orientation_without_exif() {
        assert_eq!(read_orientation(&gray_jpeg(2, 2)), Orientation::Normal);
    }

    #[test]
    fn test_orientation_invalid_data() {
        assert_eq!(read_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }
}
