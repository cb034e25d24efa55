use image::RgbImage;

use super::{CropError, CroppedImage};
use crate::geometry::{clamp_pixel_rect, map_view_rect_to_image_pixels, PixelRect, Rect};
use crate::source::OriginalImage;

/// Crop the part of `original` that sits under `crop_window`.
///
/// `image_frame` and `crop_window` are both in the parent (container)
/// coordinate space. The crop window is first expressed relative to the image
/// frame, then scaled by `image_frame.width / display width` into pixel units,
/// so the zoom level enters the computation exactly once.
///
/// # Errors
///
/// - `CropError::NoBackingImage` if `original` has no pixel buffer
/// - `CropError::OutOfBounds` if the crop window misses the image
/// - `CropError::Extraction` if the derived rectangle does not fit the buffer
pub fn confirm_crop(
    original: &OriginalImage,
    image_frame: Rect,
    crop_window: Rect,
    screen_scale: f64,
) -> Result<CroppedImage, CropError> {
    let buffer = original.buffer().ok_or(CropError::NoBackingImage)?;

    let display_rect = crop_region(original, image_frame, crop_window)?;
    let buffer_rect = original
        .orientation()
        .display_rect_to_buffer(display_rect, original.raw_dimensions());

    log::debug!(
        "cropping display rect {:?} (buffer rect {:?}, {:?})",
        display_rect,
        buffer_rect,
        original.orientation()
    );

    let pixels = extract_region(buffer, buffer_rect)?;
    Ok(CroppedImage::new(pixels, screen_scale, original.orientation()))
}

/// Pixel rectangle of the upright image covered by `crop_window`.
pub fn crop_region(
    original: &OriginalImage,
    image_frame: Rect,
    crop_window: Rect,
) -> Result<PixelRect, CropError> {
    let in_image_view = crop_window.relative_to(image_frame.origin());
    let pixel_rect =
        map_view_rect_to_image_pixels(in_image_view, image_frame, original.display_size());

    clamp_pixel_rect(pixel_rect, original.display_dimensions())
        .ok_or(CropError::OutOfBounds { rect: pixel_rect })
}

/// Copy `rect` out of `buffer`.
pub fn extract_region(buffer: &RgbImage, rect: PixelRect) -> Result<RgbImage, CropError> {
    let (width, height) = buffer.dimensions();
    let fits = rect.width > 0
        && rect.height > 0
        && rect.x.checked_add(rect.width).is_some_and(|right| right <= width)
        && rect.y.checked_add(rect.height).is_some_and(|bottom| bottom <= height);

    if !fits {
        log::warn!("crop rect {rect:?} does not fit a {width}x{height} buffer");
        return Err(CropError::Extraction {
            rect,
            width,
            height,
        });
    }

    Ok(image::imageops::crop_imm(buffer, rect.x, rect.y, rect.width, rect.height).to_image())
}
