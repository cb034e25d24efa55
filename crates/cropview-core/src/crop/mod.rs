//! Crop executor: turns the on-screen crop window into a cropped image.
//!
//! # Pipeline
//!
//! 1. Crop window (container space) -> image view space
//! 2. Image view space -> display pixel space (`map_view_rect_to_image_pixels`)
//! 3. Snap to whole pixels inside the image (`clamp_pixel_rect`)
//! 4. Display pixel space -> stored buffer space (orientation)
//! 5. Extract and wrap with display scale and orientation
//!
//! The original image is only read, never modified.

mod executor;
mod output;

pub use executor::{confirm_crop, crop_region, extract_region};
pub use output::CroppedImage;

use thiserror::Error;

use crate::geometry::{PixelRect, Rect};

/// Errors that can occur when confirming a crop.
#[derive(Debug, Error)]
pub enum CropError {
    /// The displayed image has no pixel data to crop from.
    #[error("No backing pixel buffer for the displayed image")]
    NoBackingImage,

    /// The crop window does not overlap the image at all.
    #[error("Crop region {rect:?} lies outside the image")]
    OutOfBounds { rect: Rect },

    /// Pixel extraction at the computed rectangle failed.
    #[error("Pixel extraction failed for {rect:?} in a {width}x{height} buffer")]
    Extraction {
        rect: PixelRect,
        width: u32,
        height: u32,
    },

    /// The crop result was already delivered, or the session was cancelled.
    #[error("Crop already finished")]
    AlreadyFinished,

    /// Confirmed before anything registered to receive the crop.
    #[error("No receiver registered for the cropped image")]
    NoReceiver,
}
