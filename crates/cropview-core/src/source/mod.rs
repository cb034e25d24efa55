//! Source image for a crop session.
//!
//! This module provides:
//! - [`OriginalImage`]: the immutable pixel buffer plus its EXIF orientation
//! - JPEG loading that reads the orientation but leaves the buffer as stored
//! - [`Orientation`] helpers to map upright rectangles onto the stored buffer
//!
//! # Orientation
//!
//! The crop screen shows the image upright, so every on-screen measurement is
//! in *display* space. Pixels are always extracted from the stored buffer; the
//! orientation is kept on the output rather than baked into it.

mod jpeg;
mod original;
mod types;

pub use jpeg::{load_jpeg, read_orientation};
pub use original::OriginalImage;
pub use types::{ImageError, Orientation};
