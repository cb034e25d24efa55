//! Cropview Core - gesture-driven image cropping
//!
//! This crate provides the headless core of an interactive crop screen: the
//! user zooms and pans a photo under a fixed crop window, then confirms to get
//! the cropped pixels. Rendering and input recognition stay with the host,
//! which forwards pinch/pan events and draws the current image frame.
//!
//! # Module Structure
//!
//! - `geometry` - Rect types, bounds correction, view to pixel mapping, layout
//! - `transform` - Display transform and its state machine
//! - `gesture` - Pinch/pan event interpretation
//! - `crop` - Crop executor and the cropped result
//! - `source` - Source image with EXIF orientation
//! - `session` - One crop screen from creation to confirm or cancel
//! - `settings` - Zoom bounds and animation configuration
//! - `encode` - JPEG export

pub mod crop;
pub mod encode;
pub mod geometry;
pub mod gesture;
pub mod session;
pub mod settings;
pub mod source;
pub mod transform;

pub use crop::{confirm_crop, CropError, CroppedImage};
pub use geometry::{
    clamp_pixel_rect, clamp_rect_into, map_view_rect_to_image_pixels, CropLayout, CropType,
    Offset, PixelRect, Point, Rect, Size,
};
pub use gesture::{GestureEvent, GestureInterpreter, GesturePhase, PanGesture, PinchGesture};
pub use session::CropSession;
pub use settings::{CropSettings, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL};
pub use source::{ImageError, OriginalImage, Orientation};
pub use transform::{DisplayTransform, Reaction, TransformStateMachine, Transition};
