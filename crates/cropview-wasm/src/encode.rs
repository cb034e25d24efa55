//! JPEG export WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! const cropped = session.confirm(window.devicePixelRatio);
//! const jpeg = encode_cropped_jpeg(cropped, 90);
//! const blob = new Blob([jpeg], { type: 'image/jpeg' });
//! ```

use crate::types::JsCroppedImage;
use wasm_bindgen::prelude::*;

/// Encode a crop result to JPEG, turned upright using its EXIF orientation.
///
/// `quality` is 1-100; 90 is a good default.
#[wasm_bindgen]
pub fn encode_cropped_jpeg(image: &JsCroppedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    image
        .inner()
        .encode_jpeg(quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
