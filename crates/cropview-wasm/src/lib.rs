//! Cropview WASM - WebAssembly bindings for Cropview
//!
//! This crate exposes the cropview-core crop session to JavaScript/TypeScript.
//! The page renders the image and recognises gestures; the session owns the
//! zoom/pan state and produces the cropped pixels.
//!
//! # Module Structure
//!
//! - `session` - Interactive crop session (`JsCropSession`)
//! - `settings` - Zoom bounds, settle animation and haptics
//! - `types` - WASM-compatible wrappers for rects, transforms and results
//! - `encode` - JPEG export of crop results
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropSession, CropSettings, encode_cropped_jpeg } from '@cropview/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const session = JsCropSession.from_jpeg(bytes, view.clientWidth, view.clientHeight, 1.0, new CropSettings());
//! // ...forward pinch/pan updates...
//! const jpeg = encode_cropped_jpeg(session.confirm(window.devicePixelRatio), 90);
//! ```

use log::{Level, LevelFilter};
use wasm_bindgen::prelude::*;

mod encode;
mod session;
mod settings;
mod types;

// Re-export public types
pub use encode::encode_cropped_jpeg;
pub use session::JsCropSession;
pub use settings::CropSettings;
pub use types::{JsCroppedImage, JsReactions, JsRect, JsTransform};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(Level::Warn);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Change console log verbosity ("off", "error", "warn", "info", "debug", "trace").
///
/// Returns false and leaves the level unchanged for an unknown name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match level.parse::<LevelFilter>() {
        Ok(filter) => {
            log::set_max_level(filter);
            true
        }
        Err(_) => false,
    }
}

/// Whether two gesture kinds may be recognised together. Always true.
#[wasm_bindgen]
pub fn should_recognize_simultaneously() -> bool {
    use cropview_core::gesture::{self, GestureKind};
    gesture::should_recognize_simultaneously(GestureKind::Pinch, GestureKind::Pan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_set_log_level() {
        assert!(set_log_level("INFO"));
        assert_eq!(log::max_level(), LevelFilter::Info);
        assert!(!set_log_level("verbose"));
        assert_eq!(log::max_level(), LevelFilter::Info);
    }

    #[test]
    fn test_simultaneous_recognition() {
        assert!(should_recognize_simultaneously());
    }
}
