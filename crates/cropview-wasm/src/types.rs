//! WASM-compatible wrapper types for crop state and results.
//!
//! These types copy plain values out of the core types so JavaScript can read
//! them through getters without holding references into WASM memory.

use cropview_core::transform::{DisplayTransform, HapticStyle, Reaction};
use cropview_core::{CroppedImage, Rect};
use wasm_bindgen::prelude::*;

/// A rectangle for JavaScript (view points or pixels depending on context).
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsRect {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<Rect> for JsRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// The current zoom/pan transform for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsTransform {
    scale: f64,
    translate_x: f64,
    translate_y: f64,
}

#[wasm_bindgen]
impl JsTransform {
    /// Uniform zoom level
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[wasm_bindgen(getter)]
    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    #[wasm_bindgen(getter)]
    pub fn translate_y(&self) -> f64 {
        self.translate_y
    }

    /// CSS `transform` value equivalent to this transform.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

impl From<DisplayTransform> for JsTransform {
    fn from(t: DisplayTransform) -> Self {
        Self {
            scale: t.scale(),
            translate_x: t.translate_x,
            translate_y: t.translate_y,
        }
    }
}

/// What the page should do after a gesture update.
///
/// When `animate` is set, the image should transition to `target` over
/// `duration_ms`. When `haptic` is set, play a short vibration if supported.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsReactions {
    animate: bool,
    haptic: bool,
    duration_ms: f64,
    target: Option<JsTransform>,
}

#[wasm_bindgen]
impl JsReactions {
    #[wasm_bindgen(getter)]
    pub fn animate(&self) -> bool {
        self.animate
    }

    #[wasm_bindgen(getter)]
    pub fn haptic(&self) -> bool {
        self.haptic
    }

    #[wasm_bindgen(getter)]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Transform to animate to, if any.
    #[wasm_bindgen(getter)]
    pub fn target(&self) -> Option<JsTransform> {
        self.target
    }

    /// True when nothing needs to happen.
    pub fn is_empty(&self) -> bool {
        !self.animate && !self.haptic
    }
}

impl JsReactions {
    pub(crate) fn from_reactions(reactions: &[Reaction]) -> Self {
        let mut out = Self {
            animate: false,
            haptic: false,
            duration_ms: 0.0,
            target: None,
        };
        for reaction in reactions {
            match reaction {
                Reaction::Animate(transition) => {
                    out.animate = true;
                    out.duration_ms = transition.duration.as_secs_f64() * 1000.0;
                    out.target = Some(transition.to.into());
                }
                Reaction::Haptic(HapticStyle::Light) => out.haptic = true,
            }
        }
        out
    }
}

/// A cropped image for JavaScript.
///
/// Pixels are RGB (3 bytes per pixel, row-major) in the source's stored
/// orientation; `orientation` is the EXIF value (1-8) needed to show them
/// upright. `oriented_pixels()` returns them already turned upright.
#[wasm_bindgen]
pub struct JsCroppedImage {
    inner: CroppedImage,
}

#[wasm_bindgen]
impl JsCroppedImage {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.image.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.image.height()
    }

    /// Host display scale the crop was made for.
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale
    }

    /// EXIF orientation value (1-8).
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u8 {
        self.inner.orientation as u8
    }

    /// Returns RGB pixel data as Uint8Array (copied out of WASM memory).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.image.as_raw().clone()
    }

    /// Returns upright RGB pixel data as Uint8Array.
    pub fn oriented_pixels(&self) -> Vec<u8> {
        self.inner.to_oriented().into_raw()
    }
}

impl JsCroppedImage {
    pub(crate) fn from_cropped(inner: CroppedImage) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &CroppedImage {
        &self.inner
    }
}
