//! WASM bindings for an interactive crop session.
//!
//! The page owns rendering and pointer handling. It forwards pinch and pan
//! updates to a [`JsCropSession`], applies the returned [`JsReactions`] and
//! redraws the image at `image_frame()`. Confirming returns the cropped pixels.
//!
//! Gesture values are cumulative since the gesture began, as reported by
//! browser gesture libraries; the session turns them into increments.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = JsCropSession.from_jpeg(bytes, 360, 640, 1.0, new CropSettings());
//! hammer.on('pinchstart pinchmove pinchend', (e) => {
//!   const r = session.pinch(phaseOf(e), e.scale);
//!   if (r.animate) animateTo(r.target, r.duration_ms);
//!   if (r.haptic) navigator.vibrate?.(10);
//! });
//! const cropped = session.confirm(window.devicePixelRatio);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use cropview_core::{
    CropSession, CropType, CroppedImage, GesturePhase, Offset, OriginalImage, Orientation,
    PanGesture, PinchGesture, Reaction, Size,
};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::settings::CropSettings;
use crate::types::{JsCroppedImage, JsReactions, JsRect, JsTransform};

/// A gesture update as sent from TypeScript in a batch.
///
/// `phase` uses the same numbering as [`JsCropSession::pinch`].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsGestureEvent {
    Pinch {
        phase: u8,
        scale: f64,
    },
    Pan {
        phase: u8,
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
    },
}

/// Interactive crop session for JavaScript.
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession,
    finished: Rc<RefCell<Option<CroppedImage>>>,
    pinch_baseline: f64,
    pan_baseline: Offset,
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn crop_type_from(ratio: Option<f64>) -> CropType {
    match ratio {
        Some(ratio) => CropType::Rectangle { ratio },
        None => CropType::None,
    }
}

#[wasm_bindgen]
impl JsCropSession {
    /// Create a session from RGB pixels (3 bytes per pixel, row-major).
    ///
    /// # Arguments
    /// * `orientation` - EXIF orientation of the pixels (1-8, other values = normal)
    /// * `container_width`, `container_height` - size of the crop view in CSS pixels
    /// * `ratio` - crop aspect ratio (width / height), or undefined to follow the image
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        orientation: u8,
        container_width: f64,
        container_height: f64,
        ratio: Option<f64>,
        settings: &CropSettings,
    ) -> Result<JsCropSession, JsValue> {
        let original = OriginalImage::from_rgb(
            width,
            height,
            pixels,
            Orientation::from(orientation as u32),
        )
        .map_err(to_js_error)?;
        Ok(Self::with_original(
            original,
            Size::new(container_width, container_height),
            ratio,
            settings,
        ))
    }

    /// Create a session from JPEG bytes, keeping the EXIF orientation.
    pub fn from_jpeg(
        bytes: &[u8],
        container_width: f64,
        container_height: f64,
        ratio: Option<f64>,
        settings: &CropSettings,
    ) -> Result<JsCropSession, JsValue> {
        let original = OriginalImage::from_jpeg(bytes).map_err(to_js_error)?;
        Ok(Self::with_original(
            original,
            Size::new(container_width, container_height),
            ratio,
            settings,
        ))
    }

    /// Feed a pinch update.
    ///
    /// `phase`: 0 = possible, 1 = began, 2 = changed, 3 = ended,
    /// 4 = cancelled, 5 = failed. `scale` is cumulative since the pinch began.
    pub fn pinch(&mut self, phase: u8, scale: f64) -> JsReactions {
        JsReactions::from_reactions(&self.feed_pinch(GesturePhase::from(phase), scale))
    }

    /// Feed a pan update. `dx`/`dy` are cumulative since the pan began.
    pub fn pan(&mut self, phase: u8, dx: f64, dy: f64) -> JsReactions {
        JsReactions::from_reactions(&self.feed_pan(GesturePhase::from(phase), dx, dy))
    }

    /// Feed a batch of `{ type: "pinch" | "pan", phase, scale | dx, dy }` objects.
    pub fn handle_events(&mut self, events: JsValue) -> Result<JsReactions, JsValue> {
        let events: Vec<JsGestureEvent> = serde_wasm_bindgen::from_value(events)
            .map_err(|e| JsValue::from_str(&format!("Invalid gesture events: {}", e)))?;
        Ok(self.apply_events(&events))
    }

    /// Current frame of the image in container coordinates.
    pub fn image_frame(&self) -> JsRect {
        self.inner.image_frame().into()
    }

    /// Fixed crop window in container coordinates.
    pub fn crop_window(&self) -> JsRect {
        self.inner.crop_window().into()
    }

    /// Current zoom/pan transform.
    pub fn transform(&self) -> JsTransform {
        self.inner.transform().into()
    }

    /// Crop what is under the crop window. Succeeds at most once.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels, the crop window misses the
    /// image, or the session was already confirmed or cancelled.
    pub fn confirm(&mut self, screen_scale: f64) -> Result<JsCroppedImage, JsValue> {
        self.inner.confirm(screen_scale).map_err(to_js_error)?;
        self.finished
            .borrow_mut()
            .take()
            .map(JsCroppedImage::from_cropped)
            .ok_or_else(|| JsValue::from_str("Crop result was not delivered"))
    }

    /// Register a function called once when the user cancels.
    pub fn on_cancel(&mut self, callback: js_sys::Function) {
        self.inner.on_cancel(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::warn!("cancel callback threw: {:?}", e);
            }
        });
    }

    /// Leave the crop screen without an image. Returns true if a cancel
    /// callback was invoked.
    pub fn cancel(&mut self) -> bool {
        self.inner.cancel()
    }
}

impl JsCropSession {
    fn with_original(
        original: OriginalImage,
        container: Size,
        ratio: Option<f64>,
        settings: &CropSettings,
    ) -> Self {
        let mut inner =
            CropSession::new(original, container, crop_type_from(ratio), settings.inner());

        let finished = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&finished);
        inner.on_finish(move |cropped| {
            *slot.borrow_mut() = Some(cropped);
        });

        Self {
            inner,
            finished,
            pinch_baseline: 1.0,
            pan_baseline: Offset::ZERO,
        }
    }

    fn feed_pinch(&mut self, phase: GesturePhase, scale: f64) -> Vec<Reaction> {
        if phase == GesturePhase::Began {
            self.pinch_baseline = 1.0;
        }

        // Unusable values (NaN, 0, infinity) are passed on and dropped by the
        // state machine; the baseline keeps the last usable scale.
        let increment = scale / self.pinch_baseline;
        if scale.is_finite() && scale > 0.0 {
            self.pinch_baseline = scale;
        }

        self.inner
            .handle_pinch(&mut PinchGesture::new(phase, increment))
    }

    fn feed_pan(&mut self, phase: GesturePhase, dx: f64, dy: f64) -> Vec<Reaction> {
        if phase == GesturePhase::Began {
            self.pan_baseline = Offset::ZERO;
        }

        let delta = Offset::new(dx - self.pan_baseline.dx, dy - self.pan_baseline.dy);
        if dx.is_finite() && dy.is_finite() {
            self.pan_baseline = Offset::new(dx, dy);
        }

        self.inner
            .handle_pan(&mut PanGesture::new(phase, delta.dx, delta.dy))
    }

    fn apply_events(&mut self, events: &[JsGestureEvent]) -> JsReactions {
        let mut reactions = Vec::new();
        for event in events {
            let more = match *event {
                JsGestureEvent::Pinch { phase, scale } => {
                    self.feed_pinch(GesturePhase::from(phase), scale)
                }
                JsGestureEvent::Pan { phase, dx, dy } => {
                    self.feed_pan(GesturePhase::from(phase), dx, dy)
                }
            };
            reactions.extend(more);
        }
        JsReactions::from_reactions(&reactions)
    }
}
