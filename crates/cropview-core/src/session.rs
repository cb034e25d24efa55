//! Crop session: one crop screen from creation to confirm or cancel.
//!
//! The session ties the pieces together:
//! - lays out the crop window and image frame from the requested [`CropType`]
//! - forwards host gestures to the [`GestureInterpreter`]
//! - runs the crop executor on confirm and hands the result to the host
//!
//! Everything runs synchronously on the caller's thread, in delivery order.

use std::fmt;

use crate::crop::{confirm_crop, CropError, CroppedImage};
use crate::geometry::{CropLayout, CropType, Rect, Size};
use crate::gesture::{GestureEvent, GestureInterpreter, PanGesture, PinchGesture};
use crate::settings::CropSettings;
use crate::source::OriginalImage;
use crate::transform::{DisplayTransform, InteractionState, Reaction, TransformStateMachine};

/// Receives the cropped image, at most once.
pub type FinishCallback = Box<dyn FnOnce(CroppedImage)>;
/// Told that the user backed out of the crop screen.
pub type CancelCallback = Box<dyn FnOnce()>;

/// State of one crop screen.
pub struct CropSession {
    original: OriginalImage,
    layout: CropLayout,
    interpreter: GestureInterpreter,
    on_finish: Option<FinishCallback>,
    on_cancel: Option<CancelCallback>,
    finished: bool,
}

impl fmt::Debug for CropSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropSession")
            .field("original", &self.original)
            .field("layout", &self.layout)
            .field("interpreter", &self.interpreter)
            .field("on_finish", &self.on_finish.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("finished", &self.finished)
            .finish()
    }
}

impl CropSession {
    /// Start a crop session for `original` shown inside a `container` view.
    pub fn new(
        original: OriginalImage,
        container: Size,
        crop_type: CropType,
        settings: &CropSettings,
    ) -> Self {
        let layout = CropLayout::new(container, crop_type, original.display_size());
        let machine =
            TransformStateMachine::new(layout.base_image_frame, layout.crop_window, settings);

        Self {
            original,
            layout,
            interpreter: GestureInterpreter::new(machine),
            on_finish: None,
            on_cancel: None,
            finished: false,
        }
    }

    /// Register the receiver of the cropped image.
    pub fn on_finish(&mut self, callback: impl FnOnce(CroppedImage) + 'static) {
        self.on_finish = Some(Box::new(callback));
    }

    /// Register the receiver of the cancel signal.
    pub fn on_cancel(&mut self, callback: impl FnOnce() + 'static) {
        self.on_cancel = Some(Box::new(callback));
    }

    pub fn original(&self) -> &OriginalImage {
        &self.original
    }

    pub fn layout(&self) -> &CropLayout {
        &self.layout
    }

    pub fn crop_window(&self) -> Rect {
        self.layout.crop_window
    }

    pub fn image_frame(&self) -> Rect {
        self.interpreter.machine().image_frame()
    }

    pub fn transform(&self) -> DisplayTransform {
        self.interpreter.machine().transform()
    }

    pub fn state(&self) -> InteractionState {
        self.interpreter.machine().state()
    }

    pub fn handle_pinch(&mut self, gesture: &mut PinchGesture) -> Vec<Reaction> {
        self.interpreter.handle_pinch(gesture)
    }

    pub fn handle_pan(&mut self, gesture: &mut PanGesture) -> Vec<Reaction> {
        self.interpreter.handle_pan(gesture)
    }

    pub fn handle(&mut self, event: GestureEvent) -> Vec<Reaction> {
        self.interpreter.handle(event)
    }

    pub fn handle_all<I>(&mut self, events: I) -> Vec<Reaction>
    where
        I: IntoIterator<Item = GestureEvent>,
    {
        self.interpreter.handle_all(events)
    }

    /// Crop what is currently under the crop window without delivering it.
    pub fn crop(&self, screen_scale: f64) -> Result<CroppedImage, CropError> {
        confirm_crop(
            &self.original,
            self.image_frame(),
            self.crop_window(),
            screen_scale,
        )
    }

    /// Crop and hand the result to the finish callback.
    ///
    /// # Errors
    ///
    /// - `CropError::AlreadyFinished` after a delivered crop or a cancel
    /// - `CropError::NoReceiver` if `on_finish` was never registered
    /// - any error from the crop executor; the callback stays registered so
    ///   the user can adjust and confirm again
    pub fn confirm(&mut self, screen_scale: f64) -> Result<(), CropError> {
        if self.finished {
            return Err(CropError::AlreadyFinished);
        }
        if self.on_finish.is_none() {
            return Err(CropError::NoReceiver);
        }

        let cropped = self.crop(screen_scale).inspect_err(|e| {
            log::warn!("crop confirmation failed: {e}");
        })?;

        if let Some(callback) = self.on_finish.take() {
            log::debug!("crop finished: {:?} pixels", cropped.pixel_dimensions());
            self.finished = true;
            callback(cropped);
        }
        Ok(())
    }

    /// Leave the crop screen without producing an image.
    ///
    /// Returns true if a cancel callback was fired. A cancelled session can no
    /// longer deliver a crop.
    pub fn cancel(&mut self) -> bool {
        self.finished = true;
        self.on_finish = None;
        match self.on_cancel.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}
