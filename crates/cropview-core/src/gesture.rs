//! Gesture interpreter: turns host pinch/pan events into transform updates.
//!
//! The host forwards the state of its pinch and pan recognisers. Each carries a
//! phase and an accumulator (cumulative scale for pinch, translation for pan).
//! The interpreter consumes the accumulator and resets it, so every event the
//! host sends afterwards carries a pure increment.
//!
//! Pinch and pan are allowed to run at the same time; neither blocks the other.

use serde::{Deserialize, Serialize};

use crate::geometry::Offset;
use crate::transform::{Reaction, TransformStateMachine};

/// Lifecycle phase of a recognised gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    /// Recogniser has not yet decided whether the gesture is happening.
    #[default]
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl From<u8> for GesturePhase {
    fn from(value: u8) -> Self {
        match value {
            1 => GesturePhase::Began,
            2 => GesturePhase::Changed,
            3 => GesturePhase::Ended,
            4 => GesturePhase::Cancelled,
            5 => GesturePhase::Failed,
            _ => GesturePhase::Possible,
        }
    }
}

/// Kind of gesture recogniser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    Pinch,
    Pan,
}

/// State of a pinch recogniser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchGesture {
    pub phase: GesturePhase,
    /// Scale accumulated since the last reset (1.0 = no change).
    pub scale: f64,
}

impl PinchGesture {
    pub fn new(phase: GesturePhase, scale: f64) -> Self {
        Self { phase, scale }
    }
}

/// State of a pan recogniser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanGesture {
    pub phase: GesturePhase,
    /// Translation accumulated since the last reset, in view points.
    pub translation: Offset,
}

impl PanGesture {
    pub fn new(phase: GesturePhase, dx: f64, dy: f64) -> Self {
        Self {
            phase,
            translation: Offset::new(dx, dy),
        }
    }
}

/// A single gesture update delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Pinch(PinchGesture),
    Pan(PanGesture),
}

/// Whether two recognisers may run at the same time. Always true: zooming
/// while dragging must not be serialised.
pub fn should_recognize_simultaneously(_first: GestureKind, _second: GestureKind) -> bool {
    true
}

/// Drives a [`TransformStateMachine`] from gesture events.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    machine: TransformStateMachine,
}

impl GestureInterpreter {
    pub fn new(machine: TransformStateMachine) -> Self {
        Self { machine }
    }

    pub fn machine(&self) -> &TransformStateMachine {
        &self.machine
    }

    /// Handle a pinch update and reset its scale to 1.0.
    ///
    /// Began/Changed apply the scale as an incremental zoom, Ended settles the
    /// zoom, Cancelled/Failed/Possible leave the transform alone.
    pub fn handle_pinch(&mut self, gesture: &mut PinchGesture) -> Vec<Reaction> {
        let reactions = match gesture.phase {
            GesturePhase::Began | GesturePhase::Changed => {
                self.machine.zoom_by(gesture.scale);
                Vec::new()
            }
            GesturePhase::Ended => self.machine.end_pinch(),
            GesturePhase::Cancelled | GesturePhase::Failed => {
                self.machine.cancel_pinch();
                Vec::new()
            }
            GesturePhase::Possible => Vec::new(),
        };

        gesture.scale = 1.0;
        reactions
    }

    /// Handle a pan update and reset its translation to zero.
    ///
    /// The translation is applied in every phase; Ended additionally settles
    /// the image back over the crop window.
    pub fn handle_pan(&mut self, gesture: &mut PanGesture) -> Vec<Reaction> {
        if matches!(gesture.phase, GesturePhase::Began | GesturePhase::Changed) {
            self.machine.begin_pan();
        }

        let Offset { dx, dy } = gesture.translation;
        self.machine.pan_by(dx, dy);
        gesture.translation = Offset::ZERO;

        match gesture.phase {
            GesturePhase::Ended => self.machine.end_pan(),
            GesturePhase::Cancelled | GesturePhase::Failed => {
                self.machine.cancel_pan();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Handle one queued event.
    pub fn handle(&mut self, event: GestureEvent) -> Vec<Reaction> {
        match event {
            GestureEvent::Pinch(mut pinch) => self.handle_pinch(&mut pinch),
            GestureEvent::Pan(mut pan) => self.handle_pan(&mut pan),
        }
    }

    /// Handle a batch of events in delivery order, collecting every reaction.
    pub fn handle_all<I>(&mut self, events: I) -> Vec<Reaction>
    where
        I: IntoIterator<Item = GestureEvent>,
    {
        events
            .into_iter()
            .flat_map(|event| self.handle(event))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::settings::CropSettings;
    use crate::transform::{DisplayTransform, HapticStyle, InteractionState};

    fn interpreter() -> GestureInterpreter {
        let crop = Rect::new(0.0, 100.0, 300.0, 300.0);
        let base = Rect::new(-75.0, 100.0, 450.0, 300.0);
        GestureInterpreter::new(TransformStateMachine::new(base, crop, &CropSettings::default()))
    }

    #[test]
    fn test_phase_from_u8() {
        assert_eq!(GesturePhase::from(1), GesturePhase::Began);
        assert_eq!(GesturePhase::from(3), GesturePhase::Ended);
        assert_eq!(GesturePhase::from(5), GesturePhase::Failed);
        assert_eq!(GesturePhase::from(42), GesturePhase::Possible);
    }

    #[test]
    fn test_pinch_resets_scale() {
        let mut it = interpreter();
        let mut pinch = PinchGesture::new(GesturePhase::Began, 1.5);
        it.handle_pinch(&mut pinch);
        assert_eq!(pinch.scale, 1.0);
        assert_eq!(it.machine().transform().scale(), 1.5);
    }

    #[test]
    fn test_pinch_deltas_are_incremental() {
        let mut it = interpreter();
        let mut pinch = PinchGesture::new(GesturePhase::Began, 1.2);
        it.handle_pinch(&mut pinch);

        // The recogniser accumulates on top of the reset value
        pinch.phase = GesturePhase::Changed;
        pinch.scale *= 1.25;
        it.handle_pinch(&mut pinch);

        let scale = it.machine().transform().scale();
        assert!((scale - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_pinch_zoom_out_sequence() {
        let mut it = interpreter();
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Began, 1.0));
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Changed, 0.5));
        let reactions = it.handle_pinch(&mut PinchGesture::new(GesturePhase::Ended, 1.0));

        assert!(it.machine().transform().is_identity());
        assert!(reactions.contains(&Reaction::Haptic(HapticStyle::Light)));
    }

    #[test]
    fn test_pinch_end_scale_not_applied() {
        let mut it = interpreter();
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Began, 2.0));
        let reactions = it.handle_pinch(&mut PinchGesture::new(GesturePhase::Ended, 10.0));
        assert!(reactions.is_empty());
        assert_eq!(it.machine().transform().scale(), 2.0);
    }

    #[test]
    fn test_pinch_cancel_is_noop() {
        let mut it = interpreter();
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Began, 4.0));
        let mut cancel = PinchGesture::new(GesturePhase::Cancelled, 0.1);
        let reactions = it.handle_pinch(&mut cancel);

        assert!(reactions.is_empty());
        assert_eq!(cancel.scale, 1.0);
        assert_eq!(it.machine().transform().scale(), 4.0);
        assert_eq!(it.machine().state(), InteractionState::Idle);
    }

    #[test]
    fn test_pan_resets_translation() {
        let mut it = interpreter();
        let mut pan = PanGesture::new(GesturePhase::Began, 12.0, -3.0);
        it.handle_pan(&mut pan);
        assert_eq!(pan.translation, Offset::ZERO);
        assert_eq!(it.machine().transform().translation(), Offset::new(12.0, -3.0));
    }

    #[test]
    fn test_pan_end_applies_delta_then_settles() {
        let mut it = interpreter();
        it.handle_pan(&mut PanGesture::new(GesturePhase::Began, 0.0, 10.0));
        let reactions = it.handle_pan(&mut PanGesture::new(GesturePhase::Ended, 0.0, 10.0));

        // Image top went 20pt below the crop top, settled back up
        let Some(Reaction::Animate(transition)) = reactions.first() else {
            panic!("expected an animation, got {reactions:?}");
        };
        assert_eq!(transition.from.translate_y, 20.0);
        assert_eq!(transition.to, DisplayTransform::IDENTITY);
        assert_eq!(it.machine().image_frame().min_y(), 100.0);
    }

    #[test]
    fn test_pan_cancel_applies_delta_without_settling() {
        let mut it = interpreter();
        it.handle_pan(&mut PanGesture::new(GesturePhase::Began, 0.0, 10.0));
        let reactions = it.handle_pan(&mut PanGesture::new(GesturePhase::Cancelled, 0.0, 10.0));
        assert!(reactions.is_empty());
        assert_eq!(it.machine().transform().translate_y, 20.0);
        assert_eq!(it.machine().state(), InteractionState::Idle);
    }

    #[test]
    fn test_simultaneous_recognition() {
        assert!(should_recognize_simultaneously(GestureKind::Pinch, GestureKind::Pan));
        assert!(should_recognize_simultaneously(GestureKind::Pan, GestureKind::Pinch));

        let mut it = interpreter();
        it.handle_all([
            GestureEvent::Pinch(PinchGesture::new(GesturePhase::Began, 1.5)),
            GestureEvent::Pan(PanGesture::new(GesturePhase::Began, 5.0, 0.0)),
        ]);
        assert_eq!(it.machine().state(), InteractionState::PinchAndPanActive);
    }

    #[test]
    fn test_handle_all_collects_reactions() {
        let mut it = interpreter();
        let reactions = it.handle_all([
            GestureEvent::Pinch(PinchGesture::new(GesturePhase::Began, 2.0)),
            GestureEvent::Pinch(PinchGesture::new(GesturePhase::Changed, 2.0)),
            GestureEvent::Pinch(PinchGesture::new(GesturePhase::Ended, 1.0)),
        ]);
        assert_eq!(it.machine().transform().scale(), 3.0);
        assert_eq!(reactions.len(), 2);
    }

    #[test]
    fn test_nan_pinch_settles_to_valid_scale() {
        let mut it = interpreter();
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Began, f64::NAN));
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Changed, f64::INFINITY));
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Ended, 1.0));

        let scale = it.machine().transform().scale();
        assert!((1.0..=3.0).contains(&scale));
        assert!(it.machine().transform().is_identity());
    }

    #[test]
    fn test_zero_pinch_scale_is_ignored() {
        let mut it = interpreter();
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Began, 1.5));
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Changed, 0.0));
        it.handle_pinch(&mut PinchGesture::new(GesturePhase::Changed, 1.2));

        let scale = it.machine().transform().scale();
        assert!((scale - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_nan_pan_keeps_frame_over_crop_window() {
        let mut it = interpreter();
        it.handle_pan(&mut PanGesture::new(GesturePhase::Began, f64::NAN, 0.0));
        it.handle_pan(&mut PanGesture::new(GesturePhase::Changed, 0.0, f64::INFINITY));
        it.handle_pan(&mut PanGesture::new(GesturePhase::Ended, 0.0, 0.0));

        let machine = it.machine();
        assert!(machine.transform().is_identity());
        assert!(machine.image_frame().contains_rect(&machine.crop_window()));
    }
}
