//! Configuration for a crop session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Smallest zoom level a settled transform may have.
pub const MIN_ZOOM_LEVEL: f64 = 1.0;
/// Largest zoom level a settled transform may have.
pub const MAX_ZOOM_LEVEL: f64 = 3.0;
/// Duration of the animation back into bounds after a gesture ends.
pub const SETTLE_ANIMATION: Duration = Duration::from_millis(300);

/// Tunable behaviour of a crop session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropSettings {
    /// Minimum settled zoom level (1.0 = image fills the crop window)
    pub min_zoom: f64,
    /// Maximum settled zoom level
    pub max_zoom: f64,
    /// Length of settle animations in milliseconds
    pub settle_duration_ms: u32,
    /// Whether the host can play tactile feedback
    pub haptics_available: bool,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM_LEVEL,
            max_zoom: MAX_ZOOM_LEVEL,
            settle_duration_ms: SETTLE_ANIMATION.as_millis() as u32,
            haptics_available: true,
        }
    }
}

impl CropSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Zoom bounds to enforce, falling back to the defaults when the configured
    /// pair is unusable (non-finite, non-positive or inverted).
    pub fn zoom_bounds(&self) -> ZoomBounds {
        let valid = self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.min_zoom <= self.max_zoom;
        if valid {
            ZoomBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            }
        } else {
            log::warn!(
                "ignoring invalid zoom bounds [{}, {}], using defaults",
                self.min_zoom,
                self.max_zoom
            );
            ZoomBounds::default()
        }
    }

    /// Settle animation duration.
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms as u64)
    }
}

/// Inclusive range of allowed settled zoom levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM_LEVEL,
            max: MAX_ZOOM_LEVEL,
        }
    }
}

impl ZoomBounds {
    /// Whether `scale` is a valid settled zoom. Always false for NaN.
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}
