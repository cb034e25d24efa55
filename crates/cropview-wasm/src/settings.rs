//! Crop settings WASM bindings.
//!
//! Lets TypeScript tune zoom bounds, settle animation length and haptics
//! before creating a crop session.

use wasm_bindgen::prelude::*;

/// Crop settings wrapper for JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct CropSettings {
    inner: cropview_core::CropSettings,
}

#[wasm_bindgen]
impl CropSettings {
    /// Create settings with default values (zoom 1.0 to 3.0, 300ms settle)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: cropview_core::CropSettings::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn min_zoom(&self) -> f64 {
        self.inner.min_zoom
    }

    #[wasm_bindgen(setter)]
    pub fn set_min_zoom(&mut self, value: f64) {
        self.inner.min_zoom = value;
    }

    #[wasm_bindgen(getter)]
    pub fn max_zoom(&self) -> f64 {
        self.inner.max_zoom
    }

    #[wasm_bindgen(setter)]
    pub fn set_max_zoom(&mut self, value: f64) {
        self.inner.max_zoom = value;
    }

    #[wasm_bindgen(getter)]
    pub fn settle_duration_ms(&self) -> u32 {
        self.inner.settle_duration_ms
    }

    #[wasm_bindgen(setter)]
    pub fn set_settle_duration_ms(&mut self, value: u32) {
        self.inner.settle_duration_ms = value;
    }

    /// Whether the page can vibrate (`navigator.vibrate` present)
    #[wasm_bindgen(getter)]
    pub fn haptics_available(&self) -> bool {
        self.inner.haptics_available
    }

    #[wasm_bindgen(setter)]
    pub fn set_haptics_available(&mut self, value: bool) {
        self.inner.haptics_available = value;
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from JSON; missing fields take their defaults
    pub fn from_json(value: JsValue) -> Result<CropSettings, JsValue> {
        let inner: cropview_core::CropSettings =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for CropSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl CropSettings {
    pub(crate) fn inner(&self) -> &cropview_core::CropSettings {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CropSettings::new();
        assert_eq!(settings.min_zoom(), 1.0);
        assert_eq!(settings.max_zoom(), 3.0);
        assert_eq!(settings.settle_duration_ms(), 300);
        assert!(settings.haptics_available());
    }

    #[test]
    fn test_setters() {
        let mut settings = CropSettings::default();
        settings.set_max_zoom(5.0);
        settings.set_haptics_available(false);
        settings.set_settle_duration_ms(150);

        assert_eq!(settings.inner().max_zoom, 5.0);
        assert!(!settings.inner().haptics_available);
        assert_eq!(settings.inner().settle_duration_ms, 150);
    }
}
