use serde::{Deserialize, Serialize};

use crate::flight::FlightConfig;
use crate::navigation::NavigationConfig;
use crate::picking::PickerConfig;

/// Viewport geometry for screen-to-ray conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Vertical field of view in radians.
    pub vertical_fov: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            vertical_fov: std::f32::consts::FRAC_PI_3,
        }
    }
}

/// Aggregated tuning for every controller in the core.
///
/// The empirically tuned constants the original explorer scattered across
/// its variants are all configuration here; the defaults carry the shipped
/// values. Hosts can override any subset from a JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub viewport: ViewportConfig,
    pub picker: PickerConfig,
    pub flight: FlightConfig,
    pub navigation: NavigationConfig,
}

impl EngineConfig {
    /// Parse a configuration document, filling omitted fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
