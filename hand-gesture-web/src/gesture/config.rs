//! Tracker calibration
//!
//! Every threshold is a tunable default, not a constant: the right values
//! depend on camera resolution and how far the user stands from it.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Samples in each palm-position window
    pub position_window: usize,
    /// Samples in the pinch-distance window
    pub pinch_window: usize,
    /// A role is dropped after MORE than this many consecutive misses
    pub presence_debounce_frames: u32,
    /// Two palms closer than this are one hand split in two by the detector
    pub min_hand_separation: f32,
    /// Smoothed pinch distance below which a pinch engages
    pub pinch_engage: f32,
    /// Smoothed pinch distance above which a pinch releases
    pub pinch_release: f32,
    /// Opening speed (distance units / frame) that force-releases a pinch
    pub clutch_velocity: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            position_window: 3,
            pinch_window: 3,
            presence_debounce_frames: 5,
            min_hand_separation: 0.18,
            pinch_engage: 0.05,
            pinch_release: 0.08,
            clutch_velocity: 0.02,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.position_window == 0 {
            return Err(ConfigError::ZeroWindow("positionWindow"));
        }
        if self.pinch_window == 0 {
            return Err(ConfigError::ZeroWindow("pinchWindow"));
        }
        if self.presence_debounce_frames == 0 {
            return Err(ConfigError::ZeroDebounce);
        }

        let positive = [
            ("minHandSeparation", self.min_hand_separation),
            ("pinchEngage", self.pinch_engage),
            ("pinchRelease", self.pinch_release),
            ("clutchVelocity", self.clutch_velocity),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        // Equal thresholds would leave no hysteresis band
        if self.pinch_engage >= self.pinch_release {
            return Err(ConfigError::InvertedPinchBand {
                engage: self.pinch_engage,
                release: self.pinch_release,
            });
        }

        Ok(())
    }

    /// Parse a (possibly partial) JSON calibration; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
