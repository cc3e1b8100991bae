use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::head_pose::HeadPoseConfig;
use crate::input::GestureConfig;
use crate::smoothing::SmoothingFilter;
use crate::tool_state::{Palette, Toolbox};

/// Tunables for an [`crate::InteractionEngine`].
///
/// Missing fields take their default values when deserializing, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Weight of the previous point when smoothing, in `[0, 1]`.
    pub smoothing_factor: f64,
    pub pinch_threshold_px: f32,
    pub yaw_threshold_deg: f32,
    pub pitch_threshold_deg: f32,
    pub min_brush_size: u32,
    pub max_brush_size: u32,
    pub initial_brush_size: u32,
    /// Entries are `{"name": "Red", "color": [255, 0, 0]}`.
    pub palette: Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: SmoothingFilter::DEFAULT_FACTOR,
            pinch_threshold_px: 40.0,
            yaw_threshold_deg: 20.0,
            pitch_threshold_deg: 20.0,
            min_brush_size: 1,
            max_brush_size: 50,
            initial_brush_size: 5,
            palette: Palette::default(),
        }
    }
}

impl EngineConfig {
    /// Parses a JSON config and validates it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.smoothing_factor) {
            return Err(ConfigError::InvalidSmoothingFactor(self.smoothing_factor));
        }
        for (name, value) in [
            ("pinch_threshold_px", self.pinch_threshold_px),
            ("yaw_threshold_deg", self.yaw_threshold_deg),
            ("pitch_threshold_deg", self.pitch_threshold_deg),
        ] {
            // Written so that NaN is rejected too.
            if !(value > 0.0) {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        let (min, max) = (self.min_brush_size, self.max_brush_size);
        if min == 0 || min > max {
            return Err(ConfigError::InvalidBrushRange { min, max });
        }
        if !(min..=max).contains(&self.initial_brush_size) {
            return Err(ConfigError::InitialSizeOutOfRange {
                size: self.initial_brush_size,
                min,
                max,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    pub fn smoothing(&self) -> SmoothingFilter {
        SmoothingFilter::new(self.smoothing_factor)
    }

    pub fn gesture(&self) -> GestureConfig {
        GestureConfig {
            pinch_threshold_px: self.pinch_threshold_px,
        }
    }

    pub fn head_pose(&self) -> HeadPoseConfig {
        HeadPoseConfig {
            yaw_threshold_deg: self.yaw_threshold_deg,
            pitch_threshold_deg: self.pitch_threshold_deg,
        }
    }

    pub fn toolbox(&self) -> Toolbox {
        Toolbox::new(
            self.palette.clone(),
            self.initial_brush_size,
            self.min_brush_size,
            self.max_brush_size,
        )
    }
}
