//! Kernel configuration.
//!
//! Hosts usually keep these values next to their own editor options, so the
//! configuration deserializes from partial TOML: any key that is missing keeps
//! its default.

use serde::{Deserialize, Serialize};

use crate::error::{CamberError, Result};
use crate::tolerance::Tolerance;

/// Sampling parameters shared by every kernel operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Samples per Bezier segment (t steps) for spline sampling.
    pub bezier_resolution: u32,
    /// Marching steps for arc and clothoid sampling.
    pub arc_resolution: u32,
    /// Curve resolution used to measure segment lengths on a ring.
    pub ring_resolution: u32,
    /// Fallback binormal for straight runs with no previous frame.
    pub up: [f64; 3],
    pub tolerance: Tolerance,
}

impl KernelConfig {
    pub const DEFAULT_BEZIER_RESOLUTION: u32 = 24;
    pub const DEFAULT_ARC_RESOLUTION: u32 = 10;
    pub const DEFAULT_RING_RESOLUTION: u32 = 12;

    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| CamberError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CamberError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("bezier_resolution", self.bezier_resolution),
            ("arc_resolution", self.arc_resolution),
            ("ring_resolution", self.ring_resolution),
        ] {
            if value == 0 {
                return Err(CamberError::Config(format!("{} must be at least 1", name)));
            }
        }

        let Tolerance { linear, handle } = self.tolerance;
        if !linear.is_finite() || !handle.is_finite() || linear <= 0.0 || handle <= 0.0 {
            return Err(CamberError::Config(format!(
                "tolerances must be positive, got linear={} handle={}",
                linear, handle
            )));
        }

        let [x, y, z] = self.up;
        let len2 = x * x + y * y + z * z;
        if !len2.is_finite() || len2 == 0.0 {
            return Err(CamberError::Config(format!(
                "up axis must be a finite non-zero vector, got {:?}",
                self.up
            )));
        }
        Ok(())
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            bezier_resolution: Self::DEFAULT_BEZIER_RESOLUTION,
            arc_resolution: Self::DEFAULT_ARC_RESOLUTION,
            ring_resolution: Self::DEFAULT_RING_RESOLUTION,
            up: [0.0, 0.0, 1.0],
            tolerance: Tolerance::default(),
        }
    }
}
