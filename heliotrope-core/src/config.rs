//! Configuration type definitions
//!
//! Plain data describing a tracker deployment. Hosts load these from
//! their own sources (the simulator parses TOML); the core only
//! validates and consumes them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::{AngleRange, DEFAULT_VELOCITY_RPM};

/// Default neighbor offset used by exploration, in degrees
pub const DEFAULT_EXPLORE_STEP_DEG: i32 = 15;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Axis velocity magnitude is zero, negative, or not finite
    InvalidVelocity,
    /// Exploration step is zero or negative
    InvalidExploreStep,
}

/// Configuration of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisConfig {
    /// Angular range policy
    pub range: AngleRange,
    /// Commanded velocity magnitude in RPM
    pub velocity_rpm: f32,
}

impl AxisConfig {
    /// Circular-axis configuration with the default velocity
    pub fn circular() -> Self {
        Self {
            range: AngleRange::Circular,
            velocity_rpm: DEFAULT_VELOCITY_RPM,
        }
    }

    /// Bounded-axis configuration with the default velocity
    pub fn bounded() -> Self {
        Self {
            range: AngleRange::Bounded,
            velocity_rpm: DEFAULT_VELOCITY_RPM,
        }
    }
}

/// Complete tracker configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackerConfig {
    /// X axis (azimuth slew ring)
    pub axis_x: AxisConfig,
    /// Y axis (elevation hinge)
    pub axis_y: AxisConfig,
    /// Neighbor offset used by exploration, in degrees
    pub explore_step_deg: i32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            axis_x: AxisConfig::circular(),
            axis_y: AxisConfig::bounded(),
            explore_step_deg: DEFAULT_EXPLORE_STEP_DEG,
        }
    }
}

impl TrackerConfig {
    /// Validate the invariants a deployment must satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        for axis in [&self.axis_x, &self.axis_y] {
            if !axis.velocity_rpm.is_finite() || axis.velocity_rpm <= 0.0 {
                return Err(ConfigError::InvalidVelocity);
            }
        }
        if self.explore_step_deg <= 0 {
            return Err(ConfigError::InvalidExploreStep);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrackerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.axis_x.range, AngleRange::Circular);
        assert_eq!(config.axis_y.range, AngleRange::Bounded);
        assert_eq!(config.explore_step_deg, 15);
    }

    #[test]
    fn test_rejects_bad_velocity() {
        let mut config = TrackerConfig::default();

        config.axis_x.velocity_rpm = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidVelocity));

        config.axis_x.velocity_rpm = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidVelocity));

        config.axis_x.velocity_rpm = f32::NAN;
        assert_eq!(config.validate(), Err(ConfigError::InvalidVelocity));

        config.axis_x.velocity_rpm = 1.0;
        config.axis_y.velocity_rpm = f32::INFINITY;
        assert_eq!(config.validate(), Err(ConfigError::InvalidVelocity));
    }

    #[test]
    fn test_rejects_bad_explore_step() {
        let mut config = TrackerConfig::default();

        config.explore_step_deg = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidExploreStep));

        config.explore_step_deg = -15;
        assert_eq!(config.validate(), Err(ConfigError::InvalidExploreStep));
    }
}
