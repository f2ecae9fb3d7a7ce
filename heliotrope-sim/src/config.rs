//! Simulator configuration
//!
//! One TOML document covers both the tracker deployment handed to the
//! core and the simulated world around it. A default document is
//! compiled in; a path on the command line overrides it.

use serde::Deserialize;

use heliotrope_core::config::TrackerConfig;

/// Embedded default configuration (compiled into the binary)
/// Edit heliotrope.toml and rebuild to customize
pub const EMBEDDED_CONFIG: &str = include_str!("../heliotrope.toml");

/// Complete simulator configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Tracker deployment handed to the core
    pub tracker: TrackerConfig,
    /// Simulated world around it
    pub world: WorldConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            world: WorldConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a configuration document
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Parameters of the simulated world
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Wall-clock duration of one scheduling tick in milliseconds
    pub tick_ms: u32,
    /// Rotor angle at startup, degrees
    pub rotor_start_deg: f32,
    /// Hinge angle at startup, degrees
    pub hinge_start_deg: f32,
    /// Exploration passes the binary runs before exiting
    pub explore_passes: u32,
    /// Sun position and per-pass drift
    pub sun: SunConfig,
    /// Panels mounted on the array
    pub panels: Vec<PanelConfig>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            rotor_start_deg: 10.0,
            hinge_start_deg: 5.0,
            explore_passes: 3,
            sun: SunConfig::default(),
            panels: vec![PanelConfig::default(); 4],
        }
    }
}

/// Simulated sun position and drift
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    /// Starting azimuth in degrees
    pub azimuth_deg: f32,
    /// Starting elevation in degrees
    pub elevation_deg: f32,
    /// Azimuth drift applied between exploration passes, degrees
    pub azimuth_drift_deg: f32,
    /// Elevation drift applied between exploration passes, degrees
    pub elevation_drift_deg: f32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            azimuth_deg: 55.0,
            elevation_deg: 20.0,
            azimuth_drift_deg: 2.0,
            elevation_drift_deg: 0.5,
        }
    }
}

/// One simulated panel
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Output at perfect alignment, megawatts
    pub peak_output_mw: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        // Peak output of one large-grid panel on the deployments this
        // mirrors.
        Self {
            peak_output_mw: 0.16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heliotrope_core::axis::AngleRange;

    #[test]
    fn test_embedded_default_parses_and_validates() {
        let config = SimConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.tracker.validate(), Ok(()));
        assert_eq!(config.tracker.axis_x.range, AngleRange::Circular);
        assert_eq!(config.tracker.axis_y.range, AngleRange::Bounded);
        assert_eq!(config.world.panels.len(), 4);
    }

    #[test]
    fn test_empty_document_falls_back_to_defaults() {
        let config = SimConfig::from_toml("").unwrap();
        assert_eq!(config.tracker.explore_step_deg, 15);
        assert_eq!(config.world.tick_ms, 100);
        assert_eq!(config.world.explore_passes, 3);
    }

    #[test]
    fn test_partial_override() {
        let config = SimConfig::from_toml(
            r#"
            [tracker]
            explore_step_deg = 5

            [tracker.axis_x]
            range = "circular"
            velocity_rpm = 2.0

            [tracker.axis_y]
            range = "bounded"
            velocity_rpm = 1.0

            [world]
            tick_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.tracker.explore_step_deg, 5);
        assert_eq!(config.tracker.axis_x.velocity_rpm, 2.0);
        assert_eq!(config.world.tick_ms, 50);
        assert_eq!(config.world.rotor_start_deg, 10.0);
    }

    #[test]
    fn test_rejects_malformed_document() {
        assert!(SimConfig::from_toml("tracker = 3").is_err());
    }
}
