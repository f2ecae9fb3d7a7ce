//! Simulated rotary actuator
//!
//! Latches the last commanded velocity and integrates it over fixed
//! world ticks. A slew-ring mount wraps at 360°, a hinge mount runs
//! into its hard stops.

use heliotrope_core::traits::RotaryActuator;

/// Degrees covered per second at 1 RPM
const DEG_PER_S_PER_RPM: f32 = 6.0;

/// Mechanical mounting of the simulated actuator
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mount {
    /// Free-spinning ring, angle wraps into [0, 360)
    Ring,
    /// Hinge with hard stops at the given limits in degrees
    Hinge { min_deg: f32, max_deg: f32 },
}

/// Velocity-integrating stand-in for one rotational drive
///
/// Commands take effect on the next [`SimActuator::integrate`] call and
/// stay in force until replaced, like a real velocity-controlled drive.
#[derive(Debug)]
pub struct SimActuator {
    angle_deg: f32,
    velocity_rpm: f32,
    mount: Mount,
    zero_commands: u32,
}

impl SimActuator {
    /// Free-spinning azimuth ring starting at `angle_deg`
    pub fn rotor(angle_deg: f32) -> Self {
        Self {
            angle_deg: angle_deg.rem_euclid(360.0),
            velocity_rpm: 0.0,
            mount: Mount::Ring,
            zero_commands: 0,
        }
    }

    /// Elevation hinge with hard stops at ±90°, starting at `angle_deg`
    pub fn hinge(angle_deg: f32) -> Self {
        Self {
            angle_deg: angle_deg.clamp(-90.0, 90.0),
            velocity_rpm: 0.0,
            mount: Mount::Hinge {
                min_deg: -90.0,
                max_deg: 90.0,
            },
            zero_commands: 0,
        }
    }

    /// Integrate the latched velocity over `dt_s` seconds
    pub fn integrate(&mut self, dt_s: f32) {
        let swept = self.velocity_rpm * DEG_PER_S_PER_RPM * dt_s;
        self.angle_deg = match self.mount {
            Mount::Ring => (self.angle_deg + swept).rem_euclid(360.0),
            Mount::Hinge { min_deg, max_deg } => (self.angle_deg + swept).clamp(min_deg, max_deg),
        };
    }

    /// Current mechanical angle in degrees
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// Teleport the mechanism, keeping it inside its mount's range
    pub fn set_angle_deg(&mut self, angle_deg: f32) {
        self.angle_deg = match self.mount {
            Mount::Ring => angle_deg.rem_euclid(360.0),
            Mount::Hinge { min_deg, max_deg } => angle_deg.clamp(min_deg, max_deg),
        };
    }

    /// Velocity currently latched, in RPM
    pub fn velocity_rpm(&self) -> f32 {
        self.velocity_rpm
    }

    /// How many stop commands (0 RPM) this actuator has received
    pub fn zero_commands(&self) -> u32 {
        self.zero_commands
    }
}

impl RotaryActuator for SimActuator {
    fn angle_rad(&self) -> f32 {
        self.angle_deg.to_radians()
    }

    fn set_velocity_rpm(&mut self, rpm: f32) {
        if rpm == 0.0 {
            self.zero_commands += 1;
        }
        self.velocity_rpm = rpm;
    }
}
