//! Rotary actuator driver trait
//!
//! Abstracts over the rotational drives of the array: a slew ring for
//! azimuth, a tilt hinge for elevation, or their simulated stand-ins.

/// Trait for velocity-commanded rotary actuators
///
/// Implementations expose the raw mechanical state; all quantization,
/// range policy and termination logic lives in the axis controller.
/// Methods are infallible: a hardware fault is a fatal condition that
/// the implementation surfaces through the host's own fault path, not
/// through the control loop.
pub trait RotaryActuator {
    /// Current mechanical angle in radians
    ///
    /// Continuous and unquantized. A circular axis reports within
    /// [0, 2π); a bounded axis reports within its mechanical range,
    /// negative below the reference plane.
    fn angle_rad(&self) -> f32;

    /// Set the target angular velocity in RPM
    ///
    /// Sign selects direction (positive increases the angle). A value
    /// of 0.0 stops the actuator.
    fn set_velocity_rpm(&mut self, rpm: f32);
}
