//! Hardware abstraction traits
//!
//! These traits define the interface between the tracking logic and
//! hardware-specific implementations (real actuators on a deployment,
//! simulated ones on the host).

pub mod actuator;
pub mod panel;

pub use actuator::RotaryActuator;
pub use panel::SolarPanel;
