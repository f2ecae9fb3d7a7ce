//! Simulated world for the Heliotrope tracker
//!
//! Host-side stand-ins for the hardware collaborators the core consumes
//! as capabilities: velocity-integrating actuators with wrap or hard
//! stops, a drifting sun and panels whose output falls off with
//! misalignment. The binary wires these to the core and drives the step
//! driver one tick at a time, so the whole workspace builds and tests
//! without real hardware.

pub mod actuator;
pub mod config;
pub mod sun;
pub mod world;

pub use actuator::SimActuator;
pub use config::SimConfig;
pub use sun::{SimPanel, Sun, SunHandle};
pub use world::SimWorld;
