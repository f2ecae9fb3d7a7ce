//! Board-agnostic control core for the Heliotrope solar tracker
//!
//! This crate contains all tracking logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (rotary actuator, solar panel)
//! - Cooperative step-wise task engine and combinators
//! - Per-axis angle control with circular and bounded range policies
//! - Orientation model and neighbor generation
//! - Hill-climbing exploration over array orientation
//! - Step driver owning the single active task slot
//! - Status board and configuration type definitions
//!
//! Everything here is single-threaded and cooperative: long-running
//! actuator moves are expressed as tasks that perform one bounded unit
//! of work per advance and resume from saved state on the next tick.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod array;
pub mod axis;
pub mod config;
pub mod driver;
pub mod orientation;
pub mod status;
pub mod task;
pub mod traits;
