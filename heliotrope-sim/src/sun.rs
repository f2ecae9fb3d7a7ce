//! Simulated sun and solar panels
//!
//! Panel output falls off with the angular misalignment between the
//! array and the sun: cosine per axis, floored at zero so a panel
//! facing away produces nothing instead of negative power.

use std::cell::RefCell;
use std::rc::Rc;

use heliotrope_core::traits::SolarPanel;

use crate::actuator::SimActuator;

/// Direction of the simulated sun
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sun {
    /// Azimuth in degrees, same frame as the rotor
    pub azimuth_deg: f32,
    /// Elevation in degrees, same frame as the hinge
    pub elevation_deg: f32,
}

impl Sun {
    /// Move the sun by the given offsets, keeping azimuth in [0, 360)
    pub fn drift(&mut self, azimuth_deg: f32, elevation_deg: f32) {
        self.azimuth_deg = (self.azimuth_deg + azimuth_deg).rem_euclid(360.0);
        self.elevation_deg = (self.elevation_deg + elevation_deg).clamp(-90.0, 90.0);
    }
}

/// Shared handle to the sun, cloned into every panel
pub type SunHandle = Rc<RefCell<Sun>>;

/// One simulated panel mounted on the array
///
/// Reads the live actuator angles on every sample, so output follows
/// the mechanism mid-move the way a real panel would.
pub struct SimPanel {
    peak_output_mw: f32,
    rotor: Rc<RefCell<SimActuator>>,
    hinge: Rc<RefCell<SimActuator>>,
    sun: SunHandle,
}

impl SimPanel {
    /// Create a panel producing `peak_output_mw` at perfect alignment
    pub fn new(
        peak_output_mw: f32,
        rotor: Rc<RefCell<SimActuator>>,
        hinge: Rc<RefCell<SimActuator>>,
        sun: SunHandle,
    ) -> Self {
        Self {
            peak_output_mw,
            rotor,
            hinge,
            sun,
        }
    }
}

impl SolarPanel for SimPanel {
    fn max_output_mw(&self) -> f32 {
        let sun = self.sun.borrow();
        let azimuth_off = wrapped_diff_deg(self.rotor.borrow().angle_deg(), sun.azimuth_deg);
        let elevation_off = sun.elevation_deg - self.hinge.borrow().angle_deg();
        self.peak_output_mw * alignment(azimuth_off) * alignment(elevation_off)
    }
}

/// Cosine falloff with misalignment, floored at zero
fn alignment(offset_deg: f32) -> f32 {
    offset_deg.to_radians().cos().max(0.0)
}

/// Signed difference `to - from` normalized into (-180, 180]
fn wrapped_diff_deg(from_deg: f32, to_deg: f32) -> f32 {
    let diff = (to_deg - from_deg).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}
