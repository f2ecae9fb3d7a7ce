//! Simulated world wiring
//!
//! Owns the two actuators, the sun and the panels, and integrates the
//! mechanism once per scheduling tick. Handles are shared the same way
//! the core shares its capability handles, so the array and the world
//! observe the same simulated hardware.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use heliotrope_core::array::PanelHandle;
use heliotrope_core::axis::ActuatorHandle;

use crate::actuator::SimActuator;
use crate::config::WorldConfig;
use crate::sun::{SimPanel, Sun, SunHandle};

/// The simulated hardware around one tracker
pub struct SimWorld {
    /// Azimuth slew ring
    pub rotor: Rc<RefCell<SimActuator>>,
    /// Elevation hinge
    pub hinge: Rc<RefCell<SimActuator>>,
    /// The sun every panel looks for
    pub sun: SunHandle,
    panels: Vec<PanelHandle>,
    tick_s: f32,
    sun_drift_deg: (f32, f32),
}

impl SimWorld {
    /// Build the world described by `config`
    pub fn new(config: &WorldConfig) -> Self {
        let rotor = Rc::new(RefCell::new(SimActuator::rotor(config.rotor_start_deg)));
        let hinge = Rc::new(RefCell::new(SimActuator::hinge(config.hinge_start_deg)));
        let sun: SunHandle = Rc::new(RefCell::new(Sun {
            azimuth_deg: config.sun.azimuth_deg,
            elevation_deg: config.sun.elevation_deg,
        }));
        let panels = config
            .panels
            .iter()
            .map(|panel| {
                Rc::new(SimPanel::new(
                    panel.peak_output_mw,
                    Rc::clone(&rotor),
                    Rc::clone(&hinge),
                    Rc::clone(&sun),
                )) as PanelHandle
            })
            .collect();

        Self {
            rotor,
            hinge,
            sun,
            panels,
            tick_s: config.tick_ms as f32 / 1000.0,
            sun_drift_deg: (config.sun.azimuth_drift_deg, config.sun.elevation_drift_deg),
        }
    }

    /// Rotor handle in the form the core's axis controller takes
    pub fn rotor_handle(&self) -> ActuatorHandle {
        self.rotor.clone()
    }

    /// Hinge handle in the form the core's axis controller takes
    pub fn hinge_handle(&self) -> ActuatorHandle {
        self.hinge.clone()
    }

    /// Panel handles in the form the array takes
    pub fn panels(&self) -> Vec<PanelHandle> {
        self.panels.clone()
    }

    /// Advance the mechanism by one scheduling tick
    pub fn tick(&self) {
        self.rotor.borrow_mut().integrate(self.tick_s);
        self.hinge.borrow_mut().integrate(self.tick_s);
    }

    /// Apply the configured between-pass sun drift
    pub fn drift_sun(&self) {
        let mut sun = self.sun.borrow_mut();
        sun.drift(self.sun_drift_deg.0, self.sun_drift_deg.1);
        debug!(
            "sun drifted to azimuth {:.1}°, elevation {:.1}°",
            sun.azimuth_deg, sun.elevation_deg
        );
    }
}
