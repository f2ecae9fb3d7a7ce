//! Per-axis angle control
//!
//! One controller per rotational axis, wrapping the actuator capability
//! with the axis's angular range policy. Moves are incremental tasks:
//! one velocity command per step, re-sampling the measured angle every
//! step, terminating only when the quantized distance reaches zero.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::config::AxisConfig;
use crate::task::{Progress, Task};
use crate::traits::RotaryActuator;

/// Lower mechanical limit of a bounded axis, in degrees
pub const BOUNDED_MIN_DEG: i32 = -90;
/// Upper mechanical limit of a bounded axis, in degrees
pub const BOUNDED_MAX_DEG: i32 = 90;

/// Default commanded velocity magnitude in RPM
pub const DEFAULT_VELOCITY_RPM: f32 = 1.0;

/// Shared handle to one axis's actuator
///
/// Every move task in a composed tree holds a clone of its axis's
/// handle; execution is single-threaded and each step borrows the
/// actuator only for the duration of one command.
pub type ActuatorHandle = Rc<RefCell<dyn RotaryActuator>>;

/// Angular range policy of one axis
///
/// Selected at construction; carries both policy rules (target
/// projection and shortest-distance computation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleRange {
    /// Wraps at 360° with no hard stops (slew ring)
    Circular,
    /// Mechanically limited to [-90°, +90°] (tilt hinge)
    Bounded,
}

impl AngleRange {
    /// Project an arbitrary requested angle onto the axis
    ///
    /// Circular axes reduce modulo 360 into [0, 360); bounded axes
    /// saturate to [-90, +90].
    pub fn closest_reachable(self, target_deg: i32) -> i32 {
        match self {
            AngleRange::Circular => target_deg.rem_euclid(360),
            AngleRange::Bounded => target_deg.clamp(BOUNDED_MIN_DEG, BOUNDED_MAX_DEG),
        }
    }

    /// Signed shortest distance from `current_deg` to `target_deg`
    ///
    /// Circular axes normalize into (-180, 180], so a target exactly
    /// half a turn away always moves in the positive direction. Bounded
    /// axes use the plain difference, whatever `current_deg` is.
    pub fn shortest_distance(self, current_deg: i32, target_deg: i32) -> i32 {
        match self {
            AngleRange::Circular => {
                let diff = (target_deg - current_deg).rem_euclid(360);
                if diff > 180 {
                    diff - 360
                } else {
                    diff
                }
            }
            AngleRange::Bounded => target_deg - current_deg,
        }
    }
}

/// Quantize a raw continuous angle to integer degrees
///
/// Whole turns are discarded with a sign-preserving remainder before
/// rounding: a circular sensor reading in [0, 2π) samples into
/// [0, 360], a bounded axis below its reference plane keeps its
/// negative sign, so negative targets stay reachable.
fn quantize_deg(angle_rad: f32) -> i32 {
    libm::roundf(angle_rad.to_degrees() % 360.0) as i32
}

/// Drives one rotational actuator toward integer-degree targets
///
/// Cheap to clone: clones share the same underlying actuator, so every
/// move task in a composed tree commands the same hardware.
#[derive(Clone)]
pub struct AxisController {
    actuator: ActuatorHandle,
    range: AngleRange,
    velocity_rpm: f32,
}

impl AxisController {
    /// Create a controller over an actuator with the given range policy
    ///
    /// The velocity magnitude starts at [`DEFAULT_VELOCITY_RPM`].
    pub fn new(actuator: ActuatorHandle, range: AngleRange) -> Self {
        Self {
            actuator,
            range,
            velocity_rpm: DEFAULT_VELOCITY_RPM,
        }
    }

    /// Create a controller configured from an [`AxisConfig`] entry
    pub fn from_config(actuator: ActuatorHandle, config: &AxisConfig) -> Self {
        Self {
            actuator,
            range: config.range,
            velocity_rpm: config.velocity_rpm,
        }
    }

    /// Range policy of this axis
    pub fn range(&self) -> AngleRange {
        self.range
    }

    /// Configured velocity magnitude in RPM
    pub fn velocity_rpm(&self) -> f32 {
        self.velocity_rpm
    }

    /// Replace the velocity magnitude used by subsequent move steps
    pub fn set_velocity_rpm(&mut self, rpm: f32) {
        self.velocity_rpm = rpm;
    }

    /// Current measured angle quantized to integer degrees
    ///
    /// Re-sampled from the actuator on every call, never cached.
    pub fn current_angle_deg(&self) -> i32 {
        quantize_deg(self.actuator.borrow().angle_rad())
    }

    /// Build a task that drives the axis to `target_deg`
    ///
    /// `target_deg` may lie outside the axis's natural range; it is
    /// projected in on every step. On the step the remaining distance
    /// reaches zero the task commands zero velocity exactly once and
    /// completes.
    pub fn move_to_angle(&self, target_deg: i32) -> MoveToAngle {
        MoveToAngle {
            axis: self.clone(),
            target_deg,
        }
    }
}

/// Incremental move of one axis toward a target angle
///
/// Built by [`AxisController::move_to_angle`]. Because the reachable
/// target and the measured angle are recomputed from fresh samples on
/// every step, a moving target or sensor noise can keep the move alive
/// indefinitely; nothing here detects that.
pub struct MoveToAngle {
    axis: AxisController,
    target_deg: i32,
}

impl Task for MoveToAngle {
    fn advance(&mut self) -> Progress {
        let reachable = self.axis.range.closest_reachable(self.target_deg);
        let current = self.axis.current_angle_deg();
        let distance = self.axis.range.shortest_distance(current, reachable);

        let mut actuator = self.axis.actuator.borrow_mut();
        if distance == 0 {
            actuator.set_velocity_rpm(0.0);
            return Progress::Complete;
        }
        actuator.set_velocity_rpm(self.axis.velocity_rpm * distance.signum() as f32);
        Progress::Pending
    }
}
