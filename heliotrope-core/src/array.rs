//! Hill-climbing array controller
//!
//! Orchestrates the two axes as one array: combined parallel moves,
//! total output sampling, and the four-neighbor exploration workflow.
//! The whole exploration is built as a single task tree up front; only
//! the final return-to-best move is constructed lazily, once the best
//! orientation is actually known.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::axis::{ActuatorHandle, AxisController};
use crate::config::{TrackerConfig, DEFAULT_EXPLORE_STEP_DEG};
use crate::orientation::Orientation;
use crate::status::StatusBoard;
use crate::task::{self, BoxedTask, Parallel, TaskExt};
use crate::traits::SolarPanel;

/// Shared handle to one tracked panel
pub type PanelHandle = Rc<dyn SolarPanel>;

/// Running best seen by one exploration run
struct BestSample {
    output_mw: f32,
    orientation: Orientation,
}

/// Two-axis tracked panel array
///
/// Cheap to clone: clones share the same axes, panels and status board.
/// The exploration workflow clones the array into its phase closures
/// the way the axis controller clones its actuator handle.
#[derive(Clone)]
pub struct SolarArray {
    axis_x: AxisController,
    axis_y: AxisController,
    panels: Vec<PanelHandle>,
    status: StatusBoard,
    explore_step_deg: i32,
}

impl SolarArray {
    /// Create an array over its two axes and tracked panels
    ///
    /// The exploration step starts at [`DEFAULT_EXPLORE_STEP_DEG`].
    pub fn new(
        axis_x: AxisController,
        axis_y: AxisController,
        panels: Vec<PanelHandle>,
        status: StatusBoard,
    ) -> Self {
        Self {
            axis_x,
            axis_y,
            panels,
            status,
            explore_step_deg: DEFAULT_EXPLORE_STEP_DEG,
        }
    }

    /// Create an array with both axes configured from a [`TrackerConfig`]
    pub fn from_config(
        config: &TrackerConfig,
        axis_x: ActuatorHandle,
        axis_y: ActuatorHandle,
        panels: Vec<PanelHandle>,
        status: StatusBoard,
    ) -> Self {
        Self {
            axis_x: AxisController::from_config(axis_x, &config.axis_x),
            axis_y: AxisController::from_config(axis_y, &config.axis_y),
            panels,
            status,
            explore_step_deg: config.explore_step_deg,
        }
    }

    /// Neighbor offset used by explorations, in degrees
    pub fn explore_step_deg(&self) -> i32 {
        self.explore_step_deg
    }

    /// Replace the neighbor offset used by subsequent explorations
    pub fn set_explore_step_deg(&mut self, step_deg: i32) {
        self.explore_step_deg = step_deg;
    }

    /// Orientation the array currently measures
    pub fn current_orientation(&self) -> Orientation {
        Orientation::new(
            self.axis_x.current_angle_deg(),
            self.axis_y.current_angle_deg(),
        )
    }

    /// Sum of the instantaneous maximum output of every tracked panel
    ///
    /// Uniform sum: shaded or faulted panels count like any other.
    pub fn total_output_mw(&self) -> f32 {
        self.panels.iter().map(|panel| panel.max_output_mw()).sum()
    }

    /// Build the combined move driving both axes to `target` in parallel
    ///
    /// Announces the move on the status board once, at build time. Each
    /// axis completes independently, zeroing its own velocity on the
    /// step it lands.
    pub fn orient_to(&self, target: Orientation) -> Parallel {
        self.status
            .set_status(format_args!("Orienting to {target}..."));
        self.axis_x
            .move_to_angle(target.angle_x_deg)
            .join(self.axis_y.move_to_angle(target.angle_y_deg))
    }

    /// Build one hill-climbing exploration pass as a single task
    ///
    /// Samples the current output and orientation as the running best,
    /// then visits the four neighbors of the starting orientation in
    /// fixed order (+X, +Y, -X, -Y); after each move it resamples and,
    /// on strict improvement, keeps the output together with the landed
    /// orientation, which quantization may have left off the requested
    /// target. A final lazily-built move returns to the best found.
    /// Neighbors are generated once from the starting orientation and
    /// never re-derived from updated bests mid-run.
    pub fn explore_neighbors(&self) -> BoxedTask {
        let best = Rc::new(RefCell::new(BestSample {
            output_mw: self.total_output_mw(),
            orientation: self.current_orientation(),
        }));
        let start = best.borrow().orientation;

        let mut plan: BoxedTask = Box::new(task::noop());
        for neighbor in start.neighbors(self.explore_step_deg) {
            let array = self.clone();
            let best = Rc::clone(&best);
            let compare = task::from_fn(move || {
                let output = array.total_output_mw();
                let mut best = best.borrow_mut();
                if output > best.output_mw {
                    best.output_mw = output;
                    best.orientation = array.current_orientation();
                }
            });
            plan = Box::new(plan.then(self.orient_to(neighbor)).then(compare));
        }

        let array = self.clone();
        Box::new(plan.then(task::lazy(move || {
            array.orient_to(best.borrow().orientation)
        })))
    }
}
