//! Step driver owning the single active task slot
//!
//! The host invokes [`StepDriver::step`] once per scheduling tick. The
//! driver advances the active task tree by exactly one step and reports
//! whether it wants another invocation; it never blocks and never
//! advances a completed tree.

use crate::task::{BoxedTask, Task};

/// Single-owner slot for the currently active task tree
///
/// Exactly one tree is active system-wide; only the driver advances it
/// and only the driver replaces it.
#[derive(Default)]
pub struct StepDriver {
    active: Option<BoxedTask>,
}

impl StepDriver {
    /// Create an idle driver
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Install a task tree as the active one
    ///
    /// Any in-flight tree is abandoned without cleanup: its tasks never
    /// advance again, and whatever velocities it last commanded stay in
    /// force on the actuators. Axis moves zero their velocity only on
    /// natural completion, so callers replacing a running move must
    /// account for still-turning hardware.
    pub fn install(&mut self, task: BoxedTask) {
        self.active = Some(task);
    }

    /// Check whether no task tree is installed
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Advance the active tree by exactly one step
    ///
    /// Returns true when more work remains and the host should invoke
    /// again next tick; false when the driver is idle or the tree
    /// completed on this step. A completed tree is dropped, never
    /// re-advanced.
    pub fn step(&mut self) -> bool {
        match self.active.as_mut() {
            Some(task) => {
                if task.advance().is_complete() {
                    self.active = None;
                    false
                } else {
                    true
                }
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Progress;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use core::cell::Cell;

    /// Task completing after a fixed number of advances, recording how
    /// many it received.
    struct Countdown {
        remaining: u32,
        advances: Rc<Cell<u32>>,
    }

    impl Task for Countdown {
        fn advance(&mut self) -> Progress {
            self.advances.set(self.advances.get() + 1);
            self.remaining -= 1;
            if self.remaining == 0 {
                Progress::Complete
            } else {
                Progress::Pending
            }
        }
    }

    fn countdown(steps: u32) -> (Box<Countdown>, Rc<Cell<u32>>) {
        let advances = Rc::new(Cell::new(0));
        (
            Box::new(Countdown {
                remaining: steps,
                advances: Rc::clone(&advances),
            }),
            advances,
        )
    }

    #[test]
    fn test_idle_driver_declines_reinvocation() {
        let mut driver = StepDriver::new();
        assert!(driver.is_idle());
        assert!(!driver.step());
    }

    #[test]
    fn test_step_advances_exactly_once_per_invocation() {
        let mut driver = StepDriver::new();
        let (task, advances) = countdown(3);
        driver.install(task);

        assert!(driver.step());
        assert_eq!(advances.get(), 1);
        assert!(driver.step());
        assert_eq!(advances.get(), 2);

        // Completion clears the slot and declines re-invocation.
        assert!(!driver.step());
        assert_eq!(advances.get(), 3);
        assert!(driver.is_idle());
        assert!(!driver.step());
        assert_eq!(advances.get(), 3);
    }

    #[test]
    fn test_install_abandons_running_tree() {
        let mut driver = StepDriver::new();
        let (old, old_advances) = countdown(10);
        driver.install(old);
        driver.step();
        driver.step();
        assert_eq!(old_advances.get(), 2);

        let (new, new_advances) = countdown(2);
        driver.install(new);
        assert!(driver.step());
        assert!(!driver.step());

        // The abandoned tree never advanced again.
        assert_eq!(old_advances.get(), 2);
        assert_eq!(new_advances.get(), 2);
    }

    #[test]
    fn test_driver_is_reusable_after_completion() {
        let mut driver = StepDriver::new();
        let (first, _) = countdown(1);
        driver.install(first);
        assert!(!driver.step());

        let (second, advances) = countdown(2);
        driver.install(second);
        assert!(!driver.is_idle());
        assert!(driver.step());
        assert!(!driver.step());
        assert_eq!(advances.get(), 2);
    }
}
