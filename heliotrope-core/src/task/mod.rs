//! Cooperative step-wise task engine
//!
//! Long-running operations (actuator moves, multi-phase searches) are
//! expressed as tasks: explicit state objects that perform one bounded
//! unit of work per [`Task::advance`] call and report whether more work
//! remains. The step driver advances the active task once per scheduling
//! tick, so nothing here ever blocks.
//!
//! Combinators compose tasks into larger workflows: [`Sequence`] drains
//! one task fully before starting the next, [`Parallel`] gives two tasks
//! one step each per tick, [`FromFn`] wraps a synchronous action and
//! [`Lazy`] defers building a task until it is first advanced.

pub mod combinators;

pub use combinators::{from_fn, lazy, noop, FromFn, Lazy, Noop, Parallel, Sequence, TaskExt};

use alloc::boxed::Box;

/// Outcome of advancing a task by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Progress {
    /// More work remains; advance again on the next tick
    Pending,
    /// The task finished on this advance
    Complete,
}

impl Progress {
    /// Check if the task finished
    pub fn is_complete(self) -> bool {
        matches!(self, Progress::Complete)
    }

    /// Check if the task wants another advance
    pub fn is_pending(self) -> bool {
        matches!(self, Progress::Pending)
    }
}

/// An incrementally advanceable unit of work
///
/// Each `advance` performs one real unit of work (one actuator command,
/// one sample-and-compare). The advance on which the work runs out
/// returns [`Progress::Complete`]; a task that has reported completion
/// must not be advanced again.
pub trait Task {
    /// Perform one unit of work
    fn advance(&mut self) -> Progress;
}

/// Owned handle to a type-erased task
///
/// Task trees are heterogeneous (moves, comparisons, nested
/// combinators), so composition and the driver slot work over boxed
/// handles.
pub type BoxedTask = Box<dyn Task>;

impl<T: Task + ?Sized> Task for Box<T> {
    fn advance(&mut self) -> Progress {
        (**self).advance()
    }
}
