//! Task combinators and adapters
//!
//! Sequencing, parallel composition, synchronous actions, lazy
//! construction and the no-op seed. All composition happens through
//! boxed handles so heterogeneous trees can be folded together.

use alloc::boxed::Box;

use super::{BoxedTask, Progress, Task};

/// Runs two tasks strictly one after the other
///
/// The first task is drained completely before the second receives any
/// advance. The step on which the first task completes performs only
/// its work; the second task starts on the following step.
pub struct Sequence {
    first: BoxedTask,
    second: BoxedTask,
    first_done: bool,
}

impl Sequence {
    /// Create a task that drains `first`, then `second`
    pub fn new(first: impl Task + 'static, second: impl Task + 'static) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
            first_done: false,
        }
    }
}

impl Task for Sequence {
    fn advance(&mut self) -> Progress {
        if !self.first_done {
            if self.first.advance().is_pending() {
                return Progress::Pending;
            }
            self.first_done = true;
            return Progress::Pending;
        }
        self.second.advance()
    }
}

/// Advances two tasks together, one step each per tick
///
/// Both children receive equal step budget: each is advanced exactly
/// once per tick until its own completion, tracked independently, and
/// never advanced again afterwards. Completes on the tick the later
/// child finishes. The first child advances before the second within a
/// tick; callers must not rely on that order.
pub struct Parallel {
    first: BoxedTask,
    second: BoxedTask,
    first_done: bool,
    second_done: bool,
}

impl Parallel {
    /// Create a task advancing `first` and `second` in lockstep
    pub fn new(first: impl Task + 'static, second: impl Task + 'static) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
            first_done: false,
            second_done: false,
        }
    }
}

impl Task for Parallel {
    fn advance(&mut self) -> Progress {
        if !self.first_done {
            self.first_done = self.first.advance().is_complete();
        }
        if !self.second_done {
            self.second_done = self.second.advance().is_complete();
        }
        if self.first_done && self.second_done {
            Progress::Complete
        } else {
            Progress::Pending
        }
    }
}

/// Wraps a synchronous action as a zero-suspension task
///
/// The action runs on the first advance and the task completes on that
/// same advance.
pub struct FromFn<F> {
    action: Option<F>,
}

/// Wrap a synchronous action as a task
pub fn from_fn<F: FnOnce()>(action: F) -> FromFn<F> {
    FromFn {
        action: Some(action),
    }
}

impl<F: FnOnce()> Task for FromFn<F> {
    fn advance(&mut self) -> Progress {
        if let Some(action) = self.action.take() {
            action();
        }
        Progress::Complete
    }
}

/// Defers building a task until it is first advanced
///
/// The factory runs on the first advance, so it can capture values that
/// earlier phases of a sequence write before this phase starts.
pub struct Lazy<F, T> {
    factory: Option<F>,
    task: Option<T>,
}

/// Defer task construction until first advanced
pub fn lazy<F, T>(factory: F) -> Lazy<F, T>
where
    F: FnOnce() -> T,
    T: Task,
{
    Lazy {
        factory: Some(factory),
        task: None,
    }
}

impl<F, T> Task for Lazy<F, T>
where
    F: FnOnce() -> T,
    T: Task,
{
    fn advance(&mut self) -> Progress {
        if let Some(factory) = self.factory.take() {
            self.task = Some(factory());
        }
        match self.task.as_mut() {
            Some(task) => task.advance(),
            // Unreachable while the completion contract is upheld.
            None => Progress::Complete,
        }
    }
}

/// Immediately-complete no-op task
///
/// Used as the accumulator seed when folding a chain of phases into one
/// sequential task.
#[derive(Debug, Default, Clone, Copy)]
pub struct Noop;

/// Create an immediately-complete no-op task
pub fn noop() -> Noop {
    Noop
}

impl Task for Noop {
    fn advance(&mut self) -> Progress {
        Progress::Complete
    }
}

/// Combinator methods available on every sized task
pub trait TaskExt: Task + Sized + 'static {
    /// Run `self` to completion, then `next`
    fn then<B: Task + 'static>(self, next: B) -> Sequence {
        Sequence::new(self, next)
    }

    /// Advance `self` and `other` together, one step each per tick
    fn join<B: Task + 'static>(self, other: B) -> Parallel {
        Parallel::new(self, other)
    }
}

impl<T: Task + Sized + 'static> TaskExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    /// Task completing on its n-th advance, counting every advance it
    /// receives into a shared counter.
    struct Countdown {
        remaining: u32,
        advances: Rc<Cell<u32>>,
    }

    impl Task for Countdown {
        fn advance(&mut self) -> Progress {
            self.advances.set(self.advances.get() + 1);
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                Progress::Complete
            } else {
                Progress::Pending
            }
        }
    }

    fn countdown(steps: u32) -> (Countdown, Rc<Cell<u32>>) {
        let advances = Rc::new(Cell::new(0));
        (
            Countdown {
                remaining: steps,
                advances: Rc::clone(&advances),
            },
            advances,
        )
    }

    #[test]
    fn test_progress_predicates() {
        assert!(Progress::Complete.is_complete());
        assert!(!Progress::Complete.is_pending());
        assert!(Progress::Pending.is_pending());
        assert!(!Progress::Pending.is_complete());
    }

    #[test]
    fn test_sequence_drains_first_before_second() {
        let (a, a_advances) = countdown(3);
        let (b, b_advances) = countdown(2);
        let mut seq = a.then(b);

        // Three advances perform only A's work.
        for _ in 0..3 {
            assert_eq!(seq.advance(), Progress::Pending);
        }
        assert_eq!(a_advances.get(), 3);
        assert_eq!(b_advances.get(), 0);

        // B runs on the two following advances and the sequence
        // completes with it.
        assert_eq!(seq.advance(), Progress::Pending);
        assert_eq!(b_advances.get(), 1);
        assert_eq!(seq.advance(), Progress::Complete);
        assert_eq!(b_advances.get(), 2);
        assert_eq!(a_advances.get(), 3);
    }

    #[test]
    fn test_parallel_equal_step_budget() {
        let (a, a_advances) = countdown(2);
        let (b, b_advances) = countdown(5);
        let mut par = a.join(b);

        for tick in 1..=4 {
            assert_eq!(par.advance(), Progress::Pending, "tick {tick}");
        }
        assert_eq!(par.advance(), Progress::Complete);

        // A stopped receiving advances once it completed on tick 2.
        assert_eq!(a_advances.get(), 2);
        assert_eq!(b_advances.get(), 5);
    }

    #[test]
    fn test_parallel_completes_on_first_tick_when_both_instant() {
        let (a, _) = countdown(1);
        let (b, _) = countdown(1);
        let mut par = a.join(b);
        assert_eq!(par.advance(), Progress::Complete);
    }

    #[test]
    fn test_from_fn_completes_synchronously() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut action = from_fn(move || counter.set(counter.get() + 1));

        assert_eq!(action.advance(), Progress::Complete);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_noop_completes_immediately() {
        assert_eq!(noop().advance(), Progress::Complete);
    }

    #[test]
    fn test_lazy_defers_construction() {
        let built = Rc::new(Cell::new(false));
        let flag = Rc::clone(&built);
        let advances = Rc::new(Cell::new(0));
        let counter = Rc::clone(&advances);

        let mut task = lazy(move || {
            flag.set(true);
            Countdown {
                remaining: 2,
                advances: counter,
            }
        });

        assert!(!built.get());
        assert_eq!(task.advance(), Progress::Pending);
        assert!(built.get());
        assert_eq!(task.advance(), Progress::Complete);
        assert_eq!(advances.get(), 2);
    }

    #[test]
    fn test_lazy_factory_sees_earlier_phase_writes() {
        let steps = Rc::new(Cell::new(0u32));
        let advances = Rc::new(Cell::new(0));

        let write = {
            let steps = Rc::clone(&steps);
            from_fn(move || steps.set(2))
        };
        let build = {
            let steps = Rc::clone(&steps);
            let advances = Rc::clone(&advances);
            lazy(move || Countdown {
                remaining: steps.get(),
                advances,
            })
        };

        let mut plan = write.then(build);
        assert_eq!(plan.advance(), Progress::Pending); // write runs
        assert_eq!(plan.advance(), Progress::Pending); // countdown built with 2 steps
        assert_eq!(plan.advance(), Progress::Complete);
        assert_eq!(advances.get(), 2);
    }

    #[test]
    fn test_boxed_fold_runs_phases_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut plan: BoxedTask = Box::new(noop());
        for phase in 0..4 {
            let order = Rc::clone(&order);
            plan = Box::new(plan.then(from_fn(move || order.borrow_mut().push(phase))));
        }

        let mut completed = false;
        for _ in 0..32 {
            if plan.advance().is_complete() {
                completed = true;
                break;
            }
        }
        assert!(completed);
        assert_eq!(*order.borrow(), [0, 1, 2, 3]);
    }
}
