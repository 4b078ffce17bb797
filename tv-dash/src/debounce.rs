//! Cancel-and-reschedule debouncing on top of a pluggable timer.

use std::cell::RefCell;
use std::time::Duration;

/// A one-shot timer source, e.g. `window.setTimeout` in the browser.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancel a scheduled task and drop it. Cancelling a task that already ran
    /// only releases the handle.
    fn cancel(&self, handle: Self::Handle);
}

/// Collapses a burst of calls into one run, `delay` after the last call.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: RefCell::new(None),
        }
    }

    /// Schedule `task`, dropping whatever the previous call scheduled.
    pub fn call(&self, task: impl FnOnce() + 'static) {
        let previous = self.pending.borrow_mut().take();
        if let Some(handle) = previous {
            self.scheduler.cancel(handle);
        }
        let handle = self.scheduler.schedule(self.delay, Box::new(task));
        *self.pending.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;
    use std::cell::Cell;
    use std::rc::Rc;

    const QUIET: Duration = Duration::from_millis(120);

    #[test]
    fn test_single_call_runs_after_delay() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), QUIET);
        let runs = Rc::new(Cell::new(0));

        let r = runs.clone();
        debouncer.call(move || r.set(r.get() + 1));

        clock.advance(Duration::from_millis(119));
        assert_eq!(runs.get(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(runs.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_burst_collapses_to_last_call() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), QUIET);
        let seen = Rc::new(RefCell::new(Vec::new()));

        for i in 0..10 {
            let s = seen.clone();
            debouncer.call(move || s.borrow_mut().push(i));
            clock.advance(Duration::from_millis(10));
        }
        assert!(seen.borrow().is_empty());
        assert_eq!(clock.pending(), 1);

        clock.advance(QUIET);
        assert_eq!(*seen.borrow(), vec![9]);
    }

    #[test]
    fn test_superseded_task_is_dropped() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), QUIET);
        let captured = Rc::new(());

        let c = captured.clone();
        debouncer.call(move || drop(c));
        assert_eq!(Rc::strong_count(&captured), 2);

        debouncer.call(|| {});
        assert_eq!(Rc::strong_count(&captured), 1);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_separate_bursts_run_separately() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), QUIET);
        let runs = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let r = runs.clone();
            debouncer.call(move || r.set(r.get() + 1));
            clock.advance(Duration::from_millis(200));
        }

        assert_eq!(runs.get(), 2);
    }
}
