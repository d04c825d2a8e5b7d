//! Call-coalescing wrapper.
//!
//! The timer source is a `Scheduler` so the state machine runs under a manual
//! clock in tests and under `gloo-timers` in the browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Schedules one-shot tasks. Dropping the returned handle must cancel the
/// task if it has not fired yet (the contract of `gloo_timers::callback::Timeout`).
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

struct Inner<A, S: Scheduler> {
    wait_ms: u32,
    immediate: bool,
    scheduler: S,
    func: Box<dyn Fn(A)>,
    /// Bumped on every call; a timer only acts if it is still the latest.
    generation: Cell<u64>,
    armed: Cell<bool>,
    timer: RefCell<Option<S::Handle>>,
}

/// Collapses bursts of calls.
///
/// Trailing mode (`immediate == false`): the wrapped function runs once,
/// `wait_ms` after the last call of a burst, with that call's arguments.
///
/// Leading mode (`immediate == true`): the first call of an idle period runs
/// right away; every call restarts the window, and calls made while the
/// window is open are dropped.
pub struct Debouncer<A, S: Scheduler> {
    inner: Rc<Inner<A, S>>,
}

impl<A, S: Scheduler> Clone for Debouncer<A, S> {
    fn clone(&self) -> Self {
        Debouncer {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static, S: Scheduler + 'static> Debouncer<A, S> {
    pub fn new(wait_ms: u32, immediate: bool, scheduler: S, func: impl Fn(A) + 'static) -> Self {
        Debouncer {
            inner: Rc::new(Inner {
                wait_ms,
                immediate,
                scheduler,
                func: Box::new(func),
                generation: Cell::new(0),
                armed: Cell::new(false),
                timer: RefCell::new(None),
            }),
        }
    }

    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let call_now = inner.immediate && !inner.armed.get();

        let generation = inner.generation.get().wrapping_add(1);
        inner.generation.set(generation);

        let (deferred, now) = if inner.immediate {
            (None, Some(args))
        } else {
            (Some(args), None)
        };

        let weak = Rc::downgrade(inner);
        let task: Box<dyn FnOnce()> = Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.generation.get() != generation {
                return;
            }
            inner.armed.set(false);
            if let Some(args) = deferred {
                (inner.func)(args);
            }
        });

        let handle = inner.scheduler.schedule(inner.wait_ms, task);
        // Replacing the old handle cancels its timer.
        let previous = inner.timer.borrow_mut().replace(handle);
        drop(previous);
        inner.armed.set(true);

        if call_now {
            if let Some(args) = now {
                (inner.func)(args);
            }
        }
    }

    /// Whether a window is currently open.
    pub fn is_pending(&self) -> bool {
        self.inner.armed.get()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct Task {
        id: u64,
        due: u64,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// Manual clock: tasks only run inside `advance`.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        state: Rc<RefCell<ClockState>>,
    }

    pub struct ManualHandle {
        id: u64,
        state: Weak<RefCell<ClockState>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(state) = self.state.upgrade() {
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.tasks.retain(|t| t.id != self.id);
                }
            }
        }
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.state.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.state.borrow().tasks.len()
        }

        /// Move the clock forward, running due tasks in order.
        pub fn advance(&self, ms: u64) {
            let target = self.state.borrow().now + ms;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    let idx = state
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(i, _)| i);
                    idx.map(|i| {
                        let task = state.tasks.remove(i);
                        state.now = task.due;
                        task.run
                    })
                };
                match next {
                    Some(run) => run(),
                    None => break,
                }
            }
            self.state.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + u64::from(delay_ms);
            state.tasks.push(Task { id, due, run: task });
            ManualHandle {
                id,
                state: Rc::downgrade(&self.state),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;

    type Calls = Rc<RefCell<Vec<(u64, &'static str)>>>;

    fn recorder(clock: &ManualScheduler) -> (Calls, impl Fn(&'static str) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let clock = clock.clone();
        (calls, move |arg| sink.borrow_mut().push((clock.now(), arg)))
    }

    #[test]
    fn trailing_fires_once_with_last_arguments() {
        let clock = ManualScheduler::default();
        let (calls, f) = recorder(&clock);
        let debounced = Debouncer::new(100, false, clock.clone(), f);

        debounced.call("first");
        clock.advance(40);
        debounced.call("second");
        clock.advance(99);
        assert!(calls.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*calls.borrow(), vec![(140, "second")]);
        assert!(!debounced.is_pending());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn trailing_separate_bursts_fire_separately() {
        let clock = ManualScheduler::default();
        let (calls, f) = recorder(&clock);
        let debounced = Debouncer::new(50, false, clock.clone(), f);

        debounced.call("a");
        clock.advance(60);
        debounced.call("b");
        clock.advance(60);

        assert_eq!(*calls.borrow(), vec![(50, "a"), (110, "b")]);
    }

    #[test]
    fn immediate_fires_first_and_suppresses_window() {
        let clock = ManualScheduler::default();
        let (calls, f) = recorder(&clock);
        let debounced = Debouncer::new(100, true, clock.clone(), f);

        debounced.call("first");
        assert_eq!(*calls.borrow(), vec![(0, "first")]);

        clock.advance(30);
        debounced.call("suppressed");
        clock.advance(100);
        assert_eq!(calls.borrow().len(), 1);

        debounced.call("next burst");
        assert_eq!(calls.borrow().last(), Some(&(130, "next burst")));
    }

    #[test]
    fn immediate_window_restarts_on_each_call() {
        let clock = ManualScheduler::default();
        let (calls, f) = recorder(&clock);
        let debounced = Debouncer::new(100, true, clock.clone(), f);

        debounced.call("a");
        clock.advance(80);
        debounced.call("b");
        clock.advance(80);
        // 160ms since the first call, but only 80ms since the last one.
        debounced.call("c");
        assert_eq!(calls.borrow().len(), 1);
        assert!(debounced.is_pending());
    }
}
