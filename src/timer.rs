//! Restartable one-shot timers.
//!
//! Callers must `cancel()` before `arm()` so that at most one callback is ever
//! pending per timer.

use std::time::Duration;

/// A single cancelable scheduled callback.
pub trait OneShotTimer {
    /// Schedules `callback` to run once after `delay`.
    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>);

    /// Drops the pending callback, if any.
    fn cancel(&self);

    fn is_armed(&self) -> bool;
}

/// One-shot timer driven by the Slint event loop.
#[derive(Default)]
pub struct SlintOneShot {
    timer: slint::Timer,
}

impl SlintOneShot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OneShotTimer for SlintOneShot {
    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) {
        let mut callback = Some(callback);
        self.timer
            .start(slint::TimerMode::SingleShot, delay, move || {
                if let Some(callback) = callback.take() {
                    callback();
                }
            });
    }

    fn cancel(&self) {
        self.timer.stop();
    }

    fn is_armed(&self) -> bool {
        self.timer.running()
    }
}

/// Virtual-clock timers for deterministic tests.
#[cfg(test)]
pub mod testing {
    use super::OneShotTimer;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    thread_local! {
        static SLINT_BACKEND: () = i_slint_backend_testing::init_no_event_loop();
    }

    /// Installs the headless Slint backend with mocked time on this test thread.
    pub fn init_slint_backend() {
        SLINT_BACKEND.with(|_| {});
    }

    struct Pending {
        id: u64,
        due: Duration,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ClockState {
        now: Duration,
        next_id: u64,
        pending: Vec<Pending>,
    }

    /// Shared virtual clock; time only moves through [`ManualClock::advance`].
    #[derive(Clone, Default)]
    pub struct ManualClock {
        state: Rc<RefCell<ClockState>>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> Duration {
            self.state.borrow().now
        }

        pub fn timer(&self) -> ManualTimer {
            ManualTimer {
                clock: self.clone(),
                current: Cell::new(None),
                arm_log: RefCell::new(Vec::new()),
            }
        }

        pub fn pending_count(&self) -> usize {
            self.state.borrow().pending.len()
        }

        /// Moves time forward, firing due callbacks in order.
        pub fn advance(&self, by: Duration) {
            let target = self.now() + by;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    let earliest = state
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(i, _)| i);
                    earliest.map(|i| {
                        let pending = state.pending.remove(i);
                        state.now = pending.due;
                        pending.callback
                    })
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
            self.state.borrow_mut().now = target;
        }

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> u64 {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + delay;
            state.pending.push(Pending { id, due, callback });
            id
        }

        fn unschedule(&self, id: u64) {
            self.state.borrow_mut().pending.retain(|p| p.id != id);
        }

        fn is_pending(&self, id: u64) -> bool {
            self.state.borrow().pending.iter().any(|p| p.id == id)
        }

        fn due_of(&self, id: u64) -> Option<Duration> {
            self.state
                .borrow()
                .pending
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.due)
        }
    }

    pub struct ManualTimer {
        clock: ManualClock,
        current: Cell<Option<u64>>,
        /// Virtual time at which each `arm` call happened, and its delay.
        arm_log: RefCell<Vec<(Duration, Duration)>>,
    }

    impl ManualTimer {
        pub fn arm_count(&self) -> usize {
            self.arm_log.borrow().len()
        }

        pub fn arm_log(&self) -> Vec<(Duration, Duration)> {
            self.arm_log.borrow().clone()
        }

        /// Virtual time at which the pending callback will fire.
        pub fn due(&self) -> Option<Duration> {
            self.current.get().and_then(|id| self.clock.due_of(id))
        }
    }

    impl OneShotTimer for ManualTimer {
        fn arm(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) {
            if let Some(previous) = self.current.take() {
                self.clock.unschedule(previous);
            }
            self.arm_log.borrow_mut().push((self.clock.now(), delay));
            self.current.set(Some(self.clock.schedule(delay, callback)));
        }

        fn cancel(&self) {
            if let Some(id) = self.current.take() {
                self.clock.unschedule(id);
            }
        }

        fn is_armed(&self) -> bool {
            self.current
                .get()
                .is_some_and(|id| self.clock.is_pending(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{ManualClock, init_slint_backend};
    use super::{OneShotTimer, SlintOneShot};
    use i_slint_backend_testing::mock_elapsed_time;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn fires_once_at_delay() {
        let clock = ManualClock::new();
        let timer = clock.timer();
        let fired = Rc::new(Cell::new(0));

        let counter = fired.clone();
        timer.arm(
            Duration::from_millis(100),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        clock.advance(Duration::from_millis(99));
        assert_eq!(fired.get(), 0);
        assert!(timer.is_armed());

        clock.advance(Duration::from_millis(1));
        assert_eq!(fired.get(), 1);
        assert!(!timer.is_armed());

        clock.advance(Duration::from_secs(10));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn cancel_drops_pending_callback() {
        let clock = ManualClock::new();
        let timer = clock.timer();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        timer.arm(Duration::from_millis(10), Box::new(move || flag.set(true)));
        timer.cancel();
        clock.advance(Duration::from_millis(50));

        assert!(!fired.get());
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn rearming_replaces_previous() {
        let clock = ManualClock::new();
        let timer = clock.timer();
        timer.arm(Duration::from_millis(10), Box::new(|| {}));
        timer.arm(Duration::from_millis(20), Box::new(|| {}));
        assert_eq!(clock.pending_count(), 1);
        assert_eq!(timer.due(), Some(Duration::from_millis(20)));
    }

    fn arm_repeating(timer: &Rc<SlintOneShot>, fired: &Rc<Cell<u32>>) {
        let weak = Rc::downgrade(timer);
        let fired_in_callback = fired.clone();
        timer.arm(
            Duration::from_millis(100),
            Box::new(move || {
                fired_in_callback.set(fired_in_callback.get() + 1);
                if let Some(timer) = weak.upgrade() {
                    timer.cancel();
                    arm_repeating(&timer, &fired_in_callback);
                }
            }),
        );
    }

    #[test]
    fn slint_timer_rearms_from_its_own_callback() {
        init_slint_backend();
        let timer = Rc::new(SlintOneShot::new());
        let fired = Rc::new(Cell::new(0));

        arm_repeating(&timer, &fired);
        assert!(timer.is_armed());

        for period in 1..=5 {
            mock_elapsed_time(60);
            assert_eq!(fired.get(), period - 1);
            mock_elapsed_time(60);
            assert_eq!(fired.get(), period);
            assert!(timer.is_armed());
        }

        timer.cancel();
        assert!(!timer.is_armed());
        mock_elapsed_time(500);
        assert_eq!(fired.get(), 5);
    }

    #[test]
    fn slint_timer_fires_once_without_rearm() {
        init_slint_backend();
        let timer = SlintOneShot::new();
        let fired = Rc::new(Cell::new(0));

        let counter = fired.clone();
        timer.arm(
            Duration::from_millis(100),
            Box::new(move || counter.set(counter.get() + 1)),
        );
        mock_elapsed_time(150);
        assert_eq!(fired.get(), 1);
        assert!(!timer.is_armed());

        mock_elapsed_time(500);
        assert_eq!(fired.get(), 1);
    }
}
