use crate::hal::solenoid::Solenoid;
use crate::svc::clock::MonotonicClock;

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct DwellReport {
    pub requested_ms: u32,
    pub decrements: u32,
    pub remaining_ms: u32,
    pub polls: u32,
}

/// Cooperative wait on a millisecond clock.
///
/// The remaining count is decremented once per elapsed millisecond observed
/// on the clock. Polling never sleeps; `housekeeping` runs on every poll so
/// the caller can yield or toggle a heartbeat. When the wait is over the
/// solenoid is de-energized, whatever state requested the dwell.
pub struct Dwell<'a> {
    clock: &'a dyn MonotonicClock,
    solenoid: &'a dyn Solenoid,
}

impl<'a> Dwell<'a> {
    pub fn new(clock: &'a dyn MonotonicClock, solenoid: &'a dyn Solenoid) -> Self {
        Self { clock, solenoid }
    }

    pub fn wait(&self, duration_ms: u32, housekeeping: &mut dyn FnMut()) -> DwellReport {
        let mut report = DwellReport {
            requested_ms: duration_ms,
            remaining_ms: duration_ms,
            ..Default::default()
        };

        let mut last_tick = self.clock.now();

        while report.remaining_ms > 0 {
            housekeeping();
            report.polls += 1;

            let now = self.clock.now();
            let ticks = now.millis_since(last_tick);

            if ticks > 0 {
                last_tick = now;
                let n = ticks.min(report.remaining_ms);
                report.remaining_ms -= n;
                report.decrements += n;
            }
        }

        self.solenoid.de_energize();

        log::trace!("dwell {}ms done in {} polls", duration_ms, report.polls);

        report
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use crate::svc::clock::{FakeClock, Instant};

    use super::*;

    #[derive(Default)]
    struct FakeSolenoid {
        energized: Cell<bool>,
        writes: Cell<usize>,
    }

    impl Solenoid for FakeSolenoid {
        fn set_energized(&self, energized: bool) {
            self.energized.set(energized);
            self.writes.set(self.writes.get() + 1);
        }
    }

    struct ScriptedClock(RefCell<VecDeque<u32>>);

    impl ScriptedClock {
        fn new(readings: &[u32]) -> Self {
            Self(RefCell::new(readings.iter().copied().collect()))
        }
    }

    impl MonotonicClock for ScriptedClock {
        fn now(&self) -> Instant {
            let t = self
                .0
                .borrow_mut()
                .pop_front()
                .expect("clock read past end of script");
            Instant::from_millis(t)
        }
    }

    #[test]
    fn test_dwell_consumes_exactly_requested_ticks() {
        let clock = FakeClock::new(0, 1);
        let solenoid = FakeSolenoid::default();
        let dwell = Dwell::new(&clock, &solenoid);

        let report = dwell.wait(500, &mut || {});

        assert_eq!(report.decrements, 500);
        assert_eq!(report.remaining_ms, 0);
        assert_eq!(report.polls, 500);
        assert_eq!(clock.peek(), 501);
    }

    #[test]
    fn test_dwell_does_not_overshoot_on_coarse_clock() {
        let clock = FakeClock::new(100, 3);
        let solenoid = FakeSolenoid::default();
        let dwell = Dwell::new(&clock, &solenoid);

        let report = dwell.wait(10, &mut || {});

        assert_eq!(report.decrements, 10);
        assert_eq!(report.remaining_ms, 0);
        assert_eq!(report.polls, 4);
    }

    #[test]
    fn test_dwell_counts_each_tick_once() {
        // Repeated readings of the same millisecond must not count twice,
        // a jump of several milliseconds must not be skipped.
        let clock = ScriptedClock::new(&[7, 7, 8, 8, 8, 9, 12, 12, 13]);
        let solenoid = FakeSolenoid::default();
        let dwell = Dwell::new(&clock, &solenoid);

        let report = dwell.wait(6, &mut || {});

        assert_eq!(report.decrements, 6);
        assert_eq!(report.remaining_ms, 0);
        assert_eq!(report.polls, 8);
        assert!(clock.0.borrow().is_empty());
    }

    #[test]
    fn test_dwell_across_clock_wrap() {
        let clock = FakeClock::new(u32::MAX - 2, 1);
        let solenoid = FakeSolenoid::default();
        let dwell = Dwell::new(&clock, &solenoid);

        let report = dwell.wait(20, &mut || {});

        assert_eq!(report.decrements, 20);
        assert_eq!(report.remaining_ms, 0);
    }

    #[test]
    fn test_housekeeping_runs_on_every_poll() {
        let clock = FakeClock::new(0, 1);
        let solenoid = FakeSolenoid::default();
        let dwell = Dwell::new(&clock, &solenoid);
        let mut calls = 0;

        let report = dwell.wait(20, &mut || calls += 1);

        assert_eq!(calls, 20);
        assert_eq!(report.polls, 20);
    }

    #[test]
    fn test_solenoid_forced_off_after_dwell() {
        let clock = FakeClock::new(0, 1);
        let solenoid = FakeSolenoid::default();
        solenoid.set_energized(true);
        let dwell = Dwell::new(&clock, &solenoid);

        dwell.wait(5, &mut || {});

        assert!(!solenoid.energized.get());
        assert_eq!(solenoid.writes.get(), 2);
    }

    #[test]
    fn test_zero_dwell_still_forces_off() {
        let clock = FakeClock::new(0, 1);
        let solenoid = FakeSolenoid::default();
        solenoid.set_energized(true);
        let dwell = Dwell::new(&clock, &solenoid);

        let report = dwell.wait(0, &mut || {});

        assert_eq!(report.decrements, 0);
        assert_eq!(report.polls, 0);
        assert!(!solenoid.energized.get());
    }
}
