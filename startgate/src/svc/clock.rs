#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Instant(u32);

impl Instant {
    pub fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub fn to_millis(&self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, correct across the 32 bit wrap.
    pub fn millis_since(&self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

/// Monotonically increasing millisecond clock.
pub trait MonotonicClock {
    fn now(&self) -> Instant;
}

pub struct StdClock {
    start: std::time::Instant,
}

impl Default for StdClock {
    fn default() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl MonotonicClock for StdClock {
    fn now(&self) -> Instant {
        let t_ms = self.start.elapsed().as_millis();

        // milliseconds, 32 bits, wraps every 49 days
        Instant(t_ms as u32)
    }
}

/// Clock advancing by a fixed step every time it is read.
#[cfg(test)]
pub(crate) struct FakeClock {
    now: std::cell::Cell<u32>,
    step: u32,
}

#[cfg(test)]
impl FakeClock {
    pub(crate) fn new(start: u32, step: u32) -> Self {
        Self {
            now: std::cell::Cell::new(start),
            step,
        }
    }

    pub(crate) fn peek(&self) -> u32 {
        self.now.get()
    }
}

#[cfg(test)]
impl MonotonicClock for FakeClock {
    fn now(&self) -> Instant {
        let t = self.now.get();
        self.now.set(t.wrapping_add(self.step));
        Instant(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_since_wraps() {
        let before = Instant::from_millis(u32::MAX - 1);
        let after = Instant::from_millis(3);
        assert_eq!(after.millis_since(before), 5);
    }

    #[test]
    fn test_std_clock_is_monotonic() {
        let clock = StdClock::default();
        let a = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = clock.now();
        assert!(b.millis_since(a) >= 2);
    }

    #[test]
    fn test_fake_clock_advances_on_read() {
        let clock = FakeClock::new(10, 3);
        assert_eq!(clock.now().to_millis(), 10);
        assert_eq!(clock.now().to_millis(), 13);
        assert_eq!(clock.peek(), 16);
    }
}
