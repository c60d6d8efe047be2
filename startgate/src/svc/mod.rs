pub use clock::{Instant, MonotonicClock, StdClock};
pub use dwell::{Dwell, DwellReport};

pub mod clock;
pub mod dwell;
