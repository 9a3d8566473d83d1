// ABOUTME: Monotonic clock implementation
// ABOUTME: Microseconds elapsed since a process-wide origin Instant

use std::sync::OnceLock;
use std::time::Instant;

/// Source of presentation timestamps
pub trait Clock {
    /// Current monotonic time in microseconds
    fn now_micros(&self) -> i64;
}

/// Process-wide origin so timestamps from different decoders are comparable
fn origin() -> Instant {
    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    *ORIGIN.get_or_init(Instant::now)
}

/// Clock backed by [`Instant`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl MonotonicClock {
    /// Create a new monotonic clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for MonotonicClock {
    fn now_micros(&self) -> i64 {
        i64::try_from(origin().elapsed().as_micros()).unwrap_or(i64::MAX)
    }
}
