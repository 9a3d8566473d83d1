// ABOUTME: Clock abstraction for mediacodec-ext
// ABOUTME: Monotonic microsecond timestamps for decoded output buffers

pub mod clock;

pub use clock::{Clock, MonotonicClock};
