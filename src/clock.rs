//! Definition of the wall-clock capability consumed by the timeline.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock timestamps for event records.
pub trait Clock {
    /// Current time in milliseconds since the unix epoch.
    fn now_ms(&self) -> u64;
}

/// [`Clock`] backed by [`SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

// Any `() -> u64` callable works as a clock.
impl<F: Fn() -> u64> Clock for F {
    fn now_ms(&self) -> u64 {
        self()
    }
}
