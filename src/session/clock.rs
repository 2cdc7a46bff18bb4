use std::time::{Duration, Instant};

/// Monotonic time source for session timing.
///
/// Readings are offsets from an arbitrary origin; runners only subtract them.
pub trait Clock {
    fn now(&mut self) -> Duration;
}

/// Wall-clock time since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that advances by a fixed step on every reading.
#[derive(Debug, Clone, Copy)]
pub struct SteppingClock {
    current: Duration,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        SteppingClock { current: Duration::ZERO, step }
    }
}

impl Clock for SteppingClock {
    fn now(&mut self) -> Duration {
        let reading = self.current;
        self.current += self.step;
        reading
    }
}
