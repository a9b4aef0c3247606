//! Host clock seam.
//!
//! The scheduler reads a monotonic millisecond timestamp on every start and
//! every tick. Hosts normally use [`MonotonicClock`]; tests drive time
//! explicitly with [`ManualClock`]. Wraparound is out of scope.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond timestamp source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Milliseconds elapsed since clock creation.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for deterministic tests. Cheap to clone; all clones
/// share the same cell.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ms(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_set_and_advance() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0);
        clock.set_ms(250);
        assert_eq!(clock.now_ms(), 250);
        clock.advance_ms(16);
        assert_eq!(clock.now_ms(), 266);

        let shared = clock.clone();
        shared.advance_ms(4);
        assert_eq!(clock.now_ms(), 270);
    }

    #[test]
    fn monotonic_clock_never_decreases() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
