//! A clock that only moves when the test moves it.

use kinetic_core::{Clock, Timestamp};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: Timestamp,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self { now: start }
    }

    pub fn advance_millis(&mut self, ms: u64) {
        self.now = self.now + Duration::from_millis(ms);
    }

    /// Jumps to `timestamp`. Moving backwards is allowed; velocity
    /// estimation treats a non-positive interval as no elapsed time.
    pub fn set(&mut self, timestamp: Timestamp) {
        self.now = timestamp;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_only_when_advanced() {
        let mut clock = ManualClock::new(Timestamp::from_millis(1_000));
        assert_eq!(clock.now(), Timestamp::from_millis(1_000));
        assert_eq!(clock.now(), Timestamp::from_millis(1_000));

        clock.advance_millis(16);
        assert_eq!(clock.now().as_millis(), 1_016);
        assert_eq!(clock.micros_since(Timestamp::from_millis(1_000)), 16_000);

        clock.set(Timestamp::ZERO);
        assert_eq!(clock.now(), Timestamp::ZERO);
    }
}
