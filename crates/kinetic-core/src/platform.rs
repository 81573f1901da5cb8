//! Clock abstraction for hosts that do not stamp their own pointer events.
//!
//! Pointer events normally arrive with a timestamp from the host toolkit.
//! When they do not, the host can stamp them from a [`Clock`]. Tests drive a
//! manual clock instead so that velocities are deterministic.

use crate::Timestamp;
use std::sync::OnceLock;
use web_time::Instant;

static PROCESS_ORIGIN: OnceLock<Instant> = OnceLock::new();

impl Timestamp {
    /// Reads a process-relative monotonic clock.
    ///
    /// The origin is fixed the first time this is called, so the first
    /// reading is close to zero.
    pub fn now() -> Timestamp {
        let origin = PROCESS_ORIGIN.get_or_init(Instant::now);
        Timestamp::from_micros(origin.elapsed().as_micros() as u64)
    }
}

/// Provides monotonic timestamps.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Timestamp;

    /// Microseconds since `earlier`, saturating at zero.
    fn micros_since(&self, earlier: Timestamp) -> u64 {
        self.now().micros_since(earlier)
    }
}

/// The process-relative monotonic clock behind [`Timestamp::now`], backed by
/// `web_time::Instant`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
        assert_eq!(clock.micros_since(Timestamp::from_micros(u64::MAX)), 0);
    }

    #[test]
    fn system_clock_shares_the_process_origin() {
        let before = Timestamp::now();
        let reading = SystemClock.now();
        let after = Timestamp::now();
        assert!(before <= reading && reading <= after);
    }
}
