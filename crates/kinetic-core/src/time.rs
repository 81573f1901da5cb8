//! Monotonic timestamps with microsecond resolution.

use std::fmt;
use std::ops::Add;
use std::time::Duration;

pub const MICROS_PER_SECOND: u64 = 1_000_000;
pub const MICROS_PER_MILLI: u64 = 1_000;

/// A point on a monotonic clock, in microseconds since an arbitrary origin.
///
/// Pointer events carry these; only differences between timestamps from the
/// same clock are meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    micros: u64,
}

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp { micros: 0 };

    pub const fn from_micros(micros: u64) -> Self {
        Self { micros }
    }

    /// Saturates at the largest representable timestamp.
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            micros: millis.saturating_mul(MICROS_PER_MILLI),
        }
    }

    pub const fn as_micros(self) -> u64 {
        self.micros
    }

    pub const fn as_millis(self) -> u64 {
        self.micros / MICROS_PER_MILLI
    }

    /// Whole seconds component.
    pub const fn seconds(self) -> u64 {
        self.micros / MICROS_PER_SECOND
    }

    /// Microseconds within the current second.
    pub const fn subsec_micros(self) -> u64 {
        self.micros % MICROS_PER_SECOND
    }

    /// Microseconds elapsed from `earlier` to `self`, or zero if `earlier` is
    /// not actually earlier.
    pub fn micros_since(self, earlier: Timestamp) -> u64 {
        self.micros.saturating_sub(earlier.micros)
    }

    /// Arithmetic mean of a set of timestamps, or `None` for an empty set.
    ///
    /// Summation is done in 128 bits so long-running clocks cannot overflow.
    pub fn mean<I>(timestamps: I) -> Option<Timestamp>
    where
        I: IntoIterator<Item = Timestamp>,
    {
        let mut sum: u128 = 0;
        let mut count: u128 = 0;
        for timestamp in timestamps {
            sum += u128::from(timestamp.micros);
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(Timestamp::from_micros((sum / count) as u64))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp::from_micros(self.micros.saturating_add(rhs.as_micros() as u64))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}s", self.seconds(), self.subsec_micros())
    }
}
