//! Stream time values.
//!
//! Conversions accept any [`Ticks`] type: a non-negative count of ticks at a
//! fixed resolution. Unsigned tick counts keep negative durations out of
//! the API entirely.

use std::time::Duration;

/// A non-negative duration measured in whole ticks.
pub trait Ticks: Copy {
    /// Number of ticks in one second.
    const TICKS_PER_SECOND: u64;

    /// Returns the tick count.
    fn ticks(&self) -> u128;

    /// Creates a value from a tick count.
    ///
    /// # Panics
    ///
    /// Implementations panic if `ticks` cannot be represented.
    fn from_ticks(ticks: u128) -> Self;
}

/// Nanosecond ticks.
impl Ticks for Duration {
    const TICKS_PER_SECOND: u64 = 1_000_000_000;

    fn ticks(&self) -> u128 {
        self.as_nanos()
    }

    fn from_ticks(ticks: u128) -> Self {
        let per_sec = u128::from(Self::TICKS_PER_SECOND);
        let secs = u64::try_from(ticks / per_sec)
            .unwrap_or_else(|_| panic!("{} ns does not fit in a Duration", ticks));
        Duration::new(secs, (ticks % per_sec) as u32)
    }
}

/// Stream time in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(pub u64);

impl ClockTime {
    pub const ZERO: ClockTime = ClockTime(0);

    pub const fn from_nanos(ns: u64) -> Self {
        Self(ns)
    }

    /// # Panics
    ///
    /// Panics if the result exceeds `u64::MAX` nanoseconds.
    pub const fn from_millis(ms: u64) -> Self {
        match ms.checked_mul(1_000_000) {
            Some(ns) => Self(ns),
            None => panic!("ClockTime::from_millis: milliseconds do not fit in u64 nanoseconds"),
        }
    }

    /// # Panics
    ///
    /// Panics if the result exceeds `u64::MAX` nanoseconds.
    pub const fn from_secs(secs: u64) -> Self {
        match secs.checked_mul(1_000_000_000) {
            Some(ns) => Self(ns),
            None => panic!("ClockTime::from_secs: seconds do not fit in u64 nanoseconds"),
        }
    }

    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    pub fn to_duration(&self) -> Duration {
        Duration::from_nanos(self.0)
    }
}

impl Ticks for ClockTime {
    const TICKS_PER_SECOND: u64 = 1_000_000_000;

    fn ticks(&self) -> u128 {
        u128::from(self.0)
    }

    fn from_ticks(ticks: u128) -> Self {
        Self(narrow(ticks, "ClockTime"))
    }
}

impl From<Duration> for ClockTime {
    /// Saturates at `u64::MAX` nanoseconds.
    fn from(d: Duration) -> Self {
        Self(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }
}

/// Stream time in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Micros(pub u64);

impl Micros {
    pub const ZERO: Micros = Micros(0);

    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    pub fn to_duration(&self) -> Duration {
        Duration::from_micros(self.0)
    }
}

impl Ticks for Micros {
    const TICKS_PER_SECOND: u64 = 1_000_000;

    fn ticks(&self) -> u128 {
        u128::from(self.0)
    }

    fn from_ticks(ticks: u128) -> Self {
        Self(narrow(ticks, "Micros"))
    }
}

fn narrow(ticks: u128, what: &str) -> u64 {
    u64::try_from(ticks).unwrap_or_else(|_| panic!("{} ticks do not fit in {}", ticks, what))
}
