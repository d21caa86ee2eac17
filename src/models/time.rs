use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minutes in one canonical availability slot.
pub const SLOT_MINUTES: u16 = 30;

/// Wall-clock time of day at minute precision.
///
/// Stored as minutes since midnight. `24:00` (1440 minutes) is a valid
/// sentinel value meaning "end of day" and is only legal as an exclusive
/// upper bound, never as a slot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// End-of-day sentinel, `24:00`.
    pub const END_OF_DAY: ClockTime = ClockTime(24 * 60);

    /// Last representable instant of the day, `23:59`.
    pub const LAST_MINUTE: ClockTime = ClockTime(24 * 60 - 1);

    /// Start of the final half-hour slot of the day, `23:30`.
    pub const LAST_HALF_HOUR: ClockTime = ClockTime(23 * 60 + 30);

    /// Create a time from hour/minute components.
    ///
    /// # Returns
    /// * `Some(ClockTime)` for `00:00` through `24:00` inclusive
    /// * `None` if the components are out of range
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        // Bound the hour before multiplying so oversized input can never
        // overflow the u16 arithmetic below.
        if hour > 24 || minute >= 60 {
            return None;
        }
        let total = hour * 60 + minute;
        if total > 24 * 60 {
            return None;
        }
        Some(ClockTime(total))
    }

    /// Create from raw minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes > 24 * 60 {
            return None;
        }
        Some(ClockTime(minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Whether this is the `24:00` end-of-day sentinel.
    pub fn is_end_of_day(&self) -> bool {
        *self == Self::END_OF_DAY
    }

    /// Advance by `minutes`, saturating at `24:00`.
    pub fn add_minutes(&self, minutes: u16) -> ClockTime {
        ClockTime((self.0 + minutes).min(24 * 60))
    }

    /// Minutes from `self` to `later`, or 0 if `later` is earlier.
    pub fn span_until(&self, later: ClockTime) -> u16 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Error produced when parsing a `"HH:MM"` string fails.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid time of day: {0:?}")]
pub struct ParseClockTimeError(pub String);

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ParseClockTimeError(s.to_string()))?;
        let hour: u16 = h.parse().map_err(|_| ParseClockTimeError(s.to_string()))?;
        let minute: u16 = m.parse().map_err(|_| ParseClockTimeError(s.to_string()))?;
        ClockTime::new(hour, minute).ok_or_else(|| ParseClockTimeError(s.to_string()))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
