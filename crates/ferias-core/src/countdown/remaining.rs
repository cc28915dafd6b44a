use serde::{Deserialize, Serialize};

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60_000;
pub const MS_PER_HOUR: u64 = 3_600_000;
pub const MS_PER_DAY: u64 = 86_400_000;

/// Time left until the target, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    /// Decompose a millisecond distance into days/hours/minutes/seconds.
    ///
    /// Fixed-radix integer division; the sub-second remainder is truncated.
    pub fn from_millis(distance_ms: u64) -> Self {
        Self {
            days: distance_ms / MS_PER_DAY,
            hours: (distance_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Remaining time at `now_ms` against `target_ms`, or `None` once the
    /// target has been reached.
    pub fn until(now_ms: u64, target_ms: u64) -> Option<Self> {
        if now_ms >= target_ms {
            return None;
        }
        Some(Self::from_millis(target_ms - now_ms))
    }

    /// Total milliseconds represented, truncated to the second.
    pub fn as_millis(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }
}
