use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::CountdownState;

/// Every recompute of the countdown produces an Event.
/// The CLI renders from them or prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Periodic recompute while counting.
    Tick {
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
        at: DateTime<Utc>,
    },
    /// The target instant has been reached. Emitted exactly once.
    CountdownFinished {
        target: DateTime<Local>,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: CountdownState,
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
        school_days_left: u32,
        target: DateTime<Local>,
        at: DateTime<Utc>,
    },
}
