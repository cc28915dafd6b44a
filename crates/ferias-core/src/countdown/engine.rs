//! Countdown engine implementation.
//!
//! The engine is a wall-clock-based state machine. It does not use internal
//! threads - the caller is responsible for calling `tick()` periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Counting -> TimeUp
//! ```
//!
//! `TimeUp` is terminal: the transition happens once and never resets.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CountdownEngine::new(target);
//! // In a loop:
//! engine.tick(); // Returns Some(Event::CountdownFinished) when the target is reached
//! ```

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::remaining::TimeRemaining;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Counting,
    TimeUp,
}

/// Core countdown engine.
///
/// Operates on wall-clock readings -- no internal thread.
/// The caller is responsible for calling `tick()` periodically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownEngine {
    target: DateTime<Local>,
    /// Target instant in milliseconds since the epoch.
    target_epoch_ms: u64,
    state: CountdownState,
    /// Remaining time as of the last tick. Not meaningful once `TimeUp`.
    remaining: TimeRemaining,
}

impl CountdownEngine {
    /// Create a new engine counting down to `target`.
    ///
    /// Starts in `Counting`; the first `tick()` brings the remaining time
    /// up to date (and transitions straight to `TimeUp` if the target is
    /// already in the past).
    pub fn new(target: DateTime<Local>) -> Self {
        Self {
            target,
            target_epoch_ms: target.timestamp_millis().max(0) as u64,
            state: CountdownState::Counting,
            remaining: TimeRemaining::from_millis(0),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    pub fn is_time_up(&self) -> bool {
        self.state == CountdownState::TimeUp
    }

    /// Remaining time as of the last tick.
    pub fn remaining(&self) -> TimeRemaining {
        self.remaining
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, school_days_left: u32) -> Event {
        Event::StateSnapshot {
            state: self.state,
            days: self.remaining.days,
            hours: self.remaining.hours,
            minutes: self.remaining.minutes,
            seconds: self.remaining.seconds,
            school_days_left,
            target: self.target,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Call periodically. Recomputes the remaining time from the current
    /// clock reading.
    ///
    /// Returns `Some(Event::Tick)` while counting,
    /// `Some(Event::CountdownFinished)` exactly once on the tick that
    /// reaches the target, and `None` on every call after that.
    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(now_ms())
    }

    /// Deterministic variant of [`tick`](Self::tick) for a fixed clock reading.
    pub fn tick_at(&mut self, now_ms: u64) -> Option<Event> {
        match self.state {
            CountdownState::Counting => match TimeRemaining::until(now_ms, self.target_epoch_ms) {
                Some(remaining) => {
                    self.remaining = remaining;
                    Some(Event::Tick {
                        days: remaining.days,
                        hours: remaining.hours,
                        minutes: remaining.minutes,
                        seconds: remaining.seconds,
                        at: Utc::now(),
                    })
                }
                None => {
                    self.state = CountdownState::TimeUp;
                    self.remaining = TimeRemaining::from_millis(0);
                    Some(Event::CountdownFinished {
                        target: self.target,
                        at: Utc::now(),
                    })
                }
            },
            // Terminal: later ticks are no-ops.
            CountdownState::TimeUp => None,
        }
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const TARGET_MS: u64 = 1_766_545_200_000;

    fn engine() -> CountdownEngine {
        CountdownEngine::new(Local.timestamp_millis_opt(TARGET_MS as i64).unwrap())
    }

    #[test]
    fn counting_tick_reports_remaining() {
        let mut engine = engine();
        assert_eq!(engine.state(), CountdownState::Counting);

        let event = engine.tick_at(TARGET_MS - 90_061_000);
        match event {
            Some(Event::Tick {
                days,
                hours,
                minutes,
                seconds,
                ..
            }) => {
                assert_eq!((days, hours, minutes, seconds), (1, 1, 1, 1));
            }
            other => panic!("Expected Tick, got {other:?}"),
        }
        assert_eq!(engine.remaining().days, 1);
        assert!(!engine.is_time_up());
    }

    #[test]
    fn reaching_target_finishes_once() {
        let mut engine = engine();
        let event = engine.tick_at(TARGET_MS);
        assert!(matches!(event, Some(Event::CountdownFinished { .. })));
        assert_eq!(engine.state(), CountdownState::TimeUp);

        // Later ticks are no-ops; the state never leaves TimeUp.
        assert!(engine.tick_at(TARGET_MS + 1_000).is_none());
        assert!(engine.tick_at(TARGET_MS + 60_000).is_none());
        assert_eq!(engine.state(), CountdownState::TimeUp);
    }

    #[test]
    fn past_target_finishes_on_first_tick() {
        let mut engine = engine();
        let event = engine.tick_at(TARGET_MS + 5_000);
        assert!(matches!(event, Some(Event::CountdownFinished { .. })));
        assert!(engine.is_time_up());
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let mut engine = engine();
        engine.tick_at(TARGET_MS - 90_061_000);
        let snap = engine.snapshot(18);
        match snap {
            Event::StateSnapshot {
                state,
                days,
                school_days_left,
                ..
            } => {
                assert_eq!(state, CountdownState::Counting);
                assert_eq!(days, 1);
                assert_eq!(school_days_left, 18);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
