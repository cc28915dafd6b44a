//! # Ferias Core Library
//!
//! This library provides the core logic for Ferias, a terminal countdown to
//! the start of the school vacation. All operations are available via a
//! standalone CLI binary that is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: A wall-clock-based state machine that requires
//!   the caller to periodically invoke `tick()` for progress updates
//! - **School Calendar**: Weekday counting over a fixed set of closure dates
//! - **Storage**: TOML-based configuration carrying the calendar constants
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: Countdown state machine
//! - [`SchoolCalendar`]: Remaining school-day arithmetic
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod countdown;
pub mod error;
pub mod events;
pub mod storage;

pub use calendar::SchoolCalendar;
pub use countdown::{CountdownEngine, CountdownState, TimeRemaining};
pub use error::ConfigError;
pub use events::Event;
pub use storage::Config;
