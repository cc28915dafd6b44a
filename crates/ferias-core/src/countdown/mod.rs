mod engine;
mod remaining;

pub use engine::{CountdownEngine, CountdownState};
pub use remaining::TimeRemaining;
