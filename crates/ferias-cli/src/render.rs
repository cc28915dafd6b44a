//! Terminal rendering for the countdown board.

use ferias_core::{Config, TimeRemaining};

/// ANSI clear-screen-and-home prefix used between frames.
pub const CLEAR: &str = "\x1b[2J\x1b[H";

/// Zero-pad a counter to at least two digits.
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

/// The live board: title, the four counters, the school-day counter, footer.
pub fn board(cfg: &Config, remaining: TimeRemaining, school_days_left: u32) -> String {
    format!(
        "{}\n\n  {} Dias   {} Horas   {} Minutos   {} Segundos\n\n  {} Dias Letivos\n\n{}\n",
        cfg.ui.title,
        pad2(remaining.days),
        pad2(remaining.hours),
        pad2(remaining.minutes),
        pad2(remaining.seconds),
        pad2(school_days_left as u64),
        cfg.ui.footer,
    )
}

/// The terminal view once the countdown has expired.
pub fn end_view(cfg: &Config) -> String {
    format!("{}\n\n  {}\n", cfg.ui.title, cfg.ui.end_message)
}
