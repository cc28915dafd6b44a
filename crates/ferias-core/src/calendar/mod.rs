//! School calendar arithmetic.

mod school_days;

pub use school_days::SchoolCalendar;
