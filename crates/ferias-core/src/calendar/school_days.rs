//! Remaining school-day counting.
//!
//! A school day is a weekday (Monday through Friday) that is not in the
//! closure set (holidays and recess days inside the term).

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

/// The last day of classes plus the closure dates inside the term.
///
/// Immutable after construction; counting is a pure function of the input
/// date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolCalendar {
    last_day: NaiveDate,
    closures: BTreeSet<NaiveDate>,
}

impl SchoolCalendar {
    pub fn new<I>(last_day: NaiveDate, closures: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            last_day,
            closures: closures.into_iter().collect(),
        }
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn is_closure(&self, date: NaiveDate) -> bool {
        self.closures.contains(&date)
    }

    /// A weekday that is not a closure date.
    pub fn is_school_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_closure(date)
    }

    /// Count school days from `today` through the last day of classes,
    /// inclusive. Returns 0 once `today` is past the last day.
    ///
    /// Advances exactly one calendar day per step; time of day plays no
    /// part.
    pub fn remaining_from(&self, today: NaiveDate) -> u32 {
        let mut count = 0;
        let mut day = today;
        while day <= self.last_day {
            if self.is_school_day(day) {
                count += 1;
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        count
    }
}
