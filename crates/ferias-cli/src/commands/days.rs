//! Remaining school-day queries.

use chrono::NaiveDate;
use ferias_core::Config;
use serde::Serialize;

use crate::render;

#[derive(Serialize)]
struct DaysReport {
    from: NaiveDate,
    last_day: NaiveDate,
    school_days_left: u32,
}

pub fn run(from: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let calendar = cfg.school_calendar()?;
    let from = match from {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")?,
        None => chrono::Local::now().date_naive(),
    };
    let school_days_left = calendar.remaining_from(from);

    if json {
        let report = DaysReport {
            from,
            last_day: calendar.last_day(),
            school_days_left,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} Dias Letivos", render::pad2(school_days_left as u64));
    }
    Ok(())
}
