use chrono::prelude::*;
use chrono::Weekday;

use crate::error::CalendarError;

/// Return the full English weekday name of a date, e.g. `"Thursday"`.
pub fn weekday_name(date: &NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Parse a full English weekday name, ignoring case and surrounding whitespace.
///
/// The three-letter abbreviations are rejected.
///
/// # Examples
/// ```rust
/// # use nsefo::scheduling::parse_weekday;
/// # use chrono::Weekday;
/// assert_eq!(parse_weekday("  THURSDAY ").unwrap(), Weekday::Thu);
/// assert!(parse_weekday("thu").is_err());
/// ```
pub fn parse_weekday(name: &str) -> Result<Weekday, CalendarError> {
    let name_ = name.trim();
    name_
        .parse::<Weekday>()
        .ok()
        .filter(|_| name_.len() > 3)
        .ok_or_else(|| CalendarError::InvalidWeekday {
            name: name.to_string(),
        })
}

/// Parse a month number given as text, e.g. `"6"` or `"06"`.
pub fn parse_month(month: &str) -> Result<u32, CalendarError> {
    match month.trim().parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => Ok(m),
        _ => Err(CalendarError::InvalidMonth {
            month: month.to_string(),
        }),
    }
}

/// Return all dates in the given month which fall on the given weekday, in ascending order.
///
/// An invalid `month` yields an empty vector.
pub fn dates_of_weekday(year: i32, month: u32, weekday: Weekday) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return vec![];
    };
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    first
        .iter_days()
        .skip(offset as usize)
        .step_by(7)
        .take_while(|d| d.month() == month)
        .collect()
}
