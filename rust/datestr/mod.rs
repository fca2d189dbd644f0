//! Exchange calendar functions over `YYYYMMDD` date strings.
//!
//! These wrap the typed [`scheduling`](crate::scheduling) API for callers that hold dates in
//! the exchange's fixed 8-character wire form. Every date parameter is parsed with
//! [`parse_yyyymmdd`] and every returned date is formatted with [`format_yyyymmdd`], except
//! [`convert_date_to_bhav_style`].
//!
//! ### Example
//! ```rust
//! # use nsefo::datestr::{get_nsefo_monthly_expiry_date, get_nsefo_weekly_expiry_date};
//! # use nsefo::scheduling::Cal;
//! let holidays = Cal::try_from_yyyymmdd::<&str>(&[]).unwrap();
//! assert_eq!(get_nsefo_monthly_expiry_date("20210101", &holidays).unwrap(), "20210128");
//! assert_eq!(get_nsefo_weekly_expiry_date("20210101", &holidays).unwrap(), "20210107");
//! ```

use std::fmt::Display;

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::scheduling::format::is_representable;
use crate::scheduling::{
    dates_of_weekday, format_bhav, format_yyyymmdd, monthly_expiry, next_date, parse_month,
    parse_weekday, parse_yyyymmdd, prev_date, prev_monthly_expiry, weekday_name, weekly_expiry,
    Cal, Clock, DateRoll, LocalClock, WorkingDays,
};

/// Sentinel marking an unspecified argument of [`get_working_days`].
pub const UNSPECIFIED: &str = "-1";

/// Get all dates in the given month which fall on the given weekday.
///
/// `year` and `month` may be numbers or strings (`2021`, `"2021"`, `6`, `"06"`). The weekday
/// name is matched ignoring case and surrounding whitespace. An invalid year, month or weekday
/// name yields an empty vector.
pub fn get_dates_of_weekday<Y: Display, M: Display>(
    year: Y,
    month: M,
    weekday_name: &str,
) -> Vec<String> {
    let year = year.to_string().trim().parse::<i32>();
    let month = parse_month(&month.to_string());
    let weekday = parse_weekday(weekday_name);
    match (year, month, weekday) {
        (Ok(y), Ok(m), Ok(w)) => dates_of_weekday(y, m, w)
            .iter()
            .map(format_yyyymmdd)
            .collect(),
        _ => vec![],
    }
}

/// Get the monthly expiry date for an NSEFO contract live on `date`.
pub fn get_nsefo_monthly_expiry_date(date: &str, holidays: &Cal) -> Result<String, CalendarError> {
    let date = parse_yyyymmdd(date)?;
    Ok(format_yyyymmdd(&monthly_expiry(&date, holidays)))
}

/// Get the monthly expiry date of the NSEFO contract cycle preceding the one live on `date`.
///
/// # Errors
///
/// Returns [`CalendarError::PrevExpiryNotFound`] if the backward search is exhausted.
pub fn get_nsefo_prev_monthly_expiry_date(
    date: &str,
    holidays: &Cal,
) -> Result<String, CalendarError> {
    let date = parse_yyyymmdd(date)?;
    Ok(format_yyyymmdd(&prev_monthly_expiry(&date, holidays)?))
}

/// Get the weekly expiry date for an NSEFO contract live on `date`.
pub fn get_nsefo_weekly_expiry_date(date: &str, holidays: &Cal) -> Result<String, CalendarError> {
    let date = parse_yyyymmdd(date)?;
    Ok(format_yyyymmdd(&weekly_expiry(&date, holidays)))
}

/// Get today's local date.
pub fn get_todays_date() -> String {
    get_todays_date_from(&LocalClock)
}

/// Get today's date from a given clock.
pub fn get_todays_date_from<C: Clock>(clock: &C) -> String {
    format_yyyymmdd(&clock.today())
}

/// Get the calendar day before `date`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if `date` is malformed or the step leaves years 1 to 9999.
pub fn get_prev_date(date: &str) -> Result<String, CalendarError> {
    step_date(date, prev_date)
}

/// Get the calendar day after `date`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if `date` is malformed or the step leaves years 1 to 9999.
pub fn get_next_date(date: &str) -> Result<String, CalendarError> {
    step_date(date, next_date)
}

fn step_date(date: &str, step: fn(&NaiveDate) -> NaiveDate) -> Result<String, CalendarError> {
    Some(step(&parse_yyyymmdd(date)?))
        .filter(is_representable)
        .map(|d| format_yyyymmdd(&d))
        .ok_or_else(|| CalendarError::InvalidDate {
            input: date.to_string(),
        })
}

/// Get the full English weekday name of `date`, e.g. `"Thursday"`.
pub fn get_weekday_name(date: &str) -> Result<String, CalendarError> {
    Ok(weekday_name(&parse_yyyymmdd(date)?))
}

/// Get the first working day strictly after `date`.
pub fn get_next_working_day(date: &str, holidays: &Cal) -> Result<String, CalendarError> {
    Ok(format_yyyymmdd(&holidays.next_bus_day(&parse_yyyymmdd(date)?)))
}

/// Get the last working day strictly before `date`.
pub fn get_prev_working_day(date: &str, holidays: &Cal) -> Result<String, CalendarError> {
    Ok(format_yyyymmdd(&holidays.prev_bus_day(&parse_yyyymmdd(date)?)))
}

/// Convert a `YYYYMMDD` date to bhav style `DD-Mmm-YYYY`, e.g. `20210624` to `24-Jun-2021`.
pub fn convert_date_to_bhav_style(date: &str) -> Result<String, CalendarError> {
    Ok(format_bhav(&parse_yyyymmdd(date)?))
}

/// Get working days by a range and/or count.
///
/// `start_date`, `end_date` and `num_days` accept [`UNSPECIFIED`] (`"-1"`). See
/// [`WorkingDays`] for how the given arguments combine. An empty `weekday` keeps every date;
/// otherwise only dates on that weekday are kept, and an unknown weekday name keeps none.
/// A negative `num_days` other than the sentinel yields no days from the counted ranges.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] or [`CalendarError::InvalidNumDays`] for malformed
/// arguments.
pub fn get_working_days(
    start_date: &str,
    end_date: &str,
    num_days: &str,
    weekday: &str,
    holidays: &Cal,
) -> Result<Vec<String>, CalendarError> {
    let parse_opt = |s: &str| -> Result<_, CalendarError> {
        if s.trim() == UNSPECIFIED {
            Ok(None)
        } else {
            parse_yyyymmdd(s.trim()).map(Some)
        }
    };
    let num_days = if num_days.trim() == UNSPECIFIED {
        None
    } else {
        let n = num_days
            .trim()
            .parse::<i64>()
            .map_err(|_| CalendarError::InvalidNumDays {
                input: num_days.to_string(),
            })?;
        Some(usize::try_from(n).unwrap_or(0))
    };
    let start = parse_opt(start_date)?;
    let end = parse_opt(end_date)?;
    let weekday = if weekday.trim().is_empty() {
        None
    } else {
        match parse_weekday(weekday) {
            Ok(w) => Some(w),
            Err(_) => return Ok(vec![]),
        }
    };
    let query = WorkingDays {
        start,
        end,
        num_days,
        weekday,
    };
    let days = query.query(holidays);
    Ok(days.iter().map(format_yyyymmdd).collect())
}
