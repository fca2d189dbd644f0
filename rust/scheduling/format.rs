//! Conversion between [`NaiveDate`] and the exchange's string date forms.

use chrono::prelude::*;

use crate::error::CalendarError;

/// Parse a date in the fixed 8-character `YYYYMMDD` form.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if `s` is not exactly 8 ASCII digits, does not
/// describe a valid Gregorian date, or falls in year 0.
pub fn parse_yyyymmdd(s: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidDate {
        input: s.to_string(),
    };
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .ok()
        .filter(is_representable)
        .ok_or_else(invalid)
}

/// Whether `date` has an 8-character `YYYYMMDD` form, i.e. lies in years 1 to 9999.
pub(crate) fn is_representable(date: &NaiveDate) -> bool {
    (1..=9999).contains(&date.year())
}

/// Format a date in the fixed 8-character `YYYYMMDD` form.
pub fn format_yyyymmdd(date: &NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Format a date in bhav style, `DD-Mmm-YYYY`, e.g. `24-Jun-2021`.
pub fn format_bhav(date: &NaiveDate) -> String {
    date.format("%d-%b-%Y").to_string()
}
