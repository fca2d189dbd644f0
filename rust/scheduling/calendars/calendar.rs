use chrono::prelude::*;
use chrono::Days;

/// Create a `NaiveDate` from year, month and day.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Return the calendar day after `date`, rolling over month and year ends.
pub fn next_date(date: &NaiveDate) -> NaiveDate {
    *date + Days::new(1)
}

/// Return the calendar day before `date`, rolling over month and year starts.
pub fn prev_date(date: &NaiveDate) -> NaiveDate {
    *date - Days::new(1)
}

/// Return the first day of the month containing `date`.
pub(crate) fn first_of_month(date: &NaiveDate) -> NaiveDate {
    *date - Days::new(u64::from(date.day0()))
}

/// Return the first day of the month after the one containing `date`.
pub(crate) fn first_of_next_month(date: &NaiveDate) -> NaiveDate {
    // 31 days past the 1st always lands in the following month
    first_of_month(&(first_of_month(date) + Days::new(31)))
}

/// Return the last date on or before the end of `date`'s month that falls on `weekday`.
pub(crate) fn last_weekday_of_month(date: &NaiveDate, weekday: Weekday) -> NaiveDate {
    let month_end = first_of_next_month(date) - Days::new(1);
    let back = (7 + month_end.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    month_end - Days::new(u64::from(back))
}

/// Return the first date on or after `date` that falls on `weekday`.
pub(crate) fn next_weekday_on_or_after(date: &NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    *date + Days::new(u64::from(ahead))
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nd() {
        let d = nd(2021, 6, 24);
        assert_eq!((d.year(), d.month(), d.day()), (2021, 6, 24));
    }

    #[test]
    #[should_panic]
    fn test_nd_invalid() {
        nd(2021, 2, 29);
    }

    #[test]
    fn test_next_date_rollover() {
        assert_eq!(next_date(&nd(2021, 1, 31)), nd(2021, 2, 1));
        assert_eq!(next_date(&nd(2020, 2, 28)), nd(2020, 2, 29));
        assert_eq!(next_date(&nd(2021, 12, 31)), nd(2022, 1, 1));
    }

    #[test]
    fn test_prev_date_rollover() {
        assert_eq!(prev_date(&nd(2021, 3, 1)), nd(2021, 2, 28));
        assert_eq!(prev_date(&nd(2024, 3, 1)), nd(2024, 2, 29));
        assert_eq!(prev_date(&nd(2022, 1, 1)), nd(2021, 12, 31));
    }

    #[test]
    fn test_first_of_month() {
        assert_eq!(first_of_month(&nd(2021, 6, 24)), nd(2021, 6, 1));
        assert_eq!(first_of_month(&nd(2021, 6, 1)), nd(2021, 6, 1));
    }

    #[test]
    fn test_first_of_next_month() {
        assert_eq!(first_of_next_month(&nd(2021, 1, 31)), nd(2021, 2, 1));
        assert_eq!(first_of_next_month(&nd(2021, 2, 1)), nd(2021, 3, 1));
        assert_eq!(first_of_next_month(&nd(2024, 2, 29)), nd(2024, 3, 1));
        assert_eq!(first_of_next_month(&nd(2021, 12, 15)), nd(2022, 1, 1));
    }

    #[test]
    fn test_last_weekday_of_month() {
        assert_eq!(last_weekday_of_month(&nd(2021, 1, 1), Weekday::Thu), nd(2021, 1, 28));
        // month ending on a Thursday
        assert_eq!(last_weekday_of_month(&nd(2020, 12, 3), Weekday::Thu), nd(2020, 12, 31));
        assert_eq!(last_weekday_of_month(&nd(2024, 2, 10), Weekday::Thu), nd(2024, 2, 29));
    }

    #[test]
    fn test_next_weekday_on_or_after() {
        assert_eq!(next_weekday_on_or_after(&nd(2021, 1, 1), Weekday::Thu), nd(2021, 1, 7));
        assert_eq!(next_weekday_on_or_after(&nd(2021, 1, 7), Weekday::Thu), nd(2021, 1, 7));
        assert_eq!(next_weekday_on_or_after(&nd(2021, 12, 31), Weekday::Thu), nd(2022, 1, 6));
    }
}
