use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CalendarError;
use crate::scheduling::format::parse_yyyymmdd;
use crate::scheduling::DateRoll;

/// A working day calendar with a singular list of exchange holidays.
///
/// A working day calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are not general working days. For the
///   exchange these are Saturday and Sunday, i.e. `[5, 6]`.
/// - `holidays`: which defines specific dates that may be exceptions to the general working week, and cannot be
///   working days.
///
/// Holidays are always supplied by the caller; nothing is shared process-wide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDate>,
    pub(crate) week_mask: HashSet<Weekday>,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be working days. `week_mask` is a vector of days
    /// (0=Mon,.., 6=Sun) that are excluded from the working week. Values above 6 are ignored.
    pub fn new(holidays: Vec<NaiveDate>, week_mask: Vec<u8>) -> Self {
        Cal {
            holidays: IndexSet::from_iter(holidays),
            week_mask: week_mask
                .into_iter()
                .filter_map(|v| Weekday::try_from(v).ok())
                .collect(),
        }
    }

    /// Create a Saturday/Sunday weekend calendar with the given exchange holidays.
    pub fn with_holidays(holidays: Vec<NaiveDate>) -> Self {
        Cal::new(holidays, vec![5, 6])
    }

    /// Create a Saturday/Sunday weekend calendar from holidays given as `YYYYMMDD` strings.
    ///
    /// # Examples
    /// ```rust
    /// # use nsefo::scheduling::{Cal, nd, DateRoll};
    /// let cal = Cal::try_from_yyyymmdd(&["20210126", "20210311"]).unwrap();
    /// assert!(cal.is_holiday(&nd(2021, 1, 26)));
    /// ```
    pub fn try_from_yyyymmdd<S: AsRef<str>>(holidays: &[S]) -> Result<Self, CalendarError> {
        let dates = holidays
            .iter()
            .map(|s| parse_yyyymmdd(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Cal::with_holidays(dates))
    }

    /// Return the holidays of the calendar in insertion order.
    pub fn holidays(&self) -> impl Iterator<Item = &NaiveDate> {
        self.holidays.iter()
    }
}

impl Default for Cal {
    /// A Saturday/Sunday weekend calendar with no holidays.
    fn default() -> Self {
        Cal::with_holidays(vec![])
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }
}

impl Cal {
    /// Adjust an expiry candidate under the exchange rule: a holiday moves to the previous working day.
    pub(crate) fn adjust_expiry(&self, date: &NaiveDate) -> NaiveDate {
        self.roll_backward_bus_day(date)
    }
}
