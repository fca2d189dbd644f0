use chrono::prelude::*;
use chrono::Weekday;
use tracing::{debug, warn};

use crate::error::CalendarError;
use crate::scheduling::format::format_yyyymmdd;
use crate::scheduling::{
    first_of_next_month, last_weekday_of_month, next_weekday_on_or_after, Cal, DateRoll,
};

/// Number of backward working-day steps searched for the previous monthly expiry.
pub const MAX_PREV_EXPIRY_STEPS: usize = 60;

/// The weekday on which exchange derivative contracts expire.
pub const EXPIRY_WEEKDAY: Weekday = Weekday::Thu;

/// Specifier for NSEFO contract expiry definitions.
#[derive(Debug, Copy, Hash, Clone, PartialEq, Eq)]
pub enum Expiry {
    /// Last Thursday of the contract month.
    ///
    /// A reference date after the month's last Thursday belongs to the next month's contract.
    Monthly,
    /// First Thursday on or after the reference date.
    Weekly,
}

impl Expiry {
    /// Get the unadjusted expiry Thursday for a contract live on `date`.
    pub fn unadjusted(&self, date: &NaiveDate) -> NaiveDate {
        match self {
            Expiry::Monthly => {
                let last = last_weekday_of_month(date, EXPIRY_WEEKDAY);
                if *date > last {
                    last_weekday_of_month(&first_of_next_month(date), EXPIRY_WEEKDAY)
                } else {
                    last
                }
            }
            // when this leaves the month it is the next month's first Thursday
            Expiry::Weekly => next_weekday_on_or_after(date, EXPIRY_WEEKDAY),
        }
    }

    /// Get the expiry date for a contract live on `date`.
    ///
    /// A holiday Thursday is replaced by the previous working day of `cal`, skipping weekends
    /// and any other holidays.
    ///
    /// # Examples
    /// ```rust
    /// # use nsefo::scheduling::{Cal, Expiry, nd};
    /// let cal = Cal::with_holidays(vec![nd(2021, 1, 28)]);
    /// assert_eq!(Expiry::Monthly.get(&nd(2021, 1, 1), &Cal::default()), nd(2021, 1, 28));
    /// assert_eq!(Expiry::Monthly.get(&nd(2021, 1, 1), &cal), nd(2021, 1, 27));
    /// ```
    pub fn get(&self, date: &NaiveDate, cal: &Cal) -> NaiveDate {
        let thursday = self.unadjusted(date);
        let expiry = if cal.is_holiday(&thursday) {
            cal.adjust_expiry(&thursday)
        } else {
            thursday
        };
        debug!(kind = ?self, %date, %expiry, "expiry computed");
        expiry
    }
}

/// Get the monthly expiry date for a contract live on `date`.
pub fn monthly_expiry(date: &NaiveDate, cal: &Cal) -> NaiveDate {
    Expiry::Monthly.get(date, cal)
}

/// Get the weekly expiry date for a contract live on `date`.
pub fn weekly_expiry(date: &NaiveDate, cal: &Cal) -> NaiveDate {
    Expiry::Weekly.get(date, cal)
}

/// Get the monthly expiry of the contract cycle preceding the one live on `date`.
///
/// # Errors
///
/// Returns [`CalendarError::PrevExpiryNotFound`] if no earlier cycle is found within
/// [`MAX_PREV_EXPIRY_STEPS`] working days.
pub fn prev_monthly_expiry(date: &NaiveDate, cal: &Cal) -> Result<NaiveDate, CalendarError> {
    prev_monthly_expiry_bounded(date, cal, MAX_PREV_EXPIRY_STEPS)
}

/// Get the previous monthly expiry, searching at most `max_steps` working days back from the
/// current monthly expiry.
///
/// Each step moves to the previous working day of `cal` and recomputes the monthly expiry; the
/// first one differing from the current expiry is returned.
pub fn prev_monthly_expiry_bounded(
    date: &NaiveDate,
    cal: &Cal,
    max_steps: usize,
) -> Result<NaiveDate, CalendarError> {
    let current = monthly_expiry(date, cal);
    let mut sample_date = current;
    for _ in 0..max_steps {
        sample_date = cal.prev_bus_day(&sample_date);
        let expiry = monthly_expiry(&sample_date, cal);
        if expiry != current {
            return Ok(expiry);
        }
    }
    warn!(%date, %current, max_steps, "could not find previous monthly expiry");
    Err(CalendarError::PrevExpiryNotFound {
        date: format_yyyymmdd(&current),
        steps: max_steps,
    })
}
