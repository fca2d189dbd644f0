//! Create a working day [`Cal`] and derive exchange derivative expiry dates.
//!
//! The purpose of this module is to provide objects which replicate the National Stock
//! Exchange futures-and-options (NSEFO) contract calendar, including;
//! - Working day stepping that skips weekends and exchange holidays.
//! - Monthly, previous monthly and weekly [`Expiry`] derivation with holiday adjustment.
//! - Working-day range queries via [`WorkingDays`].
//!
//! # Calendars and Date Adjustment
//!
//! ## Calendars
//!
//! A [`Cal`] is a simple holiday and weekend specification. It implements the [`DateRoll`]
//! trait which provides simple date adjustment, which this crate calls **rolling**. This
//! involves moving forward or backward from non-working days to working days.
//!
//! ### Example
//! This example creates a working day calendar with Saturday and Sunday weekends and a
//! specific holiday (Republic Day 2021). It rolls Tuesday 26th January 2021 under the
//! *'following'* and *'previous'* rules.
//! ```rust
//! # use nsefo::scheduling::{Cal, nd, DateRoll};
//! let cal = Cal::with_holidays(vec![nd(2021, 1, 26)]);
//! assert_eq!(nd(2021, 1, 27), cal.roll_forward_bus_day(&nd(2021, 1, 26)));
//! assert_eq!(nd(2021, 1, 25), cal.roll_backward_bus_day(&nd(2021, 1, 26)));
//! ```
//!
//! # Expiries
//!
//! Exchange derivative contracts expire on a Thursday. A monthly contract expires on the last
//! Thursday of its month, and a weekly contract on the next Thursday. When that Thursday is an
//! exchange holiday the expiry moves to the previous working day.
//!
//! ### Example
//! ```rust
//! # use nsefo::scheduling::{Cal, nd, Expiry, prev_monthly_expiry};
//! let cal = Cal::with_holidays(vec![nd(2021, 3, 25)]);
//! assert_eq!(Expiry::Monthly.get(&nd(2021, 3, 2), &cal), nd(2021, 3, 24));
//! assert_eq!(Expiry::Weekly.get(&nd(2021, 3, 2), &cal), nd(2021, 3, 4));
//! assert_eq!(prev_monthly_expiry(&nd(2021, 4, 1), &cal).unwrap(), nd(2021, 3, 24));
//! ```

mod calendars;
mod clock;
mod expiry;
pub(crate) mod format;
mod weekday;
mod working_days;

mod serde;

pub use crate::scheduling::{
    calendars::{
        get_calendar_by_name, nd, next_date, prev_date, Cal, DateRoll,
    },
    clock::{Clock, FixedClock, LocalClock},
    expiry::{
        monthly_expiry, prev_monthly_expiry, prev_monthly_expiry_bounded, weekly_expiry, Expiry,
        EXPIRY_WEEKDAY, MAX_PREV_EXPIRY_STEPS,
    },
    format::{format_bhav, format_yyyymmdd, parse_yyyymmdd},
    weekday::{dates_of_weekday, parse_month, parse_weekday, weekday_name},
    working_days::WorkingDays,
};
pub(crate) use crate::scheduling::calendars::{
    first_of_next_month, last_weekday_of_month, next_weekday_on_or_after,
};
