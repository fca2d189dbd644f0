mod cal;
mod calendar;
mod dateroll;
mod named;

pub use crate::scheduling::calendars::{
    cal::Cal,
    calendar::{nd, next_date, prev_date},
    dateroll::DateRoll,
    named::get_calendar_by_name,
};
pub(crate) use crate::scheduling::calendars::calendar::{
    first_of_next_month, last_weekday_of_month, next_weekday_on_or_after,
};
