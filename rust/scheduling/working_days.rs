use chrono::prelude::*;
use chrono::Weekday;
use tracing::debug;

use crate::scheduling::{Cal, DateRoll};

/// A working-days range query.
///
/// Up to three ranges are produced, in order:
///
/// - `start` and `end`: working days from `start` to `end`, both inclusive when working days.
/// - `start` and `num_days`: `num_days` working days beginning on or after `start`.
/// - `end` and `num_days`: `num_days` working days ending on or before `end`.
///
/// Once the first range is taken, `start` and `end` both continue from `end` rolled back to a
/// working day, so the counted ranges are anchored there rather than at the given `start`.
/// The ranges are concatenated with the backward count first, then the span, then the forward
/// count, without removing duplicates, and finally filtered to `weekday` if one is given.
///
/// # Examples
/// ```rust
/// # use nsefo::scheduling::{Cal, WorkingDays, nd};
/// let query = WorkingDays {
///     start: Some(nd(2021, 1, 1)),
///     end: Some(nd(2021, 1, 8)),
///     ..Default::default()
/// };
/// let days = query.query(&Cal::default());
/// assert_eq!(days.len(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingDays {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub num_days: Option<usize>,
    pub weekday: Option<Weekday>,
}

impl WorkingDays {
    /// Evaluate the query against a working day calendar.
    pub fn query(&self, cal: &Cal) -> Vec<NaiveDate> {
        let (mut start, mut end) = (self.start, self.end);
        let mut days: Vec<NaiveDate> = Vec::new();
        if let (Some(s), Some(e)) = (start, end) {
            days.extend(cal.bus_date_range(&s, &e));
            let anchor = cal.roll_backward_bus_day(&e);
            start = Some(anchor);
            end = Some(anchor);
        }
        if let (Some(s), Some(n)) = (start, self.num_days) {
            days.extend(forward_from(&s, n, cal));
        }
        if let (Some(e), Some(n)) = (end, self.num_days) {
            let mut back = backward_from(&e, n, cal);
            back.extend(days);
            days = back;
        }
        debug!(query = ?self, count = days.len(), "working days computed");
        match self.weekday {
            None => days,
            Some(weekday) => days.into_iter().filter(|d| d.weekday() == weekday).collect(),
        }
    }
}

fn forward_from(start: &NaiveDate, num_days: usize, cal: &Cal) -> Vec<NaiveDate> {
    let mut sample_date = cal.prev_bus_day(start);
    (0..num_days)
        .map(|_| {
            sample_date = cal.next_bus_day(&sample_date);
            sample_date
        })
        .collect()
}

fn backward_from(end: &NaiveDate, num_days: usize, cal: &Cal) -> Vec<NaiveDate> {
    let mut sample_date = cal.next_bus_day(end);
    let mut vec: Vec<NaiveDate> = (0..num_days)
        .map(|_| {
            sample_date = cal.prev_bus_day(&sample_date);
            sample_date
        })
        .collect();
    vec.reverse();
    vec
}
