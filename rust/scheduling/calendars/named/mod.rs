//! Static data for pre-existing named holiday calendars.
//!

pub mod bus;
pub mod nse;

use std::collections::HashMap;

use crate::error::CalendarError;
use crate::scheduling::format::parse_yyyymmdd;
use crate::scheduling::Cal;

fn get_weekmask_by_name(name: &str) -> Result<Vec<u8>, CalendarError> {
    let hmap: HashMap<&str, &[u8]> =
        HashMap::from([("bus", bus::WEEKMASK), ("nse", nse::WEEKMASK)]);
    match hmap.get(name) {
        None => Err(CalendarError::UnknownCalendar {
            name: name.to_string(),
        }),
        Some(value) => Ok(value.to_vec()),
    }
}

fn get_holidays_by_name(name: &str) -> Result<Vec<chrono::NaiveDate>, CalendarError> {
    let hmap: HashMap<&str, &[&str]> =
        HashMap::from([("bus", bus::HOLIDAYS), ("nse", nse::HOLIDAYS)]);
    match hmap.get(name) {
        None => Err(CalendarError::UnknownCalendar {
            name: name.to_string(),
        }),
        Some(value) => value.iter().map(|x| parse_yyyymmdd(x)).collect(),
    }
}

/// Return a static [`Cal`] specified by a pre-defined named identifier.
///
/// Names are case-insensitive. Available: `"bus"`, `"nse"`.
pub fn get_calendar_by_name(name: &str) -> Result<Cal, CalendarError> {
    let name_ = name.trim().to_lowercase();
    Ok(Cal::new(
        get_holidays_by_name(&name_)?,
        get_weekmask_by_name(&name_)?,
    ))
}
