//! This is the documentation for nsefo-calendar
//!
//! Exchange calendar dates for the National Stock Exchange futures-and-options segment:
//! monthly, previous monthly and weekly contract expiries, working-day arithmetic over a
//! caller-supplied holiday calendar, and the small date and line utilities around them.
//!
//! The typed API lives in [`scheduling`]; [`datestr`] offers the same operations over
//! `YYYYMMDD` strings.

#[cfg(test)]
mod tests;

pub mod error;
pub use error::CalendarError;

pub mod json;

pub mod lines;

pub mod scheduling;

pub mod datestr;
