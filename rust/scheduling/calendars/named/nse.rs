//! National Stock Exchange futures-and-options segment working week.
//!
//! The exchange publishes its trading holidays yearly; none are carried here and callers
//! supply the current list through [`Cal::try_from_yyyymmdd`](crate::scheduling::Cal) or a
//! JSON calendar file.

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub const HOLIDAYS: &[&str] = &[]; // YYYYMMDD
