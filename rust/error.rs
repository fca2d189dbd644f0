//! Error types for the crate.

/// Error type for all fallible operations in the crate.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// A date string is not 8 ASCII digits or does not describe a Gregorian date.
    #[error("invalid date: '{input}' (expected a valid YYYYMMDD date)")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// A month value is outside 1..=12.
    #[error("invalid month: '{month}' (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month, as given.
        month: String,
    },

    /// A weekday name is not one of the seven English weekday names.
    #[error("invalid weekday name: '{name}'")]
    InvalidWeekday {
        /// The rejected name.
        name: String,
    },

    /// The number of days for a working-days query is not an integer.
    #[error("invalid number of days: '{input}'")]
    InvalidNumDays {
        /// The rejected input.
        input: String,
    },

    /// A named calendar does not exist.
    #[error("'{name}' is not found in list of existing calendars.")]
    UnknownCalendar {
        /// The requested calendar name.
        name: String,
    },

    /// The previous monthly expiry search did not cross a contract boundary.
    #[error("could not find previous monthly expiry for {date} within {steps} working days")]
    PrevExpiryNotFound {
        /// The monthly expiry the search started from, as `YYYYMMDD`.
        date: String,
        /// The number of backward working-day steps taken.
        steps: usize,
    },

    /// Line storage failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Calendar (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            input: "2021013".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date: '2021013' (expected a valid YYYYMMDD date)"
        );
    }

    #[test]
    fn error_prev_expiry_not_found() {
        let err = CalendarError::PrevExpiryNotFound {
            date: "20210128".to_string(),
            steps: 60,
        };
        assert_eq!(
            err.to_string(),
            "could not find previous monthly expiry for 20210128 within 60 working days"
        );
    }

    #[test]
    fn error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CalendarError = io.into();
        assert!(matches!(err, CalendarError::Io(_)));
        assert_eq!(err.to_string(), "missing");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
