//! Allows calendars to be stored and loaded as JSON, with the ``serde`` crate.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CalendarError;

/// Handles the `to` and `from` JSON conversion.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Create an object from a JSON file.
    fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, CalendarError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}
