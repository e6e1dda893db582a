//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and storage format for birthdays.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for a contact's birthday.
///
/// Parsed from a `DD.MM.YYYY` string at construction time and held as a
/// calendar date, so downstream date arithmetic never sees a raw string.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("05.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly `DD.MM.YYYY`: two-digit day, two-digit month, four-digit year
    /// - Must be a real calendar date (Feb 30 and month 13 are rejected)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string is malformed or
    /// names a date that does not exist.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !Self::has_expected_shape(&raw) {
            return Err(ValidationError::InvalidDate(raw));
        }

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidDate(raw)),
        }
    }

    /// Check the DD.MM.YYYY digit grouping before handing off to chrono,
    /// which would otherwise accept un-padded days and months.
    fn has_expected_shape(raw: &str) -> bool {
        let mut parts = raw.split('.');
        let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(d), Some(m), Some(y), None) => (d, m, y),
            _ => return false,
        };
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        day.len() == 2
            && month.len() == 2
            && year.len() == 4
            && all_digits(day)
            && all_digits(month)
            && all_digits(year)
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day-of-month component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - zero-padded DD.MM.YYYY
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
