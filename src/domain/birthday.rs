//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Exact textual shape accepted for birthdays. chrono alone would also take
/// unpadded months/days and signed or oversized years.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("birthday pattern is valid"));

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// A birthday written as a real calendar date in `YYYY-MM-DD` form.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("2000-01-01").unwrap();
/// assert_eq!(birthday.as_str(), "2000-01-01");
/// assert!(Birthday::new("2001-02-29").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format and the date itself.
    ///
    /// # Validation Rules
    ///
    /// - Four-digit year, two-digit month, two-digit day, `-` separated
    /// - Month in 01–12 and day valid for that month and year
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for anything else.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the birthday as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The first anniversary of this birthday on or after `today`.
    ///
    /// A 29 February birthday falls on 1 March in non-leap years. Past the
    /// last year chrono can represent the result saturates at `NaiveDate::MAX`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        match self.anniversary_in(today.year()) {
            Some(this_year) if this_year >= today => this_year,
            _ => self
                .anniversary_in(today.year() + 1)
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Whole days from `today` until the next anniversary; 0 on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        self.date
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
