//! Date conversions between the public API and ACBS.
//!
//! The public API speaks date-only strings (`YYYY-MM-DD`). ACBS speaks
//! date-time strings pinned to midnight UTC (`YYYY-MM-DDT00:00:00Z`) and
//! sometimes returns `null` for optional dates.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, Months, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIDNIGHT_TIME_SUFFIX: &str = "T00:00:00Z";

/// ACBS sentinel for "no expiry".
pub const MAXIMUM_DATE_TIME: &str = "9999-12-31T00:00:00Z";

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of [`MAXIMUM_DATE_TIME`].
const LATEST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(9999, 12, 31) {
    Some(date) => date,
    None => NaiveDate::MAX,
};

static DATE_ONLY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date-only pattern compiles"));

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("expected a date-time string but received an empty value")]
    Empty,
    #[error("`{0}` does not match the YYYY-MM-DD format")]
    NotDateOnly(String),
    #[error("`{0}` is not a valid calendar date")]
    InvalidCalendarDate(String),
}

/// Drops the time-of-day part of an ACBS date-time string.
pub fn remove_time_component(date_time: &str) -> Result<String, DateFormatError> {
    if date_time.is_empty() {
        return Err(DateFormatError::Empty);
    }

    Ok(date_only_part(date_time).to_string())
}

/// Like [`remove_time_component`], but passes an absent value straight through.
pub fn remove_time_component_if_present(date_time: Option<&str>) -> Option<String> {
    date_time.map(|value| date_only_part(value).to_string())
}

pub fn add_midnight_time_component(date: &str) -> Result<String, DateFormatError> {
    if !DATE_ONLY_PATTERN.is_match(date) {
        return Err(DateFormatError::NotDateOnly(date.to_string()));
    }

    Ok(format!("{date}{MIDNIGHT_TIME_SUFFIX}"))
}

/// Clamps a caller supplied date so it is never later than `today`.
pub fn earliest_of(today: NaiveDate, candidate: NaiveDate) -> NaiveDate {
    today.min(candidate)
}

pub fn day_of_month(date: NaiveDate) -> u32 {
    date.day()
}

/// Adds calendar months, clamping to the last day of a shorter month and
/// never going past the `9999-12-31` sentinel.
pub fn months_ahead(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .map_or(LATEST_DATE, |ahead| ahead.min(LATEST_DATE))
}

fn date_only_part(date_time: &str) -> &str {
    date_time.split_once('T').map(|(date, _)| date).unwrap_or(date_time)
}

/// A strictly formatted `YYYY-MM-DD` calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateOnly(NaiveDate);

impl DateOnly {
    pub fn parse(value: &str) -> Result<Self, DateFormatError> {
        if !DATE_ONLY_PATTERN.is_match(value) {
            return Err(DateFormatError::NotDateOnly(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_ONLY_FORMAT)
            .map(Self)
            .map_err(|_| DateFormatError::InvalidCalendarDate(value.to_string()))
    }

    /// Parses an ACBS date-time string, ignoring its time-of-day.
    pub fn from_date_time(value: &str) -> Result<Self, DateFormatError> {
        Self::parse(&remove_time_component(value)?)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn to_date_time(self) -> String {
        format!("{self}{MIDNIGHT_TIME_SUFFIX}")
    }
}

impl fmt::Display for DateOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_ONLY_FORMAT))
    }
}

impl TryFrom<String> for DateOnly {
    type Error = DateFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateOnly> for String {
    fn from(value: DateOnly) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for DateOnly {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}
