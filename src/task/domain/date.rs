//! Calendar dates exchanged with the task store and the presentation layer.
//!
//! Dates are shown and typed as `DD-MM-YYYY`. The store keeps ISO
//! `YYYY-MM-DD`, and some store endpoints echo dates back in RFC 2822 form
//! (`Sun, 01 Sep 2024 00:00:00 GMT`), so parsing accepts all three.

use super::{TaskDomainError, TaskField};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const DISPLAY_FORMAT: &str = "%d-%m-%Y";
const STORE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date without time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wraps an existing calendar date.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from day, month and year components.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MalformedDate`] for impossible dates such as
    /// 31-02-2024.
    pub fn from_dmy(day: u32, month: u32, year: i32) -> Result<Self, TaskDomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| TaskDomainError::MalformedDate {
                field: TaskField::Date,
                value: format!("{day:02}-{month:02}-{year}"),
            })
    }

    /// Parses a date in display (`DD-MM-YYYY`), store (`YYYY-MM-DD`), ISO
    /// date-time or RFC 2822 form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MalformedDate`] when no format matches.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        Self::parse_field(value, TaskField::Date)
    }

    /// Parses a date entered into `field`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Required`] for blank input and
    /// [`TaskDomainError::MalformedDate`] when no format matches; both name
    /// `field`.
    pub fn parse_field(value: &str, field: TaskField) -> Result<Self, TaskDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::Required(field));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DISPLAY_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, STORE_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc2822(trimmed) {
            return Ok(Self(timestamp.date_naive()));
        }
        trimmed
            .split_once(['T', ' '])
            .and_then(|(date_part, _)| NaiveDate::parse_from_str(date_part, STORE_FORMAT).ok())
            .map(Self)
            .ok_or_else(|| TaskDomainError::MalformedDate {
                field,
                value: value.to_owned(),
            })
    }

    /// Returns the wrapped date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Renders the date in store form (`YYYY-MM-DD`).
    #[must_use]
    pub fn to_store_string(self) -> String {
        self.0.format(STORE_FORMAT).to_string()
    }

    /// Renders the date in display form (`DD-MM-YYYY`).
    #[must_use]
    pub fn to_display_string(self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = TaskDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_store_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
