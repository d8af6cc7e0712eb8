//! Length-bounded free-text values entered on task forms.

use super::{TaskDomainError, TaskField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trims `raw` and bounds the trimmed length; surrounding whitespace never
/// counts toward `min`.
fn bounded_text(
    raw: &str,
    field: TaskField,
    min: usize,
    max: usize,
) -> Result<String, TaskDomainError> {
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(TaskDomainError::Required(field));
    }
    let actual = normalized.chars().count();
    if actual < min || actual > max {
        return Err(TaskDomainError::LengthOutOfRange {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(normalized.to_owned())
}

/// Short task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Minimum name length in characters.
    pub const MIN_LEN: usize = 3;
    /// Maximum name length in characters.
    pub const MAX_LEN: usize = 100;

    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the trimmed name is blank or outside
    /// 3..=100 characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        bounded_text(
            value.as_ref(),
            TaskField::TaskName,
            Self::MIN_LEN,
            Self::MAX_LEN,
        )
        .map(Self)
    }

    /// Wraps a value read back from the store without re-validating it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Long-form task description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Minimum description length in characters.
    pub const MIN_LEN: usize = 10;
    /// Maximum description length in characters.
    pub const MAX_LEN: usize = 500;

    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the trimmed text is blank or outside
    /// 10..=500 characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        bounded_text(
            value.as_ref(),
            TaskField::TaskDescription,
            Self::MIN_LEN,
            Self::MAX_LEN,
        )
        .map(Self)
    }

    /// Wraps a value read back from the store without re-validating it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Justification attached to a status entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusReason(String);

impl StatusReason {
    /// Minimum reason length in characters.
    pub const MIN_LEN: usize = 10;
    /// Maximum reason length in characters.
    pub const MAX_LEN: usize = 500;

    /// Creates a validated reason.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Required`] for a blank reason and
    /// [`TaskDomainError::LengthOutOfRange`] when the trimmed reason is
    /// shorter than 10 or longer than 500 characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        bounded_text(
            value.as_ref(),
            TaskField::Reason,
            Self::MIN_LEN,
            Self::MAX_LEN,
        )
        .map(Self)
    }

    /// Wraps a reason read back from the store without re-validating it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the reason as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of whoever recorded a status entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Actor(String);

impl Actor {
    /// Creates an actor from a display name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Required`] when the name is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        let normalized = value.as_ref().trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::Required(TaskField::Actor));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Actor used when the store has no record of who wrote an entry.
    #[must_use]
    pub fn unknown() -> Self {
        Self("Unknown".to_owned())
    }

    /// Returns the actor name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
