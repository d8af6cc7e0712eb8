//! Identifier and validated scalar types for the task domain.

use super::{TaskDomainError, TaskField};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Returns the trimmed identifier when it is non-empty and restricted to
/// ASCII letters, digits, hyphens and underscores.
fn validated_identifier(raw: String, field: TaskField) -> Result<String, TaskDomainError> {
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(TaskDomainError::Required(field));
    }
    let is_valid = normalized
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !is_valid {
        return Err(TaskDomainError::MalformedIdentifier { field, value: raw });
    }
    Ok(normalized.to_owned())
}

/// Identifier of a task record, assigned at creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Required`] for blank input and
    /// [`TaskDomainError::MalformedIdentifier`] when the value holds
    /// characters other than letters, digits, `-` or `_`.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        validated_identifier(value.into(), TaskField::TaskId).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an employee in the external directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a validated employee identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] under the same lexical rules as
    /// [`TaskId::new`], reported against [`TaskField::EmployeeId`].
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        Self::for_field(value, TaskField::EmployeeId)
    }

    /// Creates a validated identifier, reporting failures against `field`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the identifier is blank or malformed.
    pub fn for_field(value: impl Into<String>, field: TaskField) -> Result<Self, TaskDomainError> {
        validated_identifier(value.into(), field).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to the project that owns a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a project reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Required`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::Required(TaskField::ProjectId));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Store-side identifier of a single history entry.
///
/// The value is opaque to the client: the HTTP store issues numeric row
/// identifiers while the in-memory store issues UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusEntryId(String);

impl StatusEntryId {
    /// Creates a new random entry identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an identifier issued by a task store.
    #[must_use]
    pub fn from_store(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
