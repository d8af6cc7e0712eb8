//! Error types for task domain validation and parsing.

use super::CalendarDate;
use thiserror::Error;

/// Form fields that domain validation can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// Task identifier.
    TaskId,
    /// Task name.
    TaskName,
    /// Task description.
    TaskDescription,
    /// Owning project.
    ProjectId,
    /// Assigned employee.
    EmployeeId,
    /// Supervising employee.
    ReportingPersonId,
    /// Calendar date input not tied to a specific form field.
    Date,
    /// Date work on a task begins.
    InitiativeDate,
    /// Date a task must be finished by.
    TargetCompletionDate,
    /// Date an allocation starts.
    AssignedDate,
    /// Date an assignee should finish by.
    TargetDate,
    /// Status label.
    Status,
    /// Free-text status reason.
    Reason,
    /// Person recording a status entry.
    Actor,
}

impl TaskField {
    /// Returns the field name as rendered next to the offending input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskId => "task_id",
            Self::TaskName => "task_name",
            Self::TaskDescription => "task_description",
            Self::ProjectId => "project_id",
            Self::EmployeeId => "employee_id",
            Self::ReportingPersonId => "reporting_person_id",
            Self::Date => "date",
            Self::InitiativeDate => "initiative_date",
            Self::TargetCompletionDate => "target_completion_date",
            Self::AssignedDate => "assigned_date",
            Self::TargetDate => "target_date",
            Self::Status => "status",
            Self::Reason => "reason",
            Self::Actor => "actor",
        }
    }
}

impl std::fmt::Display for TaskField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A required field was empty after trimming.
    #[error("{0} is required")]
    Required(TaskField),

    /// An identifier contains characters outside `[A-Za-z0-9_-]`.
    #[error("{field} '{value}' may only contain letters, numbers, hyphens and underscores")]
    MalformedIdentifier {
        /// Field holding the identifier.
        field: TaskField,
        /// Rejected raw value.
        value: String,
    },

    /// A text field is shorter or longer than permitted.
    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    LengthOutOfRange {
        /// Field holding the text.
        field: TaskField,
        /// Minimum accepted length in characters.
        min: usize,
        /// Maximum accepted length in characters.
        max: usize,
        /// Observed length in characters.
        actual: usize,
    },

    /// A date string matched neither `DD-MM-YYYY` nor `YYYY-MM-DD`.
    #[error("{field} '{value}' is not a valid date, expected DD-MM-YYYY")]
    MalformedDate {
        /// Field holding the date.
        field: TaskField,
        /// Rejected raw value.
        value: String,
    },

    /// The assignee and reporting person are the same employee.
    #[error("reporting person must differ from the assigned employee")]
    SelfSupervision,

    /// An employee identifier did not resolve against the directory.
    #[error("{field} '{value}' does not match a known employee")]
    UnknownEmployee {
        /// Field holding the identifier.
        field: TaskField,
        /// Unresolved identifier.
        value: String,
    },

    /// The status label is not one of the enumerated values.
    #[error(transparent)]
    UnknownStatus(#[from] ParseTaskStatusError),
}

impl TaskDomainError {
    /// Returns the form field at fault.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        match self {
            Self::Required(field)
            | Self::MalformedIdentifier { field, .. }
            | Self::LengthOutOfRange { field, .. }
            | Self::MalformedDate { field, .. }
            | Self::UnknownEmployee { field, .. } => *field,
            Self::SelfSupervision => TaskField::ReportingPersonId,
            Self::UnknownStatus(_) => TaskField::Status,
        }
    }
}

/// A date ordering rule was violated.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DateRangeError {
    /// Allocation target date falls after the task's completion ceiling.
    #[error("target date {target} cannot exceed task completion date {ceiling}")]
    TargetAfterCompletion {
        /// Requested allocation target date.
        target: CalendarDate,
        /// Task target completion date.
        ceiling: CalendarDate,
    },

    /// Task completion date falls before its initiative date.
    #[error("target completion date {completion} is before initiative date {initiative}")]
    CompletionBeforeInitiative {
        /// Task initiative date.
        initiative: CalendarDate,
        /// Requested completion date.
        completion: CalendarDate,
    },
}

impl DateRangeError {
    /// Returns the form field whose date breaks the rule.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        match self {
            Self::TargetAfterCompletion { .. } => TaskField::TargetDate,
            Self::CompletionBeforeInitiative { .. } => TaskField::TargetCompletionDate,
        }
    }
}

/// Error returned while parsing task statuses from labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
