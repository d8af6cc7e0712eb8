//! Task aggregate root.

use super::{CalendarDate, DateRangeError, ProjectId, TaskDescription, TaskId, TaskName};
use serde::{Deserialize, Serialize};

/// A unit of project work that can be allocated to an employee.
///
/// Tasks are immutable once created; allocation and status changes are
/// recorded as separate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: TaskDescription,
    project_id: ProjectId,
    initiative_date: CalendarDate,
    target_completion_date: CalendarDate,
}

/// Parameter object for creating or reconstructing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub name: TaskName,
    /// Task description.
    pub description: TaskDescription,
    /// Owning project.
    pub project_id: ProjectId,
    /// Date work is planned to begin.
    pub initiative_date: CalendarDate,
    /// Date work must be finished by.
    pub target_completion_date: CalendarDate,
}

impl Task {
    /// Creates a new task.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::CompletionBeforeInitiative`] when the target
    /// completion date precedes the initiative date.
    pub fn create(data: TaskData) -> Result<Self, DateRangeError> {
        if data.target_completion_date < data.initiative_date {
            return Err(DateRangeError::CompletionBeforeInitiative {
                initiative: data.initiative_date,
                completion: data.target_completion_date,
            });
        }
        Ok(Self::from_persisted(data))
    }

    /// Reconstructs a task from store data without re-checking date order.
    #[must_use]
    pub fn from_persisted(data: TaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            project_id: data.project_id,
            initiative_date: data.initiative_date,
            target_completion_date: data.target_completion_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the owning project reference.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the initiative date.
    #[must_use]
    pub const fn initiative_date(&self) -> CalendarDate {
        self.initiative_date
    }

    /// Returns the target completion date, the ceiling for allocation
    /// target dates.
    #[must_use]
    pub const fn target_completion_date(&self) -> CalendarDate {
        self.target_completion_date
    }
}
