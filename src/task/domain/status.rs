//! Task status values and the derived current status.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status recorded against an allocated task.
///
/// Any status may follow any other. The progression
/// `Assigned -> In Progress -> {On Hold, Re-submission, Re-assign} ->
/// {Completed, Cancelled}` is only a hint for the presentation layer, and
/// recording further entries after a terminal status remains possible so
/// that corrections can be appended to the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskStatus {
    /// Implicit status of a freshly allocated task.
    Assigned,
    /// Work has started.
    InProgress,
    /// Work is paused.
    OnHold,
    /// Work was returned for another submission.
    ReSubmission,
    /// The task is being handed to another assignee.
    ReAssign,
    /// Work is finished.
    Completed,
    /// Work was abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Every status in suggested progression order.
    pub const ALL: [Self; 7] = [
        Self::Assigned,
        Self::InProgress,
        Self::OnHold,
        Self::ReSubmission,
        Self::ReAssign,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the canonical label shared with the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::ReSubmission => "Re-submission",
            Self::ReAssign => "Re-assign",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns `true` for the suggested end states.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "assigned" => Ok(Self::Assigned),
            "in progress" | "in_progress" => Ok(Self::InProgress),
            "on hold" | "on_hold" => Ok(Self::OnHold),
            "re-submission" | "resubmission" => Ok(Self::ReSubmission),
            "re-assign" | "reassign" => Ok(Self::ReAssign),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a task as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentStatus {
    /// No allocation exists for the task.
    Unallocated,
    /// The task is allocated and carries this status.
    Allocated(TaskStatus),
}

impl CurrentStatus {
    /// Returns the recorded status, or `None` before allocation.
    #[must_use]
    pub const fn status(self) -> Option<TaskStatus> {
        match self {
            Self::Unallocated => None,
            Self::Allocated(status) => Some(status),
        }
    }

    /// Returns the label shown to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unallocated => "Unallocated",
            Self::Allocated(status) => status.as_str(),
        }
    }
}

impl PartialEq<TaskStatus> for CurrentStatus {
    fn eq(&self, other: &TaskStatus) -> bool {
        self.status() == Some(*other)
    }
}

impl fmt::Display for CurrentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
