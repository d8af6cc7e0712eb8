//! Presentation hints derived from task statuses.
//!
//! Every mapping is an exhaustive `match`, so adding a status fails to
//! compile until each hint covers it. None of these hints constrain which
//! status may be recorded next.

use crate::task::domain::{CurrentStatus, TaskStatus};
use chrono::{DateTime, Utc};

/// Colour family used for status tags and timeline dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    /// Neutral grey.
    Neutral,
    /// Blue, work under way.
    Processing,
    /// Green.
    Success,
    /// Amber.
    Warning,
    /// Red.
    Error,
    /// Purple.
    Purple,
    /// Magenta.
    Magenta,
}

impl StatusTone {
    /// Returns the tone keyword understood by the rendering toolkit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "default",
            Self::Processing => "blue",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Purple => "purple",
            Self::Magenta => "magenta",
        }
    }
}

/// Icon shown next to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    /// Target marker.
    Aim,
    /// Clock face.
    Clock,
    /// Tick in a circle.
    CheckCircle,
    /// Exclamation mark in a circle.
    ExclamationCircle,
    /// Group of people.
    Team,
    /// Circular arrow.
    Reload,
    /// Cross in a circle.
    CloseCircle,
    /// Bars, shown before allocation.
    Bars,
}

/// Position of a status on the progress timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgressStep(u8);

impl ProgressStep {
    /// Returns the zero-based step index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Returns the tone for a status.
#[must_use]
pub const fn tone(status: CurrentStatus) -> StatusTone {
    match status {
        CurrentStatus::Unallocated | CurrentStatus::Allocated(TaskStatus::Assigned) => {
            StatusTone::Neutral
        }
        CurrentStatus::Allocated(TaskStatus::InProgress) => StatusTone::Processing,
        CurrentStatus::Allocated(TaskStatus::OnHold) => StatusTone::Warning,
        CurrentStatus::Allocated(TaskStatus::ReSubmission) => StatusTone::Magenta,
        CurrentStatus::Allocated(TaskStatus::ReAssign) => StatusTone::Purple,
        CurrentStatus::Allocated(TaskStatus::Completed) => StatusTone::Success,
        CurrentStatus::Allocated(TaskStatus::Cancelled) => StatusTone::Error,
    }
}

/// Returns the icon for a status.
#[must_use]
pub const fn icon(status: CurrentStatus) -> StatusIcon {
    match status {
        CurrentStatus::Unallocated => StatusIcon::Bars,
        CurrentStatus::Allocated(TaskStatus::Assigned) => StatusIcon::Aim,
        CurrentStatus::Allocated(TaskStatus::InProgress) => StatusIcon::Clock,
        CurrentStatus::Allocated(TaskStatus::OnHold) => StatusIcon::ExclamationCircle,
        CurrentStatus::Allocated(TaskStatus::ReSubmission) => StatusIcon::Reload,
        CurrentStatus::Allocated(TaskStatus::ReAssign) => StatusIcon::Team,
        CurrentStatus::Allocated(TaskStatus::Completed) => StatusIcon::CheckCircle,
        CurrentStatus::Allocated(TaskStatus::Cancelled) => StatusIcon::CloseCircle,
    }
}

/// Returns the timeline step for a status.
///
/// `Re-submission` and `Re-assign` share the processing step.
#[must_use]
pub const fn progress_step(status: CurrentStatus) -> ProgressStep {
    let index = match status {
        CurrentStatus::Unallocated | CurrentStatus::Allocated(TaskStatus::Assigned) => 0,
        CurrentStatus::Allocated(TaskStatus::InProgress) => 1,
        CurrentStatus::Allocated(TaskStatus::OnHold) => 2,
        CurrentStatus::Allocated(TaskStatus::ReSubmission | TaskStatus::ReAssign) => 3,
        CurrentStatus::Allocated(TaskStatus::Completed) => 4,
        CurrentStatus::Allocated(TaskStatus::Cancelled) => 5,
    };
    ProgressStep(index)
}

/// Suggests statuses that usually follow `status`.
///
/// The suggestion follows `Assigned -> In Progress -> {On Hold,
/// Re-submission, Re-assign} -> {Completed, Cancelled}`. Terminal and
/// unallocated tasks get no suggestion.
#[must_use]
pub fn suggested_next_steps(status: CurrentStatus) -> Vec<TaskStatus> {
    match status {
        CurrentStatus::Unallocated
        | CurrentStatus::Allocated(TaskStatus::Completed | TaskStatus::Cancelled) => Vec::new(),
        CurrentStatus::Allocated(TaskStatus::Assigned) => vec![TaskStatus::InProgress],
        CurrentStatus::Allocated(TaskStatus::InProgress) => vec![
            TaskStatus::OnHold,
            TaskStatus::ReSubmission,
            TaskStatus::ReAssign,
            TaskStatus::Completed,
            TaskStatus::Cancelled,
        ],
        CurrentStatus::Allocated(
            TaskStatus::OnHold | TaskStatus::ReSubmission | TaskStatus::ReAssign,
        ) => vec![TaskStatus::Completed, TaskStatus::Cancelled],
    }
}

/// Renders a history timestamp as `DD-MM-YYYY HH:mm`.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d-%m-%Y %H:%M").to_string()
}
