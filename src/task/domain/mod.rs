//! Domain model for task allocation and status tracking.
//!
//! The task domain models task records, their single allocation and the
//! append-only status history while keeping every store and presentation
//! concern outside of the domain boundary.

mod allocation;
mod date;
mod employee;
mod error;
mod history;
mod ids;
mod status;
mod task;
mod text;

pub use allocation::{Allocation, AllocationParties};
pub use date::CalendarDate;
pub use employee::EmployeeProfile;
pub use error::{DateRangeError, ParseTaskStatusError, TaskDomainError, TaskField};
pub use history::{History, NewStatusEntry, PersistedStatusEntry, StatusEntry};
pub use ids::{EmployeeId, ProjectId, StatusEntryId, TaskId};
pub use status::{CurrentStatus, TaskStatus};
pub use task::{Task, TaskData};
pub use text::{Actor, StatusReason, TaskDescription, TaskName};
