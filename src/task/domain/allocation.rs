//! Allocation of a task to an assignee and a supervisor.

use super::{CalendarDate, DateRangeError, EmployeeId, Task, TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};

/// The assignee and reporting supervisor of an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllocationParties {
    employee_id: EmployeeId,
    reporting_person_id: EmployeeId,
}

impl AllocationParties {
    /// Pairs an assignee with a supervisor.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SelfSupervision`] when both identifiers
    /// name the same employee.
    pub fn new(
        employee_id: EmployeeId,
        reporting_person_id: EmployeeId,
    ) -> Result<Self, TaskDomainError> {
        if employee_id == reporting_person_id {
            return Err(TaskDomainError::SelfSupervision);
        }
        Ok(Self {
            employee_id,
            reporting_person_id,
        })
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// Returns the reporting supervisor.
    #[must_use]
    pub const fn reporting_person_id(&self) -> &EmployeeId {
        &self.reporting_person_id
    }
}

/// Binding of a task to an assignee and supervisor with date bounds.
///
/// At most one allocation exists per task. Re-allocation is expressed as a
/// `Re-assign` status entry rather than a new allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    task_id: TaskId,
    parties: AllocationParties,
    assigned_date: CalendarDate,
    target_date: CalendarDate,
}

impl Allocation {
    /// Creates an allocation for `task`.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::TargetAfterCompletion`] when `target_date`
    /// falls after the task's target completion date. The date is never
    /// clamped.
    pub fn new(
        task: &Task,
        parties: AllocationParties,
        assigned_date: CalendarDate,
        target_date: CalendarDate,
    ) -> Result<Self, DateRangeError> {
        let ceiling = task.target_completion_date();
        if target_date > ceiling {
            return Err(DateRangeError::TargetAfterCompletion {
                target: target_date,
                ceiling,
            });
        }
        Ok(Self {
            task_id: task.id().clone(),
            parties,
            assigned_date,
            target_date,
        })
    }

    /// Reconstructs an allocation from store data.
    #[must_use]
    pub const fn from_persisted(
        task_id: TaskId,
        parties: AllocationParties,
        assigned_date: CalendarDate,
        target_date: CalendarDate,
    ) -> Self {
        Self {
            task_id,
            parties,
            assigned_date,
            target_date,
        }
    }

    /// Returns the allocated task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn employee_id(&self) -> &EmployeeId {
        self.parties.employee_id()
    }

    /// Returns the reporting supervisor.
    #[must_use]
    pub const fn reporting_person_id(&self) -> &EmployeeId {
        self.parties.reporting_person_id()
    }

    /// Returns the date the allocation was made for.
    #[must_use]
    pub const fn assigned_date(&self) -> CalendarDate {
        self.assigned_date
    }

    /// Returns the date the assignee should finish by.
    #[must_use]
    pub const fn target_date(&self) -> CalendarDate {
        self.target_date
    }
}
