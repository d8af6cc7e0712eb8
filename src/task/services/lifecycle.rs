//! Task lifecycle manager: creation, allocation and status recording.

use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{
    AllocateTaskRequest, CreateTaskRequest, RecordStatusRequest, TaskLifecycleError,
    TaskLifecycleResult,
};
use crate::task::{
    domain::{
        Actor, Allocation, AllocationParties, CalendarDate, CurrentStatus, EmployeeId,
        EmployeeProfile, History, NewStatusEntry, ProjectId, StatusEntry, StatusReason, Task,
        TaskData, TaskDescription, TaskDomainError, TaskField, TaskId, TaskName, TaskStatus,
    },
    ports::{EmployeeDirectory, Notification, NotificationSink, TaskStore},
    presentation,
};

/// Everything the status page shows for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOverview {
    /// The task record.
    pub task: Task,
    /// The allocation, if the task has been allocated.
    pub allocation: Option<Allocation>,
    /// Recorded status entries, oldest first.
    pub history: History,
    /// Derived current status.
    pub current_status: CurrentStatus,
}

/// Task lifecycle orchestration service.
///
/// The service validates input locally, calls the store, and reports every
/// outcome both to the caller and to the notification sink. It holds no
/// locks and caches nothing; concurrent writes are arbitrated by the store.
#[derive(Clone)]
pub struct TaskLifecycleService<S, D, N, C>
where
    S: TaskStore,
    D: EmployeeDirectory,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    directory: Arc<D>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<S, D, N, C> TaskLifecycleService<S, D, N, C>
where
    S: TaskStore,
    D: EmployeeDirectory,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, directory: Arc<D>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            store,
            directory,
            notifier,
            clock,
        }
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] or
    /// [`TaskLifecycleError::DateRange`] for invalid input, and store errors
    /// (for example a duplicate identifier) as `Server`.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let result = self.create_task_inner(request).await;
        self.publish(result, |task| format!("Task {} created successfully", task.id()))
    }

    async fn create_task_inner(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let data = TaskData {
            id: TaskId::new(request.task_id)?,
            name: TaskName::new(request.name)?,
            description: TaskDescription::new(request.description)?,
            project_id: ProjectId::new(request.project_id)?,
            initiative_date: CalendarDate::parse_field(
                &request.initiative_date,
                TaskField::InitiativeDate,
            )?,
            target_completion_date: CalendarDate::parse_field(
                &request.target_completion_date,
                TaskField::TargetCompletionDate,
            )?,
        };
        let task = Task::create(data)?;
        self.store.create_task(&task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Fetches a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn find_task(&self, task_id: &str) -> TaskLifecycleResult<Task> {
        let result: TaskLifecycleResult<Task> = async {
            let id = TaskId::new(task_id)?;
            self.load_task(&id).await
        }
        .await;
        self.publish_failure(result)
    }

    /// Looks up an employee, typically to pre-fill the reporting person.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the directory has no
    /// such employee.
    pub async fn lookup_employee(&self, employee_id: &str) -> TaskLifecycleResult<EmployeeProfile> {
        let result: TaskLifecycleResult<EmployeeProfile> = async {
            let id = EmployeeId::new(employee_id)?;
            self.directory
                .find_employee(&id)
                .await?
                .ok_or_else(|| TaskLifecycleError::NotFound(format!("employee {id}")))
        }
        .await;
        self.publish_failure(result)
    }

    /// Allocates a task to an assignee reporting to a supervisor.
    ///
    /// Creates the implicit `Assigned` status; no history entry is written.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for blank, malformed,
    /// identical or unknown employee identifiers and missing dates,
    /// [`TaskLifecycleError::DateRange`] when the target date falls after the
    /// task's completion date, [`TaskLifecycleError::NotFound`] for an
    /// unknown task, and the store's rejection (for example a duplicate
    /// allocation) verbatim as `Server`.
    pub async fn allocate(&self, request: AllocateTaskRequest) -> TaskLifecycleResult<Allocation> {
        let result = self.allocate_inner(request).await;
        self.publish(result, |(allocation, assignee)| {
            format!(
                "Task {} successfully allocated to {}",
                allocation.task_id(),
                assignee.name()
            )
        })
        .map(|(allocation, _)| allocation)
    }

    async fn allocate_inner(
        &self,
        request: AllocateTaskRequest,
    ) -> TaskLifecycleResult<(Allocation, EmployeeProfile)> {
        let task_id = TaskId::new(request.task_id)?;
        let parties = AllocationParties::new(
            EmployeeId::for_field(request.employee_id, TaskField::EmployeeId)?,
            EmployeeId::for_field(request.reporting_person_id, TaskField::ReportingPersonId)?,
        )?;
        let assigned_date =
            CalendarDate::parse_field(&request.assigned_date, TaskField::AssignedDate)?;
        let target_date = CalendarDate::parse_field(&request.target_date, TaskField::TargetDate)?;

        let task = self.load_task(&task_id).await?;
        let allocation = Allocation::new(&task, parties, assigned_date, target_date)?;

        let assignee = self
            .resolve_employee(allocation.employee_id(), TaskField::EmployeeId)
            .await?;
        self.resolve_employee(allocation.reporting_person_id(), TaskField::ReportingPersonId)
            .await?;

        self.store.store_allocation(&allocation).await?;
        info!(
            task_id = %allocation.task_id(),
            employee_id = %allocation.employee_id(),
            target_date = %allocation.target_date(),
            "task allocated"
        );
        Ok((allocation, assignee))
    }

    /// Appends a status entry to an allocated task's history.
    ///
    /// Any status may follow any other, including after `Completed` or
    /// `Cancelled`. Identical requests produce distinct entries.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for an unknown status, a
    /// reason shorter than ten characters or a blank actor, and
    /// [`TaskLifecycleError::NotFound`] when the task has no allocation.
    pub async fn record_status(
        &self,
        request: RecordStatusRequest,
    ) -> TaskLifecycleResult<StatusEntry> {
        let result = self.record_status_inner(request).await;
        self.publish(result, |_| "Task status updated successfully".to_owned())
    }

    async fn record_status_inner(
        &self,
        request: RecordStatusRequest,
    ) -> TaskLifecycleResult<StatusEntry> {
        let task_id = TaskId::new(request.task_id)?;
        let status = TaskStatus::try_from(request.status.as_str()).map_err(TaskDomainError::from)?;
        let reason = StatusReason::new(request.reason)?;
        let actor = Actor::new(request.actor)?;

        let allocation = self
            .store
            .find_allocation(&task_id)
            .await?
            .ok_or_else(|| TaskLifecycleError::NotFound(format!("allocation for task {task_id}")))?;

        let entry = NewStatusEntry::new(task_id, status, reason, actor, &*self.clock);
        let stored = self.store.append_status(&entry, &allocation).await?;
        info!(
            task_id = %stored.task_id(),
            status = %stored.status(),
            actor = %stored.actor(),
            "status recorded"
        );
        Ok(stored)
    }

    /// Returns the task's status history, oldest first.
    ///
    /// This is a pure read and may be repeated freely.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a malformed identifier
    /// and store errors otherwise.
    pub async fn history(&self, task_id: &str) -> TaskLifecycleResult<History> {
        let result: TaskLifecycleResult<History> = async {
            let id = TaskId::new(task_id)?;
            Ok(self.store.history(&id).await?)
        }
        .await;
        self.publish_failure(result)
    }

    /// Returns the task's current status.
    ///
    /// `Unallocated` without an allocation; otherwise the latest history
    /// entry, or `Assigned` when nothing has been recorded yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a malformed identifier
    /// and store errors otherwise.
    pub async fn current_status(&self, task_id: &str) -> TaskLifecycleResult<CurrentStatus> {
        let result: TaskLifecycleResult<CurrentStatus> = async {
            let id = TaskId::new(task_id)?;
            self.current_status_of(&id).await
        }
        .await;
        self.publish_failure(result)
    }

    /// Suggests statuses that usually follow the current one.
    ///
    /// The suggestion is a hint only; [`Self::record_status`] accepts any
    /// status.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::current_status`].
    pub async fn suggested_next_steps(&self, task_id: &str) -> TaskLifecycleResult<Vec<TaskStatus>> {
        self.current_status(task_id)
            .await
            .map(presentation::suggested_next_steps)
    }

    /// Loads the task, its allocation, history and current status together.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task and
    /// store errors otherwise.
    pub async fn overview(&self, task_id: &str) -> TaskLifecycleResult<TaskOverview> {
        let result: TaskLifecycleResult<TaskOverview> = async {
            let id = TaskId::new(task_id)?;
            let task = self.load_task(&id).await?;
            let allocation = self.store.find_allocation(&id).await?;
            let history = self.store.history(&id).await?;
            let current_status = if allocation.is_some() {
                history.current_status(true)
            } else {
                CurrentStatus::Unallocated
            };
            Ok(TaskOverview {
                task,
                allocation,
                history,
                current_status,
            })
        }
        .await;
        self.publish_failure(result)
    }

    async fn current_status_of(&self, id: &TaskId) -> TaskLifecycleResult<CurrentStatus> {
        if self.store.find_allocation(id).await?.is_none() {
            debug!(task_id = %id, "task has no allocation");
            return Ok(CurrentStatus::Unallocated);
        }
        let history = self.store.history(id).await?;
        Ok(history.current_status(true))
    }

    async fn load_task(&self, id: &TaskId) -> TaskLifecycleResult<Task> {
        self.store
            .find_task(id)
            .await?
            .ok_or_else(|| TaskLifecycleError::NotFound(format!("task {id}")))
    }

    async fn resolve_employee(
        &self,
        id: &EmployeeId,
        field: TaskField,
    ) -> TaskLifecycleResult<EmployeeProfile> {
        self.directory.find_employee(id).await?.ok_or_else(|| {
            TaskLifecycleError::Validation(TaskDomainError::UnknownEmployee {
                field,
                value: id.to_string(),
            })
        })
    }

    /// Notifies the sink of the outcome and hands the result back.
    fn publish<T>(
        &self,
        result: TaskLifecycleResult<T>,
        success_message: impl FnOnce(&T) -> String,
    ) -> TaskLifecycleResult<T> {
        if let Ok(value) = &result {
            self.notifier
                .notify(Notification::success(success_message(value)));
        }
        self.publish_failure(result)
    }

    /// Notifies the sink of a failure and hands the result back.
    fn publish_failure<T>(&self, result: TaskLifecycleResult<T>) -> TaskLifecycleResult<T> {
        if let Err(err) = &result {
            match err.field() {
                Some(field) => debug!(%field, error = %err, "input rejected"),
                None => warn!(error = %err, retryable = err.is_retryable(), "operation failed"),
            }
            self.notifier.notify(Notification::error(err.user_message()));
        }
        result
    }
}
