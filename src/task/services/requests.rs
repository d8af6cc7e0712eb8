//! Request payloads carrying raw form input into the lifecycle service.

/// Raw input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) task_id: String,
    pub(super) name: String,
    pub(super) description: String,
    pub(super) project_id: String,
    pub(super) initiative_date: String,
    pub(super) target_completion_date: String,
}

impl CreateTaskRequest {
    /// Creates a request from form values. Dates may be `DD-MM-YYYY` or
    /// `YYYY-MM-DD`.
    #[must_use]
    pub fn new(
        task_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        project_id: impl Into<String>,
        initiative_date: impl Into<String>,
        target_completion_date: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            name: name.into(),
            description: description.into(),
            project_id: project_id.into(),
            initiative_date: initiative_date.into(),
            target_completion_date: target_completion_date.into(),
        }
    }
}

/// Raw input for allocating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocateTaskRequest {
    pub(super) task_id: String,
    pub(super) employee_id: String,
    pub(super) reporting_person_id: String,
    pub(super) assigned_date: String,
    pub(super) target_date: String,
}

impl AllocateTaskRequest {
    /// Creates a request from form values.
    #[must_use]
    pub fn new(
        task_id: impl Into<String>,
        employee_id: impl Into<String>,
        reporting_person_id: impl Into<String>,
        assigned_date: impl Into<String>,
        target_date: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            employee_id: employee_id.into(),
            reporting_person_id: reporting_person_id.into(),
            assigned_date: assigned_date.into(),
            target_date: target_date.into(),
        }
    }
}

/// Raw input for recording a status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStatusRequest {
    pub(super) task_id: String,
    pub(super) status: String,
    pub(super) reason: String,
    pub(super) actor: String,
}

impl RecordStatusRequest {
    /// Creates a request from form values. `status` is a label such as
    /// `"In Progress"`.
    #[must_use]
    pub fn new(
        task_id: impl Into<String>,
        status: impl Into<String>,
        reason: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            status: status.into(),
            reason: reason.into(),
            actor: actor.into(),
        }
    }
}
