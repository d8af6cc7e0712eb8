//! JSON payloads exchanged with the REST backend.
//!
//! Field names follow the backend verbatim, which mixes camelCase request
//! bodies with snake_case response rows.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{
    domain::{
        Actor, Allocation, AllocationParties, CalendarDate, EmployeeId, EmployeeProfile,
        NewStatusEntry, PersistedStatusEntry, ProjectId, StatusEntry, StatusEntryId, StatusReason,
        Task, TaskData, TaskDescription, TaskDomainError, TaskId, TaskName, TaskStatus,
    },
    ports::TaskStoreError,
};

fn invalid(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::InvalidPayload(err.to_string())
}

/// Task row returned by `GET /tasks/{task_id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[serde(default)]
    pub task_id: Option<String>,
    pub task_name: String,
    #[serde(default)]
    pub task_description: Option<String>,
    pub project_id: String,
    pub initiative_date: String,
    pub target_completion_date: String,
}

impl TaskPayload {
    /// Converts the row into a task, falling back to `requested` when the
    /// backend omits the identifier.
    pub fn into_task(self, requested: &TaskId) -> Result<Task, TaskStoreError> {
        let id = match self.task_id {
            Some(raw) => TaskId::new(raw).map_err(invalid)?,
            None => requested.clone(),
        };
        Ok(Task::from_persisted(TaskData {
            id,
            name: TaskName::from_persisted(self.task_name),
            description: TaskDescription::from_persisted(self.task_description.unwrap_or_default()),
            project_id: ProjectId::new(self.project_id).map_err(invalid)?,
            initiative_date: CalendarDate::parse(&self.initiative_date).map_err(invalid)?,
            target_completion_date: CalendarDate::parse(&self.target_completion_date)
                .map_err(invalid)?,
        }))
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody<'a> {
    pub task_id: &'a str,
    pub task_name: &'a str,
    pub task_description: &'a str,
    pub project_id: &'a str,
    pub initiative_date: String,
    pub target_completion_date: String,
}

impl<'a> From<&'a Task> for CreateTaskBody<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            task_id: task.id().as_str(),
            task_name: task.name().as_str(),
            task_description: task.description().as_str(),
            project_id: task.project_id().as_str(),
            initiative_date: task.initiative_date().to_store_string(),
            target_completion_date: task.target_completion_date().to_store_string(),
        }
    }
}

/// Envelope returned by `GET /get_task_allocation/{task_id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub task_details: Option<AllocationPayload>,
}

/// Allocation row inside [`AllocationEnvelope`].
#[derive(Debug, Clone, Deserialize)]
pub struct AllocationPayload {
    #[serde(default)]
    pub task_id: Option<String>,
    pub employee_id: String,
    #[serde(default)]
    pub reporting_person_id: Option<String>,
    pub assigned_date: String,
    pub target_date: String,
}

impl AllocationPayload {
    /// Converts the row into an allocation of `requested`.
    pub fn into_allocation(self, requested: &TaskId) -> Result<Allocation, TaskStoreError> {
        let task_id = match self.task_id {
            Some(raw) => TaskId::new(raw).map_err(invalid)?,
            None => requested.clone(),
        };
        let reporting = self
            .reporting_person_id
            .ok_or_else(|| invalid("allocation is missing reporting_person_id"))?;
        let parties = AllocationParties::new(
            EmployeeId::new(self.employee_id).map_err(invalid)?,
            EmployeeId::new(reporting).map_err(invalid)?,
        )
        .map_err(invalid)?;
        Ok(Allocation::from_persisted(
            task_id,
            parties,
            CalendarDate::parse(&self.assigned_date).map_err(invalid)?,
            CalendarDate::parse(&self.target_date).map_err(invalid)?,
        ))
    }
}

/// Body of `POST /allocate_task`. Dates travel in display form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateBody<'a> {
    pub task_id: &'a str,
    pub employee_id: &'a str,
    pub reporting_person_id: &'a str,
    pub assigned_date: String,
    pub target_date: String,
}

impl<'a> From<&'a Allocation> for AllocateBody<'a> {
    fn from(allocation: &'a Allocation) -> Self {
        Self {
            task_id: allocation.task_id().as_str(),
            employee_id: allocation.employee_id().as_str(),
            reporting_person_id: allocation.reporting_person_id().as_str(),
            assigned_date: allocation.assigned_date().to_display_string(),
            target_date: allocation.target_date().to_display_string(),
        }
    }
}

/// Body of `POST /update_task_status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusBody<'a> {
    pub task_id: &'a str,
    pub task_status: &'static str,
    pub reason: &'a str,
    pub allocate_by: &'a str,
    pub employee_id: &'a str,
    pub assigned_date: String,
    pub target_date: String,
    pub created_at: String,
}

impl<'a> UpdateStatusBody<'a> {
    /// Builds the body for `entry` against its allocation.
    pub fn new(entry: &'a NewStatusEntry, allocation: &'a Allocation) -> Self {
        Self {
            task_id: entry.task_id().as_str(),
            task_status: entry.status().as_str(),
            reason: entry.reason().as_str(),
            allocate_by: entry.actor().as_str(),
            employee_id: allocation.employee_id().as_str(),
            assigned_date: allocation.assigned_date().to_display_string(),
            target_date: allocation.target_date().to_display_string(),
            created_at: entry.recorded_at().to_rfc3339(),
        }
    }
}

/// Success flag envelope shared by write endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl Acknowledgement {
    /// Returns `true` when the store flags the write as failed.
    ///
    /// A missing flag counts as success; HTTP status has already been
    /// checked by the caller.
    pub fn reported_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// Returns the identifier the store assigned, if it sent one.
    pub fn entry_id(&self) -> Option<StatusEntryId> {
        match self.id.as_ref()? {
            serde_json::Value::String(raw) => Some(StatusEntryId::from_store(raw.clone())),
            serde_json::Value::Number(number) => {
                Some(StatusEntryId::from_store(number.to_string()))
            }
            _ => None,
        }
    }
}

/// Envelope returned by `GET /get_task_status_history/{task_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryRow>,
}

/// One row of [`HistoryEnvelope`].
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRow {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub task_status: String,
    pub reason: String,
    #[serde(default)]
    pub allocate_by: Option<String>,
    pub created_at: String,
}

impl HistoryRow {
    /// Converts the row into a status entry of `task_id`.
    ///
    /// Rows without an identifier get a positional one so that entries stay
    /// distinguishable.
    pub fn into_entry(
        self,
        task_id: &TaskId,
        position: usize,
    ) -> Result<StatusEntry, TaskStoreError> {
        let id = match self.id {
            Some(serde_json::Value::Number(number)) => {
                StatusEntryId::from_store(number.to_string())
            }
            Some(serde_json::Value::String(raw)) => StatusEntryId::from_store(raw),
            _ => StatusEntryId::from_store(format!("{task_id}-{position}")),
        };
        let status = TaskStatus::try_from(self.task_status.as_str())
            .map_err(|err| invalid(TaskDomainError::from(err)))?;
        let actor = self
            .allocate_by
            .as_deref()
            .and_then(|name| Actor::new(name).ok())
            .unwrap_or_else(Actor::unknown);
        Ok(StatusEntry::from_persisted(PersistedStatusEntry {
            id,
            task_id: task_id.clone(),
            status,
            reason: StatusReason::from_persisted(self.reason),
            actor,
            recorded_at: parse_timestamp(&self.created_at)?,
        }))
    }
}

/// Employee record returned by `GET /get_employee_status/{employee_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub reporting_person: Option<String>,
}

impl EmployeePayload {
    /// Converts the record into a profile for `id`.
    pub fn into_profile(self, id: EmployeeId) -> EmployeeProfile {
        let mut profile = EmployeeProfile::new(id, self.name);
        if let Some(role) = self.role_name.filter(|role| !role.trim().is_empty()) {
            profile = profile.with_role(role);
        }
        if let Some(supervisor) = self
            .reporting_person
            .and_then(|raw| EmployeeId::new(raw).ok())
        {
            profile = profile.with_reporting_person(supervisor);
        }
        profile
    }
}

/// Error body attached to 4xx and 5xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parses an error body, tolerating non-JSON text.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Returns the most specific message the store supplied.
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// Parses a history timestamp.
///
/// Accepts RFC 3339, RFC 2822 (as emitted by Flask's JSON encoder) and naive
/// `YYYY-MM-DD HH:MM:SS` values, which are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TaskStoreError> {
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| invalid(format!("unrecognised timestamp '{raw}'")))
}
