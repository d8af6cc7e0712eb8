//! Append-only status history of an allocated task.

use super::{Actor, CurrentStatus, StatusEntryId, StatusReason, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A status change waiting to be appended by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStatusEntry {
    task_id: TaskId,
    status: TaskStatus,
    reason: StatusReason,
    actor: Actor,
    recorded_at: DateTime<Utc>,
}

impl NewStatusEntry {
    /// Stamps a status change with the current clock time.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        status: TaskStatus,
        reason: StatusReason,
        actor: Actor,
        clock: &impl Clock,
    ) -> Self {
        Self {
            task_id,
            status,
            reason,
            actor,
            recorded_at: clock.utc(),
        }
    }

    /// Returns the task the entry belongs to.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the recorded status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the reason given for the change.
    #[must_use]
    pub const fn reason(&self) -> &StatusReason {
        &self.reason
    }

    /// Returns who recorded the change.
    #[must_use]
    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Returns when the change was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Converts into a persisted entry carrying the store-issued identifier.
    #[must_use]
    pub fn into_entry(self, id: StatusEntryId) -> StatusEntry {
        StatusEntry {
            id,
            task_id: self.task_id,
            status: self.status,
            reason: self.reason,
            actor: self.actor,
            recorded_at: self.recorded_at,
        }
    }
}

/// One immutable record in a task's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    id: StatusEntryId,
    task_id: TaskId,
    status: TaskStatus,
    reason: StatusReason,
    actor: Actor,
    recorded_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted status entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedStatusEntry {
    /// Store-issued identifier.
    pub id: StatusEntryId,
    /// Owning task.
    pub task_id: TaskId,
    /// Recorded status.
    pub status: TaskStatus,
    /// Reason given for the change.
    pub reason: StatusReason,
    /// Who recorded the change.
    pub actor: Actor,
    /// When the change was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl StatusEntry {
    /// Reconstructs an entry from store data.
    #[must_use]
    pub fn from_persisted(data: PersistedStatusEntry) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            status: data.status,
            reason: data.reason,
            actor: data.actor,
            recorded_at: data.recorded_at,
        }
    }

    /// Returns the store-issued identifier.
    #[must_use]
    pub const fn id(&self) -> &StatusEntryId {
        &self.id
    }

    /// Returns the owning task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the recorded status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the reason given for the change.
    #[must_use]
    pub const fn reason(&self) -> &StatusReason {
        &self.reason
    }

    /// Returns who recorded the change.
    #[must_use]
    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Returns when the change was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Ordered status entries of one task, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<StatusEntry>);

impl History {
    /// Builds a history from entries in store order.
    ///
    /// Entries are ordered by `recorded_at`; the sort is stable, so entries
    /// sharing a timestamp keep the order in which the store returned them.
    #[must_use]
    pub fn from_store_order(mut entries: Vec<StatusEntry>) -> Self {
        entries.sort_by_key(StatusEntry::recorded_at);
        Self(entries)
    }

    /// Returns the entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[StatusEntry] {
        &self.0
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no status has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&StatusEntry> {
        self.0.last()
    }

    /// Iterates over the entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, StatusEntry> {
        self.0.iter()
    }

    /// Derives the current status.
    ///
    /// The latest entry wins. With no entries the task is `Assigned` when an
    /// allocation exists, otherwise `Unallocated`.
    #[must_use]
    pub fn current_status(&self, allocated: bool) -> CurrentStatus {
        match (self.latest(), allocated) {
            (Some(entry), _) => CurrentStatus::Allocated(entry.status()),
            (None, true) => CurrentStatus::Allocated(TaskStatus::Assigned),
            (None, false) => CurrentStatus::Unallocated,
        }
    }
}

impl IntoIterator for History {
    type Item = StatusEntry;
    type IntoIter = std::vec::IntoIter<StatusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a StatusEntry;
    type IntoIter = std::slice::Iter<'a, StatusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
