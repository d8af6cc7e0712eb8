//! Task store port: persistence of tasks, allocations and status history.

use crate::task::domain::{Allocation, History, NewStatusEntry, StatusEntry, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Persistence contract for the task lifecycle.
///
/// The store serialises concurrent writes; callers perform no locking or
/// version checks of their own.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Rejected`] when the identifier is taken.
    async fn create_task(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;

    /// Finds the allocation of a task.
    ///
    /// Returns `None` when the task has not been allocated.
    async fn find_allocation(&self, id: &TaskId) -> TaskStoreResult<Option<Allocation>>;

    /// Stores a new allocation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Rejected`] when the store refuses the
    /// allocation, for example because one already exists.
    async fn store_allocation(&self, allocation: &Allocation) -> TaskStoreResult<()>;

    /// Appends a status entry to the task's history.
    ///
    /// The allocation travels with the entry because the store records the
    /// allocation dates on every history row.
    async fn append_status(
        &self,
        entry: &NewStatusEntry,
        allocation: &Allocation,
    ) -> TaskStoreResult<StatusEntry>;

    /// Returns the task's status history, oldest first.
    async fn history(&self, id: &TaskId) -> TaskStoreResult<History>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The addressed task or allocation does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The store refused the request, with its own explanation.
    #[error("{message}")]
    Rejected {
        /// Message supplied by the store.
        message: String,
    },

    /// The store failed or reported an application-level failure.
    #[error(
        "task store failure (status {status:?}): {}",
        .message.as_deref().unwrap_or("no message")
    )]
    Server {
        /// HTTP status code, when one was received.
        status: Option<u16>,
        /// Message supplied by the store, if any.
        message: Option<String>,
    },

    /// The store could not be reached or did not answer in time.
    #[error("task store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The store answered with data the client cannot interpret.
    #[error("malformed task store payload: {0}")]
    InvalidPayload(String),
}

impl TaskStoreError {
    /// Wraps a transport error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
