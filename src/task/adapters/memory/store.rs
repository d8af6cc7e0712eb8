//! In-memory task store for lifecycle tests and demos.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Allocation, History, NewStatusEntry, StatusEntry, StatusEntryId, Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    tasks: HashMap<TaskId, Task>,
    allocations: HashMap<TaskId, Allocation>,
    history: HashMap<TaskId, Vec<StatusEntry>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let state = InMemoryStoreState {
            tasks: tasks
                .into_iter()
                .map(|task| (task.id().clone(), task))
                .collect(),
            ..InMemoryStoreState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::unavailable(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create_task(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.tasks.contains_key(task.id()) {
            return Err(TaskStoreError::Rejected {
                message: format!("Task ID {} already exists", task.id()),
            });
        }
        state.tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn find_task(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn find_allocation(&self, id: &TaskId) -> TaskStoreResult<Option<Allocation>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.allocations.get(id).cloned())
    }

    async fn store_allocation(&self, allocation: &Allocation) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let task_id = allocation.task_id();
        if !state.tasks.contains_key(task_id) {
            return Err(TaskStoreError::NotFound(format!("task {task_id}")));
        }
        if state.allocations.contains_key(task_id) {
            return Err(TaskStoreError::Rejected {
                message: format!("Task {task_id} is already allocated"),
            });
        }
        state.allocations.insert(task_id.clone(), allocation.clone());
        Ok(())
    }

    async fn append_status(
        &self,
        entry: &NewStatusEntry,
        _allocation: &Allocation,
    ) -> TaskStoreResult<StatusEntry> {
        let mut state = self.state.write().map_err(poisoned)?;
        let task_id = entry.task_id();
        if !state.allocations.contains_key(task_id) {
            return Err(TaskStoreError::NotFound(format!("allocation for task {task_id}")));
        }
        let stored = entry.clone().into_entry(StatusEntryId::generate());
        state
            .history
            .entry(task_id.clone())
            .or_default()
            .push(stored.clone());
        Ok(stored)
    }

    async fn history(&self, id: &TaskId) -> TaskStoreResult<History> {
        let state = self.state.read().map_err(poisoned)?;
        let entries = state.history.get(id).cloned().unwrap_or_default();
        Ok(History::from_store_order(entries))
    }
}
