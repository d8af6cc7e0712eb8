//! Shared world state for task status workflow BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use workforce_tasks::task::{
    adapters::memory::{InMemoryEmployeeDirectory, InMemoryTaskStore, RecordingNotificationSink},
    domain::{EmployeeId, EmployeeProfile},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskStore,
    InMemoryEmployeeDirectory,
    RecordingNotificationSink,
    DefaultClock,
>;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub service: TestTaskService,
    pub last_error: Option<TaskLifecycleError>,
}

impl TaskStatusWorld {
    /// Creates a world whose directory knows employees `E1` and `E2`.
    #[must_use]
    pub fn new() -> Self {
        let employees = [("E1", "Asha Rao"), ("E2", "Jon Park")]
            .into_iter()
            .filter_map(|(id, name)| {
                EmployeeId::new(id)
                    .ok()
                    .map(|employee_id| EmployeeProfile::new(employee_id, name))
            });
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskStore::new()),
            Arc::new(InMemoryEmployeeDirectory::new(employees)),
            Arc::new(RecordingNotificationSink::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            last_error: None,
        }
    }

    /// Remembers the failure of a step's operation, if any.
    pub fn record_outcome<T>(&mut self, result: Result<T, TaskLifecycleError>) {
        self.last_error = result.err();
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
