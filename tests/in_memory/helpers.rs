//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use workforce_tasks::task::{
    adapters::memory::{InMemoryEmployeeDirectory, InMemoryTaskStore, RecordingNotificationSink},
    domain::{EmployeeId, EmployeeProfile},
    services::TaskLifecycleService,
};

/// Service type used by in-memory integration tests.
pub type TestService = TaskLifecycleService<
    InMemoryTaskStore,
    InMemoryEmployeeDirectory,
    RecordingNotificationSink,
    DefaultClock,
>;

/// A service together with its notification sink.
pub struct Wired {
    pub service: TestService,
    pub notifier: Arc<RecordingNotificationSink>,
}

fn profile(id: &str, name: &str) -> EmployeeProfile {
    EmployeeProfile::new(EmployeeId::new(id).expect("valid employee id"), name)
}

/// Provides a service over an empty store and a three-person directory.
#[fixture]
pub fn wired() -> Wired {
    let notifier = Arc::new(RecordingNotificationSink::new());
    let directory = InMemoryEmployeeDirectory::new([
        profile("E1", "Asha Rao").with_role("Engineer"),
        profile("E2", "Jon Park").with_role("Team Lead"),
        profile("E3", "Mia Chen"),
    ]);
    Wired {
        service: TaskLifecycleService::new(
            Arc::new(InMemoryTaskStore::new()),
            Arc::new(directory),
            Arc::clone(&notifier),
            Arc::new(DefaultClock),
        ),
        notifier,
    }
}
