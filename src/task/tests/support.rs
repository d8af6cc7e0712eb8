//! Shared fixtures for task unit tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use crate::task::{
    adapters::memory::{InMemoryEmployeeDirectory, InMemoryTaskStore, RecordingNotificationSink},
    domain::{
        CalendarDate, EmployeeId, EmployeeProfile, ProjectId, Task, TaskData, TaskDescription,
        TaskId, TaskName,
    },
    services::TaskLifecycleService,
};

/// Clock that advances one second on every reading.
#[derive(Debug)]
pub struct StepClock {
    next: Mutex<DateTime<Utc>>,
}

impl StepClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock lock");
        let now = *next;
        *next = now + Duration::seconds(1);
        now
    }
}

pub type TestService = TaskLifecycleService<
    InMemoryTaskStore,
    InMemoryEmployeeDirectory,
    RecordingNotificationSink,
    StepClock,
>;

/// Service wired to in-memory adapters, with handles kept for assertions.
pub struct Harness {
    pub service: TestService,
    pub store: Arc<InMemoryTaskStore>,
    pub notifier: Arc<RecordingNotificationSink>,
}

pub fn date(text: &str) -> CalendarDate {
    CalendarDate::parse(text).expect("valid test date")
}

pub fn task(id: &str, initiative: &str, completion: &str) -> Task {
    Task::create(TaskData {
        id: TaskId::new(id).expect("valid task id"),
        name: TaskName::new("Quarterly audit").expect("valid name"),
        description: TaskDescription::new("Reconcile ledgers for the quarter")
            .expect("valid description"),
        project_id: ProjectId::new("P1").expect("valid project id"),
        initiative_date: date(initiative),
        target_completion_date: date(completion),
    })
    .expect("valid task dates")
}

pub fn employee(id: &str, name: &str) -> EmployeeProfile {
    EmployeeProfile::new(EmployeeId::new(id).expect("valid employee id"), name)
}

pub fn harness_with(tasks: impl IntoIterator<Item = Task>) -> Harness {
    let store = Arc::new(InMemoryTaskStore::with_tasks(tasks));
    let directory = Arc::new(InMemoryEmployeeDirectory::new([
        employee("E1", "Asha Rao").with_reporting_person(EmployeeId::new("E2").expect("id")),
        employee("E2", "Jon Park"),
        employee("E3", "Mia Chen"),
    ]));
    let notifier = Arc::new(RecordingNotificationSink::new());
    let clock = Arc::new(StepClock::starting_at(
        Utc.with_ymd_and_hms(2024, 9, 1, 9, 0, 0)
            .single()
            .expect("valid start"),
    ));
    Harness {
        service: TaskLifecycleService::new(
            Arc::clone(&store),
            directory,
            Arc::clone(&notifier),
            clock,
        ),
        store,
        notifier,
    }
}

/// Task `T100` due 30-09-2024, plus `T200` due 20-06-2024.
#[fixture]
pub fn harness() -> Harness {
    harness_with([
        task("T100", "01-09-2024", "30-09-2024"),
        task("T200", "01-06-2024", "20-06-2024"),
    ])
}
