//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Wired, wired};
use eyre::WrapErr;
use rstest::rstest;
use workforce_tasks::task::{
    domain::{CurrentStatus, TaskStatus},
    ports::NotificationLevel,
    presentation::{self, StatusTone},
    services::{AllocateTaskRequest, CreateTaskRequest, RecordStatusRequest, TaskLifecycleError},
};

async fn create_t100(wired: &Wired) -> Result<(), eyre::Report> {
    wired
        .service
        .create_task(CreateTaskRequest::new(
            "T100",
            "Billing service rewrite",
            "Replace the legacy invoice generator",
            "P1",
            "01-09-2024",
            "30-09-2024",
        ))
        .await
        .wrap_err("create T100")?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_moves_from_creation_to_completion(wired: Wired) -> Result<(), eyre::Report> {
    create_t100(&wired).await?;
    eyre::ensure!(
        wired.service.current_status("T100").await? == CurrentStatus::Unallocated,
        "new task should be unallocated"
    );

    wired
        .service
        .allocate(AllocateTaskRequest::new(
            "T100",
            "E1",
            "E2",
            "01-09-2024",
            "15-09-2024",
        ))
        .await
        .wrap_err("allocate T100")?;
    eyre::ensure!(
        wired.service.current_status("T100").await? == TaskStatus::Assigned,
        "allocated task should be assigned"
    );

    for (status, reason) in [
        ("In Progress", "started implementation work"),
        ("On Hold", "blocked on the payments team"),
        ("In Progress", "payments team unblocked us"),
        ("Completed", "all acceptance criteria met"),
    ] {
        wired
            .service
            .record_status(RecordStatusRequest::new("T100", status, reason, "Jon Park"))
            .await
            .wrap_err_with(|| format!("record {status}"))?;
    }

    let overview = wired.service.overview("T100").await?;
    eyre::ensure!(overview.history.len() == 4, "expected four entries");
    eyre::ensure!(
        overview.current_status == TaskStatus::Completed,
        "expected completed, got {}",
        overview.current_status
    );
    eyre::ensure!(
        presentation::tone(overview.current_status) == StatusTone::Success,
        "completed tasks render as success"
    );
    eyre::ensure!(
        wired.service.suggested_next_steps("T100").await?.is_empty(),
        "terminal status has no suggestions"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_outcome_is_notified(wired: Wired) -> Result<(), eyre::Report> {
    create_t100(&wired).await?;
    let rejected = wired
        .service
        .allocate(AllocateTaskRequest::new(
            "T100",
            "E1",
            "E2",
            "01-09-2024",
            "05-10-2024",
        ))
        .await;
    eyre::ensure!(
        matches!(rejected, Err(TaskLifecycleError::DateRange(_))),
        "target beyond completion should fail, got {rejected:?}"
    );

    let levels: Vec<_> = wired
        .notifier
        .delivered()
        .iter()
        .map(|notice| notice.level())
        .collect();
    eyre::ensure!(
        levels == vec![NotificationLevel::Success, NotificationLevel::Error],
        "unexpected notifications: {levels:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn re_assign_is_recorded_without_changing_the_allocation(
    wired: Wired,
) -> Result<(), eyre::Report> {
    create_t100(&wired).await?;
    let original = wired
        .service
        .allocate(AllocateTaskRequest::new(
            "T100",
            "E1",
            "E2",
            "01-09-2024",
            "15-09-2024",
        ))
        .await?;

    wired
        .service
        .record_status(RecordStatusRequest::new(
            "T100",
            "Re-assign",
            "Asha moved to the platform team",
            "Jon Park",
        ))
        .await?;

    let overview = wired.service.overview("T100").await?;
    eyre::ensure!(
        overview.allocation.as_ref() == Some(&original),
        "allocation should be untouched"
    );
    eyre::ensure!(
        presentation::progress_step(overview.current_status)
            == presentation::progress_step(CurrentStatus::Allocated(TaskStatus::ReSubmission)),
        "re-assign shares the re-submission step"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_details_prefill_reporting_person(wired: Wired) -> Result<(), eyre::Report> {
    let supervisor = wired.service.lookup_employee("E2").await?;
    eyre::ensure!(supervisor.name() == "Jon Park", "unexpected name");
    eyre::ensure!(
        supervisor.role_name() == Some("Team Lead"),
        "unexpected role"
    );
    Ok(())
}
