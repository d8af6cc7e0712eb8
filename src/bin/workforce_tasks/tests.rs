//! Unit tests for argument parsing and output rendering.

use super::{Cli, Command, write_history, write_status};
use chrono::{TimeZone, Utc};
use clap::Parser;
use rstest::rstest;
use workforce_tasks::task::domain::{
    Actor, CurrentStatus, History, PersistedStatusEntry, StatusEntry, StatusEntryId, StatusReason,
    TaskId, TaskStatus,
};

#[rstest]
fn status_command_parses_reason_and_actor() {
    let cli = Cli::try_parse_from([
        "workforce-tasks",
        "status",
        "T100",
        "In Progress",
        "--reason",
        "Started work on the task",
        "--by",
        "E2",
    ])
    .expect("arguments parse");

    match cli.command {
        Command::Status {
            task_id,
            status,
            reason,
            actor,
        } => {
            assert_eq!(task_id, "T100");
            assert_eq!(status, "In Progress");
            assert_eq!(reason, "Started work on the task");
            assert_eq!(actor, "E2");
        }
        other => panic!("expected status command, got {other:?}"),
    }
}

#[rstest]
fn global_api_url_is_accepted_after_subcommand() {
    let cli = Cli::try_parse_from([
        "workforce-tasks",
        "current",
        "T100",
        "--api-url",
        "http://tasks.internal:8080",
    ])
    .expect("arguments parse");

    assert_eq!(cli.api_url.as_deref(), Some("http://tasks.internal:8080"));
}

#[rstest]
fn allocate_requires_target_date() {
    let result = Cli::try_parse_from([
        "workforce-tasks",
        "allocate",
        "T100",
        "--employee",
        "E1",
        "--reporting-person",
        "E2",
        "--assigned-date",
        "01-06-2024",
    ]);

    assert!(result.is_err());
}

#[rstest]
#[case(CurrentStatus::Unallocated, "Unallocated [default] step 0\n")]
#[case(
    CurrentStatus::Allocated(TaskStatus::InProgress),
    "In Progress [blue] step 1\n"
)]
fn current_status_line(#[case] status: CurrentStatus, #[case] expected: &str) {
    let mut out = Vec::new();
    write_status(&mut out, status).expect("write to buffer");
    assert_eq!(String::from_utf8(out).expect("utf-8 output"), expected);
}

#[rstest]
fn empty_history_says_so() {
    let mut out = Vec::new();
    write_history(&mut out, &History::default()).expect("write to buffer");
    assert_eq!(
        String::from_utf8(out).expect("utf-8 output"),
        "no status changes recorded\n"
    );
}

#[rstest]
fn history_rows_show_timestamp_status_and_actor() {
    let entry = StatusEntry::from_persisted(PersistedStatusEntry {
        id: StatusEntryId::from_store("1"),
        task_id: TaskId::new("T100").expect("valid task id"),
        status: TaskStatus::OnHold,
        reason: StatusReason::from_persisted("Waiting on supplier".to_owned()),
        actor: Actor::new("E2").expect("valid actor"),
        recorded_at: Utc
            .with_ymd_and_hms(2024, 6, 3, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    });
    let mut out = Vec::new();

    write_history(&mut out, &History::from_store_order(vec![entry])).expect("write to buffer");

    let rendered = String::from_utf8(out).expect("utf-8 output");
    assert!(rendered.starts_with("03-06-2024 09:30  On Hold"));
    assert!(rendered.contains("E2: Waiting on supplier"));
}
