//! Then steps for task status workflow BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::then;
use workforce_tasks::task::services::TaskLifecycleError;

#[then(r#"the current status of "{task_id}" is "{expected}""#)]
fn current_status_is(
    world: &TaskStatusWorld,
    task_id: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let status = run_async(world.service.current_status(&task_id))?;
    if status.as_str() != expected {
        return Err(eyre::eyre!("expected status {expected}, found {status}"));
    }
    Ok(())
}

#[then(r#"the history of "{task_id}" has {count:usize} entries"#)]
fn history_has_entries(
    world: &TaskStatusWorld,
    task_id: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let history = run_async(world.service.history(&task_id))?;
    if history.len() != count {
        return Err(eyre::eyre!(
            "expected {count} history entries, found {}",
            history.len()
        ));
    }
    Ok(())
}

#[then("the operation fails with a date range error")]
fn fails_with_date_range(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaskLifecycleError::DateRange(_)) => Ok(()),
        other => Err(eyre::eyre!("expected DateRange error, got {other:?}")),
    }
}

#[then("the operation fails with a validation error")]
fn fails_with_validation(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaskLifecycleError::Validation(_)) => Ok(()),
        other => Err(eyre::eyre!("expected Validation error, got {other:?}")),
    }
}
