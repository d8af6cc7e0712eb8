//! Given steps for task status workflow BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use workforce_tasks::task::services::CreateTaskRequest;

#[given(r#"task "{task_id}" with target completion date "{completion}""#)]
fn task_with_completion_date(
    world: &mut TaskStatusWorld,
    task_id: String,
    completion: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(
        task_id,
        "Billing service rewrite",
        "Replace the legacy invoice generator",
        "P1",
        "01-09-2024",
        completion,
    );
    run_async(world.service.create_task(request)).wrap_err("create task for scenario")?;
    Ok(())
}
