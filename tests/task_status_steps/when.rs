//! When steps for task status workflow BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::when;
use workforce_tasks::task::services::{AllocateTaskRequest, RecordStatusRequest};

#[when(
    r#"task "{task_id}" is allocated to "{employee}" reporting to "{supervisor}" from "{assigned}" until "{target}""#
)]
fn allocate_task(
    world: &mut TaskStatusWorld,
    task_id: String,
    employee: String,
    supervisor: String,
    assigned: String,
    target: String,
) {
    let request = AllocateTaskRequest::new(task_id, employee, supervisor, assigned, target);
    let result = run_async(world.service.allocate(request));
    world.record_outcome(result);
}

#[when(r#"status "{status}" is recorded on "{task_id}" with reason "{reason}""#)]
fn record_status(world: &mut TaskStatusWorld, status: String, task_id: String, reason: String) {
    let request = RecordStatusRequest::new(task_id, status, reason, "E2");
    let result = run_async(world.service.record_status(request));
    world.record_outcome(result);
}
