//! Behaviour tests for task allocation and status recording.

#[path = "task_status_steps/mod.rs"]
mod task_status_steps_defs;

use rstest_bdd_macros::scenario;
use task_status_steps_defs::world::{TaskStatusWorld, world};

#[scenario(
    path = "tests/features/task_status_workflow.feature",
    name = "Allocate a task and record progress to completion"
)]
#[tokio::test(flavor = "multi_thread")]
async fn allocate_and_record_to_completion(world: TaskStatusWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_status_workflow.feature",
    name = "Reject an allocation target beyond task completion"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_target_beyond_completion(world: TaskStatusWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_status_workflow.feature",
    name = "Reject a status reason that is too short"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_short_reason(world: TaskStatusWorld) {
    let _ = world;
}
