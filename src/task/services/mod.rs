//! Application services for the task lifecycle.

mod error;
mod lifecycle;
mod requests;

pub use error::{GENERIC_SERVER_MESSAGE, TaskLifecycleError, TaskLifecycleResult};
pub use lifecycle::{TaskLifecycleService, TaskOverview};
pub use requests::{AllocateTaskRequest, CreateTaskRequest, RecordStatusRequest};
