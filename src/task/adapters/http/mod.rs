//! REST adapters for the task store and employee directory.
//!
//! Requests carry no retry policy; a timeout surfaces as
//! [`TaskStoreError::Unavailable`](crate::task::ports::TaskStoreError) and
//! the caller decides whether to re-invoke.

mod client;
mod directory;
mod store;
mod wire;

pub use client::classify_failure;
pub use directory::HttpEmployeeDirectory;
pub use store::HttpTaskStore;
