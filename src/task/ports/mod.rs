//! Port contracts for the task lifecycle.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod directory;
pub mod notifier;
pub mod store;

pub use directory::EmployeeDirectory;
pub use notifier::{Notification, NotificationLevel, NotificationSink};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
