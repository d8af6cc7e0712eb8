//! In-memory adapters for tests and local demos.

mod directory;
mod notifier;
mod store;

pub use directory::InMemoryEmployeeDirectory;
pub use notifier::RecordingNotificationSink;
pub use store::InMemoryTaskStore;
