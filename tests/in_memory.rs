//! In-memory integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `task_lifecycle_tests`: Creation, allocation and status recording
//! - `settings_tests`: Settings persistence round trips

mod in_memory {
    pub mod helpers;

    mod settings_tests;
    mod task_lifecycle_tests;
}
