//! Adapter implementations of the task ports.

pub mod console;
pub mod http;
pub mod memory;
