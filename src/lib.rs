//! Workforce tasks: allocation and status tracking for assigned work.
//!
//! The crate models tasks that are allocated to an employee under a
//! reporting supervisor and then move through an append-only history of
//! status changes. A remote workforce API is the system of record; the
//! crate validates input before any request leaves the process and turns
//! remote failures into a small, user-facing error taxonomy.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, memory, console)
//!
//! # Modules
//!
//! - [`task`]: Task allocation, status history and lifecycle orchestration
//! - [`settings`]: Presentation preferences and their persistence
//! - [`config`]: Remote API client configuration
//! - [`telemetry`]: Tracing subscriber installation

pub mod config;
pub mod settings;
pub mod task;
pub mod telemetry;
