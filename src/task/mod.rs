//! Task allocation and status workflow.
//!
//! A task is created once, allocated to a single assignee who reports to a
//! supervisor, and then accumulates an append-only history of status
//! entries. The current status is derived from that history. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Status hints for rendering in [`presentation`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod presentation;
pub mod services;

#[cfg(test)]
mod tests;
