//! Employee directory port.

use crate::task::domain::{EmployeeId, EmployeeProfile};
use crate::task::ports::TaskStoreError;
use async_trait::async_trait;

/// Read-only lookup of employees referenced by allocations.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Finds an employee by identifier.
    ///
    /// Returns `None` when no such employee exists.
    async fn find_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<EmployeeProfile>, TaskStoreError>;
}
