//! In-memory employee directory.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::task::{
    domain::{EmployeeId, EmployeeProfile},
    ports::{EmployeeDirectory, TaskStoreError},
};

/// Fixed employee directory backed by a map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: HashMap<EmployeeId, EmployeeProfile>,
}

impl InMemoryEmployeeDirectory {
    /// Creates a directory holding `employees`.
    #[must_use]
    pub fn new(employees: impl IntoIterator<Item = EmployeeProfile>) -> Self {
        Self {
            employees: employees
                .into_iter()
                .map(|profile| (profile.id().clone(), profile))
                .collect(),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn find_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<EmployeeProfile>, TaskStoreError> {
        Ok(self.employees.get(id).cloned())
    }
}
