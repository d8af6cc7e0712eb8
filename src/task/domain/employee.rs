//! Employee directory records referenced by allocations.

use super::EmployeeId;
use serde::{Deserialize, Serialize};

/// Directory entry for an employee, as needed by task allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    id: EmployeeId,
    name: String,
    role_name: Option<String>,
    reporting_person: Option<EmployeeId>,
}

impl EmployeeProfile {
    /// Creates a profile with no role or default supervisor.
    #[must_use]
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role_name: None,
            reporting_person: None,
        }
    }

    /// Sets the employee's role name.
    #[must_use]
    pub fn with_role(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    /// Sets the supervisor the employee normally reports to.
    #[must_use]
    pub fn with_reporting_person(mut self, reporting_person: EmployeeId) -> Self {
        self.reporting_person = Some(reporting_person);
        self
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Returns the employee's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role name, if one is assigned.
    #[must_use]
    pub fn role_name(&self) -> Option<&str> {
        self.role_name.as_deref()
    }

    /// Returns the default supervisor, used to pre-fill allocation forms.
    #[must_use]
    pub const fn reporting_person(&self) -> Option<&EmployeeId> {
        self.reporting_person.as_ref()
    }
}
