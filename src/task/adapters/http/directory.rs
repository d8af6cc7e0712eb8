//! Employee directory backed by the REST backend.

use async_trait::async_trait;

use super::client::RestClient;
use super::wire::EmployeePayload;
use crate::config::{ClientConfig, RouteTable};
use crate::task::{
    domain::{EmployeeId, EmployeeProfile},
    ports::{EmployeeDirectory, TaskStoreError, TaskStoreResult},
};

/// [`EmployeeDirectory`] speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEmployeeDirectory {
    client: RestClient,
}

impl HttpEmployeeDirectory {
    /// Creates a directory client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] when the HTTP client cannot be
    /// initialised.
    pub fn new(config: ClientConfig) -> TaskStoreResult<Self> {
        Ok(Self {
            client: RestClient::new(config)?,
        })
    }
}

#[async_trait]
impl EmployeeDirectory for HttpEmployeeDirectory {
    async fn find_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<EmployeeProfile>, TaskStoreError> {
        let route = RouteTable::for_employee(&self.client.config().routes.employee, id.as_str());
        let payload: Option<EmployeePayload> = self.client.get_json(&route).await?;
        Ok(payload.map(|record| record.into_profile(id.clone())))
    }
}
