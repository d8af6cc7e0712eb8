//! Task store backed by the REST backend.

use async_trait::async_trait;
use tracing::{debug, info};

use super::client::RestClient;
use super::wire::{
    Acknowledgement, AllocateBody, AllocationEnvelope, CreateTaskBody, HistoryEnvelope,
    TaskPayload, UpdateStatusBody,
};
use crate::config::{ClientConfig, RouteTable};
use crate::task::{
    domain::{Allocation, History, NewStatusEntry, StatusEntry, StatusEntryId, Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// [`TaskStore`] speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: RestClient,
}

impl HttpTaskStore {
    /// Creates a store for the configured backend.
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

    fn routes(&self) -> &RouteTable {
        &self.client.config().routes
    }
}

/// Converts a write acknowledgement into a result.
fn acknowledge(ack: &Acknowledgement) -> TaskStoreResult<()> {
    if ack.reported_failure() {
        return Err(TaskStoreError::Server {
            status: None,
            message: ack.message.clone(),
        });
    }
    Ok(())
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn create_task(&self, task: &Task) -> TaskStoreResult<()> {
        let ack: Acknowledgement = self
            .client
            .post_json(&self.routes().create_task, &CreateTaskBody::from(task))
            .await?;
        acknowledge(&ack)?;
        info!(task_id = %task.id(), "task created");
        Ok(())
    }

    async fn find_task(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let route = RouteTable::for_task(&self.routes().task, id.as_str());
        let payload: Option<TaskPayload> = self.client.get_json(&route).await?;
        payload.map(|row| row.into_task(id)).transpose()
    }

    async fn find_allocation(&self, id: &TaskId) -> TaskStoreResult<Option<Allocation>> {
        let route = RouteTable::for_task(&self.routes().allocation, id.as_str());
        let envelope: Option<AllocationEnvelope> = self.client.get_json(&route).await?;
        match envelope {
            Some(AllocationEnvelope {
                success: true,
                task_details: Some(details),
            }) => details.into_allocation(id).map(Some),
            _ => {
                debug!(task_id = %id, "no allocation recorded");
                Ok(None)
            }
        }
    }

    async fn store_allocation(&self, allocation: &Allocation) -> TaskStoreResult<()> {
        let ack: Acknowledgement = self
            .client
            .post_json(&self.routes().allocate, &AllocateBody::from(allocation))
            .await?;
        acknowledge(&ack)?;
        info!(
            task_id = %allocation.task_id(),
            employee_id = %allocation.employee_id(),
            "allocation stored"
        );
        Ok(())
    }

    async fn append_status(
        &self,
        entry: &NewStatusEntry,
        allocation: &Allocation,
    ) -> TaskStoreResult<StatusEntry> {
        let ack: Acknowledgement = self
            .client
            .post_json(
                &self.routes().update_status,
                &UpdateStatusBody::new(entry, allocation),
            )
            .await?;
        acknowledge(&ack)?;
        let id = ack.entry_id().unwrap_or_else(StatusEntryId::generate);
        Ok(entry.clone().into_entry(id))
    }

    async fn history(&self, id: &TaskId) -> TaskStoreResult<History> {
        let route = RouteTable::for_task(&self.routes().history, id.as_str());
        let envelope: Option<HistoryEnvelope> = self.client.get_json(&route).await?;
        let Some(envelope) = envelope else {
            debug!(task_id = %id, "store has no history for task");
            return Ok(History::default());
        };
        if !envelope.success {
            return Err(TaskStoreError::Server {
                status: None,
                message: envelope.message,
            });
        }
        let entries = envelope
            .history
            .into_iter()
            .enumerate()
            .map(|(position, row)| row.into_entry(id, position))
            .collect::<TaskStoreResult<Vec<_>>>()?;
        Ok(History::from_store_order(entries))
    }
}
