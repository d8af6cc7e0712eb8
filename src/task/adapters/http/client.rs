//! Shared JSON-over-HTTP plumbing for the REST adapters.

use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, warn};

use super::wire::ErrorBody;
use crate::config::ClientConfig;
use crate::task::ports::{TaskStoreError, TaskStoreResult};

/// `reqwest` client bound to one backend configuration.
#[derive(Debug, Clone)]
pub(super) struct RestClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl RestClient {
    pub(super) fn new(config: ClientConfig) -> TaskStoreResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(TaskStoreError::unavailable)?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub(super) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a `GET`, mapping `404 Not Found` to `None`.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        route: &str,
    ) -> TaskStoreResult<Option<T>> {
        let url = self.config.url(route);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "task store request failed");
            return Err(classify_failure(status.as_u16(), &body));
        }
        decode(&body).map(Some)
    }

    /// Issues a `POST` with a JSON body and decodes the JSON reply.
    ///
    /// An empty reply decodes as `T::default()`.
    pub(super) async fn post_json<B, T>(&self, route: &str, body: &B) -> TaskStoreResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Default,
    {
        let url = self.config.url(route);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "task store request failed");
            return Err(classify_failure(status.as_u16(), &text));
        }
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        decode(&text)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> TaskStoreResult<T> {
    serde_json::from_str(body).map_err(|err| TaskStoreError::InvalidPayload(err.to_string()))
}

fn transport_error(err: reqwest::Error) -> TaskStoreError {
    if err.is_decode() {
        return TaskStoreError::InvalidPayload(err.to_string());
    }
    warn!(error = %err, timeout = err.is_timeout(), "task store unreachable");
    TaskStoreError::unavailable(err)
}

/// Maps a non-success HTTP status and its body onto a store error.
///
/// `404` means the addressed record is missing, other client errors are
/// rejections carrying the store's message, and everything else is a
/// server failure.
pub fn classify_failure(status: u16, body: &str) -> TaskStoreError {
    let message = ErrorBody::parse(body).into_message();
    match status {
        404 => TaskStoreError::NotFound(message.unwrap_or_else(|| "record".to_owned())),
        400..=499 => TaskStoreError::Rejected {
            message: message.unwrap_or_else(|| format!("request rejected with status {status}")),
        },
        _ => TaskStoreError::Server {
            status: Some(status),
            message,
        },
    }
}
