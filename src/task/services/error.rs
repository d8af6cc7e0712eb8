//! Error taxonomy surfaced to the presentation layer.

use std::sync::Arc;
use thiserror::Error;

use crate::task::{
    domain::{DateRangeError, TaskDomainError, TaskField},
    ports::TaskStoreError,
};

/// Message shown when the store fails without explaining why.
pub const GENERIC_SERVER_MESSAGE: &str = "The server could not complete the request";

/// Service-level errors for task lifecycle operations.
///
/// Every variant is returned to the caller; none is fatal and a failed
/// write leaves previously stored data untouched.
#[derive(Debug, Clone, Error)]
pub enum TaskLifecycleError {
    /// Input failed validation; nothing was sent to the store.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// A date ordering rule failed; nothing was sent to the store.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// The task or allocation does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// The store was unreachable or timed out.
    #[error("task store unreachable: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),

    /// The store refused or failed the request.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_SERVER_MESSAGE))]
    Server {
        /// Store-supplied message, passed through verbatim.
        message: Option<String>,
    },
}

impl TaskLifecycleError {
    /// Returns the text to render next to the failed operation.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Unable to reach the server. Check your connection and try again.".to_owned()
            }
            other => other.to_string(),
        }
    }

    /// Returns `true` when re-invoking the operation may succeed.
    ///
    /// Nothing is retried automatically.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns the form field at fault for local validation failures.
    #[must_use]
    pub const fn field(&self) -> Option<TaskField> {
        match self {
            Self::Validation(err) => Some(err.field()),
            Self::DateRange(err) => Some(err.field()),
            Self::NotFound(_) | Self::Network(_) | Self::Server { .. } => None,
        }
    }
}

impl From<TaskStoreError> for TaskLifecycleError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::NotFound(what) => Self::NotFound(what),
            TaskStoreError::Rejected { message } => Self::Server {
                message: Some(message),
            },
            TaskStoreError::Server { message, .. } => Self::Server { message },
            TaskStoreError::Unavailable(source) => Self::Network(source),
            TaskStoreError::InvalidPayload(_) => Self::Server { message: None },
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;
