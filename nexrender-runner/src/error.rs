//! Error types for polling and batch execution

use nexrender_client::ClientError;
use thiserror::Error;

/// Failure of a single poll operation
#[derive(Debug, Error)]
pub enum PollError {
    /// The status fetch itself failed; never retried
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// No terminal status was observed before the deadline
    #[error("Timed out waiting for job {job_id} after {timeout_minutes} minute(s)")]
    Timeout { job_id: String, timeout_minutes: u64 },
}

/// Failure of a single batch item
///
/// The display text is the concise message recorded for the item.
#[derive(Debug, Error)]
pub enum ItemError {
    /// A request to the API failed (network, non-2xx status, malformed body)
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// The job did not reach a terminal status in time
    #[error("Timed out waiting for job {job_id} after {timeout_minutes} minute(s)")]
    Timeout { job_id: String, timeout_minutes: u64 },

    /// The resource/operation pair is not implemented
    #[error("Operation not implemented: {resource}.{operation}")]
    UnsupportedOperation { resource: String, operation: String },

    /// A required parameter was missing or malformed; nothing was sent
    #[error("{0}")]
    Validation(String),
}

impl ItemError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<PollError> for ItemError {
    fn from(err: PollError) -> Self {
        match err {
            PollError::Transport(e) => Self::Transport(e),
            PollError::Timeout {
                job_id,
                timeout_minutes,
            } => Self::Timeout {
                job_id,
                timeout_minutes,
            },
        }
    }
}

/// Failure that aborted a whole batch run
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Item {index} ({operation}) failed: {source}")]
    ItemFailed {
        index: usize,
        operation: String,
        #[source]
        source: ItemError,
    },
}

impl BatchError {
    /// Index of the item that aborted the run
    pub fn index(&self) -> usize {
        match self {
            Self::ItemFailed { index, .. } => *index,
        }
    }

    /// Concise message of the underlying item failure
    pub fn message(&self) -> String {
        match self {
            Self::ItemFailed { source, .. } => source.to_string(),
        }
    }
}
