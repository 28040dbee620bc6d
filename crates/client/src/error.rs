//! Client error types.

use cashrecon_core::ledger::LedgerError;
use cashrecon_shared::AppError;
use thiserror::Error;

use crate::pipeline::SubmissionReceipt;

/// Errors raised while talking to the external service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// Target URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// The service rejected the credential (401/403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("Service returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, or the canonical reason.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Could not decode response from {url}: {reason}")]
    Decode {
        /// Source URL.
        url: String,
        /// Decoder message.
        reason: String,
    },

    /// A fetched record failed validation.
    #[error("Fetched {what} failed validation: {source}")]
    InvalidRecord {
        /// Which collection of records was being validated.
        what: &'static str,
        /// The validation failure.
        #[source]
        source: LedgerError,
    },

    /// A bulk submission failed after an earlier batch was accepted.
    #[error(
        "Submission stopped after {} collection(s) and {} deposit(s) were written: {source}",
        committed.collections,
        committed.deposits
    )]
    PartialSubmission {
        /// What the service already accepted; resending it duplicates records.
        committed: SubmissionReceipt,
        /// Failure of the batch that was not written.
        #[source]
        source: Box<ClientError>,
    },

    /// The client could not be constructed.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(url.to_string())
        } else if err.is_decode() {
            Self::Decode {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }

    /// Maps a failure on the write path, where the data itself is not in doubt.
    #[must_use]
    pub fn into_write_error(self) -> AppError {
        match self {
            Self::Unauthorized(msg) => AppError::Unauthorized(msg),
            Self::NotFound(msg) => AppError::NotFound(msg),
            Self::Config(msg) => AppError::Config(msg),
            partial @ Self::PartialSubmission { .. } => {
                AppError::PartialWrite(partial.to_string())
            }
            other => AppError::ExternalService(other.to_string()),
        }
    }
}

/// Read-path mapping: any retrieval failure means the input is unavailable,
/// never an empty report.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized(msg) => Self::Unauthorized(msg),
            ClientError::NotFound(msg) => Self::NotFound(msg),
            ClientError::Config(msg) => Self::Config(msg),
            partial @ ClientError::PartialSubmission { .. } => {
                Self::PartialWrite(partial.to_string())
            }
            other => Self::InputUnavailable(other.to_string()),
        }
    }
}
