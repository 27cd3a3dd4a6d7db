//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a 404 usually means the record
//! was deleted elsewhere. All other non-2xx responses land in `HttpError`
//! with the raw status code and body for the diagnostic log.

use thiserror::Error;

/// Failure reported by the host when a request never produced a response
/// (connection refused, DNS failure, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Errors returned by `TodoClient` and surfaced to the log by `TodoView`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
