//! Session map error definitions.

use axum::http::Method;
use thiserror::Error;

use crate::sessionmap::registry::RegistryError;

/// Errors raised while admitting a session registration request.
///
/// Mapping to HTTP status codes and bodies happens in `http::response`.
#[derive(Debug, Error)]
pub enum SessionMapError {
    /// The handler was invoked for a request its gate does not own.
    #[error("session id not found in url: {method} {uri}")]
    Unrouted { method: Method, uri: String },

    /// The request body could not be read from the transport.
    #[error("unable to read request body: {0}")]
    UnreadableBody(#[source] axum::Error),

    /// The body is not a well-formed session payload.
    #[error("malformed session payload: {0}")]
    MalformedPayload(String),

    /// A mandatory value was absent or null.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The response payload could not be encoded.
    #[error("unable to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl SessionMapError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionMapError::Unrouted { .. } => "unrouted",
            SessionMapError::UnreadableBody(_) => "unreadable_body",
            SessionMapError::MalformedPayload(_) => "malformed_payload",
            SessionMapError::MissingRequiredField(_) => "missing_required_field",
            SessionMapError::Registry(_) => "registry_failure",
            SessionMapError::Encode(_) => "encode_failure",
        }
    }

    /// True when the caller sent something wrong, false for server faults.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SessionMapError::UnreadableBody(_)
                | SessionMapError::MalformedPayload(_)
                | SessionMapError::MissingRequiredField(_)
        )
    }
}

/// Result type for session map operations.
pub type SessionMapResult<T> = Result<T, SessionMapError>;
