//! Error translation for HTTP responses.
//!
//! # Responsibilities
//! - Map `SessionMapError` kinds to HTTP status codes
//! - Render failures in the W3C WebDriver error envelope:
//!   `{"value": {"error": ..., "message": ..., "stacktrace": ""}}`
//!
//! # Design Decisions
//! - Client mistakes map to 400 `invalid argument`
//! - Dispatcher bugs and registry failures map to 500 `unknown error`
//! - Unowned requests at the server boundary map to 404 `unknown command`

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::sessionmap::codec::{self, JsonCodec};
use crate::sessionmap::SessionMapError;

pub const INVALID_ARGUMENT: &str = "invalid argument";
pub const UNKNOWN_COMMAND: &str = "unknown command";
pub const UNKNOWN_ERROR: &str = "unknown error";

#[derive(Debug, Serialize)]
struct ErrorValue<'a> {
    error: &'a str,
    message: &'a str,
    stacktrace: &'a str,
}

impl SessionMapError {
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// WebDriver error code for this failure.
    pub fn error_code(&self) -> &'static str {
        if self.is_client_error() {
            INVALID_ARGUMENT
        } else {
            UNKNOWN_ERROR
        }
    }
}

impl IntoResponse for SessionMapError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), self.error_code(), &self.to_string())
    }
}

/// Build an error response in the WebDriver envelope.
pub fn error_response(status: StatusCode, error: &str, message: &str) -> Response {
    let value = ErrorValue {
        error,
        message,
        stacktrace: "",
    };
    match JsonCodec::new().encode_value(&value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, codec::CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode error response");
            status.into_response()
        }
    }
}
