//! JSON wire codec for session payloads.
//!
//! Requests carry a bare session object. Responses wrap their result in the
//! `{"value": ...}` envelope.

use axum::body::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::sessionmap::error::{SessionMapError, SessionMapResult};
use crate::sessionmap::session::Session;

/// Content type of every payload this codec produces.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Serialize)]
struct Envelope<'a, T: ?Sized> {
    value: &'a T,
}

/// Schema-typed JSON codec. Stateless; copy it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn new() -> Self {
        Self
    }

    /// Decode a request body into a session.
    ///
    /// Returns `Ok(None)` for a JSON `null` body so the caller can decide how
    /// an absent session is reported.
    pub fn decode_session(&self, body: &[u8]) -> SessionMapResult<Option<Session>> {
        let text = std::str::from_utf8(body).map_err(|e| {
            SessionMapError::MalformedPayload(format!("body is not valid UTF-8: {e}"))
        })?;

        if text.trim().is_empty() {
            return Err(SessionMapError::MalformedPayload("empty body".into()));
        }

        let value: Value = serde_json::from_str(text)
            .map_err(|e| SessionMapError::MalformedPayload(e.to_string()))?;

        let mut fields = match value {
            Value::Null => return Ok(None),
            Value::Object(fields) => fields,
            other => {
                return Err(SessionMapError::MalformedPayload(format!(
                    "expected a JSON object, found {}",
                    json_type(&other)
                )))
            }
        };

        // A null `id` must not shadow the `sessionId` alias.
        if fields.get("id").is_some_and(Value::is_null) {
            fields.remove("id");
        }
        let id = fields.get("id").or_else(|| fields.get("sessionId"));
        if id.map_or(true, Value::is_null) {
            return Err(SessionMapError::MissingRequiredField("id"));
        }

        serde_json::from_value(Value::Object(fields))
            .map(Some)
            .map_err(|e| SessionMapError::MalformedPayload(e.to_string()))
    }

    /// Encode a session as a request body.
    pub fn encode_session(&self, session: &Session) -> SessionMapResult<Bytes> {
        serde_json::to_vec(session)
            .map(Bytes::from)
            .map_err(SessionMapError::Encode)
    }

    /// Encode a response value inside the `{"value": ...}` envelope.
    pub fn encode_value<T: Serialize + ?Sized>(&self, value: &T) -> SessionMapResult<Bytes> {
        serde_json::to_vec(&Envelope { value })
            .map(Bytes::from)
            .map_err(SessionMapError::Encode)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
