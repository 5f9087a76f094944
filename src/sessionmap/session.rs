//! Session records and identifiers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Returned when a session id is empty or blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("session id must not be empty")]
pub struct InvalidSessionId;

/// Opaque, non-empty session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidSessionId> {
        Self::try_from(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = InvalidSessionId;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        if id.trim().is_empty() {
            return Err(InvalidSessionId);
        }
        Ok(Self(id))
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A browser/automation session known to the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique id. Uniqueness is enforced by the registry, not here.
    #[serde(alias = "sessionId")]
    pub id: SessionId,

    /// Address of the node that owns the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<Url>,

    /// Capabilities and other metadata, carried through untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub capabilities: Map<String, Value>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            uri: None,
            capabilities: Map::new(),
        }
    }

    pub fn with_uri(mut self, uri: Url) -> Self {
        self.uri = Some(uri);
        self
    }

    pub fn with_capability(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.capabilities.insert(name.into(), value.into());
        self
    }
}
