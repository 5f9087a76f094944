//! The session registry collaborator.
//!
//! The registry is the authority on which sessions exist. This crate only
//! calls `add`; storage (in-memory, database, remote) lives elsewhere.

use async_trait::async_trait;
use thiserror::Error;

use crate::sessionmap::session::{Session, SessionId};

/// Errors reported by a registry backend.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A session with the same id is already registered.
    #[error("session {0} is already registered")]
    Duplicate(SessionId),

    /// The backend could not be reached.
    #[error("session registry unavailable: {0}")]
    Unavailable(String),

    /// Backend-specific failure.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

/// Store of session records.
///
/// `add` borrows the session for the duration of the call; implementations
/// clone whatever they retain.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    async fn add(&self, session: &Session) -> Result<(), RegistryError>;
}
