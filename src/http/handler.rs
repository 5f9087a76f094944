//! Handler contracts.
//!
//! A routable unit exposes two capabilities on one value: a [`Matcher`]
//! that answers "do you own this request?" and a [`CommandHandler`] that
//! handles it. Callers ask the matcher first.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};

use crate::routing::Matcher;
use crate::sessionmap::SessionMapResult;

/// Executes a request that the paired matcher has accepted.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, req: Request<Body>) -> SessionMapResult<Response<Body>>;
}

/// A matcher and handler in one value.
pub trait Routable: Matcher + CommandHandler {}

impl<T: Matcher + CommandHandler> Routable for T {}
