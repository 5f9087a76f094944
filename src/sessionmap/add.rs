//! Session registration handler.
//!
//! # Flow
//! ```text
//! POST /se/grid/session  {"id": "...", ...}
//!     → gate re-check        (Unrouted)
//!     → read body, decode    (UnreadableBody / MalformedPayload / MissingRequiredField)
//!     → registry.add         (Registry, passed through unchanged)
//!     → 200 {"value":true}
//! ```
//!
//! # Design Decisions
//! - The handler keeps no per-request state; concurrent calls are independent
//! - No retries here; those belong to the registry or the transport
//! - Body size is capped by the transport (`RequestBodyLimitLayer` in
//!   `HttpServer`); an over-limit stream surfaces as `UnreadableBody`
//! - Dropping the `execute` future drops the in-flight registry call, so
//!   transport timeouts and cancellation reach the registry

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Response};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::http::handler::CommandHandler;
use crate::http::request::RequestIdExt;
use crate::observability::metrics;
use crate::routing::{Matcher, RequestGate, UrlTemplate};
use crate::sessionmap::codec::{self, JsonCodec};
use crate::sessionmap::error::{SessionMapError, SessionMapResult};
use crate::sessionmap::registry::SessionRegistry;

/// Path that session registrations are posted to.
pub const SESSION_PATH: &str = "/se/grid/session";

/// Admits `POST /se/grid/session` requests into a [`SessionRegistry`].
pub struct RegistrationHandler {
    codec: JsonCodec,
    sessions: Arc<dyn SessionRegistry>,
    gate: RequestGate,
}

impl RegistrationHandler {
    pub fn new(codec: JsonCodec, sessions: Arc<dyn SessionRegistry>) -> Self {
        Self {
            codec,
            sessions,
            gate: RequestGate::new(Method::POST, UrlTemplate::new(SESSION_PATH)),
        }
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    async fn register(&self, req: Request<Body>) -> SessionMapResult<Response<Body>> {
        // Dispatchers should have asked `matches` already; guard anyway.
        if !self.gate.matches(&req) {
            return Err(SessionMapError::Unrouted {
                method: req.method().clone(),
                uri: req.uri().to_string(),
            });
        }

        let body = axum::body::to_bytes(req.into_body(), usize::MAX)
            .await
            .map_err(SessionMapError::UnreadableBody)?;

        let session = self
            .codec
            .decode_session(&body)?
            .ok_or(SessionMapError::MissingRequiredField("session"))?;

        tracing::debug!(session_id = %session.id, "Adding session to registry");
        self.sessions.add(&session).await?;
        tracing::info!(session_id = %session.id, "Session registered");

        let mut response = Response::new(Body::from(self.codec.encode_value(&true)?));
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(codec::CONTENT_TYPE),
        );
        Ok(response)
    }
}

impl fmt::Debug for RegistrationHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationHandler")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

impl Matcher for RegistrationHandler {
    fn matches(&self, req: &Request<Body>) -> bool {
        self.gate.matches(req)
    }
}

#[async_trait]
impl CommandHandler for RegistrationHandler {
    async fn execute(&self, req: Request<Body>) -> SessionMapResult<Response<Body>> {
        let start_time = Instant::now();
        let span = tracing::info_span!(
            "register_session",
            request_id = %req.request_id(),
            method = %req.method(),
            path = %req.uri().path(),
        );

        let result = self.register(req).instrument(span.clone()).await;

        span.in_scope(|| match &result {
            Ok(_) => metrics::record_registration("registered", start_time),
            Err(e) => {
                if e.is_client_error() {
                    tracing::warn!(error = %e, kind = e.kind(), "Rejected session registration");
                } else {
                    tracing::error!(error = %e, kind = e.kind(), "Session registration failed");
                }
                metrics::record_registration(e.kind(), start_time);
            }
        });
        result
    }
}
