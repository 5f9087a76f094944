//! Request ownership matching.
//!
//! # Responsibilities
//! - Decide whether a request belongs to a handler
//! - Combine method and path template conditions with AND semantics
//!
//! # Design Decisions
//! - Matching never reads the body and never fails
//! - Method comparison is exact (per HTTP spec, methods are case-sensitive)
//! - Only the URI path is matched; the query string is ignored

use axum::body::Body;
use axum::http::{Method, Request};

use crate::routing::template::UrlTemplate;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &Request<Body>) -> bool;
}

/// Pairs an HTTP method with a URL template.
///
/// Immutable once built and shared freely between concurrent requests.
#[derive(Debug, Clone)]
pub struct RequestGate {
    method: Method,
    template: UrlTemplate,
}

impl RequestGate {
    pub fn new(method: Method, template: UrlTemplate) -> Self {
        Self { method, template }
    }

    /// Pure ownership test over `(method, path)`.
    pub fn test(&self, method: &Method, path: &str) -> bool {
        *method == self.method && self.template.matches(path).is_some()
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn template(&self) -> &UrlTemplate {
        &self.template
    }
}

impl Matcher for RequestGate {
    fn matches(&self, req: &Request<Body>) -> bool {
        self.test(req.method(), req.uri().path())
    }
}
