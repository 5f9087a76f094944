//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → matcher.rs (RequestGate: method AND template)
//!     → template.rs (segment match, capture variables)
//!     → Return: owned or not owned
//!
//! Gate Compilation (at handler construction):
//!     "/se/grid/session/{id}"
//!     → Split into literal / variable segments
//!     → Freeze as immutable UrlTemplate
//! ```
//!
//! # Design Decisions
//! - Templates compiled once, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input always gives the same answer

pub mod matcher;
pub mod template;

pub use matcher::{Matcher, RequestGate};
pub use template::{UrlMatch, UrlTemplate};
