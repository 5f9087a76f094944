//! Lifecycle management.
//!
//! # Responsibilities
//! - Coordinate graceful shutdown of the HTTP server
//!
//! # Design Decisions
//! - Shutdown is a broadcast: every long-running task subscribes
//! - In-flight requests drain before `HttpServer::run` returns

pub mod shutdown;

pub use shutdown::Shutdown;
