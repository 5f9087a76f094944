//! Metrics collection.
//!
//! # Metrics
//! - `sessionmap_registrations_total` (counter): registrations by outcome
//! - `sessionmap_registration_duration_seconds` (histogram): handler latency
//!
//! # Design Decisions
//! - Uses the `metrics` facade; recording is a no-op until the host
//!   process installs a recorder
//! - Outcome label is `registered` or the error kind

use std::time::Instant;

pub const REGISTRATIONS_TOTAL: &str = "sessionmap_registrations_total";
pub const REGISTRATION_DURATION: &str = "sessionmap_registration_duration_seconds";

/// Record the outcome and latency of one registration attempt.
pub fn record_registration(outcome: &'static str, start_time: Instant) {
    metrics::counter!(REGISTRATIONS_TOTAL, "outcome" => outcome).increment(1);
    metrics::histogram!(REGISTRATION_DURATION, "outcome" => outcome)
        .record(start_time.elapsed().as_secs_f64());
}
