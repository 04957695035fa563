//! Deterministic triage scoring for emergency intake.
//!
//! The [`triage`] module holds the pure scoring pipeline. The remaining modules carry the
//! service plumbing shared with the API binary: environment configuration, tracing bootstrap
//! and the application error type.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod triage;
