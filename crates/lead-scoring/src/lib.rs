//! Lead scoring engine and its HTTP surface.
//!
//! The [`scoring`] module holds the deterministic engine (job-title and company
//! classification, score composition, priority bucketing, insights) together with
//! the service facade and axum router that expose it as JSON.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
