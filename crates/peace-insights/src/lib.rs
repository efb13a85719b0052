//! peace-insights
//!
//! Longitudinal views over persisted results: per-result trend enrichment,
//! window summaries, goal milestone tracking and reassessment scheduling.
//! Every function here is pure; callers supply the history and "now".

pub mod analytics;
pub mod error;
pub mod goals;
pub mod history;
pub mod schedule;
