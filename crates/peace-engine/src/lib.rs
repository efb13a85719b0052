//! peace-engine
//!
//! Composes the catalog, the insight functions and a store into the
//! operations the app calls: complete an assessment, read enriched history,
//! track goals, keep drafts and reassessment schedules, export CSV.

pub mod config;
pub mod engine;
pub mod error;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
