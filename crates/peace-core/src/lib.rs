//! peace-core
//!
//! Pure domain types, the clock seam, and storage key conventions.
//! No I/O. This is the shared vocabulary of the Peace assessment engine.

pub mod clock;
pub mod error;
pub mod keys;
pub mod models;
