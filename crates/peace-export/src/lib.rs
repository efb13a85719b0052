//! peace-export
//!
//! Flat CSV projection of assessment results for download.

pub mod csv;
pub mod error;
