//! peace-storage
//!
//! Persistence for results, goals, drafts and reassessment schedules.
//! The engine talks to the [`store`] traits; [`memory::MemoryStore`] and
//! [`file::FileStore`] are the two local backends.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;
