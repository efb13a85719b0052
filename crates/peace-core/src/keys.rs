//! Record key/path conventions.
//!
//! Pure string functions. These define the canonical layout of records in
//! any key/value or directory-backed store.

use uuid::Uuid;

use crate::models::instrument::InstrumentId;

pub const RESULTS_PREFIX: &str = "results/";
pub const GOALS_PREFIX: &str = "goals/";
pub const DRAFTS_PREFIX: &str = "drafts/";
pub const SCHEDULES_PREFIX: &str = "schedules/";

pub fn result(id: Uuid) -> String {
    format!("{RESULTS_PREFIX}{id}.json")
}

pub fn goal(id: Uuid) -> String {
    format!("{GOALS_PREFIX}{id}.json")
}

pub fn draft(instrument: InstrumentId) -> String {
    format!("{DRAFTS_PREFIX}{instrument}.json")
}

pub fn schedule(id: Uuid) -> String {
    format!("{SCHEDULES_PREFIX}{id}.json")
}

pub const CONFIG: &str = "config.json";
