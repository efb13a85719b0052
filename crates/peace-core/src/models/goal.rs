use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::instrument::InstrumentId;
use super::severity::SeverityTier;

/// A score-reduction goal for one instrument. Lower is better for every
/// instrument goal in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Goal {
    pub id: Uuid,
    pub instrument: InstrumentId,
    pub baseline_score: u32,
    pub baseline_severity: SeverityTier,
    pub target_score: u32,
    pub target_severity: SeverityTier,
    pub target_date: jiff::civil::Date,
    /// Strictly decreasing thresholds; the last one is the target.
    pub milestones: Vec<Milestone>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Milestone {
    pub threshold: u32,
    pub achieved: bool,
    /// Set the first time the milestone is reached, never cleared.
    pub achieved_on: Option<jiff::Timestamp>,
}

impl Milestone {
    pub fn pending(threshold: u32) -> Self {
        Self {
            threshold,
            achieved: false,
            achieved_on: None,
        }
    }
}

/// Read-time view of how far a goal has come.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalProgress {
    pub goal_id: Uuid,
    pub current_score: Option<u32>,
    pub percent: f64,
    pub milestones_achieved: usize,
    pub milestones_total: usize,
    pub days_remaining: i32,
    pub complete: bool,
}
