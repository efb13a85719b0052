use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::instrument::InstrumentId;
use super::severity::SeverityTier;

/// Chosen point value per question id. Ordered so snapshots serialize
/// identically every time.
pub type ResponseSet = BTreeMap<String, u32>;

/// One completed administration of an instrument. Never mutated; a retake
/// produces a new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub instrument: InstrumentId,
    pub score: u32,
    pub max_score: u32,
    pub severity: SeverityTier,
    pub interpretation: String,
    pub recommendations: Vec<String>,
    pub resources: Vec<String>,
    pub responses: ResponseSet,
    pub completed_at: jiff::Timestamp,
}

impl AssessmentResult {
    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            id: self.id,
            instrument: self.instrument,
            score: self.score,
            max_score: self.max_score,
            severity: self.severity,
            completed_at: self.completed_at,
        }
    }
}

/// The list-view projection of a result (no free text, no responses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub id: Uuid,
    pub instrument: InstrumentId,
    pub score: u32,
    pub max_score: u32,
    pub severity: SeverityTier,
    pub completed_at: jiff::Timestamp,
}

/// Direction of a numeric score change between two results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreTrend {
    /// Score went down.
    Improving,
    Stable,
    /// Score went up.
    Declining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendDisplay {
    pub label: &'static str,
    pub icon: &'static str,
    pub text_class: &'static str,
}

impl ScoreTrend {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreTrend::Improving => "improving",
            ScoreTrend::Stable => "stable",
            ScoreTrend::Declining => "declining",
        }
    }

    pub fn display(self) -> TrendDisplay {
        match self {
            ScoreTrend::Improving => TrendDisplay {
                label: "Improving",
                icon: "trending-down",
                text_class: "text-green-500",
            },
            ScoreTrend::Stable => TrendDisplay {
                label: "Stable",
                icon: "minus",
                text_class: "text-gray-500",
            },
            ScoreTrend::Declining => TrendDisplay {
                label: "Declining",
                icon: "trending-up",
                text_class: "text-red-500",
            },
        }
    }
}

impl fmt::Display for ScoreTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A result plus comparison-to-previous metadata. Computed on read, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnrichedResult {
    #[serde(flatten)]
    pub result: AssessmentResult,
    pub previous_score: Option<u32>,
    pub score_trend: Option<ScoreTrend>,
    pub days_since_last: Option<i64>,
}
