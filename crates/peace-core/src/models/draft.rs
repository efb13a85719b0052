use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::ResponseSet;
use super::instrument::InstrumentId;

/// A partially answered assessment. At most one per instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDraft {
    pub instrument: InstrumentId,
    pub current_question: usize,
    pub answers: ResponseSet,
    pub updated_at: jiff::Timestamp,
}
