use thiserror::Error;

use peace_core::models::instrument::InstrumentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown question '{question_id}' for instrument '{instrument}'")]
    UnknownQuestion {
        instrument: InstrumentId,
        question_id: String,
    },

    #[error("{value} is not an answer option for '{question_id}' on '{instrument}'")]
    InvalidAnswer {
        instrument: InstrumentId,
        question_id: String,
        value: u32,
    },

    #[error("incomplete response for '{instrument}', missing: {}", .missing.join(", "))]
    IncompleteResponse {
        instrument: InstrumentId,
        missing: Vec<String>,
    },

    #[error("score {score} is outside range [0, {max}] for '{instrument}'")]
    ScoreOutOfRange {
        instrument: InstrumentId,
        score: u32,
        max: u32,
    },
}
