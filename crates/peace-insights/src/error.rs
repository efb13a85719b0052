use thiserror::Error;

use peace_instruments::error::InstrumentError;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("goal target {target} must be below the baseline score {baseline}")]
    InvalidTarget { baseline: u32, target: u32 },

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("calendar arithmetic failed: {0}")]
    Calendar(#[from] jiff::Error),
}
