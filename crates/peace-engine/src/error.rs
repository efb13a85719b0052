use thiserror::Error;
use uuid::Uuid;

use peace_core::models::instrument::InstrumentId;
use peace_export::error::ExportError;
use peace_insights::error::InsightError;
use peace_instruments::error::InstrumentError;
use peace_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error(transparent)]
    Insight(#[from] InsightError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("no completed {0} assessment to use as a goal baseline")]
    NoBaseline(InstrumentId),

    #[error("{instrument} already has an active goal ({goal_id})")]
    GoalExists {
        instrument: InstrumentId,
        goal_id: Uuid,
    },
}

impl EngineError {
    /// True when the underlying record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::Storage(StorageError::NotFound { .. }))
    }
}
