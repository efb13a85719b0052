use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown severity tier: {0}")]
    UnknownSeverity(String),
}
