use depot_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("batch parse error: {0}")]
    Parse(String),

    #[error("batch is empty: at least one shuttle record is required")]
    EmptyBatch,

    #[error("duplicate shuttle id {0} in batch")]
    DuplicateId(u32),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
