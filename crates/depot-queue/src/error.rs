use thiserror::Error;

/// Structural queue errors.
///
/// Both variants indicate a caller bug under correct trial usage: capacity
/// is sized to the batch and `pop_max` is guarded by an emptiness check.
/// They are surfaced as `Result`s so callers can fail fast with context
/// instead of panicking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("heap capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("pop_max on an empty heap")]
    Empty,
}

pub type QueueResult<T> = Result<T, QueueError>;
