use depot_queue::QueueError;
use thiserror::Error;

/// Structural trial errors.
///
/// These never occur under correct driver usage — an infeasible verdict is
/// NOT an error, it is a [`TrialOutcome`][crate::TrialOutcome] value.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("a trial needs at least one charger")]
    NoChargers,

    #[error("queue invariant violated: {0}")]
    Queue(#[from] QueueError),
}

pub type SimResult<T> = Result<T, SimError>;
