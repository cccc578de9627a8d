use depot_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Still infeasible with one charger per shuttle.  With a dedicated
    /// charger every wait is zero, so this can only mean an arrival lies
    /// past the trial horizon — more chargers will never help.
    #[error(
        "batch can never be served: still infeasible with one charger per shuttle \
         (horizon {horizon_minutes} min)"
    )]
    NeverFeasible { horizon_minutes: u64 },

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type SearchResult<T> = Result<T, SearchError>;
