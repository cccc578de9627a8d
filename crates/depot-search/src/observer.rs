//! Search observer trait for per-trial progress reporting.

use depot_sim::TrialOutcome;

/// Callbacks invoked by the search driver around each probe.
///
/// All methods have default no-op implementations.
pub trait SearchObserver {
    /// Called before a trial with `chargers` chargers starts.
    fn on_trial_start(&mut self, _chargers: usize) {}

    /// Called with each trial's terminal outcome.
    fn on_trial_end(&mut self, _chargers: usize, _outcome: &TrialOutcome) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopSearchObserver;

impl SearchObserver for NoopSearchObserver {}
