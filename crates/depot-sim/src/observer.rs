//! Trial observer trait for progress reporting and live output.

use depot_core::{Minute, ShuttleId};

use crate::{Assignment, InfeasibleReason, TrialOutcome};

/// Callbacks invoked by [`Trial::run`][crate::Trial::run] at key points in
/// the minute loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — assignment printer
///
/// ```rust,ignore
/// struct AssignmentPrinter;
///
/// impl TrialObserver for AssignmentPrinter {
///     fn on_assign(&mut self, assignment: &Assignment) {
///         println!("  {assignment}");
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called at the start of each simulated minute, before admission.
    fn on_minute_start(&mut self, _minute: Minute) {}

    /// Called when a shuttle enters the priority queue.
    fn on_admit(&mut self, _shuttle: ShuttleId, _minute: Minute) {}

    /// Called for each successful dispatch.
    fn on_assign(&mut self, _assignment: &Assignment) {}

    /// Called once when a trial is about to terminate infeasible, before
    /// `on_trial_end` fires with the same reason wrapped in the outcome.
    fn on_violation(&mut self, _reason: &InfeasibleReason) {}

    /// Called once with the terminal outcome.
    fn on_trial_end(&mut self, _outcome: &TrialOutcome) {}
}

/// A [`TrialObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}
