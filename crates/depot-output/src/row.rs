//! Plain data row types written by output backends.

use depot_sim::{Assignment, InfeasibleReason, TrialOutcome};

/// One dispatched shuttle from the winning schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentRow {
    pub shuttle_id:        u32,
    /// 0-based charger index within the winning trial.
    pub charger:           u32,
    pub dispatched_minute: u64,
    pub waited_minutes:    u64,
    pub finishes_minute:   u64,
}

impl From<&Assignment> for AssignmentRow {
    fn from(a: &Assignment) -> Self {
        Self {
            shuttle_id:        a.shuttle.0,
            charger:           a.charger.0,
            dispatched_minute: a.dispatched.0,
            waited_minutes:    a.waited,
            finishes_minute:   a.finishes.0,
        }
    }
}

/// One probe of the feasibility search.
///
/// `shuttle_id` / `waited_minutes` / `bound_minutes` are populated only for
/// an `overwait` verdict; CSV backends render `None` as an empty field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialSummaryRow {
    pub chargers:       usize,
    /// `"feasible"`, `"overwait"`, or `"horizon"`.
    pub verdict:        &'static str,
    pub shuttle_id:     Option<u32>,
    pub waited_minutes: Option<u64>,
    pub bound_minutes:  Option<u64>,
}

impl TrialSummaryRow {
    /// Summarize one probe's outcome.
    pub fn new(chargers: usize, outcome: &TrialOutcome) -> Self {
        match outcome {
            TrialOutcome::Feasible(_) => Self {
                chargers,
                verdict:        "feasible",
                shuttle_id:     None,
                waited_minutes: None,
                bound_minutes:  None,
            },
            TrialOutcome::Infeasible(InfeasibleReason::Overwait { shuttle, waited, bound }) => {
                Self {
                    chargers,
                    verdict:        "overwait",
                    shuttle_id:     Some(shuttle.0),
                    waited_minutes: Some(*waited),
                    bound_minutes:  Some(*bound),
                }
            }
            TrialOutcome::Infeasible(InfeasibleReason::HorizonExhausted { .. }) => Self {
                chargers,
                verdict:        "horizon",
                shuttle_id:     None,
                waited_minutes: None,
                bound_minutes:  None,
            },
        }
    }
}
