//! Trial outcome types: assignments, schedules, and infeasibility reasons.

use std::fmt;

use depot_core::{ChargerId, Minute, ShuttleId};

// ── Assignment ────────────────────────────────────────────────────────────────

/// One dispatched shuttle: which charger took it, when, and how long it
/// waited in the queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub shuttle:    ShuttleId,
    pub charger:    ChargerId,
    /// The minute the shuttle was popped from the queue.
    pub dispatched: Minute,
    /// Minutes between queue entry and dispatch.
    pub waited:     u64,
    /// The minute the charger becomes free again.
    pub finishes:   Minute,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] shuttle {} -> charger {} | waited {} min | finishes at {}",
            self.dispatched, self.shuttle.0, self.charger.0, self.waited, self.finishes,
        )
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// The full assignment log of a feasible trial, in dispatch order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    assignments: Vec<Assignment>,
}

impl Schedule {
    pub(crate) fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    #[inline]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    /// The longest wait any shuttle experienced; 0 for an empty schedule.
    pub fn max_waited(&self) -> u64 {
        self.assignments.iter().map(|a| a.waited).max().unwrap_or(0)
    }

    /// The minute the last charger falls idle; `t0` for an empty schedule.
    pub fn makespan(&self) -> Minute {
        self.assignments
            .iter()
            .map(|a| a.finishes)
            .max()
            .unwrap_or(Minute::ZERO)
    }
}

// ── InfeasibleReason ──────────────────────────────────────────────────────────

/// Why a trial failed.
///
/// `Overwait` is the genuine verdict ("try more chargers").
/// `HorizonExhausted` is the safety valve and usually indicates a modeling
/// bug (e.g. an arrival past the horizon) rather than true infeasibility —
/// the two are kept distinguishable for diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfeasibleReason {
    /// The first shuttle whose wait exceeded the bound.
    Overwait {
        shuttle: ShuttleId,
        waited:  u64,
        bound:   u64,
    },

    /// The trial ran past the horizon ceiling with shuttles unassigned.
    HorizonExhausted {
        horizon_minutes: u64,
        assigned:        usize,
        total:           usize,
    },
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfeasibleReason::Overwait { shuttle, waited, bound } => write!(
                f,
                "shuttle {} waited {} min (limit: {} min)",
                shuttle.0, waited, bound,
            ),
            InfeasibleReason::HorizonExhausted { horizon_minutes, assigned, total } => write!(
                f,
                "exceeded the {horizon_minutes}-minute horizon with {assigned}/{total} shuttles assigned",
            ),
        }
    }
}

// ── TrialOutcome ──────────────────────────────────────────────────────────────

/// Terminal state of one trial.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrialOutcome {
    Feasible(Schedule),
    Infeasible(InfeasibleReason),
}

impl TrialOutcome {
    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self, TrialOutcome::Feasible(_))
    }

    /// The schedule if feasible, otherwise `None`.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            TrialOutcome::Feasible(schedule) => Some(schedule),
            TrialOutcome::Infeasible(_) => None,
        }
    }

    /// The failure reason if infeasible, otherwise `None`.
    pub fn reason(&self) -> Option<&InfeasibleReason> {
        match self {
            TrialOutcome::Feasible(_) => None,
            TrialOutcome::Infeasible(reason) => Some(reason),
        }
    }
}
