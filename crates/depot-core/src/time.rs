//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Minute` counter starting at 0.  Using
//! an integer minute as the canonical time unit means all wait and service
//! arithmetic is exact and comparisons are O(1).  There is no wall-clock
//! mapping: a trial's minute 0 is simply "when the depot opens".

use std::fmt;

// ── Minute ────────────────────────────────────────────────────────────────────

/// An absolute simulation minute counter.
///
/// Stored as `u64`: even at one-minute resolution a `u64` outlasts any
/// conceivable planning horizon by many orders of magnitude.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Return the minute `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Minute {
        Minute(self.0 + n)
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Minute) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u64) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Minute) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

// ── PlanParams ────────────────────────────────────────────────────────────────

/// Ceiling on elapsed simulated minutes per trial.
///
/// A trial that has not assigned every shuttle by this minute is aborted as
/// `HorizonExhausted`.  This is a safety valve against non-terminating
/// configurations, not an expected outcome for well-formed batches.
pub const DEFAULT_HORIZON_MINUTES: u64 = 100_000;

/// Parameters shared by every trial of one planning run.
///
/// The charger count is *not* part of the params — it is the variable the
/// feasibility search iterates over.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanParams {
    /// Longest a shuttle may wait between queue entry and dispatch.
    pub max_wait_minutes: u64,

    /// Trial abort ceiling.  Must exceed every arrival minute in the batch
    /// for any charger count to be feasible.
    pub horizon_minutes: u64,
}

impl PlanParams {
    /// Params with the given wait bound and the default horizon.
    pub fn with_max_wait(max_wait_minutes: u64) -> Self {
        Self {
            max_wait_minutes,
            horizon_minutes: DEFAULT_HORIZON_MINUTES,
        }
    }

    /// The minute past which a trial is aborted.
    #[inline]
    pub fn horizon(&self) -> Minute {
        Minute(self.horizon_minutes)
    }
}
