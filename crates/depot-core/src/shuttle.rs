//! The immutable `Shuttle` record.

use crate::{CoreError, CoreResult, Minute, ShuttleId};

/// One unit of work: a shuttle that arrives at the depot, waits in the
/// priority queue, and occupies a charger for its service duration.
///
/// Constructed once per input record, before any trial runs, and never
/// mutated afterwards — the same batch is reused unmodified across every
/// trial of the feasibility search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shuttle {
    id:              ShuttleId,
    priority:        i32,
    arrival:         Minute,
    service_minutes: u64,
}

impl Shuttle {
    /// Validate and construct a shuttle record.
    ///
    /// IDs are 1-based in the input format; `0` (and the `INVALID` sentinel)
    /// are rejected here so every constructed record is well-formed.
    pub fn new(
        id:              ShuttleId,
        priority:        i32,
        arrival:         Minute,
        service_minutes: u64,
    ) -> CoreResult<Self> {
        if id.0 == 0 || id == ShuttleId::INVALID {
            return Err(CoreError::InvalidShuttleId(id.0));
        }
        Ok(Self { id, priority, arrival, service_minutes })
    }

    #[inline]
    pub fn id(&self) -> ShuttleId {
        self.id
    }

    /// Higher value = higher dispatch precedence.
    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The minute this shuttle becomes eligible for dispatch.
    #[inline]
    pub fn arrival(&self) -> Minute {
        self.arrival
    }

    /// Minutes a charger is occupied once this shuttle is assigned.
    #[inline]
    pub fn service_minutes(&self) -> u64 {
        self.service_minutes
    }
}
