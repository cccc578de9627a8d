//! The `Trial` struct and its minute loop.

use depot_core::{ChargerId, Minute, PlanParams};
use depot_fleet::ShuttleBatch;
use depot_queue::MaxHeap;

use crate::{
    Assignment, InfeasibleReason, Schedule, SimError, SimResult, TrialObserver, TrialOutcome,
};

/// One feasibility trial: a fixed charger count probed against the batch.
///
/// Holds all per-run state — the heap of waiting slots, per-slot admission
/// flags and entry minutes, per-charger free times, and the growing
/// assignment log.  [`run`][Trial::run] consumes the trial, so
/// state (including a partially drained queue) can never leak into a later
/// probe; the outer search constructs a fresh `Trial` per charger count.
pub struct Trial<'a> {
    batch:    &'a ShuttleBatch,
    chargers: usize,
    params:   PlanParams,

    /// Current simulated minute.
    now: Minute,

    /// Waiting shuttles, keyed by priority, holding batch slots.  Capacity
    /// equals the batch size: admission inserts each slot exactly once.
    queue: MaxHeap<usize>,

    /// Per-slot: has this shuttle entered the queue yet?
    admitted: Vec<bool>,

    /// Per-slot: the minute the shuttle entered the queue (wait-time base).
    entered: Vec<Minute>,

    /// Per-charger: the earliest minute the charger is available again.
    charger_free_at: Vec<Minute>,

    /// Assignments so far, in dispatch order.
    assignments: Vec<Assignment>,
}

impl<'a> Trial<'a> {
    /// Set up a trial of `chargers` chargers against `batch`.
    pub fn new(batch: &'a ShuttleBatch, chargers: usize, params: PlanParams) -> SimResult<Self> {
        if chargers == 0 {
            return Err(SimError::NoChargers);
        }
        let total = batch.len();
        Ok(Self {
            batch,
            chargers,
            params,
            now:             Minute::ZERO,
            queue:           MaxHeap::with_capacity(total),
            admitted:        vec![false; total],
            entered:         vec![Minute::ZERO; total],
            charger_free_at: vec![Minute::ZERO; chargers],
            assignments:     Vec::with_capacity(total),
        })
    }

    /// Drive the minute loop to a terminal outcome.
    ///
    /// Deterministic: the same `(batch, chargers, params)` always produces
    /// an identical outcome and assignment log.
    pub fn run<O: TrialObserver>(mut self, observer: &mut O) -> SimResult<TrialOutcome> {
        let total = self.batch.len();

        while self.assignments.len() < total {
            // ── Horizon safety valve ──────────────────────────────────────
            //
            // Checked before the minute runs, so a batch whose last shuttle
            // is assigned exactly at the horizon still counts as feasible.
            if self.now > self.params.horizon() {
                let reason = InfeasibleReason::HorizonExhausted {
                    horizon_minutes: self.params.horizon_minutes,
                    assigned:        self.assignments.len(),
                    total,
                };
                return Ok(self.fail(reason, observer));
            }

            observer.on_minute_start(self.now);

            // ── Phase 1: admission ────────────────────────────────────────
            self.admit_arrivals(observer)?;

            // ── Phase 2: dispatch ─────────────────────────────────────────
            if let Some(reason) = self.dispatch_chargers(observer)? {
                return Ok(self.fail(reason, observer));
            }

            // ── Phase 3: advance ──────────────────────────────────────────
            self.now = self.now + 1;
        }

        let outcome = TrialOutcome::Feasible(Schedule::new(self.assignments));
        observer.on_trial_end(&outcome);
        Ok(outcome)
    }

    // ── Minute phases ─────────────────────────────────────────────────────

    /// Insert every not-yet-admitted shuttle whose arrival is due.
    ///
    /// Batch slot order here is the documented tie-break for same-minute
    /// arrivals; it only affects queue-internal ordering among equal
    /// priorities.
    fn admit_arrivals<O: TrialObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        for (slot, shuttle) in self.batch.iter() {
            if !self.admitted[slot] && shuttle.arrival() <= self.now {
                self.queue.insert(shuttle.priority(), slot)?;
                self.entered[slot] = self.now;
                self.admitted[slot] = true;
                observer.on_admit(shuttle.id(), self.now);
            }
        }
        Ok(())
    }

    /// Offer the queue head to every free charger, in charger index order.
    ///
    /// Returns the violation that ends the trial, if any.
    fn dispatch_chargers<O: TrialObserver>(
        &mut self,
        observer: &mut O,
    ) -> SimResult<Option<InfeasibleReason>> {
        for c in 0..self.chargers {
            if self.charger_free_at[c] > self.now || self.queue.is_empty() {
                continue;
            }

            let (_priority, slot) = self.queue.pop_max()?;
            let shuttle = &self.batch.shuttles()[slot];
            let waited = self.now - self.entered[slot];

            if waited > self.params.max_wait_minutes {
                return Ok(Some(InfeasibleReason::Overwait {
                    shuttle: shuttle.id(),
                    waited,
                    bound: self.params.max_wait_minutes,
                }));
            }

            let finishes = self.now + shuttle.service_minutes();
            self.charger_free_at[c] = finishes;

            let assignment = Assignment {
                shuttle:    shuttle.id(),
                charger:    ChargerId(c as u32),
                dispatched: self.now,
                waited,
                finishes,
            };
            observer.on_assign(&assignment);
            self.assignments.push(assignment);
        }
        Ok(None)
    }

    /// Terminate infeasible, firing both observer hooks.
    fn fail<O: TrialObserver>(self, reason: InfeasibleReason, observer: &mut O) -> TrialOutcome {
        observer.on_violation(&reason);
        let outcome = TrialOutcome::Infeasible(reason);
        observer.on_trial_end(&outcome);
        outcome
    }
}

/// Convenience: run one trial without observer callbacks.
pub fn run_trial(
    batch:    &ShuttleBatch,
    chargers: usize,
    params:   PlanParams,
) -> SimResult<TrialOutcome> {
    Trial::new(batch, chargers, params)?.run(&mut crate::NoopObserver)
}
