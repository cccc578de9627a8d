//! `depot-sim` — one feasibility trial as a minute-stepped state machine.
//!
//! # Per-minute transition
//!
//! ```text
//! while assigned < batch.len():
//!   ⓪ Valve     — now past the horizon ceiling → terminal
//!                 Infeasible(HorizonExhausted).
//!   ① Admission — every not-yet-admitted shuttle with arrival ≤ now enters
//!                 the max-heap (batch order for same-minute arrivals).
//!   ② Dispatch  — for each charger 0..k in index order: if free and the
//!                 queue is non-empty, pop the max-priority shuttle.
//!                 waited > bound  → terminal Infeasible(Overwait).
//!                 otherwise       → record assignment, occupy charger.
//!   ③ Advance   — now += 1.
//! ```
//!
//! Infeasibility is an ordinary [`TrialOutcome`] value, not an error: the
//! feasibility search hits it on every probe below the answer.  `SimError`
//! is reserved for structural bugs (zero chargers, queue misuse).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use depot_core::PlanParams;
//! use depot_sim::{NoopObserver, Trial};
//!
//! let outcome = Trial::new(&batch, 2, PlanParams::with_max_wait(30))?
//!     .run(&mut NoopObserver)?;
//! if let Some(schedule) = outcome.schedule() {
//!     println!("feasible with max wait {}", schedule.max_waited());
//! }
//! ```

pub mod error;
pub mod observer;
pub mod outcome;
pub mod trial;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TrialObserver};
pub use outcome::{Assignment, InfeasibleReason, Schedule, TrialOutcome};
pub use trial::{run_trial, Trial};
