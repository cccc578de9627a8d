//! The ascending-count probe loop.

use depot_core::PlanParams;
use depot_fleet::ShuttleBatch;
use depot_sim::{NoopObserver, Schedule, Trial, TrialOutcome};

use crate::{NoopSearchObserver, SearchError, SearchObserver, SearchResult};

// ── Results ───────────────────────────────────────────────────────────────────

/// One probe's verdict, kept for reporting.
#[derive(Clone, Debug)]
pub struct TrialReport {
    pub chargers: usize,
    pub outcome:  TrialOutcome,
}

/// The answer: the minimum feasible charger count, its schedule, and every
/// probe that led there (counts `1..=chargers`, all but the last infeasible).
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub chargers: usize,
    pub schedule: Schedule,
    pub trials:   Vec<TrialReport>,
}

// ── Sequential search ─────────────────────────────────────────────────────────

/// Find the minimum charger count without observer callbacks.
pub fn minimum_chargers(batch: &ShuttleBatch, params: PlanParams) -> SearchResult<SearchOutcome> {
    minimum_chargers_observed(batch, params, &mut NoopSearchObserver)
}

/// Find the minimum charger count, reporting each probe to `observer`.
pub fn minimum_chargers_observed<O: SearchObserver>(
    batch:    &ShuttleBatch,
    params:   PlanParams,
    observer: &mut O,
) -> SearchResult<SearchOutcome> {
    let total = batch.len();
    let mut trials = Vec::new();
    let mut chargers = 1;

    loop {
        observer.on_trial_start(chargers);
        let outcome = Trial::new(batch, chargers, params)?.run(&mut NoopObserver)?;
        observer.on_trial_end(chargers, &outcome);

        match outcome {
            TrialOutcome::Feasible(ref schedule) => {
                log::info!("feasible with {chargers} charger(s)");
                let schedule = schedule.clone();
                trials.push(TrialReport { chargers, outcome });
                return Ok(SearchOutcome { chargers, schedule, trials });
            }
            TrialOutcome::Infeasible(reason) => {
                log::debug!("{chargers} charger(s): {reason}");
                trials.push(TrialReport {
                    chargers,
                    outcome: TrialOutcome::Infeasible(reason),
                });
                // One charger per shuttle gives every shuttle a zero wait,
                // so infeasibility at `total` can only be the horizon valve.
                if chargers >= total {
                    return Err(SearchError::NeverFeasible {
                        horizon_minutes: params.horizon_minutes,
                    });
                }
                chargers += 1;
            }
        }
    }
}

// ── Parallel search ───────────────────────────────────────────────────────────

/// Like [`minimum_chargers`], probing `window` counts per round on Rayon's
/// thread pool.  Rounds scan ascending windows and take the smallest
/// feasible count within the first winning window, so the result is
/// identical to the sequential scan.
#[cfg(feature = "parallel")]
pub fn minimum_chargers_parallel(
    batch:  &ShuttleBatch,
    params: PlanParams,
    window: usize,
) -> SearchResult<SearchOutcome> {
    use rayon::prelude::*;

    let window = window.max(1);
    let total = batch.len();
    let mut trials = Vec::new();
    let mut base = 1usize;

    loop {
        if base > total {
            return Err(SearchError::NeverFeasible {
                horizon_minutes: params.horizon_minutes,
            });
        }

        // Counts past the batch size change nothing; cap the window there.
        let end = (base + window).min(total + 1);
        let outcomes: Vec<(usize, depot_sim::SimResult<TrialOutcome>)> = (base..end)
            .into_par_iter()
            .map(|chargers| {
                let result =
                    Trial::new(batch, chargers, params).and_then(|t| t.run(&mut NoopObserver));
                (chargers, result)
            })
            .collect();

        // Ascending order within the window: the first feasible is minimal.
        for (chargers, result) in outcomes {
            let outcome = result?;
            match outcome {
                TrialOutcome::Feasible(ref schedule) => {
                    log::info!("feasible with {chargers} charger(s)");
                    let schedule = schedule.clone();
                    trials.push(TrialReport { chargers, outcome });
                    return Ok(SearchOutcome { chargers, schedule, trials });
                }
                TrialOutcome::Infeasible(reason) => {
                    log::debug!("{chargers} charger(s): {reason}");
                    trials.push(TrialReport {
                        chargers,
                        outcome: TrialOutcome::Infeasible(reason),
                    });
                }
            }
        }

        base = end;
    }
}
