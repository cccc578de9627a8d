//! Integration tests for depot-search.

use depot_core::{Minute, PlanParams, Shuttle, ShuttleId};
use depot_fleet::ShuttleBatch;
use depot_sim::{run_trial, TrialOutcome};

use crate::{minimum_chargers, minimum_chargers_observed, SearchError, SearchObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn shuttle(id: u32, prio: i32, arrival: u64, service: u64) -> Shuttle {
    Shuttle::new(ShuttleId(id), prio, Minute(arrival), service).unwrap()
}

fn contended_batch() -> ShuttleBatch {
    ShuttleBatch::new(vec![shuttle(1, 5, 0, 10), shuttle(2, 9, 0, 5)]).unwrap()
}

#[cfg(test)]
mod sequential {
    use super::*;

    #[test]
    fn contended_batch_needs_two_chargers_at_bound_zero() {
        let outcome = minimum_chargers(&contended_batch(), PlanParams::with_max_wait(0)).unwrap();
        assert_eq!(outcome.chargers, 2);
        assert_eq!(outcome.schedule.len(), 2);
        assert_eq!(outcome.schedule.max_waited(), 0);
    }

    #[test]
    fn relaxed_bound_needs_only_one() {
        // The low-priority shuttle waits 5 minutes; a bound of 5 admits it.
        let outcome = minimum_chargers(&contended_batch(), PlanParams::with_max_wait(5)).unwrap();
        assert_eq!(outcome.chargers, 1);
    }

    #[test]
    fn single_shuttle_needs_one_charger() {
        let batch = ShuttleBatch::new(vec![shuttle(3, 1, 7, 2)]).unwrap();
        let outcome = minimum_chargers(&batch, PlanParams::with_max_wait(0)).unwrap();
        assert_eq!(outcome.chargers, 1);
        assert_eq!(outcome.schedule.assignments()[0].dispatched, Minute(7));
    }

    #[test]
    fn trial_reports_cover_every_probe() {
        let outcome = minimum_chargers(&contended_batch(), PlanParams::with_max_wait(0)).unwrap();
        let probed: Vec<usize> = outcome.trials.iter().map(|t| t.chargers).collect();
        assert_eq!(probed, vec![1, 2]);
        assert!(!outcome.trials[0].outcome.is_feasible());
        assert!(outcome.trials[1].outcome.is_feasible());
    }

    #[test]
    fn never_feasible_when_arrival_past_horizon() {
        let batch = ShuttleBatch::new(vec![shuttle(1, 1, 500, 1)]).unwrap();
        let params = PlanParams { max_wait_minutes: 0, horizon_minutes: 100 };
        assert!(matches!(
            minimum_chargers(&batch, params),
            Err(SearchError::NeverFeasible { horizon_minutes: 100 }),
        ));
    }

    #[test]
    fn observer_sees_every_probe_in_order() {
        #[derive(Default)]
        struct Probes {
            started: Vec<usize>,
            ended:   Vec<(usize, bool)>,
        }
        impl SearchObserver for Probes {
            fn on_trial_start(&mut self, chargers: usize) {
                self.started.push(chargers);
            }
            fn on_trial_end(&mut self, chargers: usize, outcome: &TrialOutcome) {
                self.ended.push((chargers, outcome.is_feasible()));
            }
        }

        let mut probes = Probes::default();
        minimum_chargers_observed(&contended_batch(), PlanParams::with_max_wait(0), &mut probes)
            .unwrap();
        assert_eq!(probes.started, vec![1, 2]);
        assert_eq!(probes.ended, vec![(1, false), (2, true)]);
    }
}

#[cfg(test)]
mod properties {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    /// A seeded random batch of `n` shuttles with modest arrivals/services.
    fn random_batch(rng: &mut SmallRng, n: usize) -> ShuttleBatch {
        let shuttles = (0..n)
            .map(|i| {
                shuttle(
                    i as u32 + 1,
                    rng.gen_range(-5..10),
                    rng.gen_range(0..30),
                    rng.gen_range(0..20),
                )
            })
            .collect();
        ShuttleBatch::new(shuttles).unwrap()
    }

    #[test]
    fn feasibility_is_monotonic_in_charger_count() {
        let mut rng = SmallRng::seed_from_u64(1234);
        for _ in 0..25 {
            let batch = random_batch(&mut rng, 8);
            let params = PlanParams::with_max_wait(rng.gen_range(0..8));

            let verdicts: Vec<bool> = (1..=batch.len())
                .map(|k| run_trial(&batch, k, params).unwrap().is_feasible())
                .collect();

            // Once feasible, adding chargers must never break feasibility.
            let first = verdicts.iter().position(|&v| v);
            if let Some(first) = first {
                assert!(
                    verdicts[first..].iter().all(|&v| v),
                    "feasibility regressed after {first} chargers: {verdicts:?}",
                );
            }
        }
    }

    #[test]
    fn search_returns_the_first_feasible_count() {
        let mut rng = SmallRng::seed_from_u64(5678);
        for _ in 0..25 {
            let batch = random_batch(&mut rng, 6);
            let params = PlanParams::with_max_wait(rng.gen_range(0..5));

            let expected = (1..=batch.len())
                .find(|&k| run_trial(&batch, k, params).unwrap().is_feasible())
                .expect("one charger per shuttle is always feasible here");

            let outcome = minimum_chargers(&batch, params).unwrap();
            assert_eq!(outcome.chargers, expected);
        }
    }

    #[test]
    fn zero_wait_baseline_at_full_charger_count() {
        let mut rng = SmallRng::seed_from_u64(42);
        let batch = random_batch(&mut rng, 10);
        let outcome = run_trial(&batch, batch.len(), PlanParams::with_max_wait(0)).unwrap();
        assert_eq!(outcome.schedule().unwrap().max_waited(), 0);
    }
}

#[cfg(all(test, feature = "parallel"))]
mod parallel {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::minimum_chargers_parallel;

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = SmallRng::seed_from_u64(77);
        for _ in 0..10 {
            let shuttles = (0..7)
                .map(|i| {
                    shuttle(
                        i as u32 + 1,
                        rng.gen_range(-3..8),
                        rng.gen_range(0..20),
                        rng.gen_range(0..15),
                    )
                })
                .collect();
            let batch = ShuttleBatch::new(shuttles).unwrap();
            let params = PlanParams::with_max_wait(rng.gen_range(0..4));

            let sequential = minimum_chargers(&batch, params).unwrap();
            for window in [1, 2, 4, 16] {
                let parallel = minimum_chargers_parallel(&batch, params, window).unwrap();
                assert_eq!(parallel.chargers, sequential.chargers);
                assert_eq!(parallel.schedule, sequential.schedule);
            }
        }
    }

    #[test]
    fn parallel_never_feasible_guard() {
        let batch = ShuttleBatch::new(vec![shuttle(1, 1, 500, 1)]).unwrap();
        let params = PlanParams { max_wait_minutes: 0, horizon_minutes: 100 };
        assert!(matches!(
            minimum_chargers_parallel(&batch, params, 4),
            Err(SearchError::NeverFeasible { .. }),
        ));
    }
}
