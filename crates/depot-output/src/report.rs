//! Human-readable text rendering of a search outcome.
//!
//! Mirrors the planner's console tradition: one block per probe, assignment
//! lines for the winning schedule, and a closing result block.

use std::fmt::Write;

use depot_core::PlanParams;
use depot_search::SearchOutcome;
use depot_sim::TrialOutcome;

/// Render `outcome` as a multi-line report.
///
/// ```text
/// --- trying 1 charger(s) ---
///   [FAIL] shuttle 1 waited 5 min (limit: 0 min)
/// --- trying 2 charger(s) ---
///   [t0] shuttle 2 -> charger 0 | waited 0 min | finishes at t5
///   [t0] shuttle 1 -> charger 1 | waited 0 min | finishes at t10
///
/// === result ===
/// minimum chargers needed: 2
/// all shuttles served within the 0-minute waiting limit
/// ```
pub fn render_report(outcome: &SearchOutcome, params: &PlanParams) -> String {
    let mut out = String::new();

    for trial in &outcome.trials {
        // Infallible writes to a String; errors are unreachable.
        let _ = writeln!(out, "--- trying {} charger(s) ---", trial.chargers);
        match &trial.outcome {
            TrialOutcome::Feasible(schedule) => {
                for assignment in schedule.iter() {
                    let _ = writeln!(out, "  {assignment}");
                }
            }
            TrialOutcome::Infeasible(reason) => {
                let _ = writeln!(out, "  [FAIL] {reason}");
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "=== result ===");
    let _ = writeln!(out, "minimum chargers needed: {}", outcome.chargers);
    let _ = writeln!(
        out,
        "all shuttles served within the {}-minute waiting limit",
        params.max_wait_minutes,
    );

    out
}
