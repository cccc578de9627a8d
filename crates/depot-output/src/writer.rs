//! The `OutputWriter` trait implemented by backend writers.

use depot_search::SearchOutcome;

use crate::row::{AssignmentRow, TrialSummaryRow};
use crate::OutputResult;

/// Trait implemented by output backends (currently CSV).
pub trait OutputWriter {
    /// Write the winning schedule's assignment rows.
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()>;

    /// Write one search probe summary row.
    fn write_trial_summary(&mut self, row: &TrialSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write a complete [`SearchOutcome`] — every probe summary plus the winning
/// schedule — to `writer`, then finish it.
pub fn write_search_outcome<W: OutputWriter>(
    writer:  &mut W,
    outcome: &SearchOutcome,
) -> OutputResult<()> {
    for trial in &outcome.trials {
        writer.write_trial_summary(&TrialSummaryRow::new(trial.chargers, &trial.outcome))?;
    }

    let rows: Vec<AssignmentRow> = outcome.schedule.iter().map(AssignmentRow::from).collect();
    writer.write_assignments(&rows)?;
    writer.finish()
}
