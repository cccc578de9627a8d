//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `assignments.csv` — the winning schedule, one row per shuttle.
//! - `trials.csv` — one row per search probe.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{AssignmentRow, TrialSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes planner output to two CSV files.
pub struct CsvWriter {
    assignments: Writer<File>,
    trials:      Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record([
            "shuttle_id",
            "charger",
            "dispatched_minute",
            "waited_minutes",
            "finishes_minute",
        ])?;

        let mut trials = Writer::from_path(dir.join("trials.csv"))?;
        trials.write_record([
            "chargers",
            "verdict",
            "shuttle_id",
            "waited_minutes",
            "bound_minutes",
        ])?;

        Ok(Self {
            assignments,
            trials,
            finished: false,
        })
    }
}

/// Render an optional numeric field as an empty string when absent.
fn opt_field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.shuttle_id.to_string(),
                row.charger.to_string(),
                row.dispatched_minute.to_string(),
                row.waited_minutes.to_string(),
                row.finishes_minute.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_trial_summary(&mut self, row: &TrialSummaryRow) -> OutputResult<()> {
        self.trials.write_record(&[
            row.chargers.to_string(),
            row.verdict.to_string(),
            opt_field(row.shuttle_id),
            opt_field(row.waited_minutes),
            opt_field(row.bound_minutes),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assignments.flush()?;
        self.trials.flush()?;
        Ok(())
    }
}
