//! `depot-output` — reporting backends for search results.
//!
//! Two consumers are served:
//!
//! | Module     | Output                                                    |
//! |------------|-----------------------------------------------------------|
//! | [`csv`]    | `assignments.csv` + `trials.csv` in a chosen directory    |
//! | [`report`] | Human-readable text rendering of a [`SearchOutcome`]      |
//!
//! The CSV backend implements [`OutputWriter`]; additional backends (a
//! database, a columnar store) would slot in behind the same trait.
//!
//! # Usage
//!
//! ```rust,ignore
//! use depot_output::{write_search_outcome, CsvWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! write_search_outcome(&mut writer, &outcome)?;
//! ```
//!
//! [`SearchOutcome`]: depot_search::SearchOutcome

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::render_report;
pub use row::{AssignmentRow, TrialSummaryRow};
pub use writer::{write_search_outcome, OutputWriter};
