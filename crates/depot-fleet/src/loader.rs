//! Batch loaders.
//!
//! # CSV format
//!
//! One row per shuttle, header required:
//!
//! ```csv
//! id,priority,arrival_minute,service_minutes
//! 1,5,0,10
//! 2,9,0,5
//! ```
//!
//! # Plain format
//!
//! The whitespace format of the original depot tooling: an integer count on
//! the first line, then one `id priority arrival service` quadruple per
//! line.  Exactly `count` record lines are read; surplus lines are ignored,
//! a short file is a parse error.
//!
//! ```text
//! 2
//! 1 5 0 10
//! 2 9 0 5
//! ```
//!
//! Both loaders preserve input order (the admission tie-break order).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use depot_core::{Minute, Shuttle, ShuttleId};

use crate::{FleetError, FleetResult, ShuttleBatch};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ShuttleRecord {
    id:              u32,
    priority:        i32,
    arrival_minute:  u64,
    service_minutes: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a batch from a CSV file.
pub fn load_shuttles_csv(path: &Path) -> FleetResult<ShuttleBatch> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_shuttles_reader(file)
}

/// Like [`load_shuttles_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_shuttles_reader<R: Read>(reader: R) -> FleetResult<ShuttleBatch> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut shuttles = Vec::new();

    for result in csv_reader.deserialize::<ShuttleRecord>() {
        let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
        shuttles.push(Shuttle::new(
            ShuttleId(row.id),
            row.priority,
            Minute(row.arrival_minute),
            row.service_minutes,
        )?);
    }

    let batch = ShuttleBatch::new(shuttles)?;
    log::debug!("loaded {} shuttle(s) from CSV", batch.len());
    Ok(batch)
}

/// Load a batch from a plain-format file.
pub fn load_shuttles_plain(path: &Path) -> FleetResult<ShuttleBatch> {
    let text = std::fs::read_to_string(path).map_err(FleetError::Io)?;
    parse_shuttles_plain(&text)
}

/// Parse the plain count-header format from an in-memory string.
pub fn parse_shuttles_plain(text: &str) -> FleetResult<ShuttleBatch> {
    let mut lines = text.lines();

    let count_line = lines
        .next()
        .ok_or_else(|| FleetError::Parse("missing shuttle count line".into()))?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| FleetError::Parse(format!("invalid shuttle count {count_line:?}")))?;

    let mut shuttles = Vec::with_capacity(count);
    for i in 0..count {
        let line = lines.next().ok_or_else(|| {
            FleetError::Parse(format!("expected {count} record lines, found {i}"))
        })?;
        shuttles.push(parse_plain_record(line)?);
    }

    let batch = ShuttleBatch::new(shuttles)?;
    log::debug!("loaded {} shuttle(s) from plain-format input", batch.len());
    Ok(batch)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse one `id priority arrival service` quadruple.
fn parse_plain_record(line: &str) -> FleetResult<Shuttle> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [id, priority, arrival, service] = fields.as_slice() else {
        return Err(FleetError::Parse(format!(
            "expected 4 whitespace-separated fields, got {} in {line:?}",
            fields.len()
        )));
    };

    let id: u32 = parse_field(id, "id", line)?;
    let priority: i32 = parse_field(priority, "priority", line)?;
    let arrival: u64 = parse_field(arrival, "arrival", line)?;
    let service: u64 = parse_field(service, "service", line)?;

    Ok(Shuttle::new(ShuttleId(id), priority, Minute(arrival), service)?)
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str, line: &str) -> FleetResult<T> {
    field
        .parse()
        .map_err(|_| FleetError::Parse(format!("invalid {name} {field:?} in {line:?}")))
}
