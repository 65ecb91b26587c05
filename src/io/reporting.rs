// src/io/reporting.rs

use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::error::ReportError;
use crate::simulation::engine::DailyRecord;
use crate::simulation::summary::DayTypeSummary;

/// Serializes any slice of rows as CSV, header row included.
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    for row in rows {
        wtr.serialize(row)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(())
}

/// Writes the daily trace to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `data` - The records returned by the simulation engine.
pub fn write_daily_log<P: AsRef<Path>>(file_path: P, data: &[DailyRecord]) -> Result<(), ReportError> {
    let path = file_path.as_ref();
    let file = std::fs::File::create(path)?;
    write_rows(file, data)?;

    info!(rows = data.len(), path = %path.display(), "exported daily records");
    Ok(())
}

/// Writes the per-day-type breakdown to a CSV file.
pub fn write_day_type_summary<P: AsRef<Path>>(
    file_path: P,
    data: &[DayTypeSummary],
) -> Result<(), ReportError> {
    let path = file_path.as_ref();
    let file = std::fs::File::create(path)?;
    write_rows(file, data)?;

    info!(rows = data.len(), path = %path.display(), "exported day type summary");
    Ok(())
}
