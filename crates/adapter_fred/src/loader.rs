//! Combined-CSV parsing.

use std::path::Path;

use chrono::NaiveDate;
use projector_core::frame::{SeriesColumn, SeriesFrame};
use tracing::debug;

use crate::error::LoadError;

/// Date format of the index column.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loads a combined series CSV from disk.
///
/// # Errors
///
/// Returns [`LoadError`] when the file cannot be read or does not parse; see
/// [`parse_series_csv`] for the parsing failure modes.
pub fn load_series_csv(path: impl AsRef<Path>) -> Result<SeriesFrame, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading series csv");
    let content = std::fs::read_to_string(path)?;
    parse_series_csv(&content)
}

/// Parses combined-CSV content into a [`SeriesFrame`].
///
/// The first header cell names the date index (usually it is blank) and the
/// remaining header cells name the series. Empty value cells become missing
/// observations, as do non-finite numerics, which some writers emit for gaps.
///
/// # Errors
///
/// Returns [`LoadError`] for structural CSV problems, unparseable date or
/// value cells, or rows that do not assemble into a valid frame (duplicate
/// series names, non-ascending dates).
pub fn parse_series_csv(content: &str) -> Result<SeriesFrame, LoadError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::MissingDateIndex);
    }
    let series_names: Vec<String> = headers.iter().skip(1).map(|h| h.to_string()).collect();

    let mut dates: Vec<NaiveDate> = Vec::new();
    let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); series_names.len()];

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // The header occupies line 1.
        let line = row + 2;

        let date_cell = record.get(0).unwrap_or("").trim();
        let date = NaiveDate::parse_from_str(date_cell, DATE_FORMAT).map_err(|_| {
            LoadError::InvalidDate {
                line,
                value: date_cell.to_string(),
            }
        })?;
        dates.push(date);

        for (i, name) in series_names.iter().enumerate() {
            let cell = record.get(i + 1).unwrap_or("").trim();
            let value = if cell.is_empty() {
                None
            } else {
                let parsed = cell.parse::<f64>().map_err(|_| LoadError::InvalidValue {
                    line,
                    column: name.clone(),
                    value: cell.to_string(),
                })?;
                parsed.is_finite().then_some(parsed)
            };
            values[i].push(value);
        }
    }

    let columns = series_names
        .into_iter()
        .zip(values)
        .map(|(name, column)| SeriesColumn::new(name, column))
        .collect();
    let frame = SeriesFrame::new(dates, columns)?;

    debug!(
        rows = frame.len(),
        columns = frame.columns().count(),
        "parsed series frame"
    );
    Ok(frame)
}

// ============================================================================
// Tests
// ============================================================================
