//! Report rendering and file exports.
//!
//! Everything here is presentation: rounding to one decimal, rendering the
//! `n/a` placeholder for absent values, and attaching month-end calendar
//! labels. The kernel's numbers arrive unrounded and stay that way in the
//! JSON export; only the table and the summary CSV round for readability.

use std::path::Path;

use chrono::{Days, Months, NaiveDate};
use projector_core::resolver::StartingConditions;
use projector_core::summary::SummaryRecord;
use projector_core::trajectory::{ScenarioRuns, Trajectory};
use serde::Serialize;

use crate::{CliError, Result};

/// Placeholder rendered where a summary value is absent.
const EMPTY_CELL: &str = "n/a";

/// Column widths of the summary table.
const COLUMN_WIDTHS: [usize; 6] = [16, 9, 11, 10, 10, 12];

fn fmt_months(value: Option<usize>) -> String {
    value
        .map(|m| m.to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

fn fmt_level(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

fn border(left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in COLUMN_WIDTHS.iter().enumerate() {
        for _ in 0..width + 2 {
            line.push('─');
        }
        line.push(if i + 1 == COLUMN_WIDTHS.len() { right } else { mid });
    }
    line
}

fn row(cells: [&str; 6]) -> String {
    format!(
        "│ {:<16} │ {:>9} │ {:>11} │ {:>10} │ {:>10} │ {:>12} │",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    )
}

/// Renders the cross-scenario summary as a box table.
pub fn render_summary_table(records: &[SummaryRecord]) -> String {
    let mut out = String::new();
    out.push_str(&border('┌', '┬', '┐'));
    out.push('\n');
    out.push_str(&row([
        "Scenario",
        "To Ample",
        "To Caution",
        "12m ($bn)",
        "24m ($bn)",
        "Drain ($bn)",
    ]));
    out.push('\n');
    out.push_str(&border('├', '┼', '┤'));
    out.push('\n');

    for record in records {
        out.push_str(&row([
            record.label,
            &fmt_months(record.months_to_ample),
            &fmt_months(record.months_to_caution),
            &fmt_level(record.reserves_at_12m),
            &fmt_level(record.reserves_at_24m),
            &format!("{:.1}", record.total_reduction_bn),
        ]));
        out.push('\n');
    }

    out.push_str(&border('└', '┴', '┘'));
    out
}

/// Writes the summary records to a CSV file, one row per scenario.
pub fn write_summary_csv(path: &Path, records: &[SummaryRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "scenario",
        "months_to_ample",
        "months_to_caution",
        "reserves_12m_bn",
        "reserves_24m_bn",
        "total_reduction_bn",
    ])?;

    for record in records {
        writer.write_record([
            record.label.to_string(),
            fmt_months(record.months_to_ample),
            fmt_months(record.months_to_caution),
            fmt_level(record.reserves_at_12m),
            fmt_level(record.reserves_at_24m),
            format!("{:.1}", record.total_reduction_bn),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct TrajectoryExport<'a> {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    #[serde(flatten)]
    trajectory: &'a Trajectory,
}

#[derive(Serialize)]
struct ProjectionExport<'a> {
    start: &'a StartingConditions,
    horizon_months: usize,
    months: Vec<String>,
    scenarios: Vec<TrajectoryExport<'a>>,
}

/// Writes every trajectory, unrounded, to a JSON file.
///
/// Scenarios appear in catalogue order. `months` carries one ISO date label
/// per trajectory entry, the starting month included.
pub fn write_trajectories_json(
    path: &Path,
    start: &StartingConditions,
    horizon_months: usize,
    months: &[NaiveDate],
    runs: &ScenarioRuns,
) -> Result<()> {
    let export = ProjectionExport {
        start,
        horizon_months,
        months: months.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect(),
        scenarios: runs
            .iter()
            .map(|(id, trajectory)| TrajectoryExport {
                id: id.key(),
                label: id.label(),
                description: id.description(),
                trajectory,
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&export)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Month-end dates for `count` consecutive months, starting with the month
/// `start_year`-`start_month`.
///
/// Trajectory index `m` labels the end of the `m`-th projected month, with
/// index 0 labelled by the starting month's end.
pub fn month_end_sequence(
    start_year: i32,
    start_month: u32,
    count: usize,
) -> Result<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(start_year, start_month, 1).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "invalid start month {}-{:02}",
            start_year, start_month
        ))
    })?;

    Ok((0..count)
        .map(|i| {
            let month_start = first + Months::new(i as u32);
            month_start + Months::new(1) - Days::new(1)
        })
        .collect())
}

// ============================================================================
// Tests
// ============================================================================
