//! Project command implementation
//!
//! Runs the standard scenario catalogue from resolved or explicit starting
//! conditions and renders the cross-scenario comparison report.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use adapter_fred::load_series_csv;
use projector_core::analysis::ReserveThreshold;
use projector_core::engine::{run_catalogue, ProjectionConfig};
use projector_core::resolver::{SnapshotColumns, StartingConditions};
use projector_core::scenario::ScenarioCatalogue;
use projector_core::summary::summarize;

use crate::config::{parse_start_month, CliConfig};
use crate::export;
use crate::{CliError, Result};

/// Run the project command
#[allow(clippy::too_many_arguments)]
pub fn run(
    config_path: &str,
    data: Option<&str>,
    reserves: Option<f64>,
    rrp: Option<f64>,
    tga: Option<f64>,
    horizon: Option<usize>,
    summary_csv: Option<&str>,
    trajectories: Option<&str>,
) -> Result<()> {
    let config = CliConfig::load_with_env_and_validate(Path::new(config_path))?;

    let start = match (reserves, rrp, tga) {
        // All three balances given explicitly: the snapshot is not read.
        (Some(reserves), Some(rrp), Some(tga)) => StartingConditions::new(reserves, rrp, tga)?,
        _ => apply_overrides(resolve_base_conditions(data, &config)?, reserves, rrp, tga)?,
    };

    let horizon_months = horizon.unwrap_or(config.horizon_months);
    let projection = ProjectionConfig {
        horizon_months,
        ..ProjectionConfig::default()
    };

    let catalogue = ScenarioCatalogue::standard();
    info!(
        scenarios = catalogue.len(),
        horizon_months, "running scenario catalogue"
    );
    let runs = run_catalogue(&start, &catalogue, &projection)?;
    let records = summarize(&catalogue, &runs, start.reserves())?;

    let (start_year, start_month) = parse_start_month(&config.start_month).ok_or_else(|| {
        CliError::InvalidArgument(format!("invalid start_month '{}'", config.start_month))
    })?;
    let months = export::month_end_sequence(start_year, start_month, horizon_months + 1)?;

    println!("========================================");
    println!("Reserve Drain Scenario Projection");
    println!("========================================");
    println!();
    println!("Starting conditions ($bn):");
    println!("  Reserves:    {:.1}", start.reserves());
    println!("  RRP buffer:  {:.1}", start.rrp());
    println!("  TGA balance: {:.1}", start.tga());
    println!();
    println!("Scenarios:");
    for entry in catalogue.iter() {
        println!("  {:<16} {}", entry.id.label(), entry.id.description());
    }
    println!();
    println!("Thresholds ($bn):");
    for threshold in ReserveThreshold::all() {
        println!("  {:<18} {:.0}", threshold.label(), threshold.level_bn());
    }
    println!();
    println!(
        "Horizon: {} months, {} to {}",
        horizon_months,
        months.first().map(|d| d.to_string()).unwrap_or_default(),
        months.last().map(|d| d.to_string()).unwrap_or_default()
    );
    println!();
    println!("{}", export::render_summary_table(&records));

    let floored_labels: Vec<&str> = runs
        .iter()
        .filter(|(_, trajectory)| trajectory.ever_floored())
        .map(|(id, _)| id.label())
        .collect();
    if !floored_labels.is_empty() {
        warn!(scenarios = ?floored_labels, "zero floor engaged");
        println!();
        println!(
            "Note: reserves hit the zero floor in: {}. Levels understate the drain from the first floored month on.",
            floored_labels.join(", ")
        );
    }

    if let Some(path) = summary_csv {
        export::write_summary_csv(Path::new(path), &records)?;
        info!(path, "summary csv written");
    }
    if let Some(path) = trajectories {
        export::write_trajectories_json(Path::new(path), &start, horizon_months, &months, &runs)?;
        info!(path, "trajectories json written");
    }

    Ok(())
}

/// Load starting conditions from the requested snapshot.
///
/// The snapshot is the explicit `--data` path when given, otherwise the
/// configured `data_csv`. A missing snapshot is an error either way; balances
/// are never substituted. Runs without a snapshot spell out all three
/// balances explicitly instead.
fn resolve_base_conditions(data: Option<&str>, config: &CliConfig) -> Result<StartingConditions> {
    let path = data.map(PathBuf::from).unwrap_or_else(|| config.data_csv.clone());
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let frame = load_series_csv(&path)?;
    Ok(StartingConditions::from_frame(&frame, &SnapshotColumns::default())?)
}

/// Replace individual balances with explicitly given values.
fn apply_overrides(
    base: StartingConditions,
    reserves: Option<f64>,
    rrp: Option<f64>,
    tga: Option<f64>,
) -> Result<StartingConditions> {
    if reserves.is_none() && rrp.is_none() && tga.is_none() {
        return Ok(base);
    }
    Ok(StartingConditions::new(
        reserves.unwrap_or(base.reserves()),
        rrp.unwrap_or(base.rrp()),
        tga.unwrap_or(base.tga()),
    )?)
}

// ============================================================================
// Tests
// ============================================================================
