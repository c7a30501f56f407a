//! Conditions command implementation
//!
//! Resolves starting conditions from a snapshot and prints them without
//! running any projection. Useful for checking what the model would start
//! from before committing to a run.

use std::path::{Path, PathBuf};

use tracing::info;

use adapter_fred::load_series_csv;
use projector_core::resolver::{SnapshotColumns, StartingConditions};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the conditions command
pub fn run(config_path: &str, data: Option<&str>) -> Result<()> {
    let config = CliConfig::load_with_env_and_validate(Path::new(config_path))?;

    let path: PathBuf = data.map(PathBuf::from).unwrap_or(config.data_csv);
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    info!(path = %path.display(), "resolving starting conditions");
    let frame = load_series_csv(&path)?;
    let columns = SnapshotColumns::default();
    let conditions = StartingConditions::from_frame(&frame, &columns)?;

    println!("Snapshot: {}", path.display());
    if let Some(as_of) = frame.last_date() {
        println!("Rows: {} (through {})", frame.len(), as_of);
    }
    println!();
    println!("Resolved starting conditions ($bn):");
    println!(
        "  Reserves:    {:>8.1}  [{}]",
        conditions.reserves(),
        columns.reserves.name()
    );
    println!(
        "  RRP buffer:  {:>8.1}  [{}]",
        conditions.rrp(),
        columns.rrp.name()
    );
    println!(
        "  TGA balance: {:>8.1}  [{}]",
        conditions.tga(),
        columns.tga.name()
    );

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_conditions_from_sample_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("snapshot.csv");
        let mut file = std::fs::File::create(&data_path).unwrap();
        file.write_all(
            b",TOTRESNS,RRPONTSYD,WTREGEN\n2026-01-02,3000.0,150000.0,650000.0\n",
        )
        .unwrap();

        let result = run(
            dir.path().join("absent.toml").to_str().unwrap(),
            data_path.to_str(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path().join("absent.toml").to_str().unwrap(),
            Some("no/such/snapshot.csv"),
        );
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}
