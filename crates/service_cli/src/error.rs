//! CLI error types.

use thiserror::Error;

/// Convenience alias used across the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error.
///
/// Wraps the failure modes of every layer the CLI touches so command
/// implementations can use `?` throughout.
#[derive(Error, Debug)]
pub enum CliError {
    /// A path given on the command line does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An argument value is out of range or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file failed to load or validate.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The snapshot CSV failed to load.
    #[error("snapshot load failed: {0}")]
    Load(#[from] adapter_fred::LoadError),

    /// Starting conditions could not be resolved from the snapshot.
    #[error("starting-condition resolution failed: {0}")]
    Resolve(#[from] projector_core::error::ResolveError),

    /// The projection itself was rejected.
    #[error("projection failed: {0}")]
    Engine(#[from] projector_core::error::EngineError),

    /// Filesystem failure while writing outputs.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export failure.
    #[error("csv export failed: {0}")]
    CsvExport(#[from] csv::Error),

    /// JSON export failure.
    #[error("json export failed: {0}")]
    JsonExport(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_underlying_cause() {
        let err = CliError::Engine(projector_core::error::EngineError::InvalidHorizon {
            months: 0,
            max: 600,
        });
        assert_eq!(
            err.to_string(),
            "projection failed: invalid horizon: 0 months (expected 1..=600)"
        );
    }

    #[test]
    fn file_not_found_names_the_path() {
        let err = CliError::FileNotFound("data/fred_combined.csv".to_string());
        assert!(err.to_string().contains("fred_combined.csv"));
    }
}
