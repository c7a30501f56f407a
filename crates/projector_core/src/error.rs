//! Error types for frame assembly, snapshot resolution, and the projection
//! pipeline.

use crate::scenario::ScenarioId;
use thiserror::Error;

/// Errors raised while assembling a [`SeriesFrame`](crate::frame::SeriesFrame).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    /// A column's value vector does not match the date index length.
    #[error("column '{name}' has {got} values, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        name: String,
        /// Number of values supplied for the column.
        got: usize,
        /// Length of the date index.
        expected: usize,
    },

    /// The date index is not strictly ascending.
    #[error("date index not strictly ascending at position {position}")]
    UnsortedDates {
        /// First position whose date is not after its predecessor.
        position: usize,
    },

    /// Two columns share the same name.
    #[error("duplicate column '{name}'")]
    DuplicateColumn {
        /// The repeated column name.
        name: String,
    },
}

/// Errors raised while resolving starting conditions from a historical frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The frame has no column with the requested name.
    #[error("missing column '{name}'")]
    MissingColumn {
        /// Name of the column that was requested.
        name: String,
    },

    /// The column exists but holds no usable observation.
    #[error("column '{name}' has no valid observations")]
    NoValidObservations {
        /// Name of the empty column.
        name: String,
    },

    /// A resolved balance is not usable as a starting condition.
    #[error("invalid starting value for {name}: {value}")]
    InvalidStartingValue {
        /// Which balance failed validation.
        name: String,
        /// The rejected value.
        value: f64,
    },
}

/// Errors raised by the scenario engine and the summary aggregation.
///
/// All of these are configuration defects: they are detected up front and no
/// partial trajectory or partial summary is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested horizon is zero or beyond the supported maximum.
    #[error("invalid horizon: {months} months (expected 1..={max})")]
    InvalidHorizon {
        /// The rejected horizon length.
        months: usize,
        /// Largest horizon the engine accepts.
        max: usize,
    },

    /// A regime switch is scheduled outside the projection window.
    #[error("regime switch at month {trigger_month} outside window 1..={horizon}")]
    InvalidTrigger {
        /// Month at which the replacement rate would take over.
        trigger_month: usize,
        /// Horizon of the projection being validated.
        horizon: usize,
    },

    /// A catalogue entry has no matching trajectory to aggregate.
    #[error("no trajectory for scenario '{scenario}'")]
    MissingScenarioRun {
        /// The catalogue entry without a run.
        scenario: ScenarioId,
    },
}

// ============================================================================
// Tests
// ============================================================================
