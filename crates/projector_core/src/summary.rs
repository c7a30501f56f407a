//! Comparative summary across scenario runs.

use crate::analysis::{first_crossing, ReserveThreshold};
use crate::error::EngineError;
use crate::scenario::{ScenarioCatalogue, ScenarioId};
use crate::trajectory::ScenarioRuns;

/// Early checkpoint month reported in the summary.
pub const CHECKPOINT_EARLY_MONTHS: usize = 12;

/// Late checkpoint month reported in the summary.
pub const CHECKPOINT_LATE_MONTHS: usize = 24;

/// One scenario's headline numbers.
///
/// Absence is carried as `None`, never as a numeric placeholder: a scenario
/// that never reaches a threshold has no crossing month, and a horizon
/// shorter than a checkpoint has no reading there. Rendering the gaps is the
/// presentation layer's concern.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryRecord {
    /// Which scenario this row describes.
    pub scenario: ScenarioId,
    /// Display label for the scenario.
    pub label: &'static str,
    /// First month at or below the ample threshold, if reached.
    pub months_to_ample: Option<usize>,
    /// First month at or below the caution threshold, if reached.
    pub months_to_caution: Option<usize>,
    /// Reserves at the early checkpoint, if inside the horizon.
    pub reserves_at_12m: Option<f64>,
    /// Reserves at the late checkpoint, if inside the horizon.
    pub reserves_at_24m: Option<f64>,
    /// Decline from the starting level to the end of the horizon, in
    /// billions. Negative when reserves end higher than they started.
    pub total_reduction_bn: f64,
}

/// Builds one summary record per catalogue entry, in catalogue order.
///
/// `starting_reserves` is the common starting level the reductions are
/// measured from. The catalogue and runs must describe the same scenario
/// set, which holds for runs built by
/// [`run_catalogue`](crate::engine::run_catalogue) from the same catalogue.
///
/// # Errors
///
/// Returns [`EngineError::MissingScenarioRun`] naming the first catalogue
/// entry with no trajectory in `runs`. No partial summary is produced.
pub fn summarize(
    catalogue: &ScenarioCatalogue,
    runs: &ScenarioRuns,
    starting_reserves: f64,
) -> Result<Vec<SummaryRecord>, EngineError> {
    catalogue
        .iter()
        .map(|entry| {
            let trajectory = runs
                .get(entry.id)
                .ok_or(EngineError::MissingScenarioRun { scenario: entry.id })?;
            Ok(SummaryRecord {
                scenario: entry.id,
                label: entry.id.label(),
                months_to_ample: first_crossing(
                    trajectory.reserves(),
                    ReserveThreshold::Ample.level_bn(),
                ),
                months_to_caution: first_crossing(
                    trajectory.reserves(),
                    ReserveThreshold::Caution.level_bn(),
                ),
                reserves_at_12m: trajectory.reserves_at(CHECKPOINT_EARLY_MONTHS),
                reserves_at_24m: trajectory.reserves_at(CHECKPOINT_LATE_MONTHS),
                total_reduction_bn: starting_reserves - trajectory.final_reserves(),
            })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
