//! Projection outputs.

use crate::scenario::ScenarioId;

/// The month-by-month output of one projection.
///
/// Every vector has `horizon + 1` entries: index 0 holds the starting state
/// and index `m` holds the state after month `m`. The vectors are parallel,
/// so one index reads a full cross-section of the system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    pub(crate) reserves: Vec<f64>,
    pub(crate) rrp: Vec<f64>,
    pub(crate) tga: Vec<f64>,
    pub(crate) cumulative_currency_drain: Vec<f64>,
    pub(crate) cumulative_other_drain: Vec<f64>,
    pub(crate) floored: Vec<bool>,
}

impl Trajectory {
    /// Bank reserves in billions, starting state first.
    pub fn reserves(&self) -> &[f64] {
        &self.reserves
    }

    /// Overnight RRP buffer in billions.
    pub fn rrp(&self) -> &[f64] {
        &self.rrp
    }

    /// Treasury cash balance in billions.
    pub fn tga(&self) -> &[f64] {
        &self.tga
    }

    /// Running total of currency-in-circulation growth, in billions.
    pub fn cumulative_currency_drain(&self) -> &[f64] {
        &self.cumulative_currency_drain
    }

    /// Running total of residual autonomous drains, in billions.
    pub fn cumulative_other_drain(&self) -> &[f64] {
        &self.cumulative_other_drain
    }

    /// Per-month flags marking where the zero floor bit.
    ///
    /// A `true` at index `m` means the unclamped recurrence went negative in
    /// month `m` and the reported reserves were floored at zero, so reserve
    /// levels from that month on understate the cumulative drain.
    pub fn floored(&self) -> &[bool] {
        &self.floored
    }

    /// Whether the zero floor bit anywhere in this trajectory.
    pub fn ever_floored(&self) -> bool {
        self.floored.iter().any(|f| *f)
    }

    /// Number of projected months (the starting entry not counted).
    pub fn horizon(&self) -> usize {
        self.reserves.len().saturating_sub(1)
    }

    /// Reserves after month `month`, or `None` past the horizon.
    pub fn reserves_at(&self, month: usize) -> Option<f64> {
        self.reserves.get(month).copied()
    }

    /// Reserves at the end of the horizon.
    pub fn final_reserves(&self) -> f64 {
        // Construction guarantees at least the starting entry.
        self.reserves.last().copied().unwrap_or(0.0)
    }
}

/// Trajectories for a whole catalogue, in catalogue order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRuns {
    runs: Vec<(ScenarioId, Trajectory)>,
}

impl ScenarioRuns {
    pub(crate) fn new(runs: Vec<(ScenarioId, Trajectory)>) -> Self {
        Self { runs }
    }

    /// The trajectory for one scenario, if it was run.
    pub fn get(&self, id: ScenarioId) -> Option<&Trajectory> {
        self.runs
            .iter()
            .find(|(run_id, _)| *run_id == id)
            .map(|(_, trajectory)| trajectory)
    }

    /// Iterates over runs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (ScenarioId, &Trajectory)> {
        self.runs.iter().map(|(id, trajectory)| (*id, trajectory))
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether no scenarios were run.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
