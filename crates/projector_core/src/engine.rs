//! The scenario engine.
//!
//! One projection is a deterministic monthly recurrence over the liability
//! side of the central-bank balance sheet:
//!
//! ```text
//! reserves[m] = max(0, reserves[m-1] - runoff(m) + dRRP(m) - dTGA(m)
//!                      - currency - other)
//! ```
//!
//! Runoff comes from the scenario's [`RunoffSchedule`], the TGA delta from the
//! seeded [`TgaCycle`] path, and the RRP delta from the
//! [`RrpPolicy`]. Currency growth and residual drains are constant per-month
//! rates. There is no randomness anywhere: identical inputs produce
//! bitwise-identical trajectories.

use crate::error::EngineError;
use crate::resolver::StartingConditions;
use crate::scenario::ScenarioCatalogue;
use crate::schedule::RunoffSchedule;
use crate::tga::TgaCycle;
use crate::trajectory::{ScenarioRuns, Trajectory};

/// Largest horizon the engine accepts, in months.
pub const MAX_HORIZON_MONTHS: usize = 600;

/// Constant per-month autonomous drains, in billions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DrainRates {
    /// Currency-in-circulation growth per month.
    pub currency: f64,
    /// Residual drains (foreign repo pool and similar) per month.
    pub other: f64,
}

impl Default for DrainRates {
    /// The standard drains: 5.5 currency, 2.0 other.
    fn default() -> Self {
        Self {
            currency: 5.5,
            other: 2.0,
        }
    }
}

/// How the overnight RRP buffer behaves over the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RrpPolicy {
    /// The buffer is released in full during the first projected month and
    /// stays empty afterwards.
    DrainToZero,
    /// The buffer is held flat at its starting level.
    Hold,
}

impl Default for RrpPolicy {
    fn default() -> Self {
        Self::DrainToZero
    }
}

/// Everything a projection needs besides the starting conditions and the
/// runoff schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectionConfig {
    /// Number of months to project, `1..=MAX_HORIZON_MONTHS`.
    pub horizon_months: usize,
    /// Constant autonomous drains.
    pub drains: DrainRates,
    /// Treasury cash-balance cycle.
    pub tga_cycle: TgaCycle,
    /// RRP buffer behaviour.
    pub rrp_policy: RrpPolicy,
}

impl Default for ProjectionConfig {
    /// The standard configuration: 24 months, default drains and cycle,
    /// RRP drained to zero.
    fn default() -> Self {
        Self {
            horizon_months: 24,
            drains: DrainRates::default(),
            tga_cycle: TgaCycle::default(),
            rrp_policy: RrpPolicy::default(),
        }
    }
}

impl ProjectionConfig {
    /// Checks the horizon bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHorizon`] when the horizon is zero or
    /// exceeds [`MAX_HORIZON_MONTHS`].
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.horizon_months < 1 || self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(EngineError::InvalidHorizon {
                months: self.horizon_months,
                max: MAX_HORIZON_MONTHS,
            });
        }
        Ok(())
    }
}

/// Projects one scenario.
///
/// Index 0 of every output vector is the starting state; index `m` is the
/// state after month `m`. Reserves are floored at zero; the months where the
/// floor applied are recorded in [`Trajectory::floored`].
///
/// # Errors
///
/// Returns [`EngineError`] if the horizon is out of bounds or the schedule's
/// regime switch falls outside the projection window. No stepping occurs on
/// the error path.
///
/// # Examples
///
/// ```
/// use projector_core::engine::{project, ProjectionConfig};
/// use projector_core::resolver::StartingConditions;
/// use projector_core::schedule::RunoffSchedule;
///
/// let start = StartingConditions::new(3000.0, 150.0, 650.0).unwrap();
/// let schedule = RunoffSchedule::constant(95.0);
/// let trajectory = project(&start, &schedule, &ProjectionConfig::default()).unwrap();
///
/// assert_eq!(trajectory.horizon(), 24);
/// assert_eq!(trajectory.reserves()[0], 3000.0);
/// ```
pub fn project(
    start: &StartingConditions,
    schedule: &RunoffSchedule,
    config: &ProjectionConfig,
) -> Result<Trajectory, EngineError> {
    config.validate()?;
    schedule.validate(config.horizon_months)?;

    let horizon = config.horizon_months;
    let tga = config.tga_cycle.seeded_path(start.tga(), horizon);

    let mut reserves = Vec::with_capacity(horizon + 1);
    let mut rrp = Vec::with_capacity(horizon + 1);
    let mut cumulative_currency = Vec::with_capacity(horizon + 1);
    let mut cumulative_other = Vec::with_capacity(horizon + 1);
    let mut floored = Vec::with_capacity(horizon + 1);

    reserves.push(start.reserves());
    rrp.push(start.rrp());
    cumulative_currency.push(0.0);
    cumulative_other.push(0.0);
    floored.push(false);

    for month in 1..=horizon {
        let runoff = schedule.rate_at(month);
        let rrp_prev = rrp[month - 1];
        // The buffer release enters the recurrence with the sign of the
        // balance change: money market funds absorb new issuance that would
        // otherwise have been funded out of reserves.
        let (delta_rrp, rrp_next) = match config.rrp_policy {
            RrpPolicy::DrainToZero => {
                if month == 1 && rrp_prev > 0.0 {
                    (-rrp_prev, 0.0)
                } else {
                    (0.0, 0.0)
                }
            }
            RrpPolicy::Hold => (0.0, rrp_prev),
        };
        let delta_tga = tga[month] - tga[month - 1];

        let unclamped = reserves[month - 1] - runoff + delta_rrp
            - delta_tga
            - config.drains.currency
            - config.drains.other;

        floored.push(unclamped < 0.0);
        reserves.push(unclamped.max(0.0));
        rrp.push(rrp_next);
        cumulative_currency.push(config.drains.currency * month as f64);
        cumulative_other.push(config.drains.other * month as f64);
    }

    Ok(Trajectory {
        reserves,
        rrp,
        tga,
        cumulative_currency_drain: cumulative_currency,
        cumulative_other_drain: cumulative_other,
        floored,
    })
}

/// Projects every catalogue scenario under the same starting conditions.
///
/// Runs are returned in catalogue order so downstream tables and exports are
/// stable across invocations.
///
/// # Errors
///
/// Fails on the first scenario whose schedule does not fit the configured
/// horizon; earlier runs are discarded.
pub fn run_catalogue(
    start: &StartingConditions,
    catalogue: &ScenarioCatalogue,
    config: &ProjectionConfig,
) -> Result<ScenarioRuns, EngineError> {
    let mut runs = Vec::with_capacity(catalogue.len());
    for entry in catalogue.iter() {
        runs.push((entry.id, project(start, &entry.schedule, config)?));
    }
    Ok(ScenarioRuns::new(runs))
}

// ============================================================================
// Tests
// ============================================================================
