//! Periodic Treasury cash-balance driver.

use std::f64::consts::PI;

/// Sinusoidal model of the Treasury General Account level.
///
/// The TGA swings with the tax calendar rather than trending, so the engine
/// models it as a fixed sine around a mean level. What feeds the recurrence is
/// not the level itself but its month-over-month change: cash flowing into the
/// TGA drains reserves one-for-one, and cash flowing out replenishes them.
///
/// # Examples
///
/// ```
/// use projector_core::tga::TgaCycle;
///
/// let cycle = TgaCycle::default();
/// // One full period returns to the mean.
/// assert!((cycle.level_at(6) - 650.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TgaCycle {
    /// Mean level in billions.
    pub mean: f64,
    /// Swing amplitude in billions.
    pub amplitude: f64,
    /// Full cycle length in months. Must be positive.
    pub period_months: f64,
}

impl TgaCycle {
    /// Creates a cycle with the given mean, amplitude, and period.
    pub fn new(mean: f64, amplitude: f64, period_months: f64) -> Self {
        debug_assert!(period_months > 0.0, "cycle period must be positive");
        Self {
            mean,
            amplitude,
            period_months,
        }
    }

    /// Level at month `month`, with month 0 on the mean.
    pub fn level_at(&self, month: usize) -> f64 {
        self.mean + self.amplitude * (2.0 * PI * month as f64 / self.period_months).sin()
    }

    /// Levels for months `0..=horizon_months`.
    pub fn path(&self, horizon_months: usize) -> Vec<f64> {
        (0..=horizon_months).map(|m| self.level_at(m)).collect()
    }

    /// Like [`path`](Self::path), but with the month-0 entry replaced by the
    /// observed starting balance.
    ///
    /// The first projected month therefore absorbs the jump from the observed
    /// level onto the cycle, and every later month follows the cycle exactly.
    pub fn seeded_path(&self, start_tga: f64, horizon_months: usize) -> Vec<f64> {
        let mut path = self.path(horizon_months);
        path[0] = start_tga;
        path
    }
}

impl Default for TgaCycle {
    /// The standard cycle: mean 650, amplitude 100, period 6 months.
    fn default() -> Self {
        Self::new(650.0, 100.0, 6.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
