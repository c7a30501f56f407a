//! Threshold levels and crossing detection.

/// Named reserve-adequacy levels, in billions.
///
/// The levels bracket the market's working taxonomy of reserve scarcity, with
/// the lowest pinned to the repo-stress episode of September 2019.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReserveThreshold {
    /// Clearly more reserves than the system needs.
    Abundant,
    /// The lower edge of the comfortable range.
    Ample,
    /// Close enough to scarcity that funding markets react.
    Caution,
    /// The level at which repo markets seized in 2019.
    Crisis,
}

impl ReserveThreshold {
    /// All thresholds from loosest to tightest.
    pub fn all() -> [ReserveThreshold; 4] {
        [Self::Abundant, Self::Ample, Self::Caution, Self::Crisis]
    }

    /// The threshold level in billions.
    pub fn level_bn(&self) -> f64 {
        match self {
            Self::Abundant => 3000.0,
            Self::Ample => 2500.0,
            Self::Caution => 2000.0,
            Self::Crisis => 1400.0,
        }
    }

    /// Human-readable name for tables and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Abundant => "Abundant",
            Self::Ample => "Ample",
            Self::Caution => "Caution",
            Self::Crisis => "2019 Crisis Level",
        }
    }
}

/// First index at which `levels` sits at or below `threshold`.
///
/// Index 0 participates, so a trajectory that starts at or below the
/// threshold crosses immediately. Returns `None` when the threshold is never
/// reached, which is an expected outcome for slow-drain scenarios rather than
/// an error.
///
/// # Examples
///
/// ```
/// use projector_core::analysis::first_crossing;
///
/// let levels = [100.0, 90.0, 80.0, 70.0, 60.0, 50.0];
/// assert_eq!(first_crossing(&levels, 55.0), Some(5));
/// assert_eq!(first_crossing(&levels, -1.0), None);
/// ```
pub fn first_crossing(levels: &[f64], threshold: f64) -> Option<usize> {
    levels.iter().position(|level| *level <= threshold)
}

// ============================================================================
// Tests
// ============================================================================
