//! Starting-condition resolution.
//!
//! Turns a raw [`SeriesFrame`] snapshot into the three balances the engine
//! starts from: bank reserves, the overnight RRP buffer, and the Treasury
//! cash balance. Resolution handles the two data quirks of the combined
//! snapshot: mixed observation frequencies within one column, and series
//! published in millions alongside series published in billions.

use crate::error::ResolveError;
use crate::frame::SeriesFrame;

/// Rescaling applied to a resolved raw value.
///
/// Upstream series are published at inconsistent scales: some report billions
/// directly, others report millions. The heuristic keys off magnitude, since a
/// balance in millions is three orders larger than the same balance in
/// billions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitNormalization {
    /// Value is already in billions.
    Identity,
    /// Divide by 1000 when the raw value exceeds `cutoff`, otherwise keep
    /// it unchanged.
    ThousandsAboveCutoff {
        /// Magnitude above which the value is taken to be in millions.
        cutoff: f64,
    },
}

impl UnitNormalization {
    /// Applies the normalization to a raw observation.
    pub fn apply(&self, raw: f64) -> f64 {
        match self {
            Self::Identity => raw,
            Self::ThousandsAboveCutoff { cutoff } => {
                if raw > *cutoff {
                    raw / 1000.0
                } else {
                    raw
                }
            }
        }
    }
}

/// How to pick one balance out of a frame column.
///
/// Built incrementally in the style of a builder:
///
/// ```
/// use projector_core::resolver::{ColumnSelector, UnitNormalization};
///
/// let selector = ColumnSelector::new("RRPONTSYD")
///     .with_normalization(UnitNormalization::ThousandsAboveCutoff { cutoff: 1000.0 });
/// assert_eq!(selector.name(), "RRPONTSYD");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSelector {
    name: String,
    normalization: UnitNormalization,
    magnitude_floor: Option<f64>,
}

impl ColumnSelector {
    /// Selector for `name` with no rescaling and no frequency filter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            normalization: UnitNormalization::Identity,
            magnitude_floor: None,
        }
    }

    /// Sets the unit normalization applied to the resolved value.
    pub fn with_normalization(mut self, normalization: UnitNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Restricts resolution to observations strictly above `floor`.
    ///
    /// Used for columns that interleave a coarse series in billions with a
    /// fine series in fractions, where "latest" must mean the latest of the
    /// coarse readings. If nothing clears the floor, resolution falls back to
    /// the unfiltered column rather than failing.
    pub fn with_magnitude_floor(mut self, floor: f64) -> Self {
        self.magnitude_floor = Some(floor);
        self
    }

    /// The frame column this selector reads.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The three selectors used to seed a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotColumns {
    /// Bank reserve balances.
    pub reserves: ColumnSelector,
    /// Overnight reverse-repo balance.
    pub rrp: ColumnSelector,
    /// Treasury General Account balance.
    pub tga: ColumnSelector,
}

impl Default for SnapshotColumns {
    /// Selectors for the standard upstream snapshot: monthly reserves in
    /// billions (floored at 100 to skip interleaved low-magnitude readings),
    /// daily RRP in millions above 1000, and weekly TGA in millions above
    /// 100.
    fn default() -> Self {
        Self {
            reserves: ColumnSelector::new("TOTRESNS").with_magnitude_floor(100.0),
            rrp: ColumnSelector::new("RRPONTSYD")
                .with_normalization(UnitNormalization::ThousandsAboveCutoff { cutoff: 1000.0 }),
            tga: ColumnSelector::new("WTREGEN")
                .with_normalization(UnitNormalization::ThousandsAboveCutoff { cutoff: 100.0 }),
        }
    }
}

/// Resolves one selector against a frame.
///
/// Picks the latest valid observation (restricted by the magnitude floor when
/// one is set), then applies the unit normalization.
///
/// # Errors
///
/// Returns [`ResolveError::MissingColumn`] if the frame has no such column,
/// and [`ResolveError::NoValidObservations`] if every cell is missing.
pub fn resolve_column(
    frame: &SeriesFrame,
    selector: &ColumnSelector,
) -> Result<f64, ResolveError> {
    let column = frame
        .column(selector.name())
        .ok_or_else(|| ResolveError::MissingColumn {
            name: selector.name.clone(),
        })?;

    let raw = match selector.magnitude_floor {
        Some(floor) => column
            .valid_values()
            .filter(|v| *v > floor)
            .last()
            .or_else(|| column.last_valid()),
        None => column.last_valid(),
    }
    .ok_or_else(|| ResolveError::NoValidObservations {
        name: selector.name.clone(),
    })?;

    Ok(selector.normalization.apply(raw))
}

/// The balances a projection starts from, all in billions.
///
/// Immutable once constructed; the engine reads from it and never writes
/// back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StartingConditions {
    reserves: f64,
    rrp: f64,
    tga: f64,
}

impl StartingConditions {
    /// Builds starting conditions, rejecting non-finite or negative balances.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidStartingValue`] naming the first
    /// offending balance.
    pub fn new(reserves: f64, rrp: f64, tga: f64) -> Result<Self, ResolveError> {
        for (name, value) in [("reserves", reserves), ("rrp", rrp), ("tga", tga)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ResolveError::InvalidStartingValue {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(Self { reserves, rrp, tga })
    }

    /// Resolves all three balances from a frame using the given selectors.
    ///
    /// # Errors
    ///
    /// Propagates the first resolution failure.
    pub fn from_frame(
        frame: &SeriesFrame,
        columns: &SnapshotColumns,
    ) -> Result<Self, ResolveError> {
        let reserves = resolve_column(frame, &columns.reserves)?;
        let rrp = resolve_column(frame, &columns.rrp)?;
        let tga = resolve_column(frame, &columns.tga)?;
        Self::new(reserves, rrp, tga)
    }

    /// Starting bank reserves in billions.
    pub fn reserves(&self) -> f64 {
        self.reserves
    }

    /// Starting overnight RRP buffer in billions.
    pub fn rrp(&self) -> f64 {
        self.rrp
    }

    /// Starting Treasury cash balance in billions.
    pub fn tga(&self) -> f64 {
        self.tga
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::SeriesColumn;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot_frame() -> SeriesFrame {
        // Reserves monthly in billions with an interleaved sub-100 reading,
        // RRP daily in millions, TGA weekly in millions.
        SeriesFrame::new(
            vec![
                date(2025, 11, 1),
                date(2025, 12, 1),
                date(2026, 1, 1),
                date(2026, 1, 15),
            ],
            vec![
                SeriesColumn::new(
                    "TOTRESNS",
                    vec![Some(3100.0), Some(3000.0), Some(12.5), None],
                ),
                SeriesColumn::new(
                    "RRPONTSYD",
                    vec![Some(200_000.0), None, Some(150_000.0), None],
                ),
                SeriesColumn::new(
                    "WTREGEN",
                    vec![None, Some(700_000.0), None, Some(650_000.0)],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn resolves_standard_snapshot() {
        let conditions =
            StartingConditions::from_frame(&snapshot_frame(), &SnapshotColumns::default()).unwrap();

        // Latest reserves reading above the floor, not the stray 12.5.
        assert_relative_eq!(conditions.reserves(), 3000.0);
        // Millions rescaled to billions.
        assert_relative_eq!(conditions.rrp(), 150.0);
        assert_relative_eq!(conditions.tga(), 650.0);
    }

    #[test]
    fn magnitude_floor_falls_back_to_full_column() {
        let frame = SeriesFrame::new(
            vec![date(2026, 1, 1), date(2026, 2, 1)],
            vec![SeriesColumn::new("TOTRESNS", vec![Some(40.0), Some(55.0)])],
        )
        .unwrap();
        let selector = ColumnSelector::new("TOTRESNS").with_magnitude_floor(100.0);

        assert_relative_eq!(resolve_column(&frame, &selector).unwrap(), 55.0);
    }

    #[test]
    fn normalization_leaves_small_values_alone() {
        let normalization = UnitNormalization::ThousandsAboveCutoff { cutoff: 1000.0 };
        assert_relative_eq!(normalization.apply(950.0), 950.0);
        assert_relative_eq!(normalization.apply(150_000.0), 150.0);
        // Exactly at the cutoff counts as already-normalized.
        assert_relative_eq!(normalization.apply(1000.0), 1000.0);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let frame = SeriesFrame::new(vec![], vec![]).unwrap();
        let err = resolve_column(&frame, &ColumnSelector::new("WTREGEN")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingColumn {
                name: "WTREGEN".to_string(),
            }
        );
    }

    #[test]
    fn all_missing_cells_are_rejected() {
        let frame = SeriesFrame::new(
            vec![date(2026, 1, 1), date(2026, 2, 1)],
            vec![SeriesColumn::new("RRPONTSYD", vec![None, None])],
        )
        .unwrap();
        let err = resolve_column(&frame, &ColumnSelector::new("RRPONTSYD")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::NoValidObservations {
                name: "RRPONTSYD".to_string(),
            }
        );
    }

    #[test]
    fn zero_balances_are_valid() {
        let conditions = StartingConditions::new(0.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(conditions.reserves(), 0.0);
    }

    #[test]
    fn rejects_negative_and_non_finite_balances() {
        assert_eq!(
            StartingConditions::new(-1.0, 0.0, 0.0).unwrap_err(),
            ResolveError::InvalidStartingValue {
                name: "reserves".to_string(),
                value: -1.0,
            }
        );
        assert!(matches!(
            StartingConditions::new(3000.0, f64::NAN, 650.0).unwrap_err(),
            ResolveError::InvalidStartingValue { name, .. } if name == "rrp"
        ));
        assert!(matches!(
            StartingConditions::new(3000.0, 150.0, f64::INFINITY).unwrap_err(),
            ResolveError::InvalidStartingValue { name, .. } if name == "tga"
        ));
    }
}
