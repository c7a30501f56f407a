//! Date-indexed observation table.
//!
//! A [`SeriesFrame`] holds several named series over one shared, strictly
//! ascending date index. Cells are `Option<f64>` because the source data mixes
//! daily, weekly, and monthly series: on most dates only some columns have a
//! value.

use chrono::NaiveDate;

use crate::error::FrameError;

/// One named series of optional observations.
///
/// The values are positionally aligned with the owning frame's date index.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColumn {
    name: String,
    values: Vec<Option<f64>>,
}

impl SeriesColumn {
    /// Creates a column from a name and its (possibly sparse) values.
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The column name, typically an upstream series identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All cells, missing ones included.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Present observations in date order.
    pub fn valid_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    /// The most recent present observation, if any.
    pub fn last_valid(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }
}

/// A set of [`SeriesColumn`]s over one shared date index.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use projector_core::frame::{SeriesColumn, SeriesFrame};
///
/// let dates = vec![
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
/// ];
/// let frame = SeriesFrame::new(
///     dates,
///     vec![SeriesColumn::new("TOTRESNS", vec![Some(3000.0), None])],
/// )
/// .unwrap();
///
/// assert_eq!(frame.len(), 2);
/// assert_eq!(frame.column("TOTRESNS").unwrap().last_valid(), Some(3000.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFrame {
    dates: Vec<NaiveDate>,
    columns: Vec<SeriesColumn>,
}

impl SeriesFrame {
    /// Builds a frame, checking column lengths, date ordering, and name
    /// uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] if any column length differs from the date index
    /// length, if dates are not strictly ascending, or if two columns share a
    /// name.
    pub fn new(dates: Vec<NaiveDate>, columns: Vec<SeriesColumn>) -> Result<Self, FrameError> {
        for column in &columns {
            if column.values.len() != dates.len() {
                return Err(FrameError::LengthMismatch {
                    name: column.name.clone(),
                    got: column.values.len(),
                    expected: dates.len(),
                });
            }
        }
        for (position, pair) in dates.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(FrameError::UnsortedDates {
                    position: position + 1,
                });
            }
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(FrameError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
        }
        Ok(Self { dates, columns })
    }

    /// The shared date index.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The date of the last row, if the frame is non-empty.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&SeriesColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterates over all columns in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &SeriesColumn> {
        self.columns.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_dates() -> Vec<NaiveDate> {
        vec![date(2025, 11, 1), date(2025, 12, 1), date(2026, 1, 1)]
    }

    #[test]
    fn builds_frame_with_aligned_columns() {
        let frame = SeriesFrame::new(
            sample_dates(),
            vec![
                SeriesColumn::new("TOTRESNS", vec![Some(3100.0), Some(3050.0), Some(3000.0)]),
                SeriesColumn::new("WTREGEN", vec![None, Some(700.0), Some(650.0)]),
            ],
        )
        .unwrap();

        assert_eq!(frame.len(), 3);
        assert_eq!(frame.last_date(), Some(date(2026, 1, 1)));
        assert_eq!(frame.columns().count(), 2);
    }

    #[test]
    fn rejects_misaligned_column() {
        let err = SeriesFrame::new(
            sample_dates(),
            vec![SeriesColumn::new("TOTRESNS", vec![Some(3000.0)])],
        )
        .unwrap_err();

        assert_eq!(
            err,
            FrameError::LengthMismatch {
                name: "TOTRESNS".to_string(),
                got: 1,
                expected: 3,
            }
        );
    }

    #[test]
    fn rejects_unsorted_dates() {
        let err = SeriesFrame::new(
            vec![date(2026, 1, 2), date(2026, 1, 1)],
            vec![SeriesColumn::new("TOTRESNS", vec![Some(1.0), Some(2.0)])],
        )
        .unwrap_err();

        assert_eq!(err, FrameError::UnsortedDates { position: 1 });
    }

    #[test]
    fn rejects_duplicate_dates() {
        let err = SeriesFrame::new(
            vec![date(2026, 1, 1), date(2026, 1, 1)],
            vec![SeriesColumn::new("TOTRESNS", vec![Some(1.0), Some(2.0)])],
        )
        .unwrap_err();

        assert_eq!(err, FrameError::UnsortedDates { position: 1 });
    }

    #[test]
    fn rejects_duplicate_column_name() {
        let err = SeriesFrame::new(
            vec![date(2026, 1, 1)],
            vec![
                SeriesColumn::new("RRPONTSYD", vec![Some(1.0)]),
                SeriesColumn::new("RRPONTSYD", vec![Some(2.0)]),
            ],
        )
        .unwrap_err();

        assert_eq!(
            err,
            FrameError::DuplicateColumn {
                name: "RRPONTSYD".to_string(),
            }
        );
    }

    #[test]
    fn last_valid_skips_trailing_gaps() {
        let column = SeriesColumn::new("WTREGEN", vec![Some(700.0), Some(650.0), None]);
        assert_eq!(column.last_valid(), Some(650.0));
    }

    #[test]
    fn valid_values_preserve_date_order() {
        let column = SeriesColumn::new("X", vec![None, Some(1.0), None, Some(2.0)]);
        let values: Vec<f64> = column.valid_values().collect();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn all_missing_column_has_no_last_valid() {
        let column = SeriesColumn::new("X", vec![None, None]);
        assert_eq!(column.last_valid(), None);
        assert_eq!(column.valid_values().count(), 0);
    }

    #[test]
    fn empty_frame_is_valid() {
        let frame = SeriesFrame::new(vec![], vec![]).unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.last_date(), None);
    }
}
