//! Loader error types.

use projector_core::error::FrameError;
use thiserror::Error;

/// Errors raised while loading a combined series CSV.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read snapshot file")]
    Io(#[from] std::io::Error),

    /// The CSV structure itself is broken (ragged rows, bad quoting).
    #[error("malformed csv")]
    Csv(#[from] csv::Error),

    /// The header row is empty, so there is no date index to read.
    #[error("missing date index column")]
    MissingDateIndex,

    /// A date cell does not parse as an ISO date.
    #[error("invalid date '{value}' on line {line}")]
    InvalidDate {
        /// 1-based line number, header included.
        line: usize,
        /// The offending cell contents.
        value: String,
    },

    /// A value cell is neither empty nor a number.
    #[error("invalid value '{value}' for {column} on line {line}")]
    InvalidValue {
        /// 1-based line number, header included.
        line: usize,
        /// Series column the cell belongs to.
        column: String,
        /// The offending cell contents.
        value: String,
    },

    /// The parsed rows do not assemble into a valid frame.
    #[error("frame assembly failed")]
    Frame(#[from] FrameError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_line_and_column() {
        let err = LoadError::InvalidValue {
            line: 12,
            column: "WTREGEN".to_string(),
            value: "n/a".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value 'n/a' for WTREGEN on line 12");
    }

    #[test]
    fn frame_errors_convert() {
        let err: LoadError = FrameError::UnsortedDates { position: 3 }.into();
        assert!(matches!(err, LoadError::Frame(_)));
    }
}
