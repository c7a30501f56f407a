//! # adapter_fred: FRED Combined-CSV Loader
//!
//! Reads the combined snapshot produced by the FRED download tooling into a
//! [`projector_core::frame::SeriesFrame`]. The file is a date-indexed table:
//! an unnamed first column of ISO dates, one column per series identifier,
//! and empty cells where a series has no observation on that date.
//!
//! The adapter stops at frame assembly. Picking balances out of the frame and
//! normalizing their units is the resolver's job in `projector_core`.

pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{load_series_csv, parse_series_csv};
