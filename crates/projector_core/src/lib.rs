//! # projector_core: Deterministic Reserve-Drain Projection Kernel
//!
//! ## Kernel Role
//!
//! projector_core is the pure layer of the stack. It turns a snapshot of
//! liability-side balances into month-by-month reserve trajectories under a
//! fixed catalogue of balance-sheet policy scenarios:
//! - Date-indexed observation frames (`frame`)
//! - Starting-condition resolution with unit normalization (`resolver`)
//! - Periodic Treasury cash-balance driver (`tga`)
//! - Runoff schedules, constant or regime-switching (`schedule`)
//! - The scenario catalogue (`scenario`)
//! - The projection recurrence itself (`engine`)
//! - Trajectory containers and per-scenario run sets (`trajectory`)
//! - Threshold crossing analysis (`analysis`)
//! - Cross-scenario summaries (`summary`)
//! - Error types: `FrameError`, `ResolveError`, `EngineError` (`error`)
//!
//! ## Determinism Principle
//!
//! The kernel performs no I/O, keeps no global state, and draws no random
//! numbers. Identical inputs produce bitwise-identical trajectories, so every
//! figure in a report can be reproduced from the inputs alone.
//!
//! ## Usage Examples
//!
//! ```rust
//! use projector_core::engine::{run_catalogue, ProjectionConfig};
//! use projector_core::resolver::StartingConditions;
//! use projector_core::scenario::{ScenarioCatalogue, ScenarioId};
//! use projector_core::summary::summarize;
//!
//! // Snapshot of reserves, RRP buffer, and Treasury cash, in billions.
//! let start = StartingConditions::new(3000.0, 150.0, 650.0).unwrap();
//!
//! let catalogue = ScenarioCatalogue::standard();
//! let config = ProjectionConfig::default();
//! let runs = run_catalogue(&start, &catalogue, &config).unwrap();
//!
//! let records = summarize(&catalogue, &runs, start.reserves()).unwrap();
//! assert_eq!(records.len(), 4);
//!
//! // The aggressive path drains faster than the consensus path.
//! let hawk = runs.get(ScenarioId::Hawk).unwrap();
//! let moderate = runs.get(ScenarioId::Moderate).unwrap();
//! assert!(hawk.reserves()[24] < moderate.reserves()[24]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for trajectories, summary
//!   records, and configuration types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod engine;
pub mod error;
pub mod frame;
pub mod resolver;
pub mod scenario;
pub mod schedule;
pub mod summary;
pub mod tga;
pub mod trajectory;
