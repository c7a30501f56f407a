//! The fixed scenario catalogue.
//!
//! Four policy paths spanning the plausible range of balance-sheet policy,
//! from aggressive tightening to a mid-horizon reversal into purchases. The
//! catalogue is a process-wide constant: every run projects all four under
//! identical starting conditions so the outputs are directly comparable.

use crate::schedule::RunoffSchedule;

/// Monthly runoff under the aggressive-tightening path, in billions.
pub const HAWK_RUNOFF_BN: f64 = 95.0;

/// Monthly runoff under the consensus path, in billions.
pub const MODERATE_RUNOFF_BN: f64 = 40.0;

/// Monthly runoff when maturities are reinvested into short paper.
pub const DURATION_SHIFT_RUNOFF_BN: f64 = 0.0;

/// Monthly purchase pace after a crisis reversal, in billions. Negative
/// because purchases add reserves.
pub const CRISIS_QE_BN: f64 = -75.0;

/// Month at which the crisis-reversal path flips from runoff to purchases.
pub const CRISIS_TRIGGER_MONTH: usize = 6;

/// Identifier for one of the four catalogue scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScenarioId {
    /// Aggressive runoff at full pace.
    Hawk,
    /// Consensus runoff at a moderate pace.
    Moderate,
    /// No net runoff; maturities rolled into bills.
    DurationShift,
    /// Aggressive runoff that reverses into purchases mid-horizon.
    CrisisReversal,
}

impl ScenarioId {
    /// All identifiers in catalogue order.
    pub fn all() -> [ScenarioId; 4] {
        [
            Self::Hawk,
            Self::Moderate,
            Self::DurationShift,
            Self::CrisisReversal,
        ]
    }

    /// Human-readable name for tables and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hawk => "Hawk",
            Self::Moderate => "Moderate",
            Self::DurationShift => "Duration Shift",
            Self::CrisisReversal => "Crisis Reversal",
        }
    }

    /// Stable lowercase key for file names and JSON maps.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Hawk => "hawk",
            Self::Moderate => "moderate",
            Self::DurationShift => "duration_shift",
            Self::CrisisReversal => "crisis_reversal",
        }
    }

    /// One-line description of the policy path.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Hawk => "Aggressive runoff: $95bn/month balance-sheet reduction",
            Self::Moderate => "Consensus runoff: $40bn/month balance-sheet reduction",
            Self::DurationShift => "No net runoff: maturing holdings rolled into bills",
            Self::CrisisReversal => {
                "Aggressive runoff reversing into $75bn/month purchases at month 6"
            }
        }
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalogue scenario: an identifier plus its runoff schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogueEntry {
    /// Which scenario this is.
    pub id: ScenarioId,
    /// The runoff path the engine applies.
    pub schedule: RunoffSchedule,
}

/// An ordered set of scenarios projected together.
///
/// # Examples
///
/// ```
/// use projector_core::scenario::{ScenarioCatalogue, ScenarioId};
///
/// let catalogue = ScenarioCatalogue::standard();
/// assert_eq!(catalogue.len(), 4);
/// assert!(catalogue.get(ScenarioId::Hawk).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioCatalogue {
    entries: Vec<CatalogueEntry>,
}

impl ScenarioCatalogue {
    /// The standard four-scenario catalogue.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                CatalogueEntry {
                    id: ScenarioId::Hawk,
                    schedule: RunoffSchedule::constant(HAWK_RUNOFF_BN),
                },
                CatalogueEntry {
                    id: ScenarioId::Moderate,
                    schedule: RunoffSchedule::constant(MODERATE_RUNOFF_BN),
                },
                CatalogueEntry {
                    id: ScenarioId::DurationShift,
                    schedule: RunoffSchedule::constant(DURATION_SHIFT_RUNOFF_BN),
                },
                CatalogueEntry {
                    id: ScenarioId::CrisisReversal,
                    schedule: RunoffSchedule::regime_switch(
                        HAWK_RUNOFF_BN,
                        CRISIS_TRIGGER_MONTH,
                        CRISIS_QE_BN,
                    ),
                },
            ],
        }
    }

    /// Entries in catalogue order.
    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// Iterates over entries in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogueEntry> {
        self.entries.iter()
    }

    /// Looks up an entry by identifier.
    pub fn get(&self, id: ScenarioId) -> Option<&CatalogueEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalogue_has_four_scenarios_in_order() {
        let catalogue = ScenarioCatalogue::standard();
        let ids: Vec<ScenarioId> = catalogue.iter().map(|e| e.id).collect();
        assert_eq!(ids, ScenarioId::all());
    }

    #[test]
    fn standard_schedules_match_the_policy_paths() {
        let catalogue = ScenarioCatalogue::standard();

        assert_eq!(
            catalogue.get(ScenarioId::Hawk).unwrap().schedule,
            RunoffSchedule::constant(95.0)
        );
        assert_eq!(
            catalogue.get(ScenarioId::Moderate).unwrap().schedule,
            RunoffSchedule::constant(40.0)
        );
        assert_eq!(
            catalogue.get(ScenarioId::DurationShift).unwrap().schedule,
            RunoffSchedule::constant(0.0)
        );
        assert_eq!(
            catalogue.get(ScenarioId::CrisisReversal).unwrap().schedule,
            RunoffSchedule::regime_switch(95.0, 6, -75.0)
        );
    }

    #[test]
    fn labels_and_keys_are_distinct() {
        let labels: Vec<&str> = ScenarioId::all().iter().map(|id| id.label()).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels, deduped);

        for id in ScenarioId::all() {
            assert!(!id.key().contains(' '));
            assert!(!id.description().is_empty());
        }
    }

    #[test]
    fn display_uses_the_label() {
        assert_eq!(ScenarioId::DurationShift.to_string(), "Duration Shift");
    }
}
