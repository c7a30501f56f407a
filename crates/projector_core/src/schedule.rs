//! Runoff-rate schedules.

use crate::error::EngineError;

/// Monthly balance-sheet runoff as a function of the projection month.
///
/// Rates are in billions per month. Positive rates shrink the balance sheet
/// and drain reserves; a negative rate models asset purchases, which add
/// reserves instead.
///
/// # Examples
///
/// ```
/// use projector_core::schedule::RunoffSchedule;
///
/// let schedule = RunoffSchedule::regime_switch(95.0, 6, -75.0);
/// assert_eq!(schedule.rate_at(5), 95.0);
/// assert_eq!(schedule.rate_at(6), -75.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RunoffSchedule {
    /// The same rate every month.
    Constant {
        /// Monthly rate in billions.
        rate: f64,
    },
    /// One rate until a trigger month, another from then on.
    RegimeSwitch {
        /// Rate for months before the trigger.
        initial: f64,
        /// First month at which the replacement rate applies.
        trigger_month: usize,
        /// Rate for the trigger month and every month after.
        replacement: f64,
    },
}

impl RunoffSchedule {
    /// A constant-rate schedule.
    pub fn constant(rate: f64) -> Self {
        Self::Constant { rate }
    }

    /// A schedule that switches from `initial` to `replacement` at
    /// `trigger_month`.
    pub fn regime_switch(initial: f64, trigger_month: usize, replacement: f64) -> Self {
        Self::RegimeSwitch {
            initial,
            trigger_month,
            replacement,
        }
    }

    /// The rate applied when stepping into `month`.
    pub fn rate_at(&self, month: usize) -> f64 {
        match self {
            Self::Constant { rate } => *rate,
            Self::RegimeSwitch {
                initial,
                trigger_month,
                replacement,
            } => {
                if month >= *trigger_month {
                    *replacement
                } else {
                    *initial
                }
            }
        }
    }

    /// Checks the schedule against a projection horizon.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTrigger`] if a regime switch falls
    /// outside `1..=horizon_months`. A switch at month 0 would make the
    /// initial rate unreachable, and one past the horizon would never fire.
    pub fn validate(&self, horizon_months: usize) -> Result<(), EngineError> {
        if let Self::RegimeSwitch { trigger_month, .. } = self {
            if *trigger_month < 1 || *trigger_month > horizon_months {
                return Err(EngineError::InvalidTrigger {
                    trigger_month: *trigger_month,
                    horizon: horizon_months,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_rate_ignores_month() {
        let schedule = RunoffSchedule::constant(40.0);
        assert_eq!(schedule.rate_at(1), 40.0);
        assert_eq!(schedule.rate_at(24), 40.0);
        assert_eq!(schedule.rate_at(600), 40.0);
    }

    #[test]
    fn switch_applies_from_trigger_month_inclusive() {
        let schedule = RunoffSchedule::regime_switch(95.0, 6, -75.0);
        assert_eq!(schedule.rate_at(1), 95.0);
        assert_eq!(schedule.rate_at(5), 95.0);
        assert_eq!(schedule.rate_at(6), -75.0);
        assert_eq!(schedule.rate_at(7), -75.0);
    }

    #[test]
    fn trigger_at_month_one_replaces_everything() {
        let schedule = RunoffSchedule::regime_switch(95.0, 1, 10.0);
        assert_eq!(schedule.rate_at(1), 10.0);
        assert!(schedule.validate(24).is_ok());
    }

    #[test]
    fn trigger_at_horizon_is_accepted() {
        let schedule = RunoffSchedule::regime_switch(95.0, 24, -75.0);
        assert!(schedule.validate(24).is_ok());
    }

    #[test]
    fn trigger_outside_window_is_rejected() {
        let late = RunoffSchedule::regime_switch(95.0, 25, -75.0);
        assert_eq!(
            late.validate(24).unwrap_err(),
            EngineError::InvalidTrigger {
                trigger_month: 25,
                horizon: 24,
            }
        );

        let zero = RunoffSchedule::regime_switch(95.0, 0, -75.0);
        assert_eq!(
            zero.validate(24).unwrap_err(),
            EngineError::InvalidTrigger {
                trigger_month: 0,
                horizon: 24,
            }
        );
    }

    #[test]
    fn constant_schedule_always_validates() {
        assert!(RunoffSchedule::constant(0.0).validate(1).is_ok());
        assert!(RunoffSchedule::constant(-75.0).validate(600).is_ok());
    }
}
