//! Budget goal progress
//!
//! Pure computation combining a monthly goal with the amount spent so far.
//! The band thresholds are fixed constants of the design, not configuration.

use std::fmt;

use crate::models::Money;

/// Status band derived from the spent/goal ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    /// No goal has been set for the month; progress is undefined
    NoGoalSet,
    /// Ratio at or below 85%
    OnTrack,
    /// Ratio above 85% and at or below 100%
    NearingBudget,
    /// Ratio above 100%
    OverBudget,
}

impl fmt::Display for ProgressBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGoalSet => write!(f, "No goal set"),
            Self::OnTrack => write!(f, "On track"),
            Self::NearingBudget => write!(f, "Nearing budget"),
            Self::OverBudget => write!(f, "Over budget"),
        }
    }
}

/// Goal progress for one month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub goal: Money,
    pub spent: Money,
    pub band: ProgressBand,
}

impl GoalProgress {
    /// Combine a goal and the spent total into a progress band
    pub fn compute(goal: Money, spent: Money) -> Self {
        let band = if goal.cents() == 0 {
            ProgressBand::NoGoalSet
        } else if spent.cents() * 100 <= goal.cents() * 85 {
            ProgressBand::OnTrack
        } else if spent.cents() <= goal.cents() {
            ProgressBand::NearingBudget
        } else {
            ProgressBand::OverBudget
        };

        Self { goal, spent, band }
    }

    /// Spent/goal ratio as a percentage; 0.0 when no goal is set
    pub fn percent(&self) -> f64 {
        if self.goal.cents() == 0 {
            0.0
        } else {
            self.spent.cents() as f64 / self.goal.cents() as f64 * 100.0
        }
    }

    /// Remaining budget (negative once over the goal)
    pub fn remaining(&self) -> Money {
        self.goal - self.spent
    }
}
