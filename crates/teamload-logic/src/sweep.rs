//! Debt-by-team-size sweep — how debt shrinks as headcount grows.
//!
//! Demand and per-developer hours are held fixed; only the team size varies.
//! The sweep is a projection for charts and "what if we hire two more"
//! questions. It never feeds back into [`CalculationResults`].
//!
//! [`CalculationResults`]: crate::calculator::CalculationResults

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::constants::{sweep, CRITICAL_DEBT_HOURS};
use crate::staffing::{debt_hours, team_capacity};

/// Inclusive range of team sizes to project.
///
/// An inverted range (`min > max`) is allowed and yields no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
}

impl SizeRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::new(sweep::MIN_TEAM_SIZE, sweep::MAX_TEAM_SIZE)
    }
}

/// How bad the debt at one team size is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DebtSeverity {
    /// No debt: the team absorbs the whole demand.
    Covered,
    /// Some debt, up to the critical threshold.
    Moderate,
    /// Debt above [`CRITICAL_DEBT_HOURS`].
    Critical,
}

impl DebtSeverity {
    pub fn from_debt(debt: f64) -> Self {
        if debt <= 0.0 {
            Self::Covered
        } else if debt > CRITICAL_DEBT_HOURS {
            Self::Critical
        } else {
            Self::Moderate
        }
    }
}

/// One point of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtScenario {
    pub size: u32,
    pub capacity: f64,
    pub debt: f64,
    pub severity: DebtSeverity,
}

/// Lazy, ordered sweep over a [`SizeRange`].
///
/// Clone it to restart from the first size.
#[derive(Debug, Clone)]
pub struct DebtSweep {
    total_demand: f64,
    effective_hours_per_dev: f64,
    sizes: RangeInclusive<u32>,
}

impl DebtSweep {
    fn scenario(&self, size: u32) -> DebtScenario {
        let capacity = team_capacity(self.effective_hours_per_dev, size);
        let debt = debt_hours(self.total_demand, capacity);
        DebtScenario {
            size,
            capacity,
            debt,
            severity: DebtSeverity::from_debt(debt),
        }
    }
}

impl Iterator for DebtSweep {
    type Item = DebtScenario;

    fn next(&mut self) -> Option<DebtScenario> {
        let size = self.sizes.next()?;
        Some(self.scenario(size))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sizes.size_hint()
    }
}

impl FusedIterator for DebtSweep {}

/// Sweep debt across `range`, smallest team first.
pub fn sweep_debt_by_team_size(
    total_demand: f64,
    effective_hours_per_dev: f64,
    range: SizeRange,
) -> DebtSweep {
    DebtSweep {
        total_demand,
        effective_hours_per_dev,
        sizes: range.min..=range.max,
    }
}

/// Smallest size in `range` whose debt is zero, if any.
pub fn smallest_covering_size(
    total_demand: f64,
    effective_hours_per_dev: f64,
    range: SizeRange,
) -> Option<u32> {
    sweep_debt_by_team_size(total_demand, effective_hours_per_dev, range)
        .find(|p| p.severity == DebtSeverity::Covered)
        .map(|p| p.size)
}
