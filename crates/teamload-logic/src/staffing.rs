//! Staffing — total demand against what the planned team can deliver.

use serde::{Deserialize, Serialize};

/// Headcount-derived figures for one planned team size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingFigures {
    /// Developers needed to absorb the demand (fractional).
    #[serde(with = "crate::float_serde")]
    pub fte_needed: f64,
    /// Development hours the planned team delivers in a year.
    pub team_capacity: f64,
    /// Capacity as a percentage of demand. Above 100 means surplus.
    #[serde(with = "crate::float_serde")]
    pub coverage_percent: f64,
    /// Demand the team cannot absorb. Never negative.
    pub debt_hours: f64,
}

/// Total yearly demand: risk-adjusted volume plus turnover losses.
pub fn compute_demand(volume_with_risks: f64, total_turnover_losses: f64) -> f64 {
    volume_with_risks + total_turnover_losses
}

/// Capacity of a team of `team_size` developers.
pub fn team_capacity(effective_hours_per_dev: f64, team_size: u32) -> f64 {
    effective_hours_per_dev * team_size as f64
}

/// Shortfall of `capacity` against `total_demand`, floored at zero.
///
/// Surplus shows up only as coverage above 100 %, never as negative debt.
pub fn debt_hours(total_demand: f64, capacity: f64) -> f64 {
    (total_demand - capacity).max(0.0)
}

/// Derive FTE, capacity, coverage and debt.
///
/// A zero `effective_hours_per_dev` or `total_demand` yields infinite or NaN
/// ratios; callers are expected to supply a positive calendar.
pub fn compute_staffing(
    total_demand: f64,
    effective_hours_per_dev: f64,
    planned_team_size: u32,
) -> StaffingFigures {
    let team_capacity = team_capacity(effective_hours_per_dev, planned_team_size);

    StaffingFigures {
        fte_needed: total_demand / effective_hours_per_dev,
        team_capacity,
        coverage_percent: (team_capacity / total_demand) * 100.0,
        debt_hours: debt_hours(total_demand, team_capacity),
    }
}
