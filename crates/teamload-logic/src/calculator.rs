//! Demand calculator — the full inputs → results chain.
//!
//! ```text
//! PlanningInputs ─┬─ hotfix → base volume → risk uplift ──────┐
//!                 ├─ calendar ─┬─ effective hours per dev ────┼─ staffing
//!                 │            └─ turnover losses ─────────────┘
//! ```
//!
//! [`compute`] is a pure, total function: identical inputs always give
//! identical results, and results are never stored apart from the inputs
//! that produced them. Front ends call it again on every input change.

use serde::{Deserialize, Serialize};

use crate::calendar::compute_calendar;
use crate::inputs::PlanningInputs;
use crate::staffing::{compute_demand, compute_staffing};
use crate::sweep::{sweep_debt_by_team_size, DebtSweep, SizeRange};
use crate::turnover::compute_turnover_losses;
use crate::volume::{apply_risk, compute_base_volume, compute_hotfix_hours};

/// Every figure derived from one `PlanningInputs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    pub hotfix_hours: f64,
    /// Planned hours before the risk buffer.
    pub base_volume: f64,
    pub volume_with_risks: f64,
    pub real_work_days: f64,
    pub brutto_hours_per_year: f64,
    pub effective_hours_per_dev: f64,
    pub turnover_losses_per_person: f64,
    pub total_turnover_losses: f64,
    /// Risk-adjusted volume plus turnover losses.
    pub total_demand: f64,
    #[serde(with = "crate::float_serde")]
    pub fte_needed: f64,
    pub team_capacity: f64,
    #[serde(with = "crate::float_serde")]
    pub coverage_percent: f64,
    pub debt_hours: f64,
}

impl CalculationResults {
    /// Hours added by the risk buffer.
    pub fn risk_hours(&self) -> f64 {
        self.volume_with_risks - self.base_volume
    }

    /// Project debt over a range of team sizes, holding demand fixed.
    pub fn debt_sweep(&self, range: SizeRange) -> DebtSweep {
        sweep_debt_by_team_size(self.total_demand, self.effective_hours_per_dev, range)
    }
}

/// Run the whole calculation.
pub fn compute(inputs: &PlanningInputs) -> CalculationResults {
    let hotfix_hours = compute_hotfix_hours(inputs);
    let base_volume = compute_base_volume(inputs, hotfix_hours);
    let volume_with_risks = apply_risk(base_volume, inputs.risk_percent);

    let calendar = compute_calendar(inputs);
    let turnover = compute_turnover_losses(inputs, calendar.brutto_hours_per_year);

    let total_demand = compute_demand(volume_with_risks, turnover.total);
    let staffing = compute_staffing(
        total_demand,
        calendar.effective_hours_per_dev,
        inputs.planned_team_size,
    );

    CalculationResults {
        hotfix_hours,
        base_volume,
        volume_with_risks,
        real_work_days: calendar.real_work_days,
        brutto_hours_per_year: calendar.brutto_hours_per_year,
        effective_hours_per_dev: calendar.effective_hours_per_dev,
        turnover_losses_per_person: turnover.per_person,
        total_turnover_losses: turnover.total,
        total_demand,
        fte_needed: staffing.fte_needed,
        team_capacity: staffing.team_capacity,
        coverage_percent: staffing.coverage_percent,
        debt_hours: staffing.debt_hours,
    }
}
