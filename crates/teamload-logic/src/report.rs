//! Planning report — display-ready figures derived next to the calculation.
//!
//! Everything here is a pure view over [`PlanningInputs`] and
//! [`CalculationResults`]; a front end renders it as tables, charts or text.
//!
//! - **Load structure**: where the demand comes from, one segment per source
//! - **Demand vs capacity**: the headline comparison in whole hours
//! - **Coverage**: whether the planned team copes, and the debt if not
//! - **Debt sweep**: debt across a range of team sizes

use serde::{Deserialize, Serialize};

use crate::calculator::{compute, CalculationResults};
use crate::constants::FULL_COVERAGE_PERCENT;
use crate::inputs::PlanningInputs;
use crate::sweep::{smallest_covering_size, DebtScenario, SizeRange};

/// Source of a slice of the yearly demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadCategory {
    Contracts,
    ContractDebt,
    Minors,
    MinorDebt,
    Hotfixes,
    RiskBuffer,
    TurnoverLosses,
}

impl LoadCategory {
    pub const ALL: [LoadCategory; 7] = [
        Self::Contracts,
        Self::ContractDebt,
        Self::Minors,
        Self::MinorDebt,
        Self::Hotfixes,
        Self::RiskBuffer,
        Self::TurnoverLosses,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Contracts => "Contracts",
            Self::ContractDebt => "Contract debt",
            Self::Minors => "Minors",
            Self::MinorDebt => "Minor debt",
            Self::Hotfixes => "Hotfixes",
            Self::RiskBuffer => "Risk buffer",
            Self::TurnoverLosses => "Turnover losses",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSegment {
    pub category: LoadCategory,
    pub hours: f64,
}

/// Break total demand into its sources, in display order.
///
/// The segment hours sum to `results.total_demand`.
pub fn load_structure(inputs: &PlanningInputs, results: &CalculationResults) -> Vec<LoadSegment> {
    LoadCategory::ALL
        .iter()
        .map(|&category| {
            let hours = match category {
                LoadCategory::Contracts => inputs.contract_hours,
                LoadCategory::ContractDebt => inputs.contract_debt,
                LoadCategory::Minors => inputs.minor_hours,
                LoadCategory::MinorDebt => inputs.minor_debt,
                LoadCategory::Hotfixes => results.hotfix_hours,
                LoadCategory::RiskBuffer => results.risk_hours(),
                LoadCategory::TurnoverLosses => results.total_turnover_losses,
            };
            LoadSegment { category, hours }
        })
        .collect()
}

/// Demand and capacity rounded to whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandVsCapacity {
    pub demand: f64,
    pub capacity: f64,
}

pub fn demand_vs_capacity(results: &CalculationResults) -> DemandVsCapacity {
    DemandVsCapacity {
        demand: results.total_demand.round(),
        capacity: results.team_capacity.round(),
    }
}

/// Whether the planned team absorbs the workload.
///
/// Debt and coverage are read independently: a positive debt is always a
/// shortfall, coverage of 100 % or more without debt is covered. Inputs that
/// give neither (negative demand, NaN coverage) are undetermined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CoverageStatus {
    /// Coverage at or above 100 % and no debt.
    Covered,
    /// Positive debt; carries the expected yearly debt.
    #[serde(rename_all = "camelCase")]
    Shortfall { debt_hours: f64 },
    /// No debt, yet coverage is below 100 % or not a number.
    Undetermined,
}

impl CoverageStatus {
    pub fn from_results(results: &CalculationResults) -> Self {
        if results.debt_hours > 0.0 {
            Self::Shortfall {
                debt_hours: results.debt_hours,
            }
        } else if results.coverage_percent >= FULL_COVERAGE_PERCENT {
            Self::Covered
        } else {
            Self::Undetermined
        }
    }

    pub fn is_covered(&self) -> bool {
        matches!(self, Self::Covered)
    }
}

/// Whole developers to hire: FTE needed rounded up.
///
/// `None` when FTE is not finite (zero effective hours) or negative
/// (negative demand).
pub fn recommended_headcount(results: &CalculationResults) -> Option<u32> {
    let fte = results.fte_needed;
    if !fte.is_finite() || fte < 0.0 {
        return None;
    }
    Some(fte.ceil() as u32)
}

/// Everything a front end needs to render one planning state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningReport {
    pub inputs: PlanningInputs,
    pub results: CalculationResults,
    pub load_structure: Vec<LoadSegment>,
    pub demand_vs_capacity: DemandVsCapacity,
    /// FTE needed rounded up to whole developers.
    pub recommended_headcount: Option<u32>,
    pub coverage: CoverageStatus,
    pub sweep_range: SizeRange,
    pub debt_sweep: Vec<DebtScenario>,
    /// Smallest swept team size with no debt.
    pub covering_size: Option<u32>,
}

/// Compute and assemble a full report for `inputs`.
pub fn build_report(inputs: &PlanningInputs, sweep_range: SizeRange) -> PlanningReport {
    let results = compute(inputs);

    PlanningReport {
        inputs: inputs.clone(),
        results,
        load_structure: load_structure(inputs, &results),
        demand_vs_capacity: demand_vs_capacity(&results),
        recommended_headcount: recommended_headcount(&results),
        coverage: CoverageStatus::from_results(&results),
        sweep_range,
        debt_sweep: results.debt_sweep(sweep_range).collect(),
        covering_size: smallest_covering_size(
            results.total_demand,
            results.effective_hours_per_dev,
            sweep_range,
        ),
    }
}
