//! Work volume — hotfix hours, base volume, and the risk uplift.

use crate::fraction;
use crate::inputs::PlanningInputs;

/// Hotfix and support hours for the year.
///
/// Modeled as releases × tasks per release × hours per task when
/// `auto_calculate_hotfix` is set; otherwise the manual figure is used and the
/// three model fields are ignored.
pub fn compute_hotfix_hours(inputs: &PlanningInputs) -> f64 {
    if inputs.auto_calculate_hotfix {
        inputs.hotfix_releases * inputs.hotfix_tasks_per_release * inputs.hotfix_hours_per_task
    } else {
        inputs.manual_hotfix_hours
    }
}

/// Planned work before any risk buffer: contracts, minors, carried-over debt
/// for both, and hotfixes.
pub fn compute_base_volume(inputs: &PlanningInputs, hotfix_hours: f64) -> f64 {
    inputs.contract_hours
        + inputs.contract_debt
        + inputs.minor_hours
        + inputs.minor_debt
        + hotfix_hours
}

/// Apply a flat percentage uplift to the whole base volume.
///
/// volume_with_risks = base × (1 + risk / 100)
pub fn apply_risk(base_volume: f64, risk_percent: f64) -> f64 {
    base_volume * (1.0 + fraction(risk_percent))
}
