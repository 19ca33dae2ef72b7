//! Turnover losses — productivity lost when a developer leaves and is replaced.
//!
//! One departure is modeled as a full transition cycle of three phases:
//! - **Last month**: the leaver works below baseline productivity
//! - **Empty months**: the seat is vacant while a replacement is hired
//! - **Onboarding month**: the new hire works below baseline productivity
//!
//! Each phase is measured against `normal_month_hours`, the development hours
//! a developer contributes in an average month at baseline productivity.
//!
//! No term is clamped. If leaver or onboarding productivity exceeds the
//! baseline, that phase goes negative and reduces the total loss.

use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;
use crate::fraction;
use crate::inputs::PlanningInputs;

/// Turnover loss breakdown in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoverLosses {
    /// Hours at work per month (brutto / 12).
    pub brutto_month_hours: f64,
    /// Development hours per month at baseline productivity.
    pub normal_month_hours: f64,
    /// Shortfall in the leaver's final month.
    pub last_month: f64,
    /// Hours lost while the seat is vacant.
    pub empty_months: f64,
    /// Shortfall in the new hire's first month.
    pub onboarding_month: f64,
    /// Sum of the three phases for one departure.
    pub per_person: f64,
    /// `per_person` × number of departures.
    pub total: f64,
}

pub fn compute_turnover_losses(
    inputs: &PlanningInputs,
    brutto_hours_per_year: f64,
) -> TurnoverLosses {
    let brutto_month_hours = brutto_hours_per_year / MONTHS_PER_YEAR;
    let normal_month_hours = brutto_month_hours * fraction(inputs.productivity_percent);

    let last_month =
        normal_month_hours - brutto_month_hours * fraction(inputs.productivity_before_leaving);
    let empty_months = normal_month_hours * inputs.months_without_person;
    let onboarding_month =
        normal_month_hours - brutto_month_hours * fraction(inputs.productivity_onboarding);

    let per_person = last_month + empty_months + onboarding_month;
    let total = per_person * inputs.developers_turnover as f64;

    TurnoverLosses {
        brutto_month_hours,
        normal_month_hours,
        last_month,
        empty_months,
        onboarding_month,
        per_person,
        total,
    }
}
