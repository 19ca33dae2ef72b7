//! Calendar — how many hours one developer actually has in a year.

use serde::{Deserialize, Serialize};

use crate::fraction;
use crate::inputs::PlanningInputs;

/// Per-developer yearly time budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFigures {
    /// Work days minus vacation and sick days. Not clamped, so a
    /// misconfigured calendar goes negative.
    pub real_work_days: f64,
    /// Hours at work per year, before the productivity discount.
    pub brutto_hours_per_year: f64,
    /// Hours of actual development per year.
    pub effective_hours_per_dev: f64,
}

pub fn compute_calendar(inputs: &PlanningInputs) -> CalendarFigures {
    let real_work_days = inputs.work_days_per_year - inputs.vacation_days - inputs.sick_days;
    let brutto_hours_per_year = real_work_days * inputs.hours_per_day;
    let effective_hours_per_dev = brutto_hours_per_year * fraction(inputs.productivity_percent);

    CalendarFigures {
        real_work_days,
        brutto_hours_per_year,
        effective_hours_per_dev,
    }
}
