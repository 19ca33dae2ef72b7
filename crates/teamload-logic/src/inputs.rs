//! Planning inputs — the single aggregate every calculation reads from.
//!
//! A front end builds one `PlanningInputs` per recomputation and hands it to
//! [`compute`](crate::calculator::compute). Nothing here is range-checked:
//! negative days or percentages above 100 flow straight into the arithmetic.
//!
//! Serialized with camelCase field names. Fields missing from a document are
//! filled from the reference scenario, so a partial JSON file is a valid
//! inputs file:
//!
//! ```
//! use teamload_logic::inputs::PlanningInputs;
//!
//! let inputs: PlanningInputs =
//!     serde_json::from_str(r#"{ "plannedTeamSize": 9, "riskPercent": 0 }"#).unwrap();
//! assert_eq!(inputs.planned_team_size, 9);
//! assert_eq!(inputs.contract_hours, 5500.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::reference;

/// Everything the planner knows about the coming year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanningInputs {
    // ── Work volume (hours) ──
    /// Contracted development hours for the year.
    pub contract_hours: f64,
    /// Contract hours carried over from previous years.
    pub contract_debt: f64,
    /// Minor (non-contract) development hours for the year.
    pub minor_hours: f64,
    /// Minor hours carried over from previous years.
    pub minor_debt: f64,

    // ── Hotfixes ──
    /// Derive hotfix hours from releases × tasks × hours instead of
    /// taking `manual_hotfix_hours`.
    pub auto_calculate_hotfix: bool,
    pub hotfix_releases: f64,
    pub hotfix_tasks_per_release: f64,
    pub hotfix_hours_per_task: f64,
    /// Total hotfix and support hours, used when auto-calculation is off.
    pub manual_hotfix_hours: f64,

    // ── Calendar ──
    pub work_days_per_year: f64,
    pub vacation_days: f64,
    /// Sick leave and days off.
    pub sick_days: f64,
    pub hours_per_day: f64,
    /// Share of working time spent on actual development (0–100).
    pub productivity_percent: f64,

    // ── Risk ──
    /// Flat uplift over the whole base volume for requirement changes,
    /// underestimation and infrastructure trouble (0–100).
    pub risk_percent: f64,

    // ── Turnover ──
    /// Developers expected to leave during the year.
    pub developers_turnover: u32,
    /// Productivity of a leaver in their final month (0–100).
    pub productivity_before_leaving: f64,
    /// Months a seat stays empty while hiring a replacement.
    pub months_without_person: f64,
    /// Productivity of a new hire in their first month (0–100).
    pub productivity_onboarding: f64,

    // ── Team ──
    /// Headcount the plan is checked against. A team lead who writes code
    /// counts as one.
    pub planned_team_size: u32,
}

impl Default for PlanningInputs {
    fn default() -> Self {
        Self {
            contract_hours: reference::CONTRACT_HOURS,
            contract_debt: reference::CONTRACT_DEBT,
            minor_hours: reference::MINOR_HOURS,
            minor_debt: reference::MINOR_DEBT,
            auto_calculate_hotfix: true,
            hotfix_releases: reference::HOTFIX_RELEASES,
            hotfix_tasks_per_release: reference::HOTFIX_TASKS_PER_RELEASE,
            hotfix_hours_per_task: reference::HOTFIX_HOURS_PER_TASK,
            manual_hotfix_hours: reference::MANUAL_HOTFIX_HOURS,
            work_days_per_year: reference::WORK_DAYS_PER_YEAR,
            vacation_days: reference::VACATION_DAYS,
            sick_days: reference::SICK_DAYS,
            hours_per_day: reference::HOURS_PER_DAY,
            productivity_percent: reference::PRODUCTIVITY_PERCENT,
            risk_percent: reference::RISK_PERCENT,
            developers_turnover: reference::DEVELOPERS_TURNOVER,
            productivity_before_leaving: reference::PRODUCTIVITY_BEFORE_LEAVING,
            months_without_person: reference::MONTHS_WITHOUT_PERSON,
            productivity_onboarding: reference::PRODUCTIVITY_ONBOARDING,
            planned_team_size: reference::PLANNED_TEAM_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_scenario() {
        let inputs = PlanningInputs::default();
        assert_eq!(inputs.contract_hours, 5500.0);
        assert!(inputs.auto_calculate_hotfix);
        assert_eq!(inputs.developers_turnover, 2);
        assert_eq!(inputs.planned_team_size, 7);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(PlanningInputs::default()).unwrap();
        assert_eq!(json["contractHours"], 5500.0);
        assert_eq!(json["autoCalculateHotfix"], true);
        assert_eq!(json["productivityBeforeLeaving"], 50.0);
        assert!(json.get("contract_hours").is_none());
    }

    #[test]
    fn partial_document_fills_defaults() {
        let inputs: PlanningInputs =
            serde_json::from_str(r#"{ "autoCalculateHotfix": false, "manualHotfixHours": 900 }"#)
                .unwrap();
        assert!(!inputs.auto_calculate_hotfix);
        assert_eq!(inputs.manual_hotfix_hours, 900.0);
        assert_eq!(inputs.work_days_per_year, 247.0);
    }

    #[test]
    fn empty_document_is_default() {
        let inputs: PlanningInputs = serde_json::from_str("{}").unwrap();
        assert_eq!(inputs, PlanningInputs::default());
    }

    #[test]
    fn out_of_range_values_are_accepted() {
        // Only types are checked; ranges are the caller's business.
        let inputs: PlanningInputs =
            serde_json::from_str(r#"{ "productivityPercent": 140, "vacationDays": -3 }"#).unwrap();
        assert_eq!(inputs.productivity_percent, 140.0);
        assert_eq!(inputs.vacation_days, -3.0);
    }
}
