//! Planning constants — reference scenario values, sweep bounds, thresholds.
//!
//! The reference values describe a mid-sized product team and back
//! [`PlanningInputs::default`](crate::inputs::PlanningInputs).

/// Months in a planning year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Coverage at or above this percentage means the team absorbs the workload.
pub const FULL_COVERAGE_PERCENT: f64 = 100.0;

/// Debt above this many hours is flagged as critical in a sweep.
pub const CRITICAL_DEBT_HOURS: f64 = 2000.0;

/// Default inclusive team-size range for the debt sweep.
pub mod sweep {
    pub const MIN_TEAM_SIZE: u32 = 3;
    pub const MAX_TEAM_SIZE: u32 = 15;
}

/// Reference planning scenario (one year of work for a product team).
pub mod reference {
    // Work volume (hours)
    pub const CONTRACT_HOURS: f64 = 5500.0;
    pub const CONTRACT_DEBT: f64 = 1000.0;
    pub const MINOR_HOURS: f64 = 870.0;
    pub const MINOR_DEBT: f64 = 830.0;

    // Hotfixes
    pub const HOTFIX_RELEASES: f64 = 42.0;
    pub const HOTFIX_TASKS_PER_RELEASE: f64 = 5.0;
    pub const HOTFIX_HOURS_PER_TASK: f64 = 8.0;
    pub const MANUAL_HOTFIX_HOURS: f64 = 1680.0;

    // Calendar
    pub const WORK_DAYS_PER_YEAR: f64 = 247.0;
    pub const VACATION_DAYS: f64 = 28.0;
    pub const SICK_DAYS: f64 = 14.0;
    pub const HOURS_PER_DAY: f64 = 8.0;
    pub const PRODUCTIVITY_PERCENT: f64 = 75.0;

    // Risk
    pub const RISK_PERCENT: f64 = 10.0;

    // Turnover
    pub const DEVELOPERS_TURNOVER: u32 = 2;
    pub const PRODUCTIVITY_BEFORE_LEAVING: f64 = 50.0;
    pub const MONTHS_WITHOUT_PERSON: f64 = 1.0;
    pub const PRODUCTIVITY_ONBOARDING: f64 = 50.0;

    // Team
    pub const PLANNED_TEAM_SIZE: u32 = 7;
}
