//! Property tests for the calculation invariants.

use proptest::prelude::*;

use teamload_logic::calculator::compute;
use teamload_logic::inputs::PlanningInputs;
use teamload_logic::staffing::compute_staffing;
use teamload_logic::sweep::{sweep_debt_by_team_size, SizeRange};

/// Work volume and hotfix fields.
type Volume = (f64, f64, f64, f64, bool, f64, f64, f64, f64);

/// Calendar, risk, turnover and team fields.
type Calendar = (f64, f64, f64, f64, f64, u32, f64, f64, f64, u32);

prop_compose! {
    fn volume()(
        contract_hours in 0.0..20_000.0f64,
        contract_debt in 0.0..5_000.0f64,
        minor_hours in 0.0..5_000.0f64,
        minor_debt in 0.0..5_000.0f64,
        auto_calculate_hotfix in any::<bool>(),
        hotfix_releases in 0.0..100.0f64,
        hotfix_tasks_per_release in 0.0..20.0f64,
        hotfix_hours_per_task in 0.0..40.0f64,
        manual_hotfix_hours in 0.0..5_000.0f64,
    ) -> Volume {
        (
            contract_hours,
            contract_debt,
            minor_hours,
            minor_debt,
            auto_calculate_hotfix,
            hotfix_releases,
            hotfix_tasks_per_release,
            hotfix_hours_per_task,
            manual_hotfix_hours,
        )
    }
}

prop_compose! {
    fn calendar()(
        vacation_days in 0.0..40.0f64,
        sick_days in 0.0..30.0f64,
        hours_per_day in 4.0..10.0f64,
        productivity_percent in 30.0..100.0f64,
        risk_percent in 0.0..50.0f64,
        developers_turnover in 0u32..10,
        productivity_before_leaving in 0.0..100.0f64,
        months_without_person in 0.0..6.0f64,
        productivity_onboarding in 0.0..100.0f64,
        planned_team_size in 1u32..30,
    ) -> Calendar {
        (
            vacation_days,
            sick_days,
            hours_per_day,
            productivity_percent,
            risk_percent,
            developers_turnover,
            productivity_before_leaving,
            months_without_person,
            productivity_onboarding,
            planned_team_size,
        )
    }
}

prop_compose! {
    fn planning_inputs()(v in volume(), c in calendar()) -> PlanningInputs {
        PlanningInputs {
            contract_hours: v.0,
            contract_debt: v.1,
            minor_hours: v.2,
            minor_debt: v.3,
            auto_calculate_hotfix: v.4,
            hotfix_releases: v.5,
            hotfix_tasks_per_release: v.6,
            hotfix_hours_per_task: v.7,
            manual_hotfix_hours: v.8,
            work_days_per_year: 247.0,
            vacation_days: c.0,
            sick_days: c.1,
            hours_per_day: c.2,
            productivity_percent: c.3,
            risk_percent: c.4,
            developers_turnover: c.5,
            productivity_before_leaving: c.6,
            months_without_person: c.7,
            productivity_onboarding: c.8,
            planned_team_size: c.9,
        }
    }
}

proptest! {
    #[test]
    fn base_volume_is_sum_of_parts(inputs in planning_inputs()) {
        let r = compute(&inputs);
        let expected = inputs.contract_hours
            + inputs.contract_debt
            + inputs.minor_hours
            + inputs.minor_debt
            + r.hotfix_hours;
        prop_assert_eq!(r.base_volume, expected);
    }

    #[test]
    fn hotfix_follows_switch(inputs in planning_inputs()) {
        let r = compute(&inputs);
        if inputs.auto_calculate_hotfix {
            prop_assert_eq!(
                r.hotfix_hours,
                inputs.hotfix_releases * inputs.hotfix_tasks_per_release * inputs.hotfix_hours_per_task
            );
        } else {
            prop_assert_eq!(r.hotfix_hours, inputs.manual_hotfix_hours);
        }
    }

    #[test]
    fn risk_is_multiplicative(inputs in planning_inputs()) {
        let r = compute(&inputs);
        prop_assert_eq!(r.volume_with_risks, r.base_volume * (1.0 + inputs.risk_percent / 100.0));
    }

    #[test]
    fn debt_is_never_negative(inputs in planning_inputs()) {
        let r = compute(&inputs);
        prop_assert!(r.debt_hours >= 0.0);
        prop_assert_eq!(r.debt_hours, (r.total_demand - r.team_capacity).max(0.0));
    }

    #[test]
    fn surplus_means_no_debt(inputs in planning_inputs()) {
        let r = compute(&inputs);
        if r.coverage_percent > 100.0 {
            prop_assert_eq!(r.debt_hours, 0.0);
        }
    }

    #[test]
    fn compute_is_idempotent(inputs in planning_inputs()) {
        prop_assert_eq!(compute(&inputs), compute(&inputs));
    }

    #[test]
    fn debt_non_increasing_in_team_size(inputs in planning_inputs(), extra in 1u32..10) {
        let r = compute(&inputs);
        let smaller = compute_staffing(
            r.total_demand,
            r.effective_hours_per_dev,
            inputs.planned_team_size,
        );
        let larger = compute_staffing(
            r.total_demand,
            r.effective_hours_per_dev,
            inputs.planned_team_size + extra,
        );
        prop_assert!(larger.debt_hours <= smaller.debt_hours);
    }

    #[test]
    fn sweep_monotone_and_clears(
        demand in 0.0..50_000.0f64,
        effective in 100.0..2_000.0f64,
        min in 0u32..10,
        span in 0u32..30,
    ) {
        let points: Vec<_> =
            sweep_debt_by_team_size(demand, effective, SizeRange::new(min, min + span)).collect();
        prop_assert_eq!(points.len() as u32, span + 1);
        for pair in points.windows(2) {
            prop_assert!(pair[1].size == pair[0].size + 1);
            prop_assert!(pair[1].debt <= pair[0].debt);
        }
        for p in &points {
            if p.size as f64 * effective >= demand {
                prop_assert_eq!(p.debt, 0.0);
            }
        }
    }

    #[test]
    fn turnover_scales_with_departures(inputs in planning_inputs()) {
        let r = compute(&inputs);
        let expected = r.turnover_losses_per_person * inputs.developers_turnover as f64;
        prop_assert_eq!(r.total_turnover_losses, expected);
    }
}
