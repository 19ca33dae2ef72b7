//! Self-check harness — runs the engine against the reference scenario and
//! its invariants without any inputs file.
//!
//! Each check yields a `CheckResult`; the caller prints them and decides the
//! exit status.

use teamload_logic::calculator::compute;
use teamload_logic::inputs::PlanningInputs;
use teamload_logic::report::{build_report, CoverageStatus};
use teamload_logic::sweep::{smallest_covering_size, sweep_debt_by_team_size, SizeRange};

pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

/// Run every check group in order.
pub fn run_all() -> Vec<CheckResult> {
    let mut results = Vec::new();
    results.extend(check_reference_scenario());
    results.extend(check_turnover());
    results.extend(check_staffing_invariants());
    results.extend(check_sweep());
    results.extend(check_report());
    results
}

// ── 1. Reference scenario ───────────────────────────────────────────────

fn check_reference_scenario() -> Vec<CheckResult> {
    log::debug!("checking reference scenario");
    let r = compute(&PlanningInputs::default());
    let expected = [
        ("reference_hotfix_hours", r.hotfix_hours, 1680.0),
        ("reference_base_volume", r.base_volume, 9880.0),
        ("reference_volume_with_risks", r.volume_with_risks, 10868.0),
        ("reference_real_work_days", r.real_work_days, 205.0),
        ("reference_brutto_hours", r.brutto_hours_per_year, 1640.0),
        ("reference_effective_hours", r.effective_hours_per_dev, 1230.0),
        ("reference_team_capacity", r.team_capacity, 8610.0),
    ];

    expected
        .iter()
        .map(|&(name, actual, want)| CheckResult {
            name: name.into(),
            passed: approx(actual, want),
            detail: format!("{:.2} (expected {:.2})", actual, want),
        })
        .collect()
}

// ── 2. Turnover ─────────────────────────────────────────────────────────

fn check_turnover() -> Vec<CheckResult> {
    log::debug!("checking turnover losses");
    let mut results = Vec::new();
    let r = compute(&PlanningInputs::default());

    results.push(CheckResult {
        name: "turnover_per_person".into(),
        passed: approx(r.turnover_losses_per_person, 170.83),
        detail: format!("{:.2} h per departure", r.turnover_losses_per_person),
    });

    results.push(CheckResult {
        name: "turnover_total".into(),
        passed: approx(r.total_turnover_losses, 341.67),
        detail: format!("{:.2} h for 2 departures", r.total_turnover_losses),
    });

    let none = compute(&PlanningInputs {
        developers_turnover: 0,
        ..PlanningInputs::default()
    });
    results.push(CheckResult {
        name: "turnover_zero_departures".into(),
        passed: none.total_turnover_losses == 0.0,
        detail: format!("{:.2} h with nobody leaving", none.total_turnover_losses),
    });

    results
}

// ── 3. Staffing invariants ──────────────────────────────────────────────

fn check_staffing_invariants() -> Vec<CheckResult> {
    log::debug!("checking staffing invariants across team sizes");
    let mut results = Vec::new();

    let mut never_negative = true;
    let mut monotone = true;
    let mut surplus_has_no_debt = true;
    let mut previous_debt = f64::INFINITY;

    for size in 1..=30 {
        let r = compute(&PlanningInputs {
            planned_team_size: size,
            ..PlanningInputs::default()
        });
        never_negative &= r.debt_hours >= 0.0;
        monotone &= r.debt_hours <= previous_debt;
        if r.coverage_percent > 100.0 {
            surplus_has_no_debt &= r.debt_hours == 0.0;
        }
        previous_debt = r.debt_hours;
    }

    results.push(CheckResult {
        name: "debt_never_negative".into(),
        passed: never_negative,
        detail: "team sizes 1–30".into(),
    });
    results.push(CheckResult {
        name: "debt_non_increasing".into(),
        passed: monotone,
        detail: "team sizes 1–30".into(),
    });
    results.push(CheckResult {
        name: "surplus_means_no_debt".into(),
        passed: surplus_has_no_debt,
        detail: "coverage > 100% ⇒ debt 0".into(),
    });

    let inputs = PlanningInputs::default();
    let deterministic = compute(&inputs) == compute(&inputs);
    results.push(CheckResult {
        name: "compute_deterministic".into(),
        passed: deterministic,
        detail: "identical inputs, identical results".into(),
    });

    results
}

// ── 4. Sweep ────────────────────────────────────────────────────────────

fn check_sweep() -> Vec<CheckResult> {
    log::debug!("checking debt sweep");
    let mut results = Vec::new();
    let r = compute(&PlanningInputs::default());
    let points: Vec<_> = sweep_debt_by_team_size(
        r.total_demand,
        r.effective_hours_per_dev,
        SizeRange::default(),
    )
    .collect();

    results.push(CheckResult {
        name: "sweep_point_count".into(),
        passed: points.len() == 13,
        detail: format!("{} points for sizes 3..=15", points.len()),
    });

    let monotone = points.windows(2).all(|w| w[1].debt <= w[0].debt);
    results.push(CheckResult {
        name: "sweep_non_increasing".into(),
        passed: monotone,
        detail: "debt shrinks as headcount grows".into(),
    });

    let first_covered = smallest_covering_size(
        r.total_demand,
        r.effective_hours_per_dev,
        SizeRange::default(),
    );
    results.push(CheckResult {
        name: "sweep_first_covered_size".into(),
        passed: first_covered == Some(10),
        detail: match first_covered {
            Some(size) => format!("debt clears at {} people", size),
            None => "debt never clears in range".into(),
        },
    });

    results
}

// ── 5. Report ───────────────────────────────────────────────────────────

fn check_report() -> Vec<CheckResult> {
    log::debug!("checking report assembly");
    let mut results = Vec::new();
    let report = build_report(&PlanningInputs::default(), SizeRange::default());

    let segment_total: f64 = report.load_structure.iter().map(|s| s.hours).sum();
    results.push(CheckResult {
        name: "load_structure_sums_to_demand".into(),
        passed: approx(segment_total, report.results.total_demand),
        detail: format!(
            "{:.2} vs demand {:.2}",
            segment_total, report.results.total_demand
        ),
    });

    results.push(CheckResult {
        name: "reference_team_short".into(),
        passed: matches!(report.coverage, CoverageStatus::Shortfall { .. }),
        detail: format!("{:.1}% coverage", report.results.coverage_percent),
    });

    results
}
