//! Plain-text rendering of a `PlanningReport`.

use std::io::{self, Write};

use teamload_logic::report::{CoverageStatus, PlanningReport};
use teamload_logic::sweep::DebtSeverity;

fn severity_marker(severity: DebtSeverity) -> &'static str {
    match severity {
        DebtSeverity::Covered => "ok",
        DebtSeverity::Moderate => "!",
        DebtSeverity::Critical => "!!",
    }
}

pub fn render_text<W: Write>(report: &PlanningReport, mut out: W) -> io::Result<()> {
    let r = &report.results;
    let inputs = &report.inputs;

    writeln!(out, "=== Team Load Plan ===\n")?;

    writeln!(out, "--- Work volume ---")?;
    let hotfix_source = if inputs.auto_calculate_hotfix {
        format!(
            "{} releases x {} tasks x {} h",
            inputs.hotfix_releases, inputs.hotfix_tasks_per_release, inputs.hotfix_hours_per_task
        )
    } else {
        "manual".to_string()
    };
    writeln!(out, "  Hotfix hours:           {:>10.0}  ({})", r.hotfix_hours, hotfix_source)?;
    writeln!(out, "  Base volume:            {:>10.0}", r.base_volume)?;
    writeln!(
        out,
        "  With {}% risk:          {:>10.0}",
        inputs.risk_percent, r.volume_with_risks
    )?;

    writeln!(out, "\n--- Calendar (per developer) ---")?;
    writeln!(out, "  Real work days:         {:>10.0}", r.real_work_days)?;
    writeln!(out, "  Brutto hours / year:    {:>10.0}", r.brutto_hours_per_year)?;
    writeln!(out, "  Effective hours / year: {:>10.0}", r.effective_hours_per_dev)?;

    writeln!(out, "\n--- Turnover ---")?;
    writeln!(out, "  Loss per departure:     {:>10.0}", r.turnover_losses_per_person)?;
    writeln!(
        out,
        "  Total ({} leaving):      {:>10.0}",
        inputs.developers_turnover, r.total_turnover_losses
    )?;

    writeln!(out, "\n--- Load structure ---")?;
    for segment in &report.load_structure {
        writeln!(out, "  {:<24}{:>10.0}", segment.category.label(), segment.hours)?;
    }

    writeln!(out, "\n--- Staffing ---")?;
    writeln!(out, "  Total demand:           {:>10.0}", report.demand_vs_capacity.demand)?;
    writeln!(out, "  FTE needed:             {:>10.2}", r.fte_needed)?;
    match report.recommended_headcount {
        Some(n) => writeln!(out, "  Recommended headcount:  {:>10}", n)?,
        None => writeln!(out, "  Recommended headcount:  {:>10}", "n/a")?,
    }
    writeln!(
        out,
        "  Capacity ({} people):    {:>10.0}",
        inputs.planned_team_size, report.demand_vs_capacity.capacity
    )?;
    writeln!(out, "  Coverage:               {:>9.1}%", r.coverage_percent)?;
    match report.coverage {
        CoverageStatus::Covered => writeln!(out, "  The team covers the planned workload.")?,
        CoverageStatus::Shortfall { debt_hours } => {
            writeln!(out, "  Expected yearly debt:   {:>10.0}", debt_hours)?
        }
        CoverageStatus::Undetermined => {
            writeln!(out, "  Coverage cannot be determined from these inputs.")?
        }
    }

    writeln!(
        out,
        "\n--- Debt by team size ({}..={}) ---",
        report.sweep_range.min, report.sweep_range.max
    )?;
    for point in &report.debt_sweep {
        writeln!(
            out,
            "  {:>3} people  {:>10.0}  {}",
            point.size,
            point.debt.round(),
            severity_marker(point.severity)
        )?;
    }
    match report.covering_size {
        Some(size) => writeln!(out, "  Debt clears at {} people.", size)?,
        None => writeln!(out, "  No size in this range clears the debt.")?,
    }

    Ok(())
}
