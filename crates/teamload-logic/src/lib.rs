//! Pure staffing-demand logic for TeamLoad.
//!
//! This crate answers one question: how many full-time developers does a team
//! need for a year of planned work? Functions take plain data and return
//! results, with no I/O and no hidden state, so any front end (the `teamload`
//! CLI, a web form, a spreadsheet export) can recompute on every input change.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Reference planning values, sweep bounds, severity thresholds |
//! | [`inputs`] | The `PlanningInputs` aggregate and its reference defaults |
//! | [`volume`] | Hotfix hours, base work volume, risk uplift |
//! | [`calendar`] | Real work days, brutto and effective hours per developer |
//! | [`turnover`] | Productivity lost to developers leaving and being replaced |
//! | [`staffing`] | Total demand, FTE needed, capacity, coverage, debt |
//! | [`calculator`] | `compute`: the full inputs → results chain |
//! | [`sweep`] | Debt projection across a range of team sizes |
//! | [`report`] | Load structure, demand vs capacity, coverage verdict |
//!
//! ```
//! use teamload_logic::calculator::compute;
//! use teamload_logic::inputs::PlanningInputs;
//!
//! let results = compute(&PlanningInputs::default());
//! assert!(results.fte_needed > 9.0 && results.fte_needed < 10.0);
//! ```

pub mod calculator;
pub mod calendar;
pub mod constants;
mod float_serde;
pub mod inputs;
pub mod report;
pub mod staffing;
pub mod sweep;
pub mod turnover;
pub mod volume;

/// Convert a 0–100 percentage into a multiplier.
///
/// Values outside 0–100 pass through unchanged.
#[inline]
pub(crate) fn fraction(percent: f64) -> f64 {
    percent / 100.0
}
