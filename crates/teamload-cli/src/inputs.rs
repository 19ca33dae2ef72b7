//! Inputs loading — reference defaults, then an optional JSON file, then flags.

use std::fs;
use std::path::Path;

use teamload_logic::inputs::PlanningInputs;
use teamload_logic::sweep::SizeRange;

use crate::error::CliError;

/// Flag overrides applied on top of the file (or defaults).
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub team_size: Option<u32>,
    pub risk_percent: Option<f64>,
    pub manual_hotfix_hours: Option<f64>,
}

impl Overrides {
    pub fn apply(&self, inputs: &mut PlanningInputs) {
        if let Some(size) = self.team_size {
            log::debug!("override plannedTeamSize = {}", size);
            inputs.planned_team_size = size;
        }
        if let Some(risk) = self.risk_percent {
            log::debug!("override riskPercent = {}", risk);
            inputs.risk_percent = risk;
        }
        if let Some(hours) = self.manual_hotfix_hours {
            // Giving manual hours implies switching off the hotfix model.
            log::debug!("override manualHotfixHours = {} (auto hotfix off)", hours);
            inputs.auto_calculate_hotfix = false;
            inputs.manual_hotfix_hours = hours;
        }
    }
}

pub fn parse_inputs(path: &Path, text: &str) -> Result<PlanningInputs, CliError> {
    serde_json::from_str(text).map_err(|source| CliError::ParseInputs {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the inputs for one run.
pub fn load_inputs(path: Option<&Path>, overrides: &Overrides) -> Result<PlanningInputs, CliError> {
    let mut inputs = match path {
        Some(path) => {
            log::info!("loading planning inputs from {}", path.display());
            let text = fs::read_to_string(path).map_err(|source| CliError::ReadInputs {
                path: path.to_path_buf(),
                source,
            })?;
            parse_inputs(path, &text)?
        }
        None => {
            log::info!("no inputs file given, using reference scenario");
            PlanningInputs::default()
        }
    };
    overrides.apply(&mut inputs);
    Ok(inputs)
}

pub fn sweep_range(min: u32, max: u32) -> Result<SizeRange, CliError> {
    let range = SizeRange::new(min, max);
    if range.is_empty() {
        return Err(CliError::InvertedSweepRange { min, max });
    }
    Ok(range)
}
