//! @acp:module "Score Command"
//! @acp:summary "Score a pitch from flags or a JSON answers file"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `pitch score` for scripted, non-interactive use.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use super::output::{emit_report, ReportFormat};
use crate::config::Config;
use crate::pitch::{Field, PitchInput};
use crate::wizard::PitchReport;

/// Options for the score command
#[derive(Debug, Clone, Default)]
pub struct ScoreOptions {
    /// JSON file with any of the four answers
    pub input: Option<PathBuf>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub target_market: Option<String>,
    pub traction: Option<String>,
    pub format: ReportFormat,
}

impl ScoreOptions {
    /// Answers from the input file, with flags taking precedence
    pub fn resolve_input(&self) -> Result<PitchInput> {
        let mut input = match &self.input {
            Some(path) => PitchInput::from_json(path)?,
            None => PitchInput::default(),
        };

        let overrides = [
            (Field::Problem, &self.problem),
            (Field::Solution, &self.solution),
            (Field::TargetMarket, &self.target_market),
            (Field::Traction, &self.traction),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                input.set(field, value.clone());
            }
        }

        Ok(input)
    }
}

/// Execute the score command
pub fn execute_score(options: ScoreOptions, config: &Config) -> Result<()> {
    let input = options.resolve_input()?;

    if options.format == ReportFormat::Text {
        for field in Field::ALL {
            if !input.is_answered(field) {
                eprintln!(
                    "{} No answer for {}",
                    style("!").yellow(),
                    style(field.title()).cyan()
                );
            }
        }
    }

    let report = PitchReport::build(&input, config)?;
    emit_report(&report, options.format)
}
