//! @acp:module "Wizard"
//! @acp:summary "Linear four-step state machine that collects the pitch answers"
//! @acp:domain cli
//! @acp:layer logic
//!
//! The wizard walks [`Field::ALL`] in order. Moving forward requires a
//! non-blank answer for the current step; moving forward from the last step
//! composes and scores the pitch. Only that last render can fail, and it
//! is reported through [`AdvanceOutcome`] rather than an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::pitch::{self, Field, PitchInput};
use crate::scoring::{self, ScoreResult};

/// @acp:summary "Everything the results view shows"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchReport {
    pub pitch: String,
    #[serde(flatten)]
    pub result: ScoreResult,
    pub word_count: usize,
    pub speaking_seconds: u64,
    pub generated_at: DateTime<Utc>,
}

impl PitchReport {
    /// Compose, score and measure a set of answers
    pub fn build(input: &PitchInput, config: &Config) -> crate::Result<Self> {
        let pitch = pitch::compose_pitch(&config.template, input)?;
        let word_count = pitch::word_count(&pitch);
        Ok(Self {
            speaking_seconds: pitch::speaking_seconds(word_count, config.speaking_rate),
            word_count,
            result: scoring::score(input),
            pitch,
            generated_at: Utc::now(),
        })
    }
}

/// Result of [`WizardState::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Current answer is blank; nothing changed
    Blocked,
    /// Moved to the next step
    Moved(Field),
    /// Last step done; the report is available
    Completed,
    /// Last step answered but the pitch template failed to render
    RenderFailed,
}

/// @acp:summary "In-memory wizard session"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    step: usize,
    input: PitchInput,
    report: Option<PitchReport>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current_field(&self) -> Field {
        Field::ALL[self.step]
    }

    pub fn input(&self) -> &PitchInput {
        &self.input
    }

    /// Generated report, once the last step has been completed
    pub fn report(&self) -> Option<&PitchReport> {
        self.report.as_ref()
    }

    pub fn is_last_step(&self) -> bool {
        self.step == Field::ALL.len() - 1
    }

    /// Whether `advance` would do anything
    pub fn can_proceed(&self) -> bool {
        self.input.is_answered(self.current_field())
    }

    pub fn is_complete(&self, field: Field) -> bool {
        self.input.is_answered(field)
    }

    /// Percent of steps reached, counting the current one
    pub fn progress_percent(&self) -> u8 {
        let total = Field::ALL.len() as f64;
        (((self.step + 1) as f64 / total) * 100.0).round() as u8
    }

    /// Overwrite the answer for any step
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value);
    }

    /// Overwrite the answer for the current step
    pub fn set_current(&mut self, value: impl Into<String>) {
        let field = self.current_field();
        self.input.set(field, value);
    }

    /// Move forward, generating the report on the last step.
    ///
    /// The report is built with `config`; a template that fails to render
    /// leaves the state untouched and reports `RenderFailed`.
    pub fn advance(&mut self, config: &Config) -> AdvanceOutcome {
        if !self.can_proceed() {
            tracing::debug!(step = self.step, "advance blocked on blank answer");
            return AdvanceOutcome::Blocked;
        }

        if !self.is_last_step() {
            self.step += 1;
            tracing::debug!(step = self.step, "advanced");
            return AdvanceOutcome::Moved(self.current_field());
        }

        match PitchReport::build(&self.input, config) {
            Ok(report) => {
                tracing::debug!(score = report.result.score, "pitch generated");
                self.report = Some(report);
                AdvanceOutcome::Completed
            }
            Err(e) => {
                tracing::warn!("pitch generation failed: {}", e);
                AdvanceOutcome::RenderFailed
            }
        }
    }

    /// Move back one step, staying on the first
    pub fn retreat(&mut self) {
        self.step = self.step.saturating_sub(1);
        tracing::debug!(step = self.step, "retreated");
    }

    /// Jump straight to a step; answers are not checked
    pub fn goto(&mut self, field: Field) {
        self.step = field.index();
        tracing::debug!(step = self.step, "jumped");
    }

    /// Drop every answer and the report, back to step one
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
