//! @acp:module "Configuration"
//! @acp:summary "Pitch refiner configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PitchError;
use crate::pitch::compose::{self, DEFAULT_TEMPLATE};
use crate::pitch::PitchInput;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".pitch.config.json";

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_speaking_rate() -> f64 {
    2.5
}

/// @acp:summary "Main pitch refiner configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Handlebars template the pitch is rendered from
    #[serde(default = "default_template")]
    pub template: String,

    /// Words per second used for the speaking time estimate
    #[serde(default = "default_speaking_rate")]
    pub speaking_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            speaking_rate: default_speaking_rate(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file and validate it"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config if the file exists, defaults otherwise"
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_if_present<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Check the values a session depends on.
    ///
    /// The template must render against an empty input, which catches
    /// syntax errors and unknown variables before the wizard starts.
    pub fn validate(&self) -> crate::Result<()> {
        if !(self.speaking_rate.is_finite() && self.speaking_rate > 0.0) {
            return Err(PitchError::invalid_config(format!(
                "speakingRate must be a positive number, got {}",
                self.speaking_rate
            )));
        }
        compose::render_template(&self.template, &PitchInput::default())?;
        Ok(())
    }
}
