//! @acp:module "Errors"
//! @acp:summary "Error types for the pitch library"
//! @acp:domain cli
//! @acp:layer core

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, PitchError>;

/// @acp:summary "All failures the library can report"
#[derive(Error, Debug)]
pub enum PitchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl PitchError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
