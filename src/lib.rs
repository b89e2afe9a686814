#![forbid(unsafe_code)]

//! @acp:module "Pitch Library"
//! @acp:summary "Guided pitch wizard with heuristic confidence scoring"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Pitch Refiner
//!
//! Collects four short answers (problem, solution, target market, traction),
//! renders them into a one-paragraph investor pitch and rates it.
//!
//! ## Features
//!
//! - **Wizard**: linear four-step state machine gated on non-blank answers
//! - **Scoring**: fixed length and keyword heuristics, 0-100
//! - **Suggestions**: per-field hints plus one overall verdict
//! - **Templates**: configurable Handlebars pitch template
//!
//! ## Example
//!
//! ```rust
//! use pitch::{Config, WizardState};
//!
//! let config = Config::default();
//! let mut wizard = WizardState::new();
//!
//! for answer in [
//!     "Freelancers struggle to get paid on time.",
//!     "Automatic invoice follow-ups.",
//!     "4M freelancers in the US",
//!     "$2k MRR from 120 users",
//! ] {
//!     wizard.set_current(answer);
//!     wizard.advance(&config);
//! }
//!
//! let report = wizard.report().unwrap();
//! assert!(report.result.score <= 100);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod pitch;
pub mod scoring;
pub mod wizard;

// Re-exports
pub use config::Config;
pub use error::{PitchError, Result};
pub use pitch::{Field, PitchInput};
pub use scoring::{score, ScoreBand, ScoreResult, Suggestion, SuggestionKind};
pub use wizard::{AdvanceOutcome, PitchReport, WizardState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
