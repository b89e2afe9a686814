//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod clipboard;
pub mod output;
pub mod score;
pub mod wizard;

pub use clipboard::{copy_to_clipboard, osc52_sequence};
pub use output::{emit_report, format_score, print_report, ReportFormat};
pub use score::{execute_score, ScoreOptions};
pub use wizard::{execute_wizard, WizardOptions};
