//! @acp:module "Output Formatting"
//! @acp:summary "Terminal rendering for wizard steps and pitch reports"
//! @acp:domain cli
//! @acp:layer output

use anyhow::Result;
use console::{style, StyledObject};

use crate::pitch::Field;
use crate::scoring::{ScoreBand, SuggestionKind};
use crate::wizard::{PitchReport, WizardState};

/// Output format for one-shot reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Score rendered as a percentage in its band colour
pub fn format_score(score: u8, band: ScoreBand) -> StyledObject<String> {
    let text = format!("{}%", score);
    match band {
        ScoreBand::Strong => style(text).green().bold(),
        ScoreBand::Fair => style(text).yellow().bold(),
        ScoreBand::Weak => style(text).red().bold(),
    }
}

/// Leading marker for a suggestion line
pub fn suggestion_icon(kind: SuggestionKind) -> StyledObject<&'static str> {
    match kind {
        SuggestionKind::Success => style("✓").green(),
        SuggestionKind::Good => style("◎").yellow(),
        SuggestionKind::Improvement => style("→").blue(),
    }
}

/// One overview cell: current step, answered step, or untouched step
pub fn format_overview_item(field: Field, current: bool, complete: bool) -> String {
    if current {
        format!("{} {}", style("●").cyan(), style(field.title()).cyan().bold())
    } else if complete {
        format!("{} {}", style("✓").green(), style(field.title()).green())
    } else {
        format!("{} {}", style("○").dim(), style(field.title()).dim())
    }
}

/// Progress line, overview, and the step's title and question
pub fn print_step(state: &WizardState) {
    let field = state.current_field();
    let total = Field::ALL.len();

    println!();
    println!(
        "{}  {}",
        style(format!("Step {} of {}", state.step() + 1, total)).dim(),
        style(format!("{}% complete", state.progress_percent())).dim()
    );

    let overview: Vec<String> = Field::ALL
        .iter()
        .map(|f| format_overview_item(*f, *f == field, state.is_complete(*f)))
        .collect();
    println!("{}", overview.join("   "));
    println!();

    println!("{}", style(field.title()).bold());
    println!("{}", field.question());
    if !state.is_complete(field) {
        println!("{}", style(field.placeholder()).dim().italic());
    }
}

/// Results view: pitch, timing, score, suggestions
pub fn print_report(report: &PitchReport) {
    println!();
    println!("{}", style("Your 30-Second Pitch").bold());
    println!();
    println!("  \"{}\"", style(&report.pitch).italic());
    println!();
    println!(
        "  {} words • Estimated speaking time: {} seconds",
        report.word_count, report.speaking_seconds
    );
    println!();
    println!(
        "{} {}",
        style("Confidence Score:").bold(),
        format_score(report.result.score, report.result.band)
    );
    println!();
    println!("{}", style("Improvement Suggestions").bold());
    for suggestion in &report.result.suggestions {
        println!("  {} {}", suggestion_icon(suggestion.kind), suggestion.message);
    }
    println!();
}

/// Print a report in the requested format
pub fn emit_report(report: &PitchReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => print_report(report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
