//! @acp:module "Wizard Command"
//! @acp:summary "Interactive four-step pitch wizard"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `pitch wizard`: collects the answers one step at a time,
//! then shows the generated pitch with its score and suggestions.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::clipboard::copy_to_clipboard;
use super::output::{format_overview_item, print_report, print_step};
use crate::config::Config;
use crate::pitch::{text_length, Field};
use crate::wizard::{AdvanceOutcome, WizardState};

/// Options for the wizard command
#[derive(Debug, Clone, Default)]
pub struct WizardOptions {
    /// Step to open on instead of the first
    pub start_at: Option<Field>,
}

enum StepAction {
    Next,
    Previous,
    Jump,
    StartOver,
    Quit,
}

enum ResultsAction {
    Copy,
    NewPitch,
    Quit,
}

/// Execute the wizard command
pub fn execute_wizard(options: WizardOptions, config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut state = WizardState::new();
    if let Some(field) = options.start_at {
        state.goto(field);
    }

    println!("{}", style("30-Second Pitch Refiner").bold());
    println!("Craft a compelling investor pitch in four simple steps");

    loop {
        if let Some(report) = state.report() {
            print_report(report);
            let pitch = report.pitch.clone();
            match results_loop(&theme, &pitch)? {
                ResultsAction::NewPitch => {
                    state.reset();
                    continue;
                }
                _ => break,
            }
        }

        print_step(&state);
        let field = state.current_field();
        let answer: String = Input::with_theme(&theme)
            .with_prompt(field.title())
            .with_initial_text(state.input().get(field))
            .allow_empty(true)
            .interact_text()?;
        state.set_current(answer);
        println!(
            "{}",
            style(format!(
                "{} characters",
                text_length(state.input().get(field))
            ))
            .dim()
        );

        match step_menu(&theme, &state)? {
            StepAction::Next => match state.advance(config) {
                AdvanceOutcome::Blocked => {
                    println!(
                        "{} Answer \"{}\" before continuing",
                        style("⚠").yellow(),
                        field.title()
                    );
                }
                AdvanceOutcome::RenderFailed => {
                    eprintln!("{} Could not generate the pitch", style("✗").red());
                }
                AdvanceOutcome::Moved(_) | AdvanceOutcome::Completed => {}
            },
            StepAction::Previous => state.retreat(),
            StepAction::Jump => {
                if let Some(target) = pick_step(&theme, &state)? {
                    state.goto(target);
                }
            }
            StepAction::StartOver => {
                let confirmed = Confirm::with_theme(&theme)
                    .with_prompt("Discard all answers and start over?")
                    .default(false)
                    .interact()?;
                if confirmed {
                    state.reset();
                }
            }
            StepAction::Quit => break,
        }
    }

    Ok(())
}

fn step_menu(theme: &ColorfulTheme, state: &WizardState) -> Result<StepAction> {
    let next = if state.is_last_step() {
        "Generate Pitch"
    } else {
        "Next"
    };
    let items = [next, "Previous", "Jump to step", "Start over", "Quit"];

    let selection = Select::with_theme(theme)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => StepAction::Next,
        1 => StepAction::Previous,
        2 => StepAction::Jump,
        3 => StepAction::StartOver,
        _ => StepAction::Quit,
    })
}

fn pick_step(theme: &ColorfulTheme, state: &WizardState) -> Result<Option<Field>> {
    let current = state.current_field();
    let items: Vec<String> = Field::ALL
        .iter()
        .map(|f| format_overview_item(*f, *f == current, state.is_complete(*f)))
        .collect();

    let selection = Select::with_theme(theme)
        .with_prompt("Go to step")
        .items(&items)
        .default(current.index())
        .interact_opt()?;

    Ok(selection.and_then(Field::from_index))
}

/// Results actions until the user starts over or quits
fn results_loop(theme: &ColorfulTheme, pitch: &str) -> Result<ResultsAction> {
    let items = ["Copy pitch", "Create new pitch", "Quit"];

    loop {
        let selection = Select::with_theme(theme)
            .items(&items)
            .default(0)
            .interact()?;

        let action = match selection {
            0 => ResultsAction::Copy,
            1 => ResultsAction::NewPitch,
            _ => ResultsAction::Quit,
        };

        match action {
            ResultsAction::Copy => {
                if copy_to_clipboard(pitch) {
                    println!("{} Pitch copied to clipboard!", style("✓").green());
                }
            }
            other => return Ok(other),
        }
    }
}
