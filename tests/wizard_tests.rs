//! Wizard state machine tests
//!
//! Tests for step gating, navigation, report generation and reset.

use pitch::{AdvanceOutcome, Config, Field, WizardState};

fn answered_wizard(config: &Config) -> WizardState {
    let mut wizard = WizardState::new();
    for answer in [
        "Freelancers struggle to get paid on time.",
        "Automatic invoice follow-ups.",
        "4M freelancers in the US",
        "$2k MRR from 120 users",
    ] {
        wizard.set_current(answer);
        wizard.advance(config);
    }
    wizard
}

// =============================================================================
// Navigation Tests
// =============================================================================

mod navigation_tests {
    use super::*;

    #[test]
    fn test_advance_on_empty_field_is_noop() {
        let config = Config::default();
        let mut wizard = WizardState::new();
        let before = wizard.clone();

        assert_eq!(wizard.advance(&config), AdvanceOutcome::Blocked);
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_advance_on_whitespace_is_noop() {
        let config = Config::default();
        let mut wizard = WizardState::new();
        wizard.set_current("   \n ");
        let before = wizard.clone();

        assert_eq!(wizard.advance(&config), AdvanceOutcome::Blocked);
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_advance_moves_through_steps() {
        let config = Config::default();
        let mut wizard = WizardState::new();

        wizard.set_current("problem");
        assert_eq!(wizard.advance(&config), AdvanceOutcome::Moved(Field::Solution));
        wizard.set_current("solution");
        assert_eq!(
            wizard.advance(&config),
            AdvanceOutcome::Moved(Field::TargetMarket)
        );
        wizard.set_current("market");
        assert_eq!(wizard.advance(&config), AdvanceOutcome::Moved(Field::Traction));
        assert!(wizard.is_last_step());
        assert!(wizard.report().is_none());
    }

    #[test]
    fn test_retreat_keeps_answers() {
        let config = Config::default();
        let mut wizard = WizardState::new();
        wizard.set_current("problem");
        wizard.advance(&config);

        wizard.retreat();
        assert_eq!(wizard.current_field(), Field::Problem);
        assert_eq!(wizard.input().problem, "problem");

        wizard.retreat();
        assert_eq!(wizard.step(), 0);
    }

    #[test]
    fn test_goto_skips_gating() {
        let mut wizard = WizardState::new();
        wizard.goto(Field::TargetMarket);
        assert_eq!(wizard.step(), 2);
        assert!(!wizard.is_complete(Field::Problem));
    }

    #[test]
    fn test_set_field_writes_any_step() {
        let mut wizard = WizardState::new();
        wizard.set_field(Field::Traction, "10 pilots");
        assert_eq!(wizard.current_field(), Field::Problem);
        assert_eq!(wizard.input().get(Field::Traction), "10 pilots");
    }
}

// =============================================================================
// Report Tests
// =============================================================================

mod report_tests {
    use super::*;

    #[test]
    fn test_last_step_generates_report() {
        let config = Config::default();
        let wizard = answered_wizard(&config);

        let report = wizard.report().expect("report after last step");
        assert_eq!(
            report.pitch,
            "Freelancers struggle to get paid on time. Automatic invoice follow-ups. \
We're targeting 4M freelancers in the US, and we've already achieved $2k MRR from 120 users. \
This positions us to capture significant market share in this growing space."
        );
        assert_eq!(report.word_count, report.pitch.split(' ').count());
        assert_eq!(
            report.speaking_seconds,
            (report.word_count as f64 / 2.5).ceil() as u64
        );
        assert!(report.result.score <= 100);
        assert_eq!(report.result, pitch::score(wizard.input()));
    }

    #[test]
    fn test_speaking_rate_from_config() {
        let config = Config {
            speaking_rate: 1.0,
            ..Config::default()
        };
        let wizard = answered_wizard(&config);
        let report = wizard.report().unwrap();
        assert_eq!(report.speaking_seconds, report.word_count as u64);
    }

    #[test]
    fn test_custom_template() {
        let config = Config {
            template: "{{problem}}   {{traction}}!".to_string(),
            ..Config::default()
        };
        let wizard = answered_wizard(&config);
        assert_eq!(
            wizard.report().unwrap().pitch,
            "Freelancers struggle to get paid on time. $2k MRR from 120 users!"
        );
    }

    #[test]
    fn test_report_json_shape() {
        let config = Config::default();
        let wizard = answered_wizard(&config);
        let json = serde_json::to_value(wizard.report().unwrap()).unwrap();

        assert!(json["pitch"].is_string());
        assert!(json["score"].is_u64());
        assert!(json["band"].is_string());
        assert!(json["suggestions"].is_array());
        assert!(json["wordCount"].is_u64());
        assert!(json["speakingSeconds"].is_u64());
        assert!(json["generatedAt"].is_string());
    }
}

// =============================================================================
// Reset Tests
// =============================================================================

mod reset_tests {
    use super::*;

    #[test]
    fn test_reset_after_edits_restores_initial_state() {
        let config = Config::default();
        let mut wizard = WizardState::new();
        wizard.set_current("a");
        wizard.advance(&config);
        wizard.set_current("b");
        wizard.set_field(Field::Traction, "c");
        wizard.goto(Field::Traction);

        wizard.reset();
        assert_eq!(wizard, WizardState::default());
    }

    #[test]
    fn test_reset_after_report_restores_initial_state() {
        let config = Config::default();
        let mut wizard = answered_wizard(&config);
        assert!(wizard.report().is_some());

        wizard.reset();
        assert_eq!(wizard, WizardState::default());
        assert_eq!(wizard.progress_percent(), 25);
    }
}
