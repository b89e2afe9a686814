//! @acp:module "Pitch Scoring"
//! @acp:summary "Confidence score and suggestions from length and keyword heuristics"
//! @acp:domain cli
//! @acp:layer logic
//!
//! # Scoring Algorithm
//!
//! 1. **Measure** each answer by its trimmed length, capped at 100
//! 2. **Bonus** fixed points when field-specific keywords appear (a field
//!    can reach 115)
//! 3. **Weight** each field (weights sum to 100) and sum in step order
//! 4. **Round** the weighted sum and clamp it to 0..=100
//!
//! Lengths are UTF-16 code units and all patterns are ASCII-only, so the
//! numbers match what the web character counter shows.
//!
//! Suggestions come from independent per-field checks followed by one
//! holistic message picked by [`ScoreBand`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::pitch::{text_length, Field, PitchInput};

/// Answers shorter than this (in UTF-16 units) get a "be more specific" hint
pub const DETAIL_THRESHOLD: usize = 50;

/// Cap applied to the length base before bonuses
pub const FIELD_CAP: f64 = 100.0;

/// ASCII digits only; other scripts' numerals do not count
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());

/// Traction evidence that earns the scoring bonus
static TRACTION_BONUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)\$|revenue|customer|user").unwrap());

/// Traction evidence that silences the metrics suggestion (also accepts growth)
static TRACTION_METRICS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)\$|revenue|customer|user|growth").unwrap());

const PROBLEM_KEYWORDS: [&str; 3] = ["struggle", "pain", "frustrat"];
const SOLUTION_KEYWORDS: [&str; 3] = ["unique", "innovative", "patent"];

/// Share of the total score each field can earn
pub fn weight(field: Field) -> f64 {
    match field {
        Field::Problem => 25.0,
        Field::Solution => 30.0,
        Field::TargetMarket => 20.0,
        Field::Traction => 25.0,
    }
}

/// Keyword bonus for one answer, tested against the untrimmed text
pub fn keyword_bonus(field: Field, value: &str) -> f64 {
    match field {
        Field::Problem if PROBLEM_KEYWORDS.iter().any(|k| value.contains(k)) => 10.0,
        Field::Solution if SOLUTION_KEYWORDS.iter().any(|k| value.contains(k)) => 10.0,
        Field::TargetMarket if DIGIT.is_match(value) => 15.0,
        Field::Traction if TRACTION_BONUS.is_match(value) => 15.0,
        _ => 0.0,
    }
}

/// Field score before weighting: length base plus bonus, up to 115.
/// Empty answers score 0 and get no bonus.
pub fn field_score(field: Field, value: &str) -> f64 {
    let length = text_length(value.trim());
    if length == 0 {
        return 0.0;
    }
    let base = (length as f64).min(FIELD_CAP);
    base + keyword_bonus(field, value)
}

/// @acp:summary "Weighted confidence score in 0..=100"
pub fn calculate_confidence_score(input: &PitchInput) -> u8 {
    let total: f64 = input
        .iter()
        .map(|(field, value)| {
            let score = field_score(field, value);
            tracing::debug!(field = field.key(), score, "field scored");
            (score / FIELD_CAP) * weight(field)
        })
        .sum();

    total.round().clamp(0.0, 100.0) as u8
}

/// @acp:summary "Kind of advice a suggestion carries"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Improvement,
    Good,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
}

impl Suggestion {
    fn new(kind: SuggestionKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

/// @acp:summary "Score bucket driving colour and the holistic message"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Strong,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }

    fn holistic(self) -> Suggestion {
        match self {
            ScoreBand::Strong => Suggestion::new(
                SuggestionKind::Success,
                "Excellent pitch foundation! Practice delivery and timing for maximum impact.",
            ),
            ScoreBand::Fair => Suggestion::new(
                SuggestionKind::Good,
                "Good foundation! Focus on making your value proposition more compelling.",
            ),
            ScoreBand::Weak => Suggestion::new(
                SuggestionKind::Improvement,
                "Consider adding more specific details and quantifiable metrics to strengthen your pitch.",
            ),
        }
    }
}

/// Ordered suggestions for the answers and an already computed score
pub fn generate_suggestions(input: &PitchInput, score: u8) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if text_length(&input.problem) < DETAIL_THRESHOLD {
        suggestions.push(Suggestion::new(
            SuggestionKind::Improvement,
            "Make your problem statement more specific and emotionally resonant.",
        ));
    }

    if text_length(&input.solution) < DETAIL_THRESHOLD {
        suggestions.push(Suggestion::new(
            SuggestionKind::Improvement,
            "Elaborate on what makes your solution unique or different from competitors.",
        ));
    }

    if !DIGIT.is_match(&input.target_market) {
        suggestions.push(Suggestion::new(
            SuggestionKind::Improvement,
            "Include specific market size or customer demographics with numbers.",
        ));
    }

    if !TRACTION_METRICS.is_match(&input.traction) {
        suggestions.push(Suggestion::new(
            SuggestionKind::Improvement,
            "Add concrete metrics like revenue, user count, or growth percentage.",
        ));
    }

    suggestions.push(ScoreBand::from_score(score).holistic());
    suggestions
}

/// @acp:summary "Score plus suggestions for one set of answers"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub band: ScoreBand,
    pub suggestions: Vec<Suggestion>,
}

/// Score the answers and derive suggestions in one pass
pub fn score(input: &PitchInput) -> ScoreResult {
    let score = calculate_confidence_score(input);
    ScoreResult {
        score,
        band: ScoreBand::from_score(score),
        suggestions: generate_suggestions(input, score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_hundred() {
        let total: f64 = Field::ALL.iter().map(|f| weight(*f)).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_length_base_is_capped() {
        assert_eq!(field_score(Field::Solution, &"a".repeat(40)), 40.0);
        assert_eq!(field_score(Field::Solution, &"a".repeat(250)), 100.0);
    }

    #[test]
    fn test_bonus_added_on_top_of_length_cap() {
        let long = format!("{} struggle", "x".repeat(120));
        assert_eq!(field_score(Field::Problem, &long), 110.0);

        let market = format!("{} 40 cities", "m".repeat(120));
        assert_eq!(field_score(Field::TargetMarket, &market), 115.0);
    }

    #[test]
    fn test_non_ascii_digits_earn_no_bonus() {
        assert_eq!(keyword_bonus(Field::TargetMarket, "٣ million"), 0.0);
        assert_eq!(keyword_bonus(Field::TargetMarket, "3 million"), 15.0);
    }

    #[test]
    fn test_traction_case_folding_is_ascii_only() {
        // U+017F LATIN SMALL LETTER LONG S folds to 's' under Unicode rules
        assert_eq!(keyword_bonus(Field::Traction, "10 u\u{17F}ers"), 0.0);
        assert_eq!(keyword_bonus(Field::Traction, "10 USERS"), 15.0);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // one astral emoji is two UTF-16 units
        assert_eq!(field_score(Field::Solution, "\u{1F680}"), 2.0);
    }

    #[test]
    fn test_length_ignores_surrounding_whitespace() {
        assert_eq!(field_score(Field::Solution, "   ab   "), 2.0);
        assert_eq!(field_score(Field::TargetMarket, "   "), 0.0);
    }

    #[test]
    fn test_keywords_are_case_sensitive_for_problem() {
        assert_eq!(keyword_bonus(Field::Problem, "Pain everywhere"), 0.0);
        assert_eq!(keyword_bonus(Field::Problem, "so much pain"), 10.0);
        assert_eq!(keyword_bonus(Field::Problem, "frustrating"), 10.0);
    }

    #[test]
    fn test_traction_bonus_is_case_insensitive() {
        assert_eq!(keyword_bonus(Field::Traction, "500 USERS"), 15.0);
        assert_eq!(keyword_bonus(Field::Traction, "$5k"), 15.0);
        assert_eq!(keyword_bonus(Field::Traction, "30% growth"), 0.0);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Weak);
    }

    #[test]
    fn test_growth_silences_metrics_suggestion_only() {
        let input = PitchInput {
            traction: "30% growth".to_string(),
            ..PitchInput::default()
        };
        let suggestions = generate_suggestions(&input, 0);
        assert!(!suggestions
            .iter()
            .any(|s| s.message.starts_with("Add concrete metrics")));
    }
}
