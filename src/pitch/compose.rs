//! @acp:module "Pitch Composer"
//! @acp:summary "Render the pitch paragraph from the four answers"
//! @acp:domain cli
//! @acp:layer output

use std::sync::LazyLock;

use handlebars::Handlebars;
use regex::Regex;

use super::PitchInput;

/// Template used when the config does not override it
pub const DEFAULT_TEMPLATE: &str = "{{problem}} {{solution}} We're targeting {{targetMarket}}, \
and we've already achieved {{traction}}. This positions us to capture significant market share \
in this growing space.";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Sentence end followed by a capital, with or without space between
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])\s*([A-Z])").unwrap());

/// Substitute trimmed answers into `template` without any cleanup.
///
/// Strict mode is on, so a variable the input does not provide is an error
/// rather than an empty string.
pub fn render_template(template: &str, input: &PitchInput) -> crate::Result<String> {
    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    registry.set_strict_mode(true);

    let data = serde_json::json!({
        "problem": input.problem.trim(),
        "solution": input.solution.trim(),
        "targetMarket": input.target_market.trim(),
        "traction": input.traction.trim(),
    });

    Ok(registry.render_template(template, &data)?)
}

/// Render and normalize the pitch paragraph
pub fn compose_pitch(template: &str, input: &PitchInput) -> crate::Result<String> {
    let raw = render_template(template, input)?;
    Ok(normalize_pitch(&raw))
}

/// Collapse whitespace and put exactly one space after sentence punctuation
pub fn normalize_pitch(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let spaced = SENTENCE_BREAK.replace_all(&collapsed, "${1} ${2}");
    spaced.trim().to_string()
}

/// Words as the results view counts them: pieces between single spaces
pub fn word_count(pitch: &str) -> usize {
    pitch.split(' ').count()
}

/// Estimated speaking time in whole seconds, rounded up
pub fn speaking_seconds(words: usize, words_per_second: f64) -> u64 {
    (words as f64 / words_per_second).ceil() as u64
}
