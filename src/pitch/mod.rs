//! @acp:module "Pitch"
//! @acp:summary "Pitch answers and the four wizard steps that collect them"
//! @acp:domain cli
//! @acp:layer model
//!
//! A pitch is built from four short answers. Each answer belongs to a
//! [`Field`], and the fields double as the wizard steps, in order.

pub mod compose;

use serde::{Deserialize, Serialize};

pub use compose::{compose_pitch, normalize_pitch, speaking_seconds, word_count};

/// Length in UTF-16 code units, the unit browser text fields count in.
///
/// Astral characters such as emoji count as two.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// @acp:summary "One of the four pitch answers, in wizard order"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Problem,
    Solution,
    TargetMarket,
    Traction,
}

impl Field {
    /// All fields in step order
    pub const ALL: [Field; 4] = [
        Field::Problem,
        Field::Solution,
        Field::TargetMarket,
        Field::Traction,
    ];

    /// Field for a zero-based step index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based step index
    pub fn index(self) -> usize {
        match self {
            Field::Problem => 0,
            Field::Solution => 1,
            Field::TargetMarket => 2,
            Field::Traction => 3,
        }
    }

    /// Key used in templates and JSON
    pub fn key(self) -> &'static str {
        match self {
            Field::Problem => "problem",
            Field::Solution => "solution",
            Field::TargetMarket => "targetMarket",
            Field::Traction => "traction",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Field::Problem => "The Problem",
            Field::Solution => "Your Solution",
            Field::TargetMarket => "Target Market",
            Field::Traction => "Traction & Proof",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Field::Problem => "What pain point does your startup address?",
            Field::Solution => "How does your product/service solve this problem?",
            Field::TargetMarket => "Who is your ideal customer?",
            Field::Traction => "What traction or validation do you have?",
        }
    }

    /// Hint shown while the answer is still empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Problem => "What specific problem are you solving? Be concrete and relatable.",
            Field::Solution => {
                "How do you solve this problem uniquely? What makes you different?"
            }
            Field::TargetMarket => {
                "Who are your customers? Be specific about demographics and size."
            }
            Field::Traction => "What validates your success? Users, revenue, partnerships, etc.",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// @acp:summary "The four free-text pitch answers"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PitchInput {
    pub problem: String,
    pub solution: String,
    pub target_market: String,
    pub traction: String,
}

impl PitchInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Problem => &self.problem,
            Field::Solution => &self.solution,
            Field::TargetMarket => &self.target_market,
            Field::Traction => &self.traction,
        }
    }

    /// Overwrite one answer
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Problem => &mut self.problem,
            Field::Solution => &mut self.solution,
            Field::TargetMarket => &mut self.target_market,
            Field::Traction => &mut self.traction,
        };
        *slot = value.into();
    }

    /// An answer counts as given once it has non-whitespace content
    pub fn is_answered(&self, field: Field) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Iterate answers in step order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Load answers from a JSON file keyed by field name
    pub fn from_json<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_step_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(Field::from_index(i), Some(*field));
        }
        assert_eq!(Field::from_index(4), None);
    }

    #[test]
    fn test_text_length_counts_utf16_units() {
        assert_eq!(text_length("abc"), 3);
        assert_eq!(text_length("é"), 1);
        assert_eq!(text_length("\u{1F600}"), 2);
    }

    #[test]
    fn test_set_and_get() {
        let mut input = PitchInput::default();
        input.set(Field::TargetMarket, "SMBs");
        assert_eq!(input.get(Field::TargetMarket), "SMBs");
        assert_eq!(input.target_market, "SMBs");
        assert!(input.get(Field::Problem).is_empty());
    }

    #[test]
    fn test_whitespace_is_not_an_answer() {
        let mut input = PitchInput::default();
        input.set(Field::Solution, "   \n\t");
        assert!(!input.is_answered(Field::Solution));
        input.set(Field::Solution, " an app ");
        assert!(input.is_answered(Field::Solution));
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let input: PitchInput =
            serde_json::from_str(r#"{"problem":"p","targetMarket":"t"}"#).unwrap();
        assert_eq!(input.problem, "p");
        assert_eq!(input.target_market, "t");
        assert_eq!(input.solution, "");

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["targetMarket"], "t");
    }
}
