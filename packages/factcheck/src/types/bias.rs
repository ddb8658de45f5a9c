//! Political bias classification of the input text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of bias labels the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasLabel {
    LeftLeaning,
    RightLeaning,
    CenterNeutral,
    Unknown,
}

impl BiasLabel {
    /// The label as it appears in model output and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasLabel::LeftLeaning => "LEFT-LEANING",
            BiasLabel::RightLeaning => "RIGHT-LEANING",
            BiasLabel::CenterNeutral => "CENTER/NEUTRAL",
            BiasLabel::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bias classification of the input: a label plus free-text rationale.
///
/// Produced once per pipeline run and never mutated. Classification is
/// best-effort; a failed model call yields `Unknown` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasClassification {
    pub label: BiasLabel,
    pub rationale: String,
}

impl BiasClassification {
    /// Create an `Unknown` classification with the given rationale.
    pub fn unknown(rationale: impl Into<String>) -> Self {
        Self {
            label: BiasLabel::Unknown,
            rationale: rationale.into(),
        }
    }

    /// Parse a classification from model output.
    ///
    /// Expects a `LABEL: explanation` line (brackets and markdown emphasis
    /// around the label are tolerated). Output that names no known label
    /// becomes `Unknown` with the full text as rationale.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let cleaned = trimmed.trim_start_matches(['[', '*', '_', ' ']);

        for label in [
            BiasLabel::LeftLeaning,
            BiasLabel::RightLeaning,
            BiasLabel::CenterNeutral,
        ] {
            let name = label.as_str();
            let matches = cleaned
                .get(..name.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name));
            if matches {
                let rationale = cleaned[name.len()..]
                    .trim_start_matches([']', '*', '_'])
                    .trim_start_matches(':')
                    .trim()
                    .to_string();
                return Self { label, rationale };
            }
        }

        Self::unknown(trimmed)
    }
}

impl fmt::Display for BiasClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rationale.is_empty() {
            f.write_str(self.label.as_str())
        } else {
            write!(f, "{}: {}", self.label, self.rationale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_label() {
        let bias = BiasClassification::parse("LEFT-LEANING: Focus on social justice framing.");
        assert_eq!(bias.label, BiasLabel::LeftLeaning);
        assert_eq!(bias.rationale, "Focus on social justice framing.");
    }

    #[test]
    fn test_parse_bracketed_label() {
        let bias = BiasClassification::parse("[CENTER/NEUTRAL]: Balanced sourcing throughout.");
        assert_eq!(bias.label, BiasLabel::CenterNeutral);
        assert_eq!(bias.rationale, "Balanced sourcing throughout.");
    }

    #[test]
    fn test_parse_case_insensitive() {
        let bias = BiasClassification::parse("right-leaning: Market-focused framing.");
        assert_eq!(bias.label, BiasLabel::RightLeaning);
    }

    #[test]
    fn test_parse_unrecognized_becomes_unknown() {
        let bias = BiasClassification::parse("The text appears somewhat partisan.");
        assert_eq!(bias.label, BiasLabel::Unknown);
        assert_eq!(bias.rationale, "The text appears somewhat partisan.");
    }

    #[test]
    fn test_display_round_trip() {
        let bias = BiasClassification::parse("RIGHT-LEANING: Emphasis on deregulation.");
        assert_eq!(bias.to_string(), "RIGHT-LEANING: Emphasis on deregulation.");
    }
}
