use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{CandidateMission, ExtractedText};

/// Core trait that all mission extraction strategies implement.
///
/// A strategy scans the experience section of a résumé and proposes candidate
/// missions. Strategies are independent of each other; the orchestrator runs them
/// in order and concatenates their output before deduplication.
pub trait MissionStrategy: Send + Sync {
    /// Stable identifier used in logs and warnings
    fn name(&self) -> &'static str;

    /// Propose candidate missions for the given text
    fn propose(&self, text: &str) -> Result<Vec<CandidateMission>, ExtractionError>;
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Outcome of a text extraction backend. Failures are values, not errors: a
/// corrupt or protected file yields `Failed` and the analysis continues on empty text.
#[derive(Debug, Clone, PartialEq)]
pub enum TextOutcome {
    Extracted(ExtractedText),
    Failed { reason: String },
}

impl TextOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        TextOutcome::Failed {
            reason: reason.into(),
        }
    }

    /// Extracted text, or empty text when the backend failed
    pub fn into_text(self) -> ExtractedText {
        match self {
            TextOutcome::Extracted(text) => text,
            TextOutcome::Failed { .. } => ExtractedText::default(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TextOutcome::Failed { .. })
    }
}

/// Non-fatal problems encountered while analysing a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
#[ts(export)]
pub enum AnalysisWarning {
    /// The file could not be read or parsed; analysis ran on empty text
    ExtractionFailed { reason: String },
    /// Text shorter than the configured minimum; extraction was skipped
    ShortDocument { chars: usize, minimum: usize },
    /// A strategy failed and contributed no candidates
    StrategyFailed { strategy: String, reason: String },
}

impl std::fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisWarning::ExtractionFailed { reason } => {
                write!(f, "text extraction failed: {}", reason)
            }
            AnalysisWarning::ShortDocument { chars, minimum } => write!(
                f,
                "document too short ({} chars, minimum {}); no extraction performed",
                chars, minimum
            ),
            AnalysisWarning::StrategyFailed { strategy, reason } => {
                write!(f, "strategy '{}' failed: {}", strategy, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_outcome_yields_empty_text() {
        let outcome = TextOutcome::failed("password protected");
        assert!(outcome.is_failed());
        assert!(outcome.into_text().is_blank());
    }

    #[test]
    fn test_warning_serialization() {
        let warning = AnalysisWarning::StrategyFailed {
            strategy: "block".to_string(),
            reason: "boom".to_string(),
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert_eq!(
            json,
            r#"{"type":"strategy-failed","data":{"strategy":"block","reason":"boom"}}"#
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = AnalysisWarning::ShortDocument {
            chars: 12,
            minimum: 50,
        };
        assert!(warning.to_string().contains("12 chars"));
    }
}
