//! Candidate-mission strategies.
//!
//! Each strategy looks at the experience section from a different angle and
//! proposes [`CandidateMission`]s independently. The analyzer runs them in the
//! order returned by [`default_strategies`] and concatenates their output;
//! overlapping proposals are collapsed later by the deduplicator.

mod block;
mod known_client;
mod pattern;

pub use block::BlockStrategy;
pub use known_client::KnownClientStrategy;
pub use pattern::PatternStrategy;

use shared_types::{CandidateMission, MissionStrategy, MAX_MISSION_SKILLS, MAX_SUMMARY_CHARS};

use super::sections::truncate_chars;
use super::skills::SkillExtractor;
use super::summary::summarize;

/// Raw excerpt kept on each candidate, in characters.
pub const MAX_CONTEXT_CHARS: usize = 500;

/// Block, pattern, then known-client.
pub fn default_strategies() -> Vec<Box<dyn MissionStrategy>> {
    vec![
        Box::new(BlockStrategy::new()),
        Box::new(PatternStrategy::new()),
        Box::new(KnownClientStrategy::new()),
    ]
}

/// Fill in the summary, skills and context of a candidate from the span it came from.
fn build_candidate(
    span: &str,
    client: Option<String>,
    date_debut: String,
    date_fin: Option<String>,
    skills: &SkillExtractor,
) -> CandidateMission {
    CandidateMission {
        date_debut,
        date_fin,
        client,
        resume: summarize(span, MAX_SUMMARY_CHARS),
        langages_techniques: skills.technical(span, MAX_MISSION_SKILLS),
        contexte: truncate_chars(span.trim(), MAX_CONTEXT_CHARS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy_order() {
        let names: Vec<&str> = default_strategies().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["block", "pattern", "known-client"]);
    }

    #[test]
    fn test_build_candidate_caps_context() {
        let span = format!("Développement Python {}", "x".repeat(800));
        let candidate = build_candidate(
            &span,
            Some("Orange".to_string()),
            "2020-01-01".to_string(),
            None,
            &SkillExtractor::new(),
        );
        assert_eq!(candidate.contexte.chars().count(), MAX_CONTEXT_CHARS);
        assert_eq!(candidate.langages_techniques, vec!["Python"]);
        assert!(candidate.resume.chars().count() <= MAX_SUMMARY_CHARS);
    }
}
