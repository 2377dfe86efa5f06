//! Mission summaries built from the most mission-like sentences of a block.

use lazy_static::lazy_static;
use regex::Regex;

use super::gazetteers::{ACTION_VERBS, MISSION_KEYWORDS};
use super::sections::{is_marker, truncate_chars};

lazy_static! {
    static ref RE_SENTENCE_BREAK: Regex = Regex::new(r"[.!?;]\s+|\n+|•").unwrap();
}

const MIN_SENTENCE_CHARS: usize = 15;

struct ScoredSentence<'a> {
    text: &'a str,
    score: usize,
}

fn score(sentence: &str) -> usize {
    let lower = sentence.to_lowercase();
    MISSION_KEYWORDS
        .iter()
        .chain(ACTION_VERBS)
        .filter(|term| lower.contains(*term))
        .count()
}

/// Summarize a mission block in at most `max_chars` characters.
///
/// Sentences are ranked by mission keywords and action verbs, best first,
/// keeping document order among equals. When nothing qualifies as a sentence
/// the block itself is truncated.
pub fn summarize(block: &str, max_chars: usize) -> String {
    let mut sentences: Vec<ScoredSentence> = RE_SENTENCE_BREAK
        .split(block)
        .map(|s| s.trim().trim_start_matches(['-', '*', '–']).trim())
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS && !is_marker(s))
        .map(|text| ScoredSentence {
            text,
            score: score(text),
        })
        .collect();

    if sentences.is_empty() {
        return truncate_chars(block.trim(), max_chars);
    }

    sentences.sort_by(|a, b| b.score.cmp(&a.score));

    let mut summary = String::new();
    let mut used = 0;
    for sentence in &sentences {
        let len = sentence.text.chars().count();
        let separator = if summary.is_empty() { 0 } else { 2 };

        if used + separator + len > max_chars {
            if summary.is_empty() {
                return truncate_chars(sentence.text, max_chars);
            }
            continue;
        }

        if separator > 0 {
            summary.push_str(". ");
        }
        summary.push_str(sentence.text);
        used += separator + len;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_mission_sentences_first() {
        let block = "Equipe sympathique au bureau.\n\
                     Développement et déploiement de la plateforme de paiement.\n\
                     Participé à la migration des services.";
        let summary = summarize(block, 1000);
        assert!(summary.starts_with("Développement et déploiement de la plateforme de paiement"));
        assert!(summary.contains("Participé à la migration des services"));
    }

    #[test]
    fn test_ties_keep_document_order() {
        let block = "Conception du module de facturation\nMigration du module de reporting";
        assert_eq!(
            summarize(block, 1000),
            "Conception du module de facturation. Migration du module de reporting"
        );
    }

    #[test]
    fn test_respects_length_limit() {
        let sentence = "Développement d'une application web de gestion";
        let block = vec![sentence; 40].join(".\n");
        let summary = summarize(&block, 200);
        assert!(summary.chars().count() <= 200);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_long_single_sentence_is_truncated() {
        let block = format!("Développement {}", "x".repeat(2000));
        assert_eq!(summarize(&block, 1000).chars().count(), 1000);
    }

    #[test]
    fn test_falls_back_to_block() {
        assert_eq!(summarize("  Java  ", 1000), "Java");
    }
}
