use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::gazetteers::{
    AMBIGUOUS_TERMS, FRAMEWORKS, FUNCTIONAL_SKILLS, PROGRAMMING_LANGUAGES, TOOLS,
};
use super::sections::strip_markers;

/// Technical skills returned for one text span.
pub const MAX_TECHNICAL_SKILLS_PER_SPAN: usize = 15;

/// Functional skills returned for one text span.
pub const MAX_FUNCTIONAL_SKILLS_PER_SPAN: usize = 10;

lazy_static! {
    /// Terms like `C#`, `C++` or `.NET` end in non-word characters, so plain `\b`
    /// cannot delimit them; the surrounding classes do it instead.
    static ref TECHNICAL_PATTERNS: Vec<(&'static str, Regex)> = PROGRAMMING_LANGUAGES
        .iter()
        .chain(FRAMEWORKS)
        .chain(TOOLS)
        .map(|term| {
            // Ordinary French words only count in their canonical spelling
            let flags = if AMBIGUOUS_TERMS.contains(term) { "" } else { "(?i)" };
            let pattern = format!(
                r"{}(?:^|[^\w+#.]){}(?:$|[^\w+#])",
                flags,
                regex::escape(term)
            );
            (*term, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Skills found in a text span, as two disjoint lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub functional: Vec<String>,
}

/// Keyword-based skill detection. No stemming, no synonyms.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkillExtractor;

impl SkillExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        let text = &strip_markers(text);
        let technical = self.technical(text, MAX_TECHNICAL_SKILLS_PER_SPAN);
        let functional = self.functional(text, &technical);
        SkillSet {
            technical,
            functional,
        }
    }

    /// Technical skills in gazetteer order, word-bounded and case-insensitive.
    /// Extractor marker lines are ignored.
    pub fn technical(&self, text: &str, limit: usize) -> Vec<String> {
        let text = strip_markers(text);

        TECHNICAL_PATTERNS
            .iter()
            .filter(|(term, pattern)| {
                pattern
                    .find_iter(&text)
                    .any(|m| !AMBIGUOUS_TERMS.contains(term) || !is_french_phrase(&text[m.end()..]))
            })
            .map(|(term, _)| term.to_string())
            .take(limit)
            .collect()
    }

    /// Functional skills matched as lowercase substrings, excluding anything
    /// already reported as technical.
    fn functional(&self, text: &str, technical: &[String]) -> Vec<String> {
        let haystack = text.to_lowercase();

        FUNCTIONAL_SKILLS
            .iter()
            .filter(|term| haystack.contains(&term.to_lowercase()))
            .filter(|term| !technical.iter().any(|t| t.eq_ignore_ascii_case(term)))
            .map(|term| term.to_string())
            .take(MAX_FUNCTIONAL_SKILLS_PER_SPAN)
            .collect()
    }
}

/// `Tableau de bord`, `Tableau des effectifs`: the word opens a French noun phrase.
fn is_french_phrase(rest: &str) -> bool {
    let rest = rest.trim_start().to_lowercase();
    ["de ", "des ", "du ", "d'", "d’"]
        .iter()
        .any(|article| rest.starts_with(article))
}

/// Append `items` to `target`, skipping case-insensitive duplicates, until `cap` is reached.
pub fn merge_unique(target: &mut Vec<String>, items: &[String], cap: usize) {
    for item in items {
        if target.len() >= cap {
            break;
        }
        if !target.iter().any(|existing| existing.eq_ignore_ascii_case(item)) {
            target.push(item.clone());
        }
    }
}
