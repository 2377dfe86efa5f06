use shared_types::{CandidateMission, ExtractionError, MissionStrategy};

use super::build_candidate;
use crate::cv_analysis::client_detector::known_client_occurrences;
use crate::cv_analysis::date_parser::{date_bounds, parse_dates};
use crate::cv_analysis::sections::window;
use crate::cv_analysis::skills::SkillExtractor;

const CHARS_BEFORE: usize = 200;
const CHARS_AFTER: usize = 300;

/// One candidate per gazetteer client mentioned in the text, built from the
/// window around its first mention.
#[derive(Debug, Default)]
pub struct KnownClientStrategy {
    skills: SkillExtractor,
}

impl KnownClientStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MissionStrategy for KnownClientStrategy {
    fn name(&self) -> &'static str {
        "known-client"
    }

    fn propose(&self, text: &str) -> Result<Vec<CandidateMission>, ExtractionError> {
        let candidates: Vec<CandidateMission> = known_client_occurrences(text)
            .into_iter()
            .map(|(client, found)| {
                let span = window(text, found.start(), CHARS_BEFORE, CHARS_AFTER);
                let (date_debut, date_fin) = date_bounds(&parse_dates(span));
                build_candidate(
                    span,
                    Some(client.to_string()),
                    date_debut,
                    date_fin,
                    &self.skills,
                )
            })
            .collect();

        tracing::debug!("Known-client strategy proposed {} candidates", candidates.len());
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ONGOING;

    #[test]
    fn test_client_with_ongoing_dates() {
        let text = "Mission chez Generali depuis 2021, technologies: Java, SQL. Toujours en cours.";
        let candidates = KnownClientStrategy::new().propose(text).unwrap();

        assert_eq!(candidates.len(), 1);
        let mission = &candidates[0];
        assert_eq!(mission.client.as_deref(), Some("Generali"));
        assert_eq!(mission.date_debut, "2021-01-01");
        assert_eq!(mission.date_fin.as_deref(), Some(ONGOING));
        assert_eq!(mission.langages_techniques, vec!["Java", "SQL"]);
    }

    #[test]
    fn test_gazetteer_spelling_wins() {
        let text = "Projet de refonte pour SOCIÉTÉ GÉNÉRALE";
        let candidates = KnownClientStrategy::new().propose(text).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].client.as_deref(), Some("Société Générale"));
        assert_eq!(candidates[0].date_debut, "");
        assert_eq!(candidates[0].date_fin, None);
    }

    #[test]
    fn test_window_limits_dates() {
        let filler = "lorem ipsum ".repeat(40);
        let text = format!("2010 - 2012 {filler} Airbus 2018 - 2020");
        let candidates = KnownClientStrategy::new().propose(&text).unwrap();

        assert_eq!(candidates[0].date_debut, "2018-01-01");
        assert_eq!(candidates[0].date_fin.as_deref(), Some("2020-12-31"));
    }

    #[test]
    fn test_no_known_client() {
        assert!(KnownClientStrategy::new()
            .propose("Développeur freelance chez Acme")
            .unwrap()
            .is_empty());
    }
}
