use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{CandidateMission, ExtractionError, MissionStrategy, ONGOING};

use super::build_candidate;
use crate::cv_analysis::client_detector::ClientDetector;
use crate::cv_analysis::skills::SkillExtractor;

lazy_static! {
    /// `2019 - 2021 : description` or `2021 - en cours : description`
    static ref RE_YEAR_RANGE_LINE: Regex = Regex::new(
        r"(?i)\b((?:19|20)\d{2})\s*[-–—]\s*((?:19|20)\d{2}|en cours|aujourd'hui|aujourd’hui|à ce jour)\s*:\s*([^\n]{30,})"
    )
    .unwrap();
}

/// One candidate per `<year> - <year | en cours> : <text>` line.
#[derive(Debug, Default)]
pub struct PatternStrategy {
    clients: ClientDetector,
    skills: SkillExtractor,
}

impl PatternStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MissionStrategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn propose(&self, text: &str) -> Result<Vec<CandidateMission>, ExtractionError> {
        let mut candidates = Vec::new();

        for caps in RE_YEAR_RANGE_LINE.captures_iter(text) {
            let (Some(whole), Some(start), Some(end), Some(description)) =
                (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
            else {
                continue;
            };

            let date_debut = format!("{}-01-01", start.as_str());
            let date_fin = if end.as_str().chars().all(|c| c.is_ascii_digit()) {
                format!("{}-12-31", end.as_str())
            } else {
                ONGOING.to_string()
            };

            let client = self.clients.detect(description.as_str());
            candidates.push(build_candidate(
                whole.as_str(),
                client,
                date_debut,
                Some(date_fin),
                &self.skills,
            ));
        }

        tracing::debug!("Pattern strategy proposed {} candidates", candidates.len());
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_year_range() {
        let text = "2020 - 2023 : Développement d'une plateforme de paiement chez BNP Paribas avec Python et Docker.";
        let candidates = PatternStrategy::new().propose(text).unwrap();

        assert_eq!(candidates.len(), 1);
        let mission = &candidates[0];
        assert_eq!(mission.date_debut, "2020-01-01");
        assert_eq!(mission.date_fin.as_deref(), Some("2023-12-31"));
        assert_eq!(mission.client.as_deref(), Some("BNP Paribas"));
        assert_eq!(mission.langages_techniques, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_ongoing_range() {
        let text = "2022 – en cours : Accompagnement DevOps chez Orange sur la plateforme data";
        let candidates = PatternStrategy::new().propose(text).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].date_debut, "2022-01-01");
        assert_eq!(candidates[0].date_fin.as_deref(), Some(ONGOING));
        assert_eq!(candidates[0].client.as_deref(), Some("Orange"));
    }

    #[test]
    fn test_one_candidate_per_line() {
        let text = "2015 - 2017 : Maintenance applicative du SI comptable\n\
                    2017 - 2019 : Migration des référentiels clients vers le cloud\n\
                    2019 - 2020 : court";
        assert_eq!(PatternStrategy::new().propose(text).unwrap().len(), 2);
    }

    #[test]
    fn test_description_must_be_long_enough() {
        let text = "2019 - 2020 : Support N2";
        assert!(PatternStrategy::new().propose(text).unwrap().is_empty());
    }
}
