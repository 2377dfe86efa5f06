//! CV quality score shown next to an analyzed profile.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::AnalysisResult;

lazy_static! {
    static ref RE_PROFESSIONAL_NETWORK: Regex =
        Regex::new(r"(?i)\b(?:https?://)?(?:[a-z]{2,3}\.)?(?:linkedin\.com/in|viadeo\.com/p)/[\w%-]+").unwrap();
    static ref RE_SUMMARY_HEADER: Regex = Regex::new(
        r"(?im)^\s*(?:profil(?:\s+professionnel)?|résumé|resume|synthèse|à propos(?:\s+de\s+moi)?|about(?:\s+me)?|summary)\s*:?\s*$"
    )
    .unwrap();
}

const MISSION_POINTS: usize = 5;
const MAX_MISSION_POINTS: usize = 30;
const SKILL_POINTS: usize = 2;
const MAX_SKILL_POINTS: usize = 30;
const EMAIL_POINTS: usize = 10;
const PHONE_POINTS: usize = 5;
const NETWORK_POINTS: usize = 5;
const SUMMARY_POINTS: usize = 20;

/// Profile features read from the raw text rather than the structured result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileSignals {
    pub professional_network: bool,
    pub summary: bool,
}

impl ProfileSignals {
    pub fn detect(text: &str) -> Self {
        Self {
            professional_network: RE_PROFESSIONAL_NETWORK.is_match(text),
            summary: RE_SUMMARY_HEADER.is_match(text),
        }
    }
}

/// Score from 0 to 100.
pub fn quality_score(result: &AnalysisResult, signals: ProfileSignals) -> u8 {
    let skills = result.langages_techniques.len() + result.competences_fonctionnelles.len();
    let info = &result.informations_generales;

    let mut score = (result.missions.len() * MISSION_POINTS).min(MAX_MISSION_POINTS)
        + (skills * SKILL_POINTS).min(MAX_SKILL_POINTS);
    if info.email.is_some() {
        score += EMAIL_POINTS;
    }
    if info.telephone.is_some() {
        score += PHONE_POINTS;
    }
    if signals.professional_network {
        score += NETWORK_POINTS;
    }
    if signals.summary {
        score += SUMMARY_POINTS;
    }

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{CanonicalMission, GeneralInfo};

    #[test]
    fn test_detect_signals() {
        let signals = ProfileSignals::detect(
            "Jean Dupont\nhttps://www.linkedin.com/in/jean-dupont\n\nProfil\nDéveloppeur senior",
        );
        assert!(signals.professional_network);
        assert!(signals.summary);

        let none = ProfileSignals::detect("Profil recherché : développeur");
        assert_eq!(none, ProfileSignals::default());
    }

    #[test]
    fn test_empty_result_scores_zero() {
        assert_eq!(
            quality_score(&AnalysisResult::default(), ProfileSignals::default()),
            0
        );
    }

    #[test]
    fn test_score_components() {
        let result = AnalysisResult {
            missions: vec![CanonicalMission::default(); 3],
            langages_techniques: vec!["Java".into(), "SQL".into()],
            competences_fonctionnelles: vec!["Agile".into()],
            informations_generales: GeneralInfo {
                email: Some("a@b.fr".into()),
                telephone: None,
            },
            texte_brut: String::new(),
        };
        // 15 missions + 6 skills + 10 email
        assert_eq!(quality_score(&result, ProfileSignals::default()), 31);
    }

    #[test]
    fn test_score_is_capped() {
        let result = AnalysisResult {
            missions: vec![CanonicalMission::default(); 20],
            langages_techniques: vec!["Java".into(); 25],
            competences_fonctionnelles: vec!["Agile".into(); 10],
            informations_generales: GeneralInfo {
                email: Some("a@b.fr".into()),
                telephone: Some("0612345678".into()),
            },
            texte_brut: String::new(),
        };
        let signals = ProfileSignals {
            professional_network: true,
            summary: true,
        };
        assert_eq!(quality_score(&result, signals), 100);
    }
}
