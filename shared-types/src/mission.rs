use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sentinel used in place of an end date for missions that are still running.
pub const ONGOING: &str = "En cours";

/// Hard cap on the summary attached to a mission, in characters.
pub const MAX_SUMMARY_CHARS: usize = 1000;

/// Hard cap on the technical skills attached to a single mission.
pub const MAX_MISSION_SKILLS: usize = 10;

/// One unconfirmed mission proposed by a single extraction strategy.
///
/// Several candidates may describe the same real mission; the deduplicator
/// collapses them into a [`CanonicalMission`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CandidateMission {
    /// `YYYY-MM-DD`, or empty when no date was found
    pub date_debut: String,
    /// `YYYY-MM-DD`, `"En cours"`, or absent
    pub date_fin: Option<String>,
    pub client: Option<String>,
    pub resume: String,
    pub langages_techniques: Vec<String>,
    /// Raw excerpt the candidate was built from
    pub contexte: String,
}

impl CandidateMission {
    pub fn client_name(&self) -> &str {
        self.client.as_deref().unwrap_or("").trim()
    }

    /// Four-digit start year, if `date_debut` starts with one
    pub fn start_year(&self) -> Option<&str> {
        let year = self.date_debut.get(..4)?;
        year.chars().all(|c| c.is_ascii_digit()).then_some(year)
    }

    /// Identity of the real mission: normalized client + start year.
    pub fn identity_key(&self) -> String {
        format!(
            "{}_{}",
            self.client_name().to_lowercase(),
            self.start_year().unwrap_or("unknown")
        )
    }

    pub fn is_ongoing(&self) -> bool {
        self.date_fin.as_deref() == Some(ONGOING)
    }
}

/// The deduplicated, ranked representative of one real mission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CanonicalMission {
    pub date_debut: String,
    pub date_fin: Option<String>,
    pub client: Option<String>,
    pub resume: String,
    pub langages_techniques: Vec<String>,
    pub contexte: String,
}

impl From<CandidateMission> for CanonicalMission {
    fn from(candidate: CandidateMission) -> Self {
        Self {
            date_debut: candidate.date_debut,
            date_fin: candidate.date_fin,
            client: candidate.client,
            resume: candidate.resume,
            langages_techniques: candidate.langages_techniques,
            contexte: candidate.contexte,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(client: &str, date_debut: &str) -> CandidateMission {
        CandidateMission {
            date_debut: date_debut.to_string(),
            client: Some(client.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_identity_key_uses_client_and_year() {
        assert_eq!(candidate(" Orange ", "2022-03-01").identity_key(), "orange_2022");
        assert_eq!(candidate("Orange", "").identity_key(), "orange_unknown");
        assert_eq!(candidate("Orange", "En cours").identity_key(), "orange_unknown");
    }

    #[test]
    fn test_missing_client_has_empty_name() {
        let mission = CandidateMission::default();
        assert_eq!(mission.client_name(), "");
        assert_eq!(mission.identity_key(), "_unknown");
    }

    #[test]
    fn test_ongoing() {
        let mut mission = candidate("Axa", "2021-01-01");
        assert!(!mission.is_ongoing());
        mission.date_fin = Some(ONGOING.to_string());
        assert!(mission.is_ongoing());
    }

    #[test]
    fn test_serializes_with_french_field_names() {
        let json = serde_json::to_value(candidate("Generali", "2021-01-01")).unwrap();
        assert_eq!(json["date_debut"], "2021-01-01");
        assert_eq!(json["client"], "Generali");
        assert!(json["date_fin"].is_null());
    }
}
