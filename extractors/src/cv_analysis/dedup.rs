//! Collapse candidates describing the same mission and rank what is left.

use std::collections::HashSet;

use shared_types::{CandidateMission, CanonicalMission, MAX_MISSIONS, ONGOING};

const MIN_CLIENT_CHARS: usize = 3;

/// Sort key where the ongoing sentinel is the latest date and an empty date the earliest.
fn chronology(date: &str) -> &str {
    match date {
        ONGOING => "9999-12-31",
        "" => "0000-00-00",
        other => other,
    }
}

/// Keep the first candidate per (client, start year), newest first, at most
/// [`MAX_MISSIONS`]. Candidates without a usable client are dropped.
pub fn deduplicate(candidates: Vec<CandidateMission>) -> Vec<CanonicalMission> {
    let mut seen = HashSet::new();
    let mut missions: Vec<CanonicalMission> = candidates
        .into_iter()
        .filter(|c| c.client_name().chars().count() >= MIN_CLIENT_CHARS)
        .filter(|c| seen.insert(c.identity_key()))
        .map(CanonicalMission::from)
        .collect();

    missions.sort_by(|a, b| chronology(&b.date_debut).cmp(chronology(&a.date_debut)));
    missions.truncate(MAX_MISSIONS);
    missions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(client: &str, date_debut: &str, resume: &str) -> CandidateMission {
        CandidateMission {
            date_debut: date_debut.to_string(),
            client: Some(client.to_string()),
            resume: resume.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_candidate_per_key_wins() {
        let missions = deduplicate(vec![
            candidate("Orange", "2022-01-01", "from pattern"),
            candidate("orange ", "2022-06-01", "from known client"),
        ]);
        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].resume, "from pattern");
    }

    #[test]
    fn test_same_client_different_years_are_kept() {
        let missions = deduplicate(vec![
            candidate("Orange", "2019-01-01", ""),
            candidate("Orange", "2022-01-01", ""),
        ]);
        assert_eq!(missions.len(), 2);
    }

    #[test]
    fn test_missing_or_short_clients_are_dropped() {
        let mut no_client = candidate("", "2020-01-01", "");
        no_client.client = None;
        let missions = deduplicate(vec![no_client, candidate("AB", "2020-01-01", "")]);
        assert!(missions.is_empty());
    }

    #[test]
    fn test_newest_first_with_undated_last() {
        let missions = deduplicate(vec![
            candidate("Airbus", "", ""),
            candidate("Thales", "2015-01-01", ""),
            candidate("Orange", "2021-03-01", ""),
            candidate("Safran", "2018-01-01", ""),
        ]);
        let clients: Vec<_> = missions.iter().filter_map(|m| m.client.as_deref()).collect();
        assert_eq!(clients, vec!["Orange", "Safran", "Thales", "Airbus"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let missions = deduplicate(vec![
            candidate("Thales", "2020-01-01", ""),
            candidate("Airbus", "2020-01-01", ""),
        ]);
        assert_eq!(missions[0].client.as_deref(), Some("Thales"));
        assert_eq!(missions[1].client.as_deref(), Some("Airbus"));
    }

    #[test]
    fn test_truncates_to_cap() {
        let candidates = (0..30)
            .map(|i| candidate(&format!("Client {i:02}"), "2020-01-01", ""))
            .collect();
        assert_eq!(deduplicate(candidates).len(), MAX_MISSIONS);
    }
}
