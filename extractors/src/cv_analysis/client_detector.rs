use lazy_static::lazy_static;
use regex::{Match, Regex};

use super::gazetteers::{canonical_client, KNOWN_CLIENTS};

const MIN_CLIENT_CHARS: usize = 3;
const MAX_CLIENT_CHARS: usize = 60;

/// Up to five capitalized words: `BNP Paribas`, `Crédit Agricole CIB`, `L'Oréal`
const PROPER_NOUNS: &str = r"[A-ZÀ-ÖØ-Þ][\w&'’.-]*(?:[ \t]+[A-ZÀ-ÖØ-Þ][\w&'’.-]*){0,4}";

/// Words that get captured as proper nouns at sentence starts but never name a client.
const NOT_A_CLIENT: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "mission", "missions", "projet", "projets", "client",
    "clients", "équipe", "consultant", "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

lazy_static! {
    /// Cue patterns, tried in order. Group 1 holds the client.
    static ref CUE_PATTERNS: Vec<Regex> = vec![
        // chez X / pour (la) X / client : X
        Regex::new(&format!(
            r"(?:\b(?i:chez)|\b(?i:pour)|\b(?i:client)\s*:)\s*(?:(?i:le|la|les)\s+|(?i:l)['’])?({PROPER_NOUNS})"
        ))
        .unwrap(),
        // X - Consultant
        Regex::new(&format!(
            r"({PROPER_NOUNS})[ \t]*[-–—|][ \t]*(?i:consultant|développeur|developpeur|chef de projet|architecte|ingénieur|ingenieur|analyste|tech lead|lead dev|product owner|scrum master|data engineer|data scientist|devops)"
        ))
        .unwrap(),
        // X SA / X SAS / X SARL
        Regex::new(&format!(
            r"\b({PROPER_NOUNS}[ \t]+(?:SA|SAS|SASU|SARL|EURL|SNC|SE|GIE))\b"
        ))
        .unwrap(),
        // Société X / Groupe X
        Regex::new(&format!(r"\b((?:Société|Groupe)[ \t]+{PROPER_NOUNS})")).unwrap(),
    ];

    static ref RE_TRAILING_ROLE: Regex = Regex::new(r"\s+[-–—|]\s+.*$").unwrap();
    static ref RE_PARENTHETICAL: Regex = Regex::new(r"\s*\([^)]*\)").unwrap();

    /// Word-bounded, case-insensitive matchers for the known-client gazetteer
    static ref KNOWN_CLIENT_PATTERNS: Vec<(&'static str, Regex)> = KNOWN_CLIENTS
        .iter()
        .map(|client| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(client));
            (*client, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Heuristic client-name detection over a text span.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientDetector;

impl ClientDetector {
    pub fn new() -> Self {
        Self
    }

    /// Best-guess client for the span, or `None`.
    ///
    /// Cue patterns are tried first; a hit that does not survive cleaning falls
    /// through to the next pattern. The known-client gazetteer is the last resort.
    pub fn detect(&self, text: &str) -> Option<String> {
        for pattern in CUE_PATTERNS.iter() {
            let hit = pattern
                .captures(text)
                .and_then(|caps| caps.get(1))
                .and_then(|m| clean_client(m.as_str()));

            if hit.is_some() {
                return hit;
            }
        }

        known_client_occurrences(text)
            .into_iter()
            .next()
            .map(|(client, _)| client.to_string())
    }
}

/// Every gazetteer client present in `text`, in gazetteer order, with its first occurrence.
pub fn known_client_occurrences(text: &str) -> Vec<(&'static str, Match<'_>)> {
    KNOWN_CLIENT_PATTERNS
        .iter()
        .filter_map(|(client, pattern)| pattern.find(text).map(|m| (*client, m)))
        .collect()
}

/// Normalize a raw regex capture into a client name, or reject it.
pub fn clean_client(raw: &str) -> Option<String> {
    let without_role = RE_TRAILING_ROLE.replace(raw, "");
    let without_parens = RE_PARENTHETICAL.replace_all(&without_role, "");
    let trimmed = without_parens
        .trim()
        .trim_matches(|c: char| c.is_whitespace() || ".,;:-–—'\"’".contains(c));

    let name = title_case(trimmed);
    let length = name.chars().count();
    if !(MIN_CLIENT_CHARS..=MAX_CLIENT_CHARS).contains(&length) {
        return None;
    }
    if NOT_A_CLIENT.contains(&name.to_lowercase().as_str()) {
        return None;
    }

    Some(
        canonical_client(&name)
            .map(str::to_string)
            .unwrap_or(name),
    )
}

/// Upper-case the first letter of every word, leaving the rest untouched so
/// acronyms such as `BNP` or `SAS` survive.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<String> {
        ClientDetector::new().detect(text)
    }

    #[test]
    fn test_chez_cue() {
        assert_eq!(
            detect("Développement d'une plateforme de paiement chez BNP Paribas avec Python."),
            Some("BNP Paribas".to_string())
        );
    }

    #[test]
    fn test_pour_cue_with_article() {
        assert_eq!(
            detect("Mission réalisée pour la Société Générale à Paris"),
            Some("Société Générale".to_string())
        );
    }

    #[test]
    fn test_client_colon_cue() {
        assert_eq!(detect("Client : Acme Industries"), Some("Acme Industries".to_string()));
    }

    #[test]
    fn test_role_cue() {
        assert_eq!(
            detect("Worldline - Consultant Java senior"),
            Some("Worldline".to_string())
        );
    }

    #[test]
    fn test_legal_suffix() {
        assert_eq!(
            detect("intégré à l'équipe data de Medialis SAS à Lyon"),
            Some("Medialis SAS".to_string())
        );
    }

    #[test]
    fn test_groupe_prefix() {
        assert_eq!(
            detect("refonte du SI du Groupe Legrand"),
            Some("Groupe Legrand".to_string())
        );
    }

    #[test]
    fn test_gazetteer_fallback() {
        assert_eq!(
            detect("intervention sur le SI commercial d'orange en 2022"),
            Some("Orange".to_string())
        );
    }

    #[test]
    fn test_gazetteer_is_word_bounded() {
        assert_eq!(detect("revenus taxables et déclarations"), None);
        assert_eq!(detect("refonte de l'application orangebank"), None);
        assert_eq!(
            detect("refonte de l'application mobile Orange Bank"),
            Some("Orange".to_string())
        );
    }

    #[test]
    fn test_short_hit_falls_through_to_next_pattern() {
        // "chez AB" is too short, the gazetteer still finds Airbus
        assert_eq!(detect("stage chez AB puis projet Airbus"), Some("Airbus".to_string()));
    }

    #[test]
    fn test_no_client() {
        assert_eq!(detect("maintenance applicative et support utilisateurs"), None);
        assert_eq!(detect(""), None);
    }

    #[test]
    fn test_clean_client() {
        assert_eq!(clean_client("Thales (Défense)"), Some("Thales".to_string()));
        assert_eq!(clean_client("Acme - Lead"), Some("Acme".to_string()));
        assert_eq!(clean_client("bnp paribas"), Some("BNP Paribas".to_string()));
        assert_eq!(clean_client("nouvelle banque"), Some("Nouvelle Banque".to_string()));
        assert_eq!(clean_client("Xy."), None);
        assert_eq!(clean_client("Mission"), None);
        assert_eq!(clean_client(&"A".repeat(61)), None);
    }

    #[test]
    fn test_known_client_occurrences_in_gazetteer_order() {
        let found = known_client_occurrences("Orange puis AXA puis BNP Paribas");
        let names: Vec<&str> = found.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["BNP Paribas", "AXA", "Orange"]);
        assert_eq!(found[2].1.start(), 0);
    }
}
