//! Human-readable and CSV renderings of an analysis result.

use csv::WriterBuilder;
use serde::Serialize;
use shared_types::{AnalysisResult, CanonicalMission, ExtractionError};

/// Flat mission row for spreadsheet export.
#[derive(Debug, Serialize)]
struct MissionRow<'a> {
    fichier: &'a str,
    date_debut: &'a str,
    date_fin: &'a str,
    client: &'a str,
    langages_techniques: String,
    resume: &'a str,
}

impl<'a> MissionRow<'a> {
    fn new(fichier: &'a str, mission: &'a CanonicalMission) -> Self {
        Self {
            fichier,
            date_debut: &mission.date_debut,
            date_fin: mission.date_fin.as_deref().unwrap_or(""),
            client: mission.client.as_deref().unwrap_or(""),
            langages_techniques: mission.langages_techniques.join(", "),
            resume: &mission.resume,
        }
    }
}

pub struct CsvExporter {
    delimiter: u8,
    has_headers: bool,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Omit the header row, for appending to an existing export.
    pub fn without_headers(mut self) -> Self {
        self.has_headers = false;
        self
    }

    /// One row per mission, in result order, tagged with the source file name.
    pub fn missions(
        &self,
        fichier: &str,
        result: &AnalysisResult,
    ) -> Result<String, ExtractionError> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .from_writer(Vec::new());

        for mission in &result.missions {
            writer
                .serialize(MissionRow::new(fichier, mission))
                .map_err(|e| ExtractionError::ParseError(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExtractionError::Io(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ExtractionError::ParseError(e.to_string()))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn period(mission: &CanonicalMission) -> String {
    let start = if mission.date_debut.is_empty() {
        "?"
    } else {
        mission.date_debut.as_str()
    };
    match mission.date_fin.as_deref() {
        Some(end) => format!("{start} → {end}"),
        None => start.to_string(),
    }
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Markdown report, with the quality score when one is given.
pub fn render_markdown(result: &AnalysisResult, score: Option<u8>) -> String {
    let info = &result.informations_generales;

    let mut out = String::from("# Analyse de CV\n\n");
    if let Some(score) = score {
        out.push_str(&format!("**Score qualité :** {score}/100\n\n"));
    }

    out.push_str("## Informations générales\n\n");
    out.push_str(&format!(
        "- Email : {}\n- Téléphone : {}\n\n",
        info.email.as_deref().unwrap_or("-"),
        info.telephone.as_deref().unwrap_or("-")
    ));

    out.push_str("## Compétences\n\n");
    out.push_str(&format!(
        "- Techniques : {}\n- Fonctionnelles : {}\n\n",
        list_or_dash(&result.langages_techniques),
        list_or_dash(&result.competences_fonctionnelles)
    ));

    out.push_str(&format!("## Missions ({})\n\n", result.missions.len()));
    for mission in &result.missions {
        out.push_str(&format!(
            "### {} ({})\n\n",
            mission.client.as_deref().unwrap_or("Client inconnu"),
            period(mission)
        ));
        if !mission.langages_techniques.is_empty() {
            out.push_str(&format!("*{}*\n\n", mission.langages_techniques.join(", ")));
        }
        if !mission.resume.is_empty() {
            out.push_str(&format!("{}\n\n", mission.resume));
        }
    }

    out
}

/// Plain-text report for terminals and downloads.
pub fn render_text(result: &AnalysisResult, score: Option<u8>) -> String {
    let info = &result.informations_generales;

    let mut out = String::from("ANALYSE DE CV\n=============\n");
    if let Some(score) = score {
        out.push_str(&format!("Score qualité : {score}/100\n"));
    }
    out.push('\n');
    out.push_str(&format!(
        "Email          : {}\n\
         Téléphone      : {}\n\
         Techniques     : {}\n\
         Fonctionnelles : {}\n\n",
        info.email.as_deref().unwrap_or("-"),
        info.telephone.as_deref().unwrap_or("-"),
        list_or_dash(&result.langages_techniques),
        list_or_dash(&result.competences_fonctionnelles)
    ));
    out.push_str(&format!("MISSIONS ({})\n", result.missions.len()));

    for (i, mission) in result.missions.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} [{}]\n",
            i + 1,
            mission.client.as_deref().unwrap_or("Client inconnu"),
            period(mission)
        ));
        if !mission.langages_techniques.is_empty() {
            out.push_str(&format!("   {}\n", mission.langages_techniques.join(", ")));
        }
        if !mission.resume.is_empty() {
            out.push_str(&format!("   {}\n", mission.resume));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{GeneralInfo, ONGOING};

    fn sample() -> AnalysisResult {
        AnalysisResult {
            missions: vec![CanonicalMission {
                date_debut: "2021-01-01".into(),
                date_fin: Some(ONGOING.into()),
                client: Some("Generali".into()),
                resume: "Développement, recette et mise en production".into(),
                langages_techniques: vec!["Java".into(), "SQL".into()],
                contexte: String::new(),
            }],
            langages_techniques: vec!["Java".into(), "SQL".into()],
            competences_fonctionnelles: vec![],
            informations_generales: GeneralInfo {
                email: Some("jean@example.fr".into()),
                telephone: None,
            },
            texte_brut: String::new(),
        }
    }

    #[test]
    fn test_markdown_report() {
        let report = render_markdown(&sample(), Some(42));
        assert!(report.contains("**Score qualité :** 42/100"));
        assert!(report.contains("### Generali (2021-01-01 → En cours)"));
        assert!(report.contains("- Email : jean@example.fr"));
        assert!(report.contains("- Fonctionnelles : -"));
    }

    #[test]
    fn test_text_report_without_score() {
        let report = render_text(&sample(), None);
        assert!(!report.contains("Score"));
        assert!(report.contains("1. Generali [2021-01-01 → En cours]"));
        assert!(report.contains("   Java, SQL"));
    }

    #[test]
    fn test_report_layout() {
        let text = render_text(&sample(), Some(42));
        assert!(text.starts_with(
            "ANALYSE DE CV\n=============\nScore qualité : 42/100\n\nEmail          : jean@example.fr\n"
        ));
        assert!(text.contains("\n\nMISSIONS (1)\n1. Generali"));

        let markdown = render_markdown(&sample(), None);
        assert!(markdown.starts_with("# Analyse de CV\n\n## Informations générales\n\n- Email : "));
        assert!(markdown.contains("\n\n## Missions (1)\n\n### Generali"));
    }

    #[test]
    fn test_csv_quotes_fields() {
        let csv = CsvExporter::new().missions("cv.pdf", &sample()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("fichier,date_debut,date_fin,client,langages_techniques,resume")
        );
        assert_eq!(
            lines.next(),
            Some("cv.pdf,2021-01-01,En cours,Generali,\"Java, SQL\",\"Développement, recette et mise en production\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_custom_delimiter() {
        let csv = CsvExporter::new()
            .with_delimiter(b';')
            .missions("cv.pdf", &sample())
            .unwrap();
        assert!(csv.starts_with("fichier;date_debut;date_fin;client;langages_techniques;resume\n"));
    }

    #[test]
    fn test_csv_without_headers() {
        let csv = CsvExporter::new()
            .without_headers()
            .missions("cv.docx", &sample())
            .unwrap();
        assert!(csv.starts_with("cv.docx,2021-01-01,"));
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_csv_without_missions_is_empty() {
        let csv = CsvExporter::new().missions("cv.pdf", &AnalysisResult::default()).unwrap();
        assert_eq!(csv, "");
    }
}
