//! Rendering of analysis outcomes in the CLI output formats.

use extractors::{render_markdown, render_text, CsvExporter};
use serde::Serialize;
use shared_types::{AnalysisOutcome, ExtractionError};
use std::path::Path;

use crate::config::OutputFormat;

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
}

impl FileReport {
    pub fn new(path: &Path, outcome: AnalysisOutcome) -> Self {
        Self {
            file: path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            outcome,
        }
    }

    pub fn quality_score(&self) -> u8 {
        self.outcome.quality_score
    }
}

pub fn render(reports: &[FileReport], format: OutputFormat) -> Result<String, ExtractionError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports)
            .map(|json| json + "\n")
            .map_err(|e| ExtractionError::ParseError(e.to_string())),
        OutputFormat::Markdown => Ok(reports
            .iter()
            .map(|r| {
                format!(
                    "<!-- {} -->\n{}",
                    r.file,
                    render_markdown(&r.outcome.result, Some(r.quality_score()))
                )
            })
            .collect::<Vec<_>>()
            .join("\n---\n\n")),
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| {
                format!(
                    "{}\n{}",
                    r.file,
                    render_text(&r.outcome.result, Some(r.quality_score()))
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Csv => {
            let mut csv = String::new();
            for (index, report) in reports.iter().enumerate() {
                let exporter = if index == 0 {
                    CsvExporter::new()
                } else {
                    CsvExporter::new().without_headers()
                };
                csv.push_str(&exporter.missions(&report.file, &report.outcome.result)?);
            }
            Ok(csv)
        }
    }
}
