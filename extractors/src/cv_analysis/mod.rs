//! CV analysis engine.
//!
//! Turns the text of a résumé into an [`AnalysisResult`]: dated missions with
//! their client, technical and functional skills, and contact details.
//!
//! # Pipeline
//!
//! 1. Text extraction ([`crate::document_text`]) with page/slide/table markers
//! 2. Experience section location ([`sections`])
//! 3. Candidate missions from each [`MissionStrategy`] ([`strategies`])
//! 4. Deduplication and ranking ([`dedup`])
//! 5. Document-wide skills and contact details, merged into the result
//!
//! Content problems never abort an analysis: they are returned as
//! [`AnalysisWarning`]s next to a possibly partial result.

pub mod client_detector;
pub mod contact;
pub mod date_parser;
pub mod dedup;
pub mod gazetteers;
pub mod quality;
pub mod report;
pub mod sections;
pub mod skills;
pub mod strategies;
pub mod summary;

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared_types::{
    AnalysisOutcome, AnalysisResult, AnalysisWarning, DocumentFormat, ExtractionError,
    MissionStrategy, RawDocument, TextOutcome, MAX_FUNCTIONAL_SKILLS, MAX_TECHNICAL_SKILLS,
};

use crate::document_text::TextExtractor;
use quality::{quality_score, ProfileSignals};
use sections::{locate_experience_section, truncate_chars};
use skills::{merge_unique, SkillExtractor};

/// Tunables for [`CvAnalyzer`], loaded from the `[analysis]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Texts with fewer trimmed characters are not analyzed
    pub min_text_length: usize,
    /// Characters of extracted text kept in `texte_brut`
    pub preview_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_text_length: 50,
            preview_chars: 3000,
        }
    }
}

pub struct CvAnalyzer {
    options: AnalysisOptions,
    text_extractor: TextExtractor,
    strategies: Vec<Box<dyn MissionStrategy>>,
    skills: SkillExtractor,
}

impl CvAnalyzer {
    pub fn new() -> Self {
        Self::with_options(AnalysisOptions::default())
    }

    pub fn with_options(options: AnalysisOptions) -> Self {
        Self {
            options,
            text_extractor: TextExtractor::new(),
            strategies: strategies::default_strategies(),
            skills: SkillExtractor::new(),
        }
    }

    /// Replace the mission strategies. They run in the given order.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn MissionStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze a résumé file.
    ///
    /// Fails only when the extension is not a supported document format; an
    /// unreadable file is analyzed as empty text with a warning.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisOutcome, ExtractionError> {
        let format = DocumentFormat::from_path(path)?;
        tracing::info!("Analyzing {} file {}", format, path.display());

        let text = self.text_extractor.extract_path(path)?;
        Ok(self.analyze_extracted(text))
    }

    /// Analyze a résumé already loaded in memory.
    pub fn analyze_document(&self, document: &RawDocument) -> AnalysisOutcome {
        tracing::info!("Analyzing {} document {}", document.format, document.file_name());
        self.analyze_extracted(self.text_extractor.extract(document))
    }

    fn analyze_extracted(&self, text: TextOutcome) -> AnalysisOutcome {
        let mut warnings = Vec::new();
        if let TextOutcome::Failed { reason } = &text {
            tracing::warn!("Text extraction failed, analyzing empty text: {}", reason);
            warnings.push(AnalysisWarning::ExtractionFailed {
                reason: reason.clone(),
            });
        }

        let mut outcome = self.analyze_text(text.into_text().as_str());
        warnings.append(&mut outcome.warnings);
        outcome.warnings = warnings;
        outcome
    }

    /// Analyze extracted text. Never fails; problems become warnings.
    pub fn analyze_text(&self, text: &str) -> AnalysisOutcome {
        let preview = truncate_chars(text, self.options.preview_chars);
        let chars = text.trim().chars().count();
        let signals = ProfileSignals::detect(text);

        if chars < self.options.min_text_length {
            tracing::warn!(
                "Document too short for analysis ({} chars, minimum {})",
                chars,
                self.options.min_text_length
            );
            let result = AnalysisResult::empty(preview);
            return AnalysisOutcome {
                quality_score: quality_score(&result, signals),
                result,
                warnings: vec![AnalysisWarning::ShortDocument {
                    chars,
                    minimum: self.options.min_text_length,
                }],
            };
        }

        let mut warnings = Vec::new();
        let section = locate_experience_section(text);
        tracing::debug!(
            "Experience section spans {} of {} chars",
            section.chars().count(),
            chars
        );

        let mut candidates = Vec::new();
        for strategy in &self.strategies {
            match strategy.propose(section) {
                Ok(mut proposed) => candidates.append(&mut proposed),
                Err(e) => {
                    tracing::warn!("Strategy {} failed: {}", strategy.name(), e);
                    warnings.push(AnalysisWarning::StrategyFailed {
                        strategy: strategy.name().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let candidate_count = candidates.len();
        let missions = dedup::deduplicate(candidates);
        tracing::info!(
            "Kept {} missions out of {} candidates",
            missions.len(),
            candidate_count
        );

        let document_skills = self.skills.extract(text);
        let mut langages_techniques = Vec::new();
        merge_unique(
            &mut langages_techniques,
            &document_skills.technical,
            MAX_TECHNICAL_SKILLS,
        );
        for mission in &missions {
            merge_unique(
                &mut langages_techniques,
                &mission.langages_techniques,
                MAX_TECHNICAL_SKILLS,
            );
        }

        let mut competences_fonctionnelles = document_skills.functional;
        competences_fonctionnelles.truncate(MAX_FUNCTIONAL_SKILLS);

        let result = AnalysisResult {
            missions,
            langages_techniques,
            competences_fonctionnelles,
            informations_generales: contact::extract_general_info(text),
            texte_brut: preview,
        };
        AnalysisOutcome {
            quality_score: quality_score(&result, signals),
            result,
            warnings,
        }
    }
}

impl Default for CvAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
