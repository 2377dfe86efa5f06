use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{AnalysisWarning, CanonicalMission};

/// Hard cap on the number of missions in a result.
pub const MAX_MISSIONS: usize = 20;

/// Hard cap on document-wide technical skills.
pub const MAX_TECHNICAL_SKILLS: usize = 25;

/// Hard cap on functional skills.
pub const MAX_FUNCTIONAL_SKILLS: usize = 10;

/// Contact data found anywhere in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneralInfo {
    pub email: Option<String>,
    pub telephone: Option<String>,
}

/// Structured result of a résumé analysis, consumed by the profile UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    /// Sorted by `date_debut`, most recent first
    pub missions: Vec<CanonicalMission>,
    pub langages_techniques: Vec<String>,
    pub competences_fonctionnelles: Vec<String>,
    pub informations_generales: GeneralInfo,
    /// Bounded preview of the extracted text
    pub texte_brut: String,
}

impl AnalysisResult {
    /// A result with no extracted entities, only the text preview
    pub fn empty(texte_brut: String) -> Self {
        Self {
            texte_brut,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
            && self.langages_techniques.is_empty()
            && self.competences_fonctionnelles.is_empty()
            && self.informations_generales == GeneralInfo::default()
    }
}

/// An analysis result together with the soft failures recovered while producing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    pub warnings: Vec<AnalysisWarning>,
    /// 0 to 100, scored on the full extracted text
    #[serde(default)]
    pub quality_score: u8,
}

impl AnalysisOutcome {
    pub fn is_partial(&self) -> bool {
        !self.warnings.is_empty()
    }
}
