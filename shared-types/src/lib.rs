//! Shared record types for the CV analysis engine.
//!
//! These types cross crate boundaries: the `extractors` crate produces them, the
//! CLI renders them, and the profile UI consumes them through the TypeScript
//! definitions generated by `generate_api_types`.

pub mod analysis;
pub mod document;
pub mod extraction;
pub mod mission;

pub use analysis::{
    AnalysisOutcome, AnalysisResult, GeneralInfo, MAX_FUNCTIONAL_SKILLS, MAX_MISSIONS,
    MAX_TECHNICAL_SKILLS,
};
pub use document::{DocumentFormat, ExtractedText, RawDocument};
pub use extraction::{AnalysisWarning, ExtractionError, MissionStrategy, TextOutcome};
pub use mission::{
    CandidateMission, CanonicalMission, MAX_MISSION_SKILLS, MAX_SUMMARY_CHARS, ONGOING,
};
