//! Extractors Crate
//!
//! This crate turns résumé files into structured consultant data: dated
//! missions with their clients, technical and functional skills, and contact
//! details. It is designed to be reusable by the CLI and by the profile UI host.
//!
//! # Architecture
//!
//! - **Types**: Records, the `MissionStrategy` trait and errors live in the `shared-types` crate
//! - **Implementations**: Text extraction and the analysis engine are implemented in this crate
//!
//! # Modules
//!
//! - `document_text`: PDF/DOCX/PPTX text extraction with page, slide and table markers
//! - `cv_analysis`: mission strategies, deduplication, skills, contact details, reports
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::CvAnalyzer;
//! use std::path::Path;
//!
//! let analyzer = CvAnalyzer::new();
//! let outcome = analyzer.analyze_file(Path::new("cv.pdf"))?;
//! for warning in &outcome.warnings {
//!     eprintln!("{}", warning);
//! }
//! ```

pub mod cv_analysis;
pub mod document_text;

// Re-export commonly used types
pub use cv_analysis::quality::{quality_score, ProfileSignals};
pub use cv_analysis::report::{render_markdown, render_text, CsvExporter};
pub use cv_analysis::{AnalysisOptions, CvAnalyzer};
pub use document_text::TextExtractor;
