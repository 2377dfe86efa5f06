//! Raw text extraction from résumé files.
//!
//! Output text carries provenance markers on their own lines so later stages
//! can split on them: `--- PAGE n ---`, `--- TABLEAU PAGE n ---`,
//! `--- TABLEAU n ---`, `--- SLIDE n ---` and `--- TABLEAU SLIDE n ---`.
//!
//! Legacy `.doc`/`.ppt` files are routed to the OOXML readers. They are not ZIP
//! containers, so they come back as [`TextOutcome::Failed`].

mod docx;
mod ooxml;
mod pdf;
mod pptx;

pub use docx::DocxParser;
pub use pdf::PdfParser;
pub use pptx::PptxParser;

use std::path::Path;

use shared_types::{DocumentFormat, ExtractedText, ExtractionError, RawDocument, TextOutcome};

/// Dispatches a document to the reader for its format.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExtractor {
    pdf_parser: PdfParser,
    docx_parser: DocxParser,
    pptx_parser: PptxParser,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the text of an in-memory document. Backend failures are
    /// returned as [`TextOutcome::Failed`], never as errors.
    pub fn extract(&self, document: &RawDocument) -> TextOutcome {
        let parsed = match document.format {
            DocumentFormat::Pdf => self.pdf_parser.parse(document),
            DocumentFormat::Docx | DocumentFormat::Doc => self.docx_parser.parse(&document.bytes),
            DocumentFormat::Pptx | DocumentFormat::Ppt => self.pptx_parser.parse(&document.bytes),
        };

        match parsed {
            Ok(text) => {
                let text = ExtractedText::new(text);
                tracing::info!(
                    "Extracted {} chars from {}",
                    text.char_count(),
                    document.file_name()
                );
                TextOutcome::Extracted(text)
            }
            Err(e) => {
                tracing::warn!("Failed to extract text from {}: {}", document.file_name(), e);
                TextOutcome::failed(e.to_string())
            }
        }
    }

    /// Extract the text of a file. Only an unsupported extension is an error;
    /// an unreadable file is a [`TextOutcome::Failed`].
    pub fn extract_path(&self, path: &Path) -> Result<TextOutcome, ExtractionError> {
        DocumentFormat::from_path(path)?;
        Ok(match RawDocument::open(path) {
            Ok(document) => self.extract(&document),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                TextOutcome::failed(e.to_string())
            }
        })
    }
}
