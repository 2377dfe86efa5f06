use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use ts_rs::TS;

use crate::ExtractionError;

/// File formats accepted by the text extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
    Pptx,
    Ppt,
}

impl DocumentFormat {
    /// Resolve a format from a file extension. Case-insensitive, a leading dot is ignored.
    pub fn from_extension(extension: &str) -> Result<Self, ExtractionError> {
        let normalized = extension.trim().trim_start_matches('.').to_lowercase();
        match normalized.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "doc" => Ok(DocumentFormat::Doc),
            "pptx" => Ok(DocumentFormat::Pptx),
            "ppt" => Ok(DocumentFormat::Ppt),
            _ => Err(ExtractionError::UnsupportedFormat(extension.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Doc => "doc",
            DocumentFormat::Pptx => "pptx",
            DocumentFormat::Ppt => "ppt",
        }
    }

    /// Word-processing formats share the DOCX reader, slide formats the PPTX reader.
    pub fn is_word_processing(&self) -> bool {
        matches!(self, DocumentFormat::Docx | DocumentFormat::Doc)
    }

    pub fn is_presentation(&self) -> bool {
        matches!(self, DocumentFormat::Pptx | DocumentFormat::Ppt)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A résumé file handed over by the storage layer. Consumed once per analysis.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
    pub source_path: Option<PathBuf>,
}

impl RawDocument {
    pub fn from_bytes(bytes: Vec<u8>, format: DocumentFormat) -> Self {
        Self {
            bytes,
            format,
            source_path: None,
        }
    }

    /// Read a document from disk. The extension is checked before any I/O happens.
    pub fn open(path: &Path) -> Result<Self, ExtractionError> {
        let format = DocumentFormat::from_path(path)?;
        let bytes = std::fs::read(path)
            .map_err(|e| ExtractionError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        Ok(Self {
            bytes,
            format,
            source_path: Some(path.to_path_buf()),
        })
    }

    pub fn file_name(&self) -> String {
        self.source_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("document.{}", self.format))
    }
}

/// Plain text produced by the extractor, with page/slide/table boundary markers
/// (`--- PAGE 1 ---`, `--- TABLEAU PAGE 1 ---`, `--- SLIDE 2 ---`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.0.trim().chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ExtractedText {
    fn from(text: String) -> Self {
        Self(text)
    }
}
