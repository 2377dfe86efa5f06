//! PDF text with a table-aware backend and a plain-text fallback.
//!
//! `pdf_oxide` reads each page and renders detected tables as Markdown, from
//! which the table rows are recovered. When it fails or finds no text at all,
//! `pdf-extract` is tried on the same bytes. Both backends can panic on
//! malformed input; panics are contained and reported as parse errors.

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use pdf_oxide::converters::ConversionOptions;
use pdf_oxide::PdfDocument;
use shared_types::{ExtractionError, RawDocument};

/// Form feed emitted by `pdf-extract` between pages.
const PAGE_BREAK: char = '\x0c';

#[derive(Debug, Default, Clone, PartialEq)]
struct PdfPage {
    text: String,
    tables: Vec<Vec<String>>,
}

impl PdfPage {
    fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.tables.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfParser;

impl PdfParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, document: &RawDocument) -> Result<String, ExtractionError> {
        let pages = with_fallback(self.parse_with_tables(document), || {
            self.parse_plain(&document.bytes)
        })?;

        Ok(render_pages(&pages))
    }

    fn parse_with_tables(&self, document: &RawDocument) -> Result<Vec<PdfPage>, ExtractionError> {
        match &document.source_path {
            Some(path) => contain_panic("pdf_oxide", || oxide_pages(path)),
            None => {
                let mut file = tempfile::Builder::new()
                    .suffix(".pdf")
                    .tempfile()
                    .map_err(|e| ExtractionError::Io(e.to_string()))?;
                file.write_all(&document.bytes)
                    .and_then(|_| file.flush())
                    .map_err(|e| ExtractionError::Io(e.to_string()))?;
                contain_panic("pdf_oxide", || oxide_pages(file.path()))
            }
        }
    }

    fn parse_plain(&self, bytes: &[u8]) -> Result<Vec<PdfPage>, ExtractionError> {
        let text = contain_panic("pdf-extract", || {
            pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ExtractionError::ParseError(format!("pdf-extract: {}", e)))
        })?;

        Ok(split_plain_pages(&text))
    }
}

/// Keep the table-aware pages unless they failed or hold no text at all.
fn with_fallback(
    primary: Result<Vec<PdfPage>, ExtractionError>,
    fallback: impl FnOnce() -> Result<Vec<PdfPage>, ExtractionError>,
) -> Result<Vec<PdfPage>, ExtractionError> {
    match primary {
        Ok(pages) if pages.iter().any(|p| !p.is_blank()) => Ok(pages),
        Ok(_) => {
            tracing::info!("pdf_oxide found no text, falling back to pdf-extract");
            fallback()
        }
        Err(e) => {
            tracing::warn!("pdf_oxide failed ({}), falling back to pdf-extract", e);
            fallback()
        }
    }
}

fn contain_panic<T>(
    backend: &str,
    f: impl FnOnce() -> Result<T, ExtractionError>,
) -> Result<T, ExtractionError> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        Err(ExtractionError::ParseError(format!(
            "{} panicked on malformed input",
            backend
        )))
    })
}

fn oxide_pages(path: &Path) -> Result<Vec<PdfPage>, ExtractionError> {
    let oxide_error = |e: pdf_oxide::Error| ExtractionError::ParseError(format!("pdf_oxide: {}", e));

    let mut document = PdfDocument::open(path).map_err(oxide_error)?;
    let page_count = document.page_count().map_err(oxide_error)?;
    let options = ConversionOptions::default().with_default_table_detection();

    let mut pages = Vec::with_capacity(page_count);
    for index in 0..page_count {
        let text = document.extract_text(index).map_err(oxide_error)?;
        let tables = match document.to_markdown(index, &options) {
            Ok(markdown) => markdown_tables(&markdown),
            Err(e) => {
                tracing::debug!("No table layout for page {}: {}", index + 1, e);
                Vec::new()
            }
        };
        pages.push(PdfPage { text, tables });
    }

    Ok(pages)
}

/// Rows of the Markdown tables in `markdown`, each row tab-separated.
/// Header separator rows (`|---|:--:|`) are dropped.
fn markdown_tables(markdown: &str) -> Vec<Vec<String>> {
    let mut tables = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in markdown.lines().map(str::trim) {
        if !line.starts_with('|') {
            if !current.is_empty() {
                tables.push(std::mem::take(&mut current));
            }
            continue;
        }

        let cells: Vec<&str> = line
            .trim_matches('|')
            .split('|')
            .map(str::trim)
            .collect();
        let is_separator = cells
            .iter()
            .all(|c| !c.is_empty() && c.chars().all(|ch| matches!(ch, '-' | ':' | ' ')));
        if is_separator || cells.iter().all(|c| c.is_empty()) {
            continue;
        }

        current.push(cells.join("\t"));
    }

    if !current.is_empty() {
        tables.push(current);
    }
    tables
}

fn split_plain_pages(text: &str) -> Vec<PdfPage> {
    text.split(PAGE_BREAK)
        .map(|page| PdfPage {
            text: page.to_string(),
            tables: Vec::new(),
        })
        .collect()
}

/// `--- PAGE n ---` then the page text; each table follows as
/// `--- TABLEAU PAGE n ---` with its rows.
fn render_pages(pages: &[PdfPage]) -> String {
    let mut out = String::new();

    for (index, page) in pages.iter().enumerate() {
        if page.is_blank() {
            continue;
        }
        let number = index + 1;

        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(&format!("--- PAGE {} ---\n{}", number, page.text.trim()));

        for table in &page.tables {
            out.push_str(&format!(
                "\n\n--- TABLEAU PAGE {} ---\n{}",
                number,
                table.join("\n")
            ));
        }
    }

    out
}
