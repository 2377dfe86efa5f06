//! Word documents: `word/document.xml` paragraphs in order, then tables.

use shared_types::ExtractionError;

use super::ooxml::{open_archive, parse_part, read_part, PartText};

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Default, Clone, Copy)]
pub struct DocxParser;

impl DocxParser {
    pub fn new() -> Self {
        Self
    }

    /// Paragraphs one per line, then each table as `--- TABLEAU n ---`
    /// followed by its tab-separated rows.
    pub fn parse(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = open_archive(bytes)?;
        let xml = read_part(&mut archive, DOCUMENT_PART)?.ok_or_else(|| {
            ExtractionError::ParseError(format!("Missing {} in archive", DOCUMENT_PART))
        })?;
        let part = parse_part(&xml)?;

        let mut sections = vec![part.paragraphs.join("\n")];
        for (index, table) in part.tables.iter().enumerate() {
            let rows = PartText::table_rows(table);
            if rows.is_empty() {
                continue;
            }
            sections.push(format!("--- TABLEAU {} ---\n{}", index + 1, rows.join("\n")));
        }

        tracing::debug!(
            "DOCX: {} paragraphs, {} tables",
            part.paragraphs.len(),
            part.tables.len()
        );
        Ok(sections.join("\n\n").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_text::ooxml::tests::build_archive;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:r><w:t>Jean Dupont</w:t></w:r></w:p>
<w:p><w:r><w:t>Expérience professionnelle</w:t></w:r></w:p>
<w:tbl>
<w:tr><w:tc><w:p><w:r><w:t>2019 - 2021</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>AXA</w:t></w:r></w:p></w:tc></w:tr>
</w:tbl>
<w:p><w:r><w:t>Compétences : Java</w:t></w:r></w:p>
</w:body></w:document>"#;

    #[test]
    fn test_paragraphs_then_tables() {
        let bytes = build_archive(&[("word/document.xml", BODY)]);
        let text = DocxParser::new().parse(&bytes).unwrap();
        assert_eq!(
            text,
            "Jean Dupont\nExpérience professionnelle\nCompétences : Java\n\n\
             --- TABLEAU 1 ---\n2019 - 2021\tAXA"
        );
    }

    #[test]
    fn test_missing_document_part() {
        let bytes = build_archive(&[("[Content_Types].xml", "<Types/>")]);
        assert!(DocxParser::new().parse(&bytes).is_err());
    }

    #[test]
    fn test_legacy_doc_is_rejected() {
        let legacy = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1 Word 97";
        assert!(matches!(
            DocxParser::new().parse(legacy),
            Err(ExtractionError::ParseError(_))
        ));
    }
}
