//! Presentations: every `ppt/slides/slideN.xml` in slide order.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ExtractionError;

use super::ooxml::{open_archive, parse_part, read_part, PartText};

lazy_static! {
    static ref RE_SLIDE_PART: Regex = Regex::new(r"^ppt/slides/slide(\d+)\.xml$").unwrap();
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PptxParser;

impl PptxParser {
    pub fn new() -> Self {
        Self
    }

    /// `--- SLIDE n ---` then the slide's shape text, then each table on the
    /// slide as `--- TABLEAU SLIDE n ---` with tab-separated rows.
    pub fn parse(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = open_archive(bytes)?;

        let mut slides: Vec<(usize, String)> = archive
            .file_names()
            .filter_map(|name| {
                let caps = RE_SLIDE_PART.captures(name)?;
                let number = caps.get(1)?.as_str().parse().ok()?;
                Some((number, name.to_string()))
            })
            .collect();
        slides.sort_by_key(|(number, _)| *number);

        let mut sections = Vec::with_capacity(slides.len());
        for (number, name) in &slides {
            let Some(xml) = read_part(&mut archive, name)? else {
                continue;
            };
            let part = parse_part(&xml)?;

            let mut section = format!("--- SLIDE {} ---", number);
            if !part.paragraphs.is_empty() {
                section.push('\n');
                section.push_str(&part.paragraphs.join("\n"));
            }
            for table in &part.tables {
                let rows = PartText::table_rows(table);
                if !rows.is_empty() {
                    section.push_str(&format!(
                        "\n--- TABLEAU SLIDE {} ---\n{}",
                        number,
                        rows.join("\n")
                    ));
                }
            }
            sections.push(section);
        }

        tracing::debug!("PPTX: {} slides", slides.len());
        Ok(sections.join("\n\n"))
    }
}
