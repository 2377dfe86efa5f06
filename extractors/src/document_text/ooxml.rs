//! Shared reader for Office Open XML parts (WordprocessingML and DrawingML).
//!
//! Both formats use the same local names for the elements that carry text:
//! `p` paragraphs, `r` runs, `t` text, and `tbl`/`tr`/`tc` tables.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use shared_types::ExtractionError;
use zip::ZipArchive;

pub type Archive<'a> = ZipArchive<Cursor<&'a [u8]>>;

/// Text of one XML part: paragraphs outside tables, then each table as rows of cells.
#[derive(Debug, Default, PartialEq)]
pub struct PartText {
    pub paragraphs: Vec<String>,
    pub tables: Vec<Vec<Vec<String>>>,
}

impl PartText {
    /// Table rows rendered with tab-separated cells.
    pub fn table_rows(table: &[Vec<String>]) -> Vec<String> {
        table
            .iter()
            .map(|cells| cells.join("\t"))
            .filter(|row| !row.trim().is_empty())
            .collect()
    }
}

pub fn open_archive(bytes: &[u8]) -> Result<Archive<'_>, ExtractionError> {
    ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::ParseError(format!("Not an OOXML container: {}", e)))
}

/// Read a part as UTF-8, or `None` when the archive does not contain it.
pub fn read_part(archive: &mut Archive<'_>, name: &str) -> Result<Option<String>, ExtractionError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(ExtractionError::ParseError(format!("Failed to open {}: {}", name, e))),
    };

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| ExtractionError::Io(format!("Failed to read {}: {}", name, e)))?;
    Ok(Some(content))
}

/// Collect the text of an XML part. Nested tables are flattened into the
/// enclosing cell.
pub fn parse_part(xml: &str) -> Result<PartText, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut part = PartText::default();
    let mut paragraph = String::new();
    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_text = false;

    let mut table_depth = 0usize;
    let mut table: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    paragraph.clear();
                }
                b"r" => in_run = true,
                b"t" => in_text = true,
                b"tbl" => table_depth += 1,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = false;
                    let text = paragraph.trim();
                    if !text.is_empty() {
                        if table_depth > 0 {
                            if !cell.is_empty() {
                                cell.push(' ');
                            }
                            cell.push_str(text);
                        } else {
                            part.paragraphs.push(text.to_string());
                        }
                    }
                    paragraph.clear();
                }
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"tc" if table_depth == 1 => row.push(std::mem::take(&mut cell)),
                b"tr" if table_depth == 1 => table.push(std::mem::take(&mut row)),
                b"tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 && !table.is_empty() {
                        part.tables.push(std::mem::take(&mut table));
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"tab" if in_run => paragraph.push('\t'),
                b"br" if in_paragraph => paragraph.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e
                        .unescape()
                        .map_err(|e| ExtractionError::ParseError(format!("Bad XML text: {}", e)))?;
                    paragraph.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::ParseError(format!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(part)
}
