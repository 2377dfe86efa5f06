//! Text segmentation: experience section, mission blocks, and context windows.

use lazy_static::lazy_static;
use regex::Regex;

use super::gazetteers::EXPERIENCE_HEADERS;

lazy_static! {
    static ref HEADER_PATTERNS: Vec<Regex> = EXPERIENCE_HEADERS
        .iter()
        .map(|header| Regex::new(&format!(r"(?i){}", regex::escape(header))).unwrap())
        .collect();
    static ref RE_BLANK_LINES: Regex = Regex::new(r"\n[ \t]*\n").unwrap();
    static ref RE_MARKER: Regex = Regex::new(r"^---\s.*\s---$").unwrap();
    static ref RE_DATED_LINE: Regex = Regex::new(r"^(?:\d{1,2}/)?(?:19|20)\d{2}\b").unwrap();
    static ref RE_DATED_SENTENCE: Regex =
        Regex::new(r"[.!?]\s+((?:19|20)\d{2}\s*[-–—])").unwrap();
}

/// Blocks that reach this size stop absorbing the following lines when a new dated line starts.
const BLOCK_SPLIT_CHARS: usize = 100;

/// The part of the résumé that follows the first experience header found,
/// trying headers in priority order. Falls back to the whole text.
pub fn locate_experience_section(text: &str) -> &str {
    HEADER_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| &text[m.end()..])
        .unwrap_or(text)
}

/// Whether a line is a page/slide/table boundary marker emitted by the text extractor.
pub fn is_marker(line: &str) -> bool {
    RE_MARKER.is_match(line.trim())
}

/// The text without its marker lines.
pub fn strip_markers(text: &str) -> String {
    text.lines()
        .filter(|line| !is_marker(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split text into candidate mission blocks.
///
/// Blank lines and extractor markers always end a block. Inside a paragraph, a
/// line (or sentence) opening with a date starts a new block once the current
/// one is long enough to stand alone, so a short heading stays with its dates.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();

    for paragraph in RE_BLANK_LINES.split(text) {
        let mut current = String::new();

        for line in paragraph.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if is_marker(line) {
                flush(&mut blocks, &mut current);
                continue;
            }

            for segment in split_at_dated_sentences(line) {
                if RE_DATED_LINE.is_match(segment)
                    && current.chars().count() >= BLOCK_SPLIT_CHARS
                {
                    flush(&mut blocks, &mut current);
                }
                if !current.is_empty() {
                    current.push('\n');
                }
                current.push_str(segment);
            }
        }

        flush(&mut blocks, &mut current);
    }

    blocks
}

fn flush(blocks: &mut Vec<String>, current: &mut String) {
    if !current.trim().is_empty() {
        blocks.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// `"... fin. 2019 - 2020 : suite"` becomes `["... fin.", "2019 - 2020 : suite"]`.
fn split_at_dated_sentences(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for caps in RE_DATED_SENTENCE.captures_iter(line) {
        if let Some(year) = caps.get(1) {
            segments.push(line[start..year.start()].trim());
            start = year.start();
        }
    }
    segments.push(line[start..].trim());
    segments.retain(|s| !s.is_empty());
    segments
}

/// The slice of `text` spanning `before` characters ahead of byte offset `at`
/// and `after` characters from it.
pub fn window(text: &str, at: usize, before: usize, after: usize) -> &str {
    let start = text[..at]
        .char_indices()
        .rev()
        .take(before)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(at);
    let end = text[at..]
        .char_indices()
        .nth(after)
        .map(|(i, _)| at + i)
        .unwrap_or(text.len());

    &text[start..end]
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
