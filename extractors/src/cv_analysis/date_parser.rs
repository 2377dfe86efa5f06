use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use shared_types::ONGOING;
use std::collections::BTreeSet;

/// Maximum number of date tokens returned for one text span.
pub const MAX_DATES: usize = 6;

const YEAR: &str = r"((?:19|20)\d{2})";
const RANGE_SEPARATOR: &str = r"\s*(?:-|–|—|/|à|au)\s*";

lazy_static! {
    static ref RE_DAY_MONTH_YEAR: Regex =
        Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap();
    // The leading class keeps `03/2020` from matching inside `15/03/2020`
    static ref RE_MONTH_YEAR: Regex = Regex::new(r"(?:^|[^/\d])(\d{1,2})/(\d{4})\b").unwrap();
    static ref RE_YEAR_MONTH: Regex = Regex::new(r"\b(\d{4})/(\d{1,2})\b").unwrap();
    static ref RE_YEAR_RANGE: Regex =
        Regex::new(&format!(r"\b{YEAR}{RANGE_SEPARATOR}{YEAR}\b")).unwrap();
    static ref RE_YEAR_ONGOING: Regex = Regex::new(&format!(
        r"(?i)\b{YEAR}\s*(?:-|–|—|à)\s*(?:en cours|aujourd'hui|aujourd’hui|ce jour|présent|present|maintenant|now)"
    ))
    .unwrap();
    static ref RE_SINCE_YEAR: Regex = Regex::new(&format!(r"(?i)\bdepuis\s+{YEAR}\b")).unwrap();
    static ref RE_IN_YEAR: Regex = Regex::new(&format!(r"(?i)\ben\s+{YEAR}\b")).unwrap();
    static ref RE_MONTH_NAME_YEAR: Regex = Regex::new(&format!(
        r"(?i)\b(janvier|janv|février|fevrier|févr|fevr|fév|fev|mars|avril|avr|mai|juin|juillet|juil|août|aout|septembre|sept|sep|octobre|oct|novembre|nov|décembre|decembre|déc|dec)\.?\s+{YEAR}\b"
    ))
    .unwrap();
    static ref RE_ONGOING_MARKER: Regex = Regex::new(
        r"(?i)\b(?:en cours|à ce jour|a ce jour|actuellement|aujourd'hui|aujourd’hui)\b"
    )
    .unwrap();
}

/// Extract up to [`MAX_DATES`] normalized dates from a text span.
///
/// Every token is `YYYY-MM-DD` or the `"En cours"` sentinel. Tokens are
/// deduplicated and sorted ascending, with the sentinel always last. Which token
/// is a start or an end date is left to the caller (see [`date_bounds`]).
pub fn parse_dates(text: &str) -> Vec<String> {
    let mut dates = BTreeSet::new();
    let mut ongoing = false;

    for caps in RE_DAY_MONTH_YEAR.captures_iter(text) {
        push_date(&mut dates, &caps[3], &caps[2], &caps[1]);
    }
    for caps in RE_MONTH_YEAR.captures_iter(text) {
        push_date(&mut dates, &caps[2], &caps[1], "1");
    }
    for caps in RE_YEAR_MONTH.captures_iter(text) {
        push_date(&mut dates, &caps[1], &caps[2], "1");
    }
    for caps in RE_YEAR_RANGE.captures_iter(text) {
        push_date(&mut dates, &caps[1], "1", "1");
        push_date(&mut dates, &caps[2], "12", "31");
    }
    for caps in RE_YEAR_ONGOING.captures_iter(text) {
        push_date(&mut dates, &caps[1], "1", "1");
        ongoing = true;
    }
    for caps in RE_SINCE_YEAR
        .captures_iter(text)
        .chain(RE_IN_YEAR.captures_iter(text))
    {
        push_date(&mut dates, &caps[1], "1", "1");
    }
    for caps in RE_MONTH_NAME_YEAR.captures_iter(text) {
        push_month_name(&mut dates, &caps);
    }
    if RE_ONGOING_MARKER.is_match(text) {
        ongoing = true;
    }

    let dated_limit = if ongoing { MAX_DATES - 1 } else { MAX_DATES };
    let mut tokens: Vec<String> = dates.into_iter().take(dated_limit).collect();
    if ongoing {
        tokens.push(ONGOING.to_string());
    }
    tokens
}

/// Map date tokens to a `(date_debut, date_fin)` pair.
///
/// The start is the earliest dated token (empty when none). The end is the
/// sentinel when present, otherwise the latest token if there is more than one.
pub fn date_bounds(tokens: &[String]) -> (String, Option<String>) {
    let ongoing = tokens.iter().any(|t| t == ONGOING);
    let dated: Vec<&String> = tokens.iter().filter(|t| *t != ONGOING).collect();

    let start = dated.first().map(|d| d.to_string()).unwrap_or_default();
    let end = if ongoing {
        Some(ONGOING.to_string())
    } else if dated.len() > 1 {
        dated.last().map(|d| d.to_string())
    } else {
        None
    };

    (start, end)
}

fn push_month_name(dates: &mut BTreeSet<String>, caps: &Captures) {
    let month = month_number(&caps[1]);
    push_date(dates, &caps[2], month, "1");
}

fn push_date(dates: &mut BTreeSet<String>, year: &str, month: &str, day: &str) {
    if let Some(date) = normalize(year, month, day) {
        dates.insert(date);
    }
}

fn normalize(year: &str, month: &str, day: &str) -> Option<String> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    if !(1900..=2099).contains(&year) {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// French month names and abbreviations. Unknown names fall back to January.
fn month_number(name: &str) -> &'static str {
    let name = name.to_lowercase();
    match name.as_str() {
        s if s.starts_with("jan") => "01",
        s if s.starts_with("fév") || s.starts_with("fev") => "02",
        s if s.starts_with("mar") => "03",
        s if s.starts_with("avr") => "04",
        s if s.starts_with("mai") => "05",
        s if s.starts_with("juin") => "06",
        s if s.starts_with("juil") => "07",
        s if s.starts_with("ao") => "08",
        s if s.starts_with("sep") => "09",
        s if s.starts_with("oct") => "10",
        s if s.starts_with("nov") => "11",
        s if s.starts_with("déc") || s.starts_with("dec") => "12",
        _ => "01",
    }
}
