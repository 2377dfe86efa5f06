use lazy_static::lazy_static;
use regex::Regex;
use shared_types::GeneralInfo;

lazy_static! {
    static ref RE_EMAIL: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    /// French numbers: `06 12 34 56 78`, `06.12.34.56.78`, `+33 6 12 34 56 78`, `0033612345678`
    static ref RE_PHONE: Regex =
        Regex::new(r"(?:(?:\+|00)33[\s.-]?|\b0)[1-9](?:[\s.-]?\d{2}){4}\b").unwrap();
}

/// First email address and first French phone number in the document.
pub fn extract_general_info(text: &str) -> GeneralInfo {
    GeneralInfo {
        email: RE_EMAIL.find(text).map(|m| m.as_str().to_string()),
        telephone: RE_PHONE.find(text).map(|m| m.as_str().trim().to_string()),
    }
}
