//! Common regex patterns for Aadhaar card extraction.
//!
//! Digit classes are spelled `[0-9]` because `\d` is Unicode-aware and would
//! also match Devanagari numerals.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // UID patterns (12 digits, usually printed as XXXX XXXX XXXX)
    pub static ref UID_GROUPED: Regex = Regex::new(
        r"[0-9]{4}[\s\-]?[0-9]{4}[\s\-]?[0-9]{4}"
    ).unwrap();

    pub static ref UID_STANDALONE: Regex = Regex::new(
        r"\b([0-9]{12})\b"
    ).unwrap();

    pub static ref UID_LABELED: Regex = Regex::new(
        r"(?i)(?:aadhaar|aadhar|uid|enrollment|enrolment|number)[\s:]*([0-9]{4}[\s\-]?[0-9]{4}[\s\-]?[0-9]{4})"
    ).unwrap();

    pub static ref UID_LINE: Regex = Regex::new(
        r"^[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}$"
    ).unwrap();

    // Name patterns, tried in order on a labeled line
    pub static ref NAME_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)name\s*:?\s*([A-Z][A-Za-z\s]{2,})").unwrap(),
        Regex::new(r"name\s*:?\s*([A-Z\s]{3,})").unwrap(),
        Regex::new(r"(?i)नाम\s*:?\s*([A-Z][A-Za-z\s]{2,})").unwrap(),
        Regex::new(r":?\s*([A-Z][A-Za-z\s]{4,})").unwrap(),
    ];

    pub static ref NAME_SHAPE: Regex = Regex::new(
        r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+"
    ).unwrap();

    // Dates as printed on the card: D/M/YYYY with / - or . delimiters
    pub static ref DATE_DMY: Regex = Regex::new(
        r"[0-9]{1,2}[/\-.][0-9]{1,2}[/\-.][0-9]{4}"
    ).unwrap();

    pub static ref DATE_LINE: Regex = Regex::new(
        r"^[0-9]{1,2}[/\-.][0-9]{1,2}[/\-.][0-9]{4}$"
    ).unwrap();

    pub static ref DATE_ISO: Regex = Regex::new(
        r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})"
    ).unwrap();

    // Postal code (PIN) pattern
    pub static ref PINCODE: Regex = Regex::new(
        r"\b[0-9]{6}\b"
    ).unwrap();

    pub static ref PINCODE_LINE: Regex = Regex::new(
        r"^[0-9]{6}$"
    ).unwrap();

    // Indian mobile numbers start with 6-9
    pub static ref MOBILE: Regex = Regex::new(
        r"\b[6-9][0-9]{9}\b"
    ).unwrap();

    // Address label, English or Hindi; captures what follows the last label
    pub static ref ADDRESS_LABEL: Regex = Regex::new(
        r"(?i)^.*(?:address|पता)\s*:?\s*(.*)$"
    ).unwrap();

    pub static ref LEADING_PUNCT: Regex = Regex::new(
        r"^[:\s\-]+"
    ).unwrap();
}

/// Strip leading colons, dashes and whitespace.
pub fn strip_leading_punct(s: &str) -> &str {
    match LEADING_PUNCT.find(s) {
        Some(m) => s[m.end()..].trim(),
        None => s.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_classes_are_ascii() {
        assert!(!PINCODE.is_match("११०००१"));
        assert!(PINCODE.is_match("PIN 110001"));
    }

    #[test]
    fn test_strip_leading_punct() {
        assert_eq!(strip_leading_punct(": - 12 MG Road"), "12 MG Road");
        assert_eq!(strip_leading_punct("MG Road"), "MG Road");
    }
}
