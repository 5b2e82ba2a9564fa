//! Aadhaar number (UID) extraction and validation.

use super::FieldExtractor;
use super::lines::normalize_lines;
use super::patterns::{UID_GROUPED, UID_LABELED, UID_STANDALONE};

/// Degenerate sequences OCR produces from placeholder or noisy digit runs.
const UID_BLACKLIST: [&str; 3] = ["000000000000", "111111111111", "123456789012"];

/// The UID is conventionally printed near the bottom of the front side.
const TRAILING_LINES: usize = 5;

/// UID field extractor.
pub struct UidExtractor;

impl UidExtractor {
    pub fn new() -> Self {
        Self
    }

    fn from_grouped_lines(lines: &[&str]) -> Option<String> {
        lines.iter().find_map(|line| {
            let m = UID_GROUPED.find(line)?;
            let uid = digits_only(m.as_str());
            is_valid_uid(&uid).then_some(uid)
        })
    }

    fn from_standalone_lines(lines: &[&str]) -> Option<String> {
        lines.iter().find_map(|line| {
            let caps = UID_STANDALONE.captures(line)?;
            let uid = caps[1].to_string();
            is_valid_uid(&uid).then_some(uid)
        })
    }

    fn from_labeled_text(text: &str) -> Option<String> {
        UID_LABELED.captures_iter(text).find_map(|caps| {
            let uid = digits_only(&caps[1]);
            is_valid_uid(&uid).then_some(uid)
        })
    }

    fn from_trailing_lines(lines: &[&str]) -> Option<String> {
        let start = lines.len().saturating_sub(TRAILING_LINES);
        lines[start..].iter().find_map(|line| {
            let digits = digits_only(line);
            if digits.len() < 12 {
                return None;
            }
            (0..=digits.len() - 12)
                .map(|i| &digits[i..i + 12])
                .find(|candidate| is_valid_uid(candidate))
                .map(str::to_string)
        })
    }
}

impl Default for UidExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for UidExtractor {
    type Output = String;

    const FIELD: &'static str = "uid";

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let lines = normalize_lines(text);

        Self::from_grouped_lines(&lines)
            .or_else(|| Self::from_standalone_lines(&lines))
            .or_else(|| Self::from_labeled_text(text))
            .or_else(|| Self::from_trailing_lines(&lines))
    }
}

/// Extract a UID from text.
pub fn extract_uid(text: &str) -> Option<String> {
    UidExtractor::new().extract(text)
}

/// Check that `uid` is 12 ASCII digits and not a degenerate sequence.
pub fn is_valid_uid(uid: &str) -> bool {
    if uid.len() != 12 || !uid.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    if UID_BLACKLIST.contains(&uid) {
        return false;
    }

    let first = uid.as_bytes()[0];
    !uid.bytes().all(|b| b == first)
}

fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uid() {
        assert!(is_valid_uid("234567890123"));
        assert!(!is_valid_uid("000000000000"));
        assert!(!is_valid_uid("111111111111"));
        assert!(!is_valid_uid("123456789012"));
        assert!(!is_valid_uid("777777777777"));
        assert!(!is_valid_uid("23456789012")); // Too short
        assert!(!is_valid_uid("2345 6789 0123")); // Not digits only
    }

    #[test]
    fn test_extract_grouped() {
        assert_eq!(extract_uid("1234 5678 9013"), Some("123456789013".to_string()));
        assert_eq!(extract_uid("UID: 2345-6789-0123"), Some("234567890123".to_string()));
    }

    #[test]
    fn test_blacklisted_grouped_is_rejected() {
        assert_eq!(extract_uid("1234 5678 9012"), None);
        assert_eq!(extract_uid("0000 0000 0000\n9999 9999 9999"), None);
    }

    #[test]
    fn test_skips_blacklisted_line_for_later_valid_one() {
        let text = "1234 5678 9012\nGovernment of India\n4821 7390 5566";
        assert_eq!(extract_uid(text), Some("482173905566".to_string()));
    }

    #[test]
    fn test_standalone_run_after_rejected_group() {
        // The grouped pattern only sees the blacklisted leading run.
        let text = "Government of India\n1111 1111 1111 482173905566";
        assert_eq!(extract_uid(text), Some("482173905566".to_string()));
    }

    #[test]
    fn test_extract_labeled_across_newline() {
        // The number is wrapped over two lines; only the whole-text
        // labeled pattern sees the groups together.
        let text = "Government of India\nUID:\n4821\n7390 5566";
        assert_eq!(extract_uid(text), Some("482173905566".to_string()));
    }

    #[test]
    fn test_extract_from_noisy_trailing_line() {
        let text = "Government of India\nRahul Kumar\nMALE\n48a21 73b90 55c66";
        assert_eq!(extract_uid(text), Some("482173905566".to_string()));
    }

    #[test]
    fn test_no_uid() {
        assert_eq!(extract_uid("Government of India\nRahul Kumar"), None);
        assert_eq!(extract_uid(""), None);
    }

    #[test]
    fn test_never_returns_degenerate() {
        let texts = [
            "000000000000",
            "111111111111",
            "123456789012",
            "5555 5555 5555",
            "Aadhaar 1234 5678 9012",
            "x 888888888888888 y",
        ];
        for text in texts {
            if let Some(uid) = extract_uid(text) {
                assert!(is_valid_uid(&uid), "{} produced {}", text, uid);
            }
        }
    }
}
