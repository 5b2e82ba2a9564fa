//! Address extraction (back side of the card).

use super::FieldExtractor;
use super::lines::normalize_lines;
use super::patterns::{strip_leading_punct, ADDRESS_LABEL, DATE_LINE, PINCODE_LINE, UID_LINE};

/// Label terms introducing the address.
const ADDRESS_LABELS: [&str; 2] = ["address", "पता"];

/// Maximum number of lines absorbed after the label line.
const FOLLOWING_LINES: usize = 3;

/// Maximum number of lines taken by the unlabeled fallback.
const FALLBACK_LINES: usize = 3;

/// Address field extractor.
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }

    fn from_label(lines: &[&str]) -> Option<String> {
        for (i, line) in lines.iter().enumerate() {
            let lower = line.to_lowercase();
            if !ADDRESS_LABELS.iter().any(|l| lower.contains(l)) {
                continue;
            }

            let mut parts: Vec<&str> = Vec::new();

            if let Some(caps) = ADDRESS_LABEL.captures(line) {
                let first = strip_leading_punct(caps.get(1).map_or("", |m| m.as_str()));
                if !first.is_empty() {
                    parts.push(first);
                }
            }

            for next in lines.iter().skip(i + 1).take(FOLLOWING_LINES) {
                if PINCODE_LINE.is_match(next)
                    || UID_LINE.is_match(next)
                    || next.chars().count() <= 3
                {
                    break;
                }
                let cleaned = strip_leading_punct(next);
                if !cleaned.is_empty() {
                    parts.push(cleaned);
                }
            }

            if !parts.is_empty() {
                return Some(join_parts(&parts));
            }
        }
        None
    }

    fn from_unlabeled(lines: &[&str]) -> Option<String> {
        let parts: Vec<&str> = lines
            .iter()
            .filter(|line| {
                !UID_LINE.is_match(line) && !PINCODE_LINE.is_match(line) && !DATE_LINE.is_match(line)
            })
            .filter(|line| {
                line.chars().any(|c| c.is_ascii_alphabetic()) && line.chars().count() > 5
            })
            .map(|line| strip_leading_punct(line))
            .filter(|line| !line.is_empty())
            .take(FALLBACK_LINES)
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(join_parts(&parts))
        }
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = String;

    const FIELD: &'static str = "address";

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let lines = normalize_lines(text);
        Self::from_label(&lines).or_else(|| Self::from_unlabeled(&lines))
    }
}

/// Extract the address, or an empty string.
pub fn extract_address(text: &str) -> String {
    AddressExtractor::new().extract(text).unwrap_or_default()
}

fn join_parts(parts: &[&str]) -> String {
    strip_leading_punct(&parts.join(", ")).to_string()
}
