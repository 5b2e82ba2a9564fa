//! Card holder name extraction.

use std::collections::HashSet;

use super::lines::normalize_lines;
use super::patterns::{DATE_LINE, NAME_PATTERNS, NAME_SHAPE};
use super::{is_single_repeated_char, FieldExtractor};

/// Label terms introducing the holder name.
const NAME_LABELS: [&str; 2] = ["name", "नाम"];

/// Label lines mentioning these belong to a relative or the card itself.
const NAME_LABEL_EXCLUDES: [&str; 6] = ["aadhaar", "aadhar", "father", "mother", "husband", "spouse"];

/// Lines carrying these are never a name.
const POSITIONAL_EXCLUDES: [&str; 7] = [
    "government",
    "aadhaar",
    "aadhar",
    "uidai",
    "dob",
    "male",
    "female",
];

/// How many lines after a bare label may hold the value.
const LOOKAHEAD_LINES: usize = 2;

/// Share of non-space characters that must be letters on a value line.
const MIN_LETTER_RATIO: f32 = 0.8;

/// Name field extractor.
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }

    fn from_label(lines: &[&str]) -> Option<String> {
        for (i, line) in lines.iter().enumerate() {
            let lower = line.to_lowercase();
            if !NAME_LABELS.iter().any(|l| lower.contains(l))
                || NAME_LABEL_EXCLUDES.iter().any(|e| lower.contains(e))
            {
                continue;
            }

            for pattern in NAME_PATTERNS.iter() {
                if let Some(caps) = pattern.captures(line) {
                    let name = letters_and_spaces(&caps[1]);
                    if name.len() >= 3 {
                        return Some(name);
                    }
                }
            }

            // Bare label: the value is on one of the following lines
            for next in lines.iter().skip(i + 1).take(LOOKAHEAD_LINES) {
                if looks_like_date_line(next) {
                    continue;
                }
                if letter_ratio(next) < MIN_LETTER_RATIO {
                    continue;
                }
                let cleaned = letters_and_spaces(next);
                if cleaned.len() >= 3 && !is_single_repeated_char(&cleaned) {
                    return Some(cleaned);
                }
            }
        }
        None
    }

    fn from_position(lines: &[&str]) -> Option<String> {
        for line in lines.iter().take(15) {
            let lower = line.to_lowercase();
            if POSITIONAL_EXCLUDES.iter().any(|e| lower.contains(e))
                || is_bare_uid(line)
                || DATE_LINE.is_match(line)
            {
                continue;
            }

            let cleaned = letters_and_spaces(line);
            let words: Vec<&str> = cleaned.split_whitespace().collect();
            if !(2..=6).contains(&words.len()) || !(5..=50).contains(&cleaned.len()) {
                continue;
            }
            if !cleaned.starts_with(|c: char| c.is_ascii_uppercase()) {
                continue;
            }

            let distinct: HashSet<char> = cleaned
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_lowercase())
                .collect();
            if distinct.len() > 1 {
                return Some(words.join(" "));
            }
        }
        None
    }

    fn from_shape(lines: &[&str]) -> Option<String> {
        lines.iter().take(10).find_map(|line| {
            let name = NAME_SHAPE.find(line)?.as_str().trim();
            (name.len() >= 5).then(|| name.to_string())
        })
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = String;

    const FIELD: &'static str = "name";

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let lines = normalize_lines(text);

        Self::from_label(&lines)
            .or_else(|| Self::from_position(&lines))
            .or_else(|| Self::from_shape(&lines))
    }
}

/// Extract the card holder name, or an empty string.
pub fn extract_name(text: &str) -> String {
    NameExtractor::new().extract(text).unwrap_or_default()
}

/// Keep ASCII letters and whitespace only, trimmed.
fn letters_and_spaces(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

fn letter_ratio(s: &str) -> f32 {
    let (letters, total) = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .fold((0usize, 0usize), |(l, t), c| {
            (l + usize::from(c.is_ascii_alphabetic()), t + 1)
        });
    if total == 0 {
        return 0.0;
    }
    letters as f32 / total as f32
}

fn looks_like_date_line(line: &str) -> bool {
    if line.starts_with(|c: char| c.is_ascii_digit()) {
        return true;
    }
    let lower = line.to_lowercase();
    ["dob", "date", "year"].iter().any(|k| lower.contains(k))
}

fn is_bare_uid(line: &str) -> bool {
    line.len() == 12 && line.bytes().all(|b| b.is_ascii_digit())
}
