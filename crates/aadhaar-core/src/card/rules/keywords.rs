//! Aadhaar document plausibility check.

use tracing::debug;

/// Terms that appear on genuine Aadhaar cards.
pub const DEFAULT_DOCUMENT_KEYWORDS: &[&str] = &[
    "aadhaar",
    "aadhar",
    "government of india",
    "goi",
    "uidai",
    "enrolment",
    "male",
    "female",
    "transgender",
];

/// Scores OCR text against a keyword vocabulary.
///
/// A single keyword hit is too easy to get from OCR noise, so a side only
/// counts as plausible once `min_matches` distinct keywords are present.
#[derive(Debug, Clone)]
pub struct DocumentValidator {
    keywords: Vec<String>,
    min_matches: usize,
}

impl DocumentValidator {
    /// Create a validator from a keyword list and a match threshold.
    pub fn new<I, S>(keywords: I, min_matches: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            min_matches,
        }
    }

    /// Number of distinct keywords found in `text`.
    pub fn score(&self, text: &str) -> usize {
        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| lower.contains(k.as_str()))
            .count()
    }

    /// Whether `text` plausibly comes from an Aadhaar card.
    pub fn is_plausible(&self, text: &str) -> bool {
        let score = self.score(text);
        debug!("Document keyword score {} (need {})", score, self.min_matches);
        score >= self.min_matches
    }
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_KEYWORDS, 2)
    }
}
