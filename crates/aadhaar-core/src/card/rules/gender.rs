//! Gender extraction.

use super::FieldExtractor;
use super::lines::normalize_lines;
use crate::models::record::Gender;

/// Gender field extractor.
pub struct GenderExtractor;

impl GenderExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GenderExtractor {
    type Output = Gender;

    const FIELD: &'static str = "gender";

    fn extract(&self, text: &str) -> Option<Self::Output> {
        normalize_lines(text)
            .iter()
            .find_map(|line| classify(&line.to_lowercase()))
            .or_else(|| classify(&text.to_lowercase()))
    }
}

/// Extract the gender printed on the card.
pub fn extract_gender(text: &str) -> Option<Gender> {
    GenderExtractor::new().extract(text)
}

// "female" contains "male", so the male check has to exclude it.
fn classify(lower: &str) -> Option<Gender> {
    if lower.contains("male") && !lower.contains("female") {
        Some(Gender::Male)
    } else if lower.contains("female") {
        Some(Gender::Female)
    } else if lower.contains("transgender") {
        Some(Gender::Transgender)
    } else {
        None
    }
}
