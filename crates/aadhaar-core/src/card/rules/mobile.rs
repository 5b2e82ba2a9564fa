//! Mobile number extraction.

use super::FieldExtractor;
use super::patterns::MOBILE;

/// Mobile number field extractor (10 digits starting with 6-9).
pub struct MobileExtractor;

impl MobileExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MobileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MobileExtractor {
    type Output = String;

    const FIELD: &'static str = "mobile_number";

    fn extract(&self, text: &str) -> Option<Self::Output> {
        MOBILE.find(text).map(|m| m.as_str().to_string())
    }
}

/// Extract the mobile number, or an empty string.
pub fn extract_mobile(text: &str) -> String {
    MobileExtractor::new().extract(text).unwrap_or_default()
}
