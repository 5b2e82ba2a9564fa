//! Postal code (PIN) extraction.

use super::FieldExtractor;
use super::patterns::PINCODE;

/// PIN code field extractor.
///
/// Addresses end with the PIN, so candidates are scanned from the last one
/// backwards. Indian PIN codes never start with 0, which filters out most
/// unrelated 6-digit noise.
pub struct PincodeExtractor;

impl PincodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PincodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PincodeExtractor {
    type Output = String;

    const FIELD: &'static str = "pincode";

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let candidates: Vec<&str> = PINCODE.find_iter(text).map(|m| m.as_str()).collect();

        candidates
            .iter()
            .rev()
            .find(|c| !c.starts_with('0'))
            .or_else(|| candidates.last())
            .map(|c| c.to_string())
    }
}

/// Extract the PIN code, or an empty string.
pub fn extract_pincode(text: &str) -> String {
    PincodeExtractor::new().extract(text).unwrap_or_default()
}
