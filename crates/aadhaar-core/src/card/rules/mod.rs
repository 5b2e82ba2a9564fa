//! Rule-based field extractors for Aadhaar cards.
//!
//! Every extractor is a cascade of pure matchers over OCR text: the first
//! strategy that yields a value wins, later ones are fallbacks for noisier
//! scans.

pub mod address;
pub mod dob;
pub mod gender;
pub mod keywords;
pub mod lines;
pub mod mobile;
pub mod name;
pub mod patterns;
pub mod pincode;
pub mod uid;

pub use address::{extract_address, AddressExtractor};
pub use dob::{extract_dob, DobExtractor};
pub use gender::{extract_gender, GenderExtractor};
pub use keywords::{DocumentValidator, DEFAULT_DOCUMENT_KEYWORDS};
pub use lines::normalize_lines;
pub use mobile::{extract_mobile, MobileExtractor};
pub use name::{extract_name, NameExtractor};
pub use pincode::{extract_pincode, PincodeExtractor};
pub use uid::{extract_uid, is_valid_uid, UidExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Field name used in logs and warnings.
    const FIELD: &'static str;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// Run `extractor` on `primary`, retrying on `fallback` when nothing is found.
pub fn extract_with_fallback<E: FieldExtractor>(
    extractor: &E,
    primary: &str,
    fallback: Option<&str>,
) -> Option<E::Output> {
    extractor
        .extract(primary)
        .or_else(|| fallback.and_then(|text| extractor.extract(text)))
}

/// True when every non-space character of `s` is the same letter, ignoring case.
pub(crate) fn is_single_repeated_char(s: &str) -> bool {
    let mut chars = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase());
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_fallback() {
        let front = "no digits here";
        let combined = "no digits here\nPIN 560001";

        assert_eq!(
            extract_with_fallback(&PincodeExtractor::new(), front, Some(combined)),
            Some("560001".to_string())
        );
        assert_eq!(extract_with_fallback(&PincodeExtractor::new(), front, None), None);
    }

    #[test]
    fn test_single_repeated_char() {
        assert!(is_single_repeated_char("AAA aaa"));
        assert!(!is_single_repeated_char("ANAND"));
    }
}
