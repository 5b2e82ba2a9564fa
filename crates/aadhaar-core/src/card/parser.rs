//! Two-sided Aadhaar card parser.
//!
//! Parsing is a linear sequence of stages, each of which may stop with a
//! typed [`ExtractionError`]:
//!
//! 1. validate: at least one side must look like an Aadhaar card
//! 2. extract: run the field extractors on their natural side
//! 3. reconcile: compare the UIDs and pick the canonical one
//! 4. assemble: build the record and derive the age band

use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::{AadhaarRecord, Gender};

use super::age::age_band_at;
use super::reconcile::{reconcile, Reconciliation};
use super::rules::{
    extract_with_fallback, AddressExtractor, DobExtractor, DocumentValidator, FieldExtractor,
    GenderExtractor, MobileExtractor, NameExtractor, PincodeExtractor, UidExtractor,
};
use super::{CardExtractor, Result};

/// Result of card extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted card data.
    pub record: AadhaarRecord,
    /// Best-effort fields that could not be extracted.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for card parsing.
pub trait CardParser {
    /// Parse a card from the OCR text of its front and back sides.
    fn parse(&self, front: &str, back: &str) -> Result<ExtractionResult>;
}

/// Fields pulled out of the text before reconciliation.
#[derive(Debug, Default)]
struct ExtractedFields {
    name: String,
    date_of_birth: String,
    gender: Gender,
    address: String,
    pincode: String,
    mobile_number: String,
    front_uid: Option<String>,
    back_uid: Option<String>,
}

/// Rule-based Aadhaar parser.
pub struct AadhaarParser {
    /// Document plausibility check applied to each side.
    validator: DocumentValidator,
    /// Retry empty side-specific fields on the combined text.
    fallback_to_combined: bool,
    /// Date the age band is computed against (defaults to today).
    reference_date: Option<NaiveDate>,
}

impl AadhaarParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            validator: DocumentValidator::default(),
            fallback_to_combined: true,
            reference_date: None,
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_validator(DocumentValidator::new(
                &config.document_keywords,
                config.min_keyword_matches,
            ))
            .with_fallback(config.fallback_to_combined)
    }

    /// Replace the document validator.
    pub fn with_validator(mut self, validator: DocumentValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Set combined-text fallback for side-specific fields.
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_combined = enabled;
        self
    }

    /// Compute age bands as of `date` instead of today.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    fn validate(&self, front: &str, back: &str) -> Result<()> {
        let front_ok = self.validator.is_plausible(front);
        let back_ok = self.validator.is_plausible(back);
        debug!("Document check: front={} back={}", front_ok, back_ok);

        if !front_ok && !back_ok {
            return Err(ExtractionError::CardNotRecognized);
        }
        Ok(())
    }

    fn extract_fields(&self, front: &str, back: &str, combined: &str) -> ExtractedFields {
        let fallback = self.fallback_to_combined.then_some(combined);

        let fields = ExtractedFields {
            name: field(&NameExtractor::new(), front, fallback),
            date_of_birth: field(&DobExtractor::new(), front, fallback),
            gender: field(&GenderExtractor::new(), front, fallback),
            address: field(&AddressExtractor::new(), back, fallback),
            pincode: field(&PincodeExtractor::new(), back, fallback),
            mobile_number: field(&MobileExtractor::new(), back, fallback),
            // Both UIDs are needed as-is for reconciliation, so no fallback.
            front_uid: UidExtractor::new().extract(front),
            back_uid: UidExtractor::new().extract(back),
        };

        debug!(
            "UID candidates: front={} back={}",
            fields.front_uid.is_some(),
            fields.back_uid.is_some()
        );
        fields
    }

    fn reconcile(&self, fields: &ExtractedFields) -> Result<(String, Reconciliation)> {
        let reconciliation = reconcile(fields.front_uid.as_deref(), fields.back_uid.as_deref());
        match reconciliation.uid.clone() {
            Some(uid) => Ok((uid, reconciliation)),
            None => Err(ExtractionError::UidNotFound),
        }
    }

    fn assemble(
        &self,
        fields: ExtractedFields,
        uid: String,
        reconciliation: Reconciliation,
        raw_text: String,
    ) -> AadhaarRecord {
        let today = self
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());

        AadhaarRecord {
            age_band: age_band_at(&fields.date_of_birth, today),
            name: fields.name,
            date_of_birth: fields.date_of_birth,
            gender: fields.gender,
            uid,
            address: fields.address,
            pincode: fields.pincode,
            mobile_number: fields.mobile_number,
            uid_match: reconciliation.status,
            raw_text,
        }
    }
}

impl Default for AadhaarParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser for AadhaarParser {
    fn parse(&self, front: &str, back: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        self.validate(front, back)?;

        let combined = format!("{}\n{}", front, back);
        let fields = self.extract_fields(front, back, &combined);
        let (uid, reconciliation) = self.reconcile(&fields)?;
        let record = self.assemble(fields, uid, reconciliation, combined);

        let warnings: Vec<String> = record
            .missing_fields()
            .into_iter()
            .map(|f| format!("Could not extract {}", f))
            .collect();

        info!(
            "Parsed card: uid {}, {} of 6 optional fields missing",
            record.uid_match,
            warnings.len()
        );

        Ok(ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl CardExtractor for AadhaarParser {
    fn extract_from_text(&self, front: &str, back: &str) -> Result<AadhaarRecord> {
        self.parse(front, back).map(|r| r.record)
    }
}

/// Run one best-effort extractor, defaulting to an empty value.
fn field<E>(extractor: &E, primary: &str, fallback: Option<&str>) -> E::Output
where
    E: FieldExtractor,
    E::Output: Default,
{
    let value = extract_with_fallback(extractor, primary, fallback);
    debug!("{}: {}", E::FIELD, if value.is_some() { "found" } else { "missing" });
    value.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::UidMatch;
    use pretty_assertions::assert_eq;

    const FRONT: &str = "GOVERNMENT OF INDIA\n\
                         Rahul Kumar\n\
                         DOB: 15/06/2000\n\
                         MALE\n\
                         4821 7390 5566";

    const BACK: &str = "Address: 12 MG Road\n\
                        Bengaluru Karnataka\n\
                        560001\n\
                        Mobile: 9876543210";

    fn parser() -> AadhaarParser {
        AadhaarParser::new().with_reference_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn test_parse_without_back_uid() {
        let result = parser().parse(FRONT, BACK).unwrap();
        let record = result.record;

        assert_eq!(record.name, "Rahul Kumar");
        assert_eq!(record.date_of_birth, "15/06/2000");
        assert_eq!(record.gender, Gender::Male);
        assert_eq!(record.uid, "482173905566");
        assert_eq!(record.address, "12 MG Road, Bengaluru Karnataka");
        assert_eq!(record.pincode, "560001");
        assert_eq!(record.mobile_number, "9876543210");
        assert_eq!(record.uid_match, UidMatch::BackNotFound);
        assert_eq!(record.age_band, "20-30");
        assert_eq!(record.raw_text, format!("{}\n{}", FRONT, BACK));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_parse_matched_uid() {
        let back = format!("{}\n4821 7390 5566", BACK);
        let record = parser().extract_from_text(FRONT, &back).unwrap();
        assert_eq!(record.uid_match, UidMatch::Matched);
    }

    #[test]
    fn test_parse_mismatched_uid() {
        let back = format!("{}\n2345 6789 0123", BACK);
        let record = parser().extract_from_text(FRONT, &back).unwrap();
        assert_eq!(record.uid_match, UidMatch::Mismatch);
        assert_eq!(record.uid, "482173905566");
    }

    #[test]
    fn test_card_not_recognized() {
        let err = parser()
            .parse("Invoice 42\n4821 7390 5566", "Thank you for shopping")
            .unwrap_err();
        assert!(matches!(err, ExtractionError::CardNotRecognized));
    }

    #[test]
    fn test_one_bad_side_is_tolerated() {
        let record = parser().extract_from_text(FRONT, "blurry").unwrap();
        assert_eq!(record.uid, "482173905566");
        assert_eq!(record.pincode, "");
    }

    #[test]
    fn test_uid_not_found() {
        let err = parser()
            .parse("Government of India\nRahul Kumar\nMALE", BACK)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::UidNotFound));
    }

    #[test]
    fn test_uid_from_back_only() {
        let front = "Government of India\nRahul Kumar\nMALE";
        let back = format!("{}\n4821 7390 5566", BACK);
        let record = parser().extract_from_text(front, &back).unwrap();
        assert_eq!(record.uid, "482173905566");
        assert_eq!(record.uid_match, UidMatch::BackNotFound);
    }

    #[test]
    fn test_front_fields_fall_back_to_combined() {
        let front = "Government of India\nMALE\n4821 7390 5566";
        let back = "Year of issue\n01/02/1985\nPIN 110001";

        let record = parser().extract_from_text(front, back).unwrap();
        assert_eq!(record.date_of_birth, "01/02/1985");

        let record = parser()
            .with_fallback(false)
            .extract_from_text(front, back)
            .unwrap();
        assert_eq!(record.date_of_birth, "");
        assert_eq!(record.age_band, "Unknown");
    }

    #[test]
    fn test_warnings_for_missing_fields() {
        let result = parser()
            .with_fallback(false)
            .parse("Government of India\nMALE\n4821 7390 5566", "Aadhaar uidai")
            .unwrap();
        assert!(result.warnings.contains(&"Could not extract date_of_birth".to_string()));
        assert!(result.warnings.contains(&"Could not extract pincode".to_string()));
    }

    #[test]
    fn test_from_config_threshold() {
        let config = ExtractionConfig {
            min_keyword_matches: 3,
            ..ExtractionConfig::default()
        };
        let err = AadhaarParser::from_config(&config)
            .parse(FRONT, BACK)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::CardNotRecognized));
    }
}
