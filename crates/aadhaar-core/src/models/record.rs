//! Aadhaar card record models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured fields extracted from the front and back of an Aadhaar card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AadhaarRecord {
    /// Card holder name (best-effort, may be empty).
    pub name: String,

    /// Date of birth exactly as printed, original delimiter preserved.
    pub date_of_birth: String,

    /// Gender category.
    pub gender: Gender,

    /// 12-digit Aadhaar number.
    pub uid: String,

    /// Address fragments joined with ", ".
    pub address: String,

    /// 6-digit postal code (may be empty).
    pub pincode: String,

    /// 10-digit mobile number (may be empty).
    pub mobile_number: String,

    /// Agreement between the UIDs printed on both sides.
    pub uid_match: UidMatch,

    /// Coarse age bracket derived from the date of birth.
    pub age_band: String,

    /// Front text, a newline, then back text.
    pub raw_text: String,
}

/// Gender printed on the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Transgender,
    #[default]
    Unknown,
}

impl Gender {
    /// Upper-case label as printed in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Transgender => "TRANSGENDER",
            Gender::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing the front and back UIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UidMatch {
    /// Both sides carry the same UID.
    Matched,
    /// Both sides carry a UID and they differ.
    Mismatch,
    /// The back side has no recoverable UID.
    BackNotFound,
}

impl fmt::Display for UidMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UidMatch::Matched => "UID Matched",
            UidMatch::Mismatch => "UID Mismatch",
            UidMatch::BackNotFound => "Back UID Not Found",
        };
        f.write_str(label)
    }
}

/// Display-safe projection of an [`AadhaarRecord`].
///
/// Name and UID are fully redacted, the address keeps only its tail.
/// The raw OCR text is not carried over since it contains both in clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedRecord {
    pub name: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub uid: String,
    pub address: String,
    pub pincode: String,
    pub mobile_number: String,
    pub uid_match: UidMatch,
    pub age_band: String,
}

impl AadhaarRecord {
    /// Build a masked copy of this record.
    pub fn masked(&self) -> MaskedRecord {
        crate::card::mask::mask(self)
    }

    /// Names of best-effort fields that came back empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.date_of_birth.is_empty() {
            missing.push("date_of_birth");
        }
        if self.gender == Gender::Unknown {
            missing.push("gender");
        }
        if self.address.is_empty() {
            missing.push("address");
        }
        if self.pincode.is_empty() {
            missing.push("pincode");
        }
        if self.mobile_number.is_empty() {
            missing.push("mobile_number");
        }
        missing
    }
}
