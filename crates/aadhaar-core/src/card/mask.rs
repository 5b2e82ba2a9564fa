//! Redaction of sensitive record fields for display and logging.

use crate::models::record::{AadhaarRecord, MaskedRecord};

const MIN_NAME_MASK: usize = 15;
const MIN_UID_MASK: usize = 12;
const MIN_ADDRESS_MASK: usize = 20;

/// Trailing address characters left visible.
const VISIBLE_ADDRESS_CHARS: usize = 25;

/// Replace a name with at least 15 asterisks.
pub fn mask_name(name: &str) -> String {
    mask_fully(name, MIN_NAME_MASK)
}

/// Replace a UID with at least 12 asterisks.
pub fn mask_uid(uid: &str) -> String {
    mask_fully(uid, MIN_UID_MASK)
}

/// Keep the last 25 characters of an address and mask the rest.
///
/// The mask is never shorter than 20 characters, so short addresses are
/// shown in full behind a 20+ character prefix.
pub fn mask_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let len = address.chars().count();
    if len <= VISIBLE_ADDRESS_CHARS {
        return format!("{}{}", "*".repeat(len.max(MIN_ADDRESS_MASK)), address);
    }

    let hidden = len - VISIBLE_ADDRESS_CHARS;
    let visible: String = address.chars().skip(hidden).collect();
    format!("{}{}", "*".repeat(hidden.max(MIN_ADDRESS_MASK)), visible)
}

/// Masked copy of `record`.
pub fn mask(record: &AadhaarRecord) -> MaskedRecord {
    MaskedRecord {
        name: mask_name(&record.name),
        date_of_birth: record.date_of_birth.clone(),
        gender: record.gender,
        uid: mask_uid(&record.uid),
        address: mask_address(&record.address),
        pincode: record.pincode.clone(),
        mobile_number: record.mobile_number.clone(),
        uid_match: record.uid_match,
        age_band: record.age_band.clone(),
    }
}

fn mask_fully(value: &str, min_len: usize) -> String {
    if value.is_empty() {
        return String::new();
    }
    "*".repeat(value.chars().count().max(min_len))
}
