//! Aadhaar card field extraction module.

pub mod age;
pub mod mask;
mod parser;
pub mod reconcile;
pub mod rules;

pub use age::{age_band, age_band_at};
pub use mask::{mask, mask_address, mask_name, mask_uid};
pub use parser::{AadhaarParser, CardParser, ExtractionResult};
pub use reconcile::{reconcile, Reconciliation};

use crate::error::ExtractionError;
use crate::models::record::AadhaarRecord;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for card extractors working on recognized text.
pub trait CardExtractor {
    /// Extract a record from the OCR text of the front and back sides.
    fn extract_from_text(&self, front: &str, back: &str) -> Result<AadhaarRecord>;
}
