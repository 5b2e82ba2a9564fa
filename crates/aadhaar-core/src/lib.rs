//! Core library for Aadhaar card OCR processing.
//!
//! This crate provides:
//! - Document plausibility checks on recognized text
//! - Aadhaar field extraction (UID, name, DOB, gender, address, PIN, mobile)
//! - Front/back UID reconciliation and age band derivation
//! - Masking of sensitive fields for display
//! - An OCR pipeline running both card sides concurrently

pub mod card;
pub mod error;
pub mod models;
pub mod ocr;
pub mod pipeline;

pub use card::{
    age_band, mask, AadhaarParser, CardExtractor, CardParser, ExtractionResult,
};
pub use error::{AadhaarError, ExtractionError, OcrError, Result};
pub use models::config::AadhaarConfig;
pub use models::record::{AadhaarRecord, Gender, MaskedRecord, UidMatch};
pub use ocr::TextRecognizer;
#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
pub use pipeline::CardPipeline;

/// Build a pipeline backed by the native OCR engine described in `config`.
#[cfg(feature = "native")]
pub fn native_pipeline(config: &AadhaarConfig) -> Result<CardPipeline<PureOcrEngine>> {
    let engine = PureOcrEngine::from_models(&config.models, config.ocr.clone())?;
    Ok(CardPipeline::from_config(engine, config))
}
