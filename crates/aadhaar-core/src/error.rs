//! Error types for the aadhaar-core library.

use thiserror::Error;

/// Main error type for the aadhaar library.
#[derive(Error, Debug)]
pub enum AadhaarError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the OCR collaborator.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// The image bytes could not be decoded.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),
}

/// Hard failures of card extraction.
///
/// Everything else (name, date of birth, gender, address, pincode, mobile)
/// degrades to an empty value instead of failing.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Neither side looks like an Aadhaar card.
    #[error("Invalid Aadhaar card image. Please upload a valid Aadhaar card image.")]
    CardNotRecognized,

    /// No 12-digit UID could be recovered from either side.
    #[error(
        "Could not extract UID from Aadhaar card. Please ensure the images are clear and valid. \
         The UID should be a 12-digit number visible on the card."
    )]
    UidNotFound,

    /// The OCR collaborator failed on one of the sides.
    #[error("OCR extraction failed: {0}")]
    Recognition(#[from] OcrError),
}

impl ExtractionError {
    /// Machine-readable failure code.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractionError::CardNotRecognized => "INVALID_AADHAAR_IMAGE",
            ExtractionError::UidNotFound => "UID_NOT_FOUND",
            ExtractionError::Recognition(_) => "OCR_EXTRACTION_ERROR",
        }
    }
}

/// Result type for the aadhaar library.
pub type Result<T> = std::result::Result<T, AadhaarError>;
