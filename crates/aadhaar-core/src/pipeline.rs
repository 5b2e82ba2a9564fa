//! Image-to-record pipeline: concurrent OCR of both sides, then parsing.

use std::sync::Arc;

use tracing::debug;

use crate::card::{AadhaarParser, CardParser, ExtractionResult, Result};
use crate::error::{ExtractionError, OcrError};
use crate::models::config::AadhaarConfig;
use crate::ocr::TextRecognizer;

/// Runs a [`TextRecognizer`] over the front and back images and parses the
/// recognized text.
pub struct CardPipeline<R: TextRecognizer> {
    recognizer: Arc<R>,
    parser: Arc<AadhaarParser>,
}

impl<R: TextRecognizer + 'static> CardPipeline<R> {
    /// Create a pipeline with a default parser.
    pub fn new(recognizer: R) -> Self {
        Self::with_parser(recognizer, AadhaarParser::new())
    }

    /// Create a pipeline with a custom parser.
    pub fn with_parser(recognizer: R, parser: AadhaarParser) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
            parser: Arc::new(parser),
        }
    }

    /// Create a pipeline whose parser follows `config.extraction`.
    pub fn from_config(recognizer: R, config: &AadhaarConfig) -> Self {
        Self::with_parser(recognizer, AadhaarParser::from_config(&config.extraction))
    }

    /// Recognize both images concurrently, then extract the card record.
    ///
    /// Either recognition failing fails the whole call; no partial results.
    pub async fn extract(&self, front: Vec<u8>, back: Vec<u8>) -> Result<ExtractionResult> {
        let (front_text, back_text) =
            tokio::try_join!(self.recognize(front, "front"), self.recognize(back, "back"))?;

        let parser = Arc::clone(&self.parser);
        tokio::task::spawn_blocking(move || parser.parse(&front_text, &back_text))
            .await
            .map_err(|e| ExtractionError::Recognition(OcrError::Recognition(e.to_string())))?
    }

    async fn recognize(&self, image: Vec<u8>, side: &'static str) -> Result<String> {
        let recognizer = Arc::clone(&self.recognizer);
        let text = tokio::task::spawn_blocking(move || recognizer.recognize(&image))
            .await
            .map_err(|e| OcrError::Recognition(format!("{} side worker failed: {}", side, e)))??;

        debug!("Recognized {} chars on the {} side", text.len(), side);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::UidMatch;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    /// Treats the image bytes as already-recognized UTF-8 text.
    struct Utf8Recognizer;

    impl TextRecognizer for Utf8Recognizer {
        fn recognize(&self, image: &[u8]) -> std::result::Result<String, OcrError> {
            String::from_utf8(image.to_vec()).map_err(|e| OcrError::InvalidImage(e.to_string()))
        }
    }

    fn pipeline() -> CardPipeline<Utf8Recognizer> {
        let parser = AadhaarParser::new()
            .with_reference_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        CardPipeline::with_parser(Utf8Recognizer, parser)
    }

    #[tokio::test]
    async fn test_extract_end_to_end() {
        let front = b"GOVERNMENT OF INDIA\nRahul Kumar\nDOB: 15/06/2000\nMALE\n4821 7390 5566".to_vec();
        let back = b"Address: 12 MG Road\nBengaluru\n560001\nMobile: 9876543210".to_vec();

        let result = pipeline().extract(front, back).await.unwrap();

        assert_eq!(result.record.uid, "482173905566");
        assert_eq!(result.record.uid_match, UidMatch::BackNotFound);
        assert_eq!(result.record.pincode, "560001");
        assert_eq!(result.record.mobile_number, "9876543210");
        assert_eq!(result.record.age_band, "20-30");
    }

    #[tokio::test]
    async fn test_recognition_failure_propagates() {
        let front = b"GOVERNMENT OF INDIA\nMALE\n4821 7390 5566".to_vec();
        let back = vec![0xff, 0xfe, 0x00];

        let err = pipeline().extract(front, back).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Recognition(OcrError::InvalidImage(_))));
        assert_eq!(err.code(), "OCR_EXTRACTION_ERROR");
    }

    #[tokio::test]
    async fn test_card_not_recognized() {
        let err = pipeline()
            .extract(b"hello".to_vec(), b"world".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::CardNotRecognized));
    }
}
