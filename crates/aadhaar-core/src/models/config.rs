//! Configuration structures for the OCR pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AadhaarError, Result};

/// Main configuration for the aadhaar pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AadhaarConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Card extraction configuration.
    pub extraction: ExtractionConfig,

    /// Model configuration.
    pub models: ModelConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Recognition confidence threshold (0.0 - 1.0).
    pub recognition_threshold: f32,

    /// Maximum image dimension (longer side) for processing.
    pub max_image_size: u32,

    /// Keep `[UNK]` tokens emitted by the recognizer instead of blanking them.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            recognition_threshold: 0.0, // Disabled - CTC confidence scores are inherently low
            max_image_size: 2048,
            keep_unk: false,
        }
    }
}

/// Card extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Keywords that identify an Aadhaar card (matched case-insensitively).
    pub document_keywords: Vec<String>,

    /// Number of distinct keywords a side needs to count as a plausible card.
    pub min_keyword_matches: usize,

    /// Retry side-specific extractors on the front+back text when they come back empty.
    pub fallback_to_combined: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            document_keywords: crate::card::rules::DEFAULT_DOCUMENT_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            min_keyword_matches: 2,
            fallback_to_combined: true,
        }
    }
}

/// Model file paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
        }
    }
}

impl ModelConfig {
    pub fn detection_path(&self) -> PathBuf {
        self.model_dir.join(&self.detection_model)
    }

    pub fn recognition_path(&self) -> PathBuf {
        self.model_dir.join(&self.recognition_model)
    }

    pub fn dictionary_path(&self) -> PathBuf {
        self.model_dir.join(&self.dictionary)
    }
}

impl AadhaarConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| AadhaarError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AadhaarError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AadhaarConfig =
            serde_json::from_str(r#"{"extraction": {"min_keyword_matches": 3}}"#).unwrap();

        assert_eq!(config.extraction.min_keyword_matches, 3);
        assert!(config.extraction.fallback_to_combined);
        assert_eq!(config.extraction.document_keywords.len(), 9);
        assert_eq!(config.ocr.max_image_size, 2048);
    }

    #[test]
    fn test_model_paths() {
        let mut config = AadhaarConfig::default();
        config.models.model_dir = PathBuf::from("/opt/ocr");

        assert_eq!(config.models.detection_path(), PathBuf::from("/opt/ocr/det.onnx"));
        assert_eq!(
            config.models.recognition_path(),
            PathBuf::from("/opt/ocr/latin_rec.onnx")
        );
        assert_eq!(
            config.models.dictionary_path(),
            PathBuf::from("/opt/ocr/latin_dict.txt")
        );
    }
}
