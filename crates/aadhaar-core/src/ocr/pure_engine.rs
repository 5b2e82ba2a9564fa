//! Pure Rust OCR engine wrapper using `pure-onnx-ocr`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

use image::{imageops::FilterType, DynamicImage, GenericImageView};
use pure_onnx_ocr::engine::{OcrEngine, OcrEngineBuilder};
use tracing::{debug, info};

use crate::error::OcrError;
use crate::models::config::{ModelConfig, OcrConfig};

use super::{boxes_to_text, TextBox, TextRecognizer};

/// Detection model, recognition model and dictionary paths.
type ModelPaths = (PathBuf, PathBuf, PathBuf);

thread_local! {
    // `OcrEngine` keeps per-session caches behind `RefCell` and cannot leave
    // the thread that built it, so every worker thread loads its own copy.
    static ENGINES: RefCell<HashMap<ModelPaths, Rc<OcrEngine>>> = RefCell::new(HashMap::new());
}

/// OCR engine backed by `pure-onnx-ocr` (pure Rust, no external ONNX Runtime).
///
/// Holds only model locations and settings; the ONNX sessions live in a
/// per-thread cache and are loaded on first use in each thread.
pub struct PureOcrEngine {
    paths: ModelPaths,
    config: OcrConfig,
}

impl PureOcrEngine {
    /// Create an engine from the model files named in `models`.
    ///
    /// The models are loaded once on the calling thread so that a broken
    /// model directory is reported here rather than on the first image.
    pub fn from_models(models: &ModelConfig, config: OcrConfig) -> Result<Self, OcrError> {
        let paths = (
            models.detection_path(),
            models.recognition_path(),
            models.dictionary_path(),
        );

        for path in [&paths.0, &paths.1, &paths.2] {
            if !path.exists() {
                return Err(OcrError::ModelLoad(format!(
                    "model file not found: {}",
                    path.display()
                )));
            }
        }

        let engine = Self { paths, config };
        engine.engine()?;

        info!("Loaded pure-onnx-ocr engine from {}", models.model_dir.display());

        Ok(engine)
    }

    /// Create an engine from default model file names in a directory.
    pub fn from_dir(model_dir: &Path, config: OcrConfig) -> Result<Self, OcrError> {
        let models = ModelConfig {
            model_dir: model_dir.to_path_buf(),
            ..ModelConfig::default()
        };
        Self::from_models(&models, config)
    }

    /// This thread's engine for the configured models, loading it if needed.
    fn engine(&self) -> Result<Rc<OcrEngine>, OcrError> {
        let cached = ENGINES.with(|cache| cache.borrow().get(&self.paths).cloned());
        if let Some(engine) = cached {
            return Ok(engine);
        }

        let (det_path, rec_path, dict_path) = &self.paths;
        debug!("Loading OCR models on {:?}", std::thread::current().id());

        let engine = OcrEngineBuilder::new()
            .det_model_path(det_path)
            .rec_model_path(rec_path)
            .dictionary_path(dict_path)
            .build()
            .map_err(|e| OcrError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;
        let engine = Rc::new(engine);

        ENGINES.with(|cache| {
            cache
                .borrow_mut()
                .insert(self.paths.clone(), Rc::clone(&engine))
        });

        Ok(engine)
    }

    /// Recognize text in a decoded image.
    pub fn process(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let start = Instant::now();
        let image = self.fit(image);
        let (width, height) = image.dimensions();

        debug!("Processing image: {}x{}", width, height);

        let engine = self.engine()?;
        let results = engine
            .run_from_image(&image)
            .map_err(|e| OcrError::Recognition(format!("pure-onnx-ocr: {}", e)))?;

        let mut text_boxes: Vec<TextBox> = results
            .iter()
            .filter(|r| r.confidence >= self.config.recognition_threshold)
            .map(|r| {
                let text = if self.config.keep_unk {
                    r.text.clone()
                } else {
                    r.text.replace("[UNK]", " ")
                };
                TextBox {
                    bbox: polygon_to_bbox(&r.bounding_box),
                    text,
                    score: r.confidence,
                }
            })
            .collect();

        let text = boxes_to_text(&mut text_boxes);

        info!(
            "OCR complete: {} of {} text boxes kept in {}ms",
            text_boxes.len(),
            results.len(),
            start.elapsed().as_millis()
        );

        Ok(text)
    }

    /// Downscale images whose longer side exceeds `max_image_size`.
    fn fit(&self, image: &DynamicImage) -> DynamicImage {
        let (width, height) = image.dimensions();
        let max = self.config.max_image_size;
        if max == 0 || width.max(height) <= max {
            return image.clone();
        }

        debug!("Downscaling {}x{} to fit {}", width, height, max);
        image.resize(max, max, FilterType::Triangle)
    }
}

impl TextRecognizer for PureOcrEngine {
    fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        let decoded =
            image::load_from_memory(image).map_err(|e| OcrError::InvalidImage(e.to_string()))?;
        self.process(&decoded)
    }
}

/// Convert a `Polygon<f64>` to our `[f32; 8]` bbox format.
///
/// Extracts the first 4 exterior points (quadrilateral) as
/// `[x1, y1, x2, y2, x3, y3, x4, y4]`.
fn polygon_to_bbox(polygon: &pure_onnx_ocr::Polygon<f64>) -> [f32; 8] {
    let mut bbox = [0.0f32; 8];
    for (i, coord) in polygon.exterior().coords().take(4).enumerate() {
        bbox[i * 2] = coord.x as f32;
        bbox[i * 2 + 1] = coord.y as f32;
    }
    bbox
}
