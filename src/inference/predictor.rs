//! Inference Predictor Module
//!
//! Provides functionality for classifying skin photographs with the trained
//! model: image preprocessing, the forward pass, and result shaping.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use burn::module::Module;
use burn::record::CompactRecorder;
use burn::tensor::{backend::Backend, Tensor};
use image::{imageops::FilterType, DynamicImage};
use serde::{Deserialize, Serialize};

use crate::catalog::{class_name, disease_info, NUM_CLASSES};
use crate::model::{SkinClassifier, SkinClassifierConfig};
use crate::utils::error::{Result, SkinScanError};

/// Side length of the square model input
pub const INPUT_SIZE: u32 = 128;

/// Number of predictions reported alongside the top one
pub const TOP_K: usize = 3;

/// Resize an image to the target dimensions
fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, FilterType::Triangle)
}

/// Scale an RGB image into [0, 1] floats, channels-last (HWC) layout
fn normalize_image(image: &DynamicImage) -> Vec<f32> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut normalized = Vec::with_capacity((width * height * 3) as usize);
    for pixel in rgb.pixels() {
        normalized.push(pixel[0] as f32 / 255.0);
        normalized.push(pixel[1] as f32 / 255.0);
        normalized.push(pixel[2] as f32 / 255.0);
    }

    normalized
}

/// A single class prediction with its probability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassScore {
    /// Class index
    pub class_id: usize,
    /// Class label
    pub class_name: String,
    /// Probability assigned to this class
    pub probability: f32,
}

/// Result of a single prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Path to the input image (if applicable)
    pub image_path: Option<PathBuf>,

    /// Predicted class index
    pub predicted_class: usize,

    /// Predicted class label
    pub class_name: String,

    /// Confidence score (probability) for the predicted class
    pub confidence: f32,

    /// Full probability distribution over all classes
    pub probabilities: Vec<f32>,

    /// Top-k predictions with their probabilities
    pub top_k: Vec<ClassScore>,

    /// Canned description of the predicted disease
    pub info: String,

    /// Inference time in milliseconds
    pub inference_time_ms: f64,
}

impl PredictionResult {
    /// Build a result from a probability vector
    pub fn new(
        probabilities: Vec<f32>,
        inference_time: Duration,
        image_path: Option<PathBuf>,
    ) -> Self {
        // Find predicted class (argmax)
        let (predicted_class, &confidence) = probabilities
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap_or((0, &0.0));

        let name = class_name(predicted_class).unwrap_or("Unknown");

        let mut indexed: Vec<(usize, f32)> = probabilities
            .iter()
            .enumerate()
            .map(|(i, &p)| (i, p))
            .collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

        let top_k: Vec<ClassScore> = indexed
            .iter()
            .take(TOP_K)
            .map(|&(idx, prob)| ClassScore {
                class_id: idx,
                class_name: class_name(idx).unwrap_or("Unknown").to_string(),
                probability: prob,
            })
            .collect();

        Self {
            image_path,
            predicted_class,
            class_name: name.to_string(),
            confidence,
            probabilities,
            top_k,
            info: disease_info(name).to_string(),
            inference_time_ms: inference_time.as_secs_f64() * 1000.0,
        }
    }

    /// Pretty print the prediction result
    pub fn display(&self) -> String {
        let mut output = String::new();

        if let Some(path) = &self.image_path {
            output.push_str(&format!("Image: {:?}\n", path));
        }

        output.push_str(&format!(
            "Prediction: {} (class {})\n",
            self.class_name, self.predicted_class
        ));
        output.push_str(&format!("Confidence: {:.2}%\n", self.confidence * 100.0));
        output.push_str(&format!("Inference time: {:.2} ms\n", self.inference_time_ms));

        output.push_str(&format!("\nTop-{} predictions:\n", TOP_K));
        for (i, score) in self.top_k.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} (class {}) - {:.2}%\n",
                i + 1,
                score.class_name,
                score.class_id,
                score.probability * 100.0
            ));
        }

        output.push_str(&format!("\n{}\n", self.info));

        output
    }
}

/// Predictor for classifying images with the trained model
///
/// Owns the loaded model, the one long-lived resource of the system. It is
/// read-only after construction, so a single instance can serve every
/// request for the process lifetime.
pub struct Predictor<B: Backend> {
    model: SkinClassifier<B>,
    device: B::Device,
    image_size: u32,
}

impl<B: Backend> Predictor<B> {
    /// Load the trained weights from a record file
    pub fn load(model_path: &Path, device: &B::Device) -> Result<Self> {
        if !model_path.exists() {
            return Err(SkinScanError::PathNotFound(model_path.to_path_buf()));
        }

        let config = SkinClassifierConfig::new();
        let model: SkinClassifier<B> = SkinClassifier::new(&config, device);
        let recorder = CompactRecorder::new();
        let model = model
            .load_file(model_path, &recorder, device)
            .map_err(|e| SkinScanError::Model(format!("failed to load weights: {:?}", e)))?;

        Ok(Self {
            model,
            device: device.clone(),
            image_size: INPUT_SIZE,
        })
    }

    /// Wrap an already constructed model
    pub fn with_model(model: SkinClassifier<B>, device: B::Device) -> Self {
        Self {
            model,
            device,
            image_size: INPUT_SIZE,
        }
    }

    /// Preprocess an image for inference
    ///
    /// Forces RGB, resizes to the model input size, and scales intensities
    /// into [0, 1], channels-last.
    pub fn preprocess(&self, image: &DynamicImage) -> Vec<f32> {
        let resized = resize_image(image, self.image_size, self.image_size);
        normalize_image(&resized)
    }

    /// Classify a decoded image
    pub fn predict_image(&self, image: &DynamicImage) -> Result<PredictionResult> {
        let pixels = self.preprocess(image);
        let size = self.image_size as usize;

        // Batch of one, channels-last: [1, H, W, 3]
        let tensor = Tensor::<B, 1>::from_floats(pixels.as_slice(), &self.device)
            .reshape([1, size, size, 3]);

        let start = Instant::now();
        let output = self.model.forward_softmax(tensor);
        let inference_time = start.elapsed();

        let probabilities: Vec<f32> = output
            .into_data()
            .to_vec()
            .map_err(|e| SkinScanError::Inference(format!("failed to read output: {:?}", e)))?;

        debug_assert_eq!(probabilities.len(), NUM_CLASSES);

        Ok(PredictionResult::new(probabilities, inference_time, None))
    }

    /// Classify an image from raw encoded bytes (JPEG or PNG)
    pub fn predict_bytes(&self, bytes: &[u8]) -> Result<PredictionResult> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| SkinScanError::Image(e.to_string()))?;
        self.predict_image(&image)
    }

    /// Classify an image from a file path
    pub fn predict_file(&self, path: &Path) -> Result<PredictionResult> {
        let image = image::open(path)
            .map_err(|e| SkinScanError::ImageLoadError(path.to_path_buf(), e.to_string()))?;

        let mut result = self.predict_image(&image)?;
        result.image_path = Some(path.to_path_buf());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{default_device, InferenceBackend};

    fn test_predictor() -> Predictor<InferenceBackend> {
        let device = default_device();
        let config = SkinClassifierConfig::new();
        let model = SkinClassifier::new(&config, &device);
        Predictor::with_model(model, device)
    }

    #[test]
    fn test_preprocess_shape_and_range() {
        let predictor = test_predictor();

        // Odd size and aspect ratio on purpose
        let img = DynamicImage::new_rgb8(97, 41);
        let pixels = predictor.preprocess(&img);

        assert_eq!(pixels.len(), 128 * 128 * 3);
        assert!(pixels.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_preprocess_forces_rgb() {
        let predictor = test_predictor();

        // Grayscale input still comes out as three channels
        let img = DynamicImage::new_luma8(64, 64);
        let pixels = predictor.preprocess(&img);
        assert_eq!(pixels.len(), 128 * 128 * 3);
    }

    #[test]
    fn test_normalize_scales_intensities() {
        let mut rgb = image::RgbImage::new(2, 2);
        rgb.put_pixel(0, 0, image::Rgb([255, 0, 51]));
        let pixels = normalize_image(&DynamicImage::ImageRgb8(rgb));

        assert_eq!(pixels.len(), 2 * 2 * 3);
        assert!((pixels[0] - 1.0).abs() < 1e-6);
        assert!((pixels[1] - 0.0).abs() < 1e-6);
        assert!((pixels[2] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_prediction_result_argmax() {
        let mut probs = vec![0.0; NUM_CLASSES];
        probs[6] = 0.8;
        probs[4] = 0.15;
        probs[0] = 0.05;

        let result = PredictionResult::new(probs, Duration::from_millis(50), None);

        assert_eq!(result.predicted_class, 6);
        assert_eq!(result.class_name, "VI-chickenpox");
        assert_eq!(result.confidence, 0.8);
        assert_eq!(result.info, disease_info("VI-chickenpox"));
        assert_eq!(result.top_k.len(), TOP_K);
        assert_eq!(result.top_k[0].class_id, 6);
        assert_eq!(result.top_k[1].class_id, 4);
    }

    #[test]
    fn test_predict_image_end_to_end() {
        let predictor = test_predictor();

        let img = DynamicImage::new_rgb8(200, 150);
        let result = predictor.predict_image(&img).unwrap();

        assert!(result.predicted_class < NUM_CLASSES);
        assert_eq!(result.probabilities.len(), NUM_CLASSES);
        assert_eq!(
            result.class_name,
            class_name(result.predicted_class).unwrap()
        );
        assert!(!result.info.is_empty());
    }

    #[test]
    fn test_predict_bytes_rejects_garbage() {
        let predictor = test_predictor();

        let err = predictor.predict_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, SkinScanError::Image(_)));
    }

    #[test]
    fn test_predict_file_missing_path() {
        let predictor = test_predictor();

        let err = predictor
            .predict_file(Path::new("no/such/image.jpg"))
            .unwrap_err();
        assert!(matches!(err, SkinScanError::ImageLoadError(_, _)));
    }

    #[test]
    fn test_display_contains_label_and_info() {
        let mut probs = vec![0.0; NUM_CLASSES];
        probs[4] = 0.9;
        let result = PredictionResult::new(probs, Duration::from_millis(10), None);

        let rendered = result.display();
        assert!(rendered.contains("FU-ringworm"));
        assert!(rendered.contains("Ringworm"));
    }
}
