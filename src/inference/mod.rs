//! Inference module for model prediction
//!
//! This module provides:
//! - Image preprocessing (decode, force RGB, resize, scale to [0, 1])
//! - Single image prediction from a path, raw bytes, or a decoded image
//! - Result shaping: argmax label, confidence, top-k, disease description

pub mod predictor;

// Re-export main types for convenience
pub use predictor::{ClassScore, PredictionResult, Predictor, INPUT_SIZE, TOP_K};
