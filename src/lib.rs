//! # Skin Disease Recognition System
//!
//! A Rust library for recognizing skin diseases from photographs using a
//! pre-trained CNN built with the Burn framework, paired with a static
//! disease-information lookup.
//!
//! ## Features
//!
//! - **Image classification** into ten skin-disease categories with an
//!   externally trained model loaded once per process
//! - **Fixed preprocessing pipeline**: force RGB, resize to 128x128, scale
//!   intensities into [0, 1], batch of one
//! - **Disease catalog** with category taxonomy and a free-text health bot
//!   search over the class labels
//! - **HTTP API** (axum) and CLI front ends
//!
//! ## Modules
//!
//! - `backend`: Burn backend selection for inference
//! - `catalog`: Class labels, categories, descriptions, and search
//! - `model`: CNN architecture built with Burn
//! - `inference`: Preprocessing and prediction utilities
//! - `server`: HTTP API surface
//! - `utils`: Logging and error handling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use skinscan::backend::{default_device, InferenceBackend};
//! use skinscan::inference::Predictor;
//!
//! let device = default_device();
//! let predictor = Predictor::<InferenceBackend>::load("models/skin_disease_model.mpk".as_ref(), &device)?;
//! let result = predictor.predict_file("rash.jpg".as_ref())?;
//! println!("{} -> {}", result.class_name, result.info);
//! ```

pub mod backend;
pub mod catalog;
pub mod inference;
pub mod model;
pub mod server;
pub mod utils;

// Re-export commonly used items for convenience
pub use catalog::{
    class_index, class_name, disease_info, DiseaseCategory, CLASS_NAMES, NUM_CLASSES,
};
pub use inference::{ClassScore, PredictionResult, Predictor, INPUT_SIZE};
pub use model::{SkinClassifier, SkinClassifierConfig};
pub use utils::error::{Result, SkinScanError};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
