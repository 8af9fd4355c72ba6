//! Error Handling Module
//!
//! Defines custom error types for the skin disease recognition library.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for skin disease recognition operations
#[derive(Error, Debug)]
pub enum SkinScanError {
    /// Error loading or decoding an image from a file
    #[error("Failed to load image at '{0}': {1}")]
    ImageLoadError(PathBuf, String),

    /// Error decoding or processing image data
    #[error("Image error: {0}")]
    Image(String),

    /// Error with model operations (loading weights, forward pass)
    #[error("Model error: {0}")]
    Model(String),

    /// Error with inference
    #[error("Inference error: {0}")]
    Inference(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

impl From<serde_json::Error> for SkinScanError {
    fn from(err: serde_json::Error) -> Self {
        SkinScanError::Serialization(err.to_string())
    }
}

impl From<image::ImageError> for SkinScanError {
    fn from(err: image::ImageError) -> Self {
        SkinScanError::Image(err.to_string())
    }
}

/// Specialized Result type for skin disease recognition operations.
pub type Result<T> = std::result::Result<T, SkinScanError>;
