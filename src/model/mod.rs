//! Model module for the skin disease classifier
//!
//! The network architecture lives here; the trained weights are an opaque,
//! externally supplied record file loaded once per process.

pub mod cnn;

// Re-export main types for convenience
pub use cnn::{SkinClassifier, SkinClassifierConfig};
