//! Utilities module for logging and error handling
//!
//! This module provides:
//! - Structured logging with tracing
//! - Error handling types

pub mod error;
pub mod logging;

// Re-export main types for convenience
pub use error::{Result, SkinScanError};
pub use logging::{init_logging, LogConfig, LogLevel};
