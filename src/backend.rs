//! Backend abstraction - CPU inference backend
//!
//! The system only ever runs the classifier forward, one request at a time,
//! so the portable NdArray backend is the single supported backend.

/// The backend used for inference
pub type InferenceBackend = burn_ndarray::NdArray;

/// Device type for the inference backend
pub type InferenceDevice = <InferenceBackend as burn::tensor::backend::Backend>::Device;

/// Get the default device
pub fn default_device() -> InferenceDevice {
    InferenceDevice::default()
}

/// Get a human-readable name for the current backend
pub fn backend_name() -> &'static str {
    "NdArray (CPU)"
}
