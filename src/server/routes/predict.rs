//! Prediction endpoint

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::inference::PredictionResult;
use crate::server::state::SharedState;
use crate::utils::error::SkinScanError;

/// POST /predict - Classify an uploaded image
///
/// The request body is the raw JPEG or PNG bytes. There is no retry and no
/// partial result: undecodable input fails the request.
pub async fn predict(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<PredictionResult>, (StatusCode, String)> {
    if body.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Empty request body".to_string()));
    }

    match state.predictor.predict_bytes(&body) {
        Ok(result) => {
            info!(
                "Predicted {} ({:.1}%) in {:.2} ms",
                result.class_name,
                result.confidence * 100.0,
                result.inference_time_ms
            );
            Ok(Json(result))
        }
        Err(SkinScanError::Image(e)) => Err((
            StatusCode::BAD_REQUEST,
            format!("Could not decode image: {}", e),
        )),
        Err(e) => {
            error!("Prediction failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::backend::default_device;
    use crate::catalog::NUM_CLASSES;
    use crate::inference::Predictor;
    use crate::model::{SkinClassifier, SkinClassifierConfig};
    use crate::server::state::{AppState, ServerConfig};

    fn test_state() -> SharedState {
        let device = default_device();
        let config = SkinClassifierConfig::new();
        let model = SkinClassifier::new(&config, &device);
        let predictor = Predictor::with_model(model, device);
        Arc::new(AppState::new(ServerConfig::default(), predictor))
    }

    fn png_bytes() -> Bytes {
        let img = image::DynamicImage::new_rgb8(64, 64);
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        Bytes::from(buf.into_inner())
    }

    #[tokio::test]
    async fn test_predict_valid_png() {
        let Json(result) = predict(State(test_state()), png_bytes()).await.unwrap();

        assert!(result.predicted_class < NUM_CLASSES);
        assert!(!result.class_name.is_empty());
        assert!(!result.info.is_empty());
        assert_eq!(result.probabilities.len(), NUM_CLASSES);
    }

    #[tokio::test]
    async fn test_predict_rejects_garbage() {
        let body = Bytes::from_static(b"not an image at all");
        let (status, _) = predict(State(test_state()), body).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_predict_rejects_empty_body() {
        let (status, message) = predict(State(test_state()), Bytes::new()).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("Empty"));
    }
}
