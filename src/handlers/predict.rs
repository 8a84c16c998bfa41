use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

use crate::{
    models::features::FeatureSet,
    models::prediction::{ErrorResponse, PredictRequest, PredictionResponse},
    prediction::PredictionError,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Price estimate", body = PredictionResponse),
        (status = 400, description = "Malformed body or missing features", body = ErrorResponse),
        (status = 422, description = "Category unknown to the encoder", body = ErrorResponse),
        (status = 500, description = "Artifacts disagree on the column layout", body = ErrorResponse),
    ),
    tag = "Prediction"
)]
pub async fn predict(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match run_prediction(&state, &body) {
        Ok(prediction) => Json(PredictionResponse { prediction }).into_response(),
        Err(err) => {
            if err.is_client_error() {
                warn!("Rejected prediction request: {}", err);
            } else {
                error!("Prediction failed: {}", err);
            }

            if state.config.errors.flatten_status {
                (
                    StatusCode::OK,
                    Json(ErrorResponse {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            } else {
                err.into_response()
            }
        }
    }
}

fn run_prediction(state: &AppState, body: &[u8]) -> Result<i64, PredictionError> {
    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        PredictionError::InvalidInput(format!("request body is not valid JSON: {}", e))
    })?;
    let features = FeatureSet::from_payload(&payload)?;
    state.predictor.predict(&features)
}
