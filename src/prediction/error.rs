use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::artifacts::encoder::EncodeError;
use crate::artifacts::regressor::InferenceError;
use crate::models::prediction::ErrorResponse;

/// Everything that can go wrong while answering one prediction request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("unknown category '{value}' for feature '{feature}'")]
    UnknownCategory { feature: String, value: String },

    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

impl PredictionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PredictionError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PredictionError::UnknownCategory { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            PredictionError::SchemaMismatch(_) | PredictionError::Inference(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Caller faults as opposed to a broken artifact set.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for PredictionError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<EncodeError> for PredictionError {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::UnknownCategory { feature, value } => {
                PredictionError::UnknownCategory { feature, value }
            }
            EncodeError::Arity { .. } => PredictionError::SchemaMismatch(err.to_string()),
        }
    }
}

impl From<InferenceError> for PredictionError {
    fn from(err: InferenceError) -> Self {
        PredictionError::Inference(err.0)
    }
}
