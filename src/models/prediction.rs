use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::features::FeatureSet;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PredictRequest {
    pub features: FeatureSet,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PredictionResponse {
    /// Price estimate, rounded up to the next integer.
    pub prediction: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
