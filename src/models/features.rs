use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::prediction::PredictionError;

pub const NUMERICAL_FEATURES: [&str; 5] = ["area", "bedrooms", "bathrooms", "stories", "parking"];

pub const CATEGORICAL_FEATURES: [&str; 7] = [
    "mainroad",
    "guestroom",
    "basement",
    "hotwaterheating",
    "airconditioning",
    "prefarea",
    "furnishingstatus",
];

/// The 14 features describing one house.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct FeatureSet {
    /// Lot area in square feet.
    pub area: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub stories: f64,
    pub parking: f64,
    pub mainroad: String,
    pub guestroom: String,
    pub basement: String,
    pub hotwaterheating: String,
    pub airconditioning: String,
    pub prefarea: String,
    pub furnishingstatus: String,
}

impl FeatureSet {
    /// Extracts the feature set from a `{"features": {...}}` body.
    ///
    /// Every missing key is reported at once, in fixed feature order.
    /// Keys outside the two feature groups are ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, PredictionError> {
        let features = payload
            .as_object()
            .and_then(|body| body.get("features"))
            .ok_or_else(|| {
                PredictionError::InvalidInput(
                    "request body must be a JSON object with a 'features' key".to_string(),
                )
            })?;

        let fields = features.as_object().ok_or_else(|| {
            PredictionError::InvalidInput("'features' must be a JSON object".to_string())
        })?;

        let missing: Vec<&str> = NUMERICAL_FEATURES
            .iter()
            .chain(CATEGORICAL_FEATURES.iter())
            .copied()
            .filter(|name| !fields.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(PredictionError::InvalidInput(format!(
                "missing required features: {}",
                missing.join(", ")
            )));
        }

        serde_json::from_value(features.clone())
            .map_err(|e| PredictionError::InvalidInput(format!("invalid features: {}", e)))
    }

    /// Numerical sub-row, in `NUMERICAL_FEATURES` order.
    pub fn numerical(&self) -> [f64; 5] {
        [
            self.area,
            self.bedrooms,
            self.bathrooms,
            self.stories,
            self.parking,
        ]
    }

    /// Categorical sub-row, in `CATEGORICAL_FEATURES` order.
    pub fn categorical(&self) -> [&str; 7] {
        [
            self.mainroad.as_str(),
            self.guestroom.as_str(),
            self.basement.as_str(),
            self.hotwaterheating.as_str(),
            self.airconditioning.as_str(),
            self.prefarea.as_str(),
            self.furnishingstatus.as_str(),
        ]
    }
}
