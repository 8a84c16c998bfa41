use axum::Json;
use utoipa::OpenApi;

use crate::handlers::{health, predict};
use crate::models::{
    features::FeatureSet,
    prediction::{ErrorResponse, HealthResponse, PredictRequest, PredictionResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        predict::predict,
        health::health,
    ),
    components(
        schemas(
            PredictRequest,
            FeatureSet,
            PredictionResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Prediction", description = "House price estimation"),
        (name = "Health", description = "Liveness probe"),
    ),
    info(
        title = "Price Hub API",
        version = "0.1.0",
        description = "Serves house price estimates from a pre-trained regression model",
    ),
    servers(
        (url = "/", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(get_openapi_spec())
}
