use crate::{handlers, openapi, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/predict", post(handlers::predict::predict))
        .route("/health", get(handlers::health::health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .with_state(state)
}
