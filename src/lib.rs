pub mod artifacts;
pub mod config;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod prediction;
pub mod routes;
pub mod state;

pub use axum;
pub use serde_json;
