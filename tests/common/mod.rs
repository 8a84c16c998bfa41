#![allow(dead_code)]

use axum_test::TestServer;
use price_lib::config::models::{ArtifactConfig, ServiceConfig};
use price_lib::{routes, state::AppState};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/artifacts")
}

pub fn config_for(dir: &Path) -> ServiceConfig {
    ServiceConfig {
        artifacts: ArtifactConfig {
            dir: dir.to_path_buf(),
            ..ArtifactConfig::default()
        },
        ..ServiceConfig::default()
    }
}

/// Copies the fixture artifacts into `dir` so a test can tamper with them.
pub fn copy_fixtures(dir: &Path) {
    for file in ["model.json", "model_columns.json", "one_hot_encoder.json"] {
        std::fs::copy(fixture_dir().join(file), dir.join(file)).expect("Failed to copy fixture");
    }
}

pub fn read_json(path: &Path) -> Value {
    let contents = std::fs::read_to_string(path).expect("Failed to read fixture");
    serde_json::from_str(&contents).expect("Fixture is not valid JSON")
}

pub fn write_json(path: &Path, value: &Value) {
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap())
        .expect("Failed to write fixture");
}

pub fn test_server(config: ServiceConfig) -> TestServer {
    let state = AppState::new(config).expect("Failed to load fixture artifacts");
    let router = routes::create_router(Arc::new(state));
    TestServer::new(router).expect("Failed to create TestServer")
}

pub fn example_features() -> Value {
    json!({
        "area": 7500,
        "bedrooms": 3,
        "bathrooms": 2,
        "stories": 2,
        "parking": 1,
        "mainroad": "yes",
        "guestroom": "no",
        "basement": "no",
        "hotwaterheating": "no",
        "airconditioning": "yes",
        "prefarea": "yes",
        "furnishingstatus": "furnished"
    })
}
