mod common;

use axum::http::StatusCode;
use common::{
    config_for, copy_fixtures, example_features, fixture_dir, read_json, test_server, write_json,
};
use serde_json::{Value, json};
use tempfile::TempDir;

#[tokio::test]
async fn test_predict_returns_rounded_up_price() {
    let server = test_server(config_for(&fixture_dir()));

    let response = server
        .post("/predict")
        .json(&json!({ "features": example_features() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    // 4766729.25 + 0.1 * (2000000 + 800000.7 + 450000.5) = 5091729.37
    assert_eq!(body, json!({ "prediction": 5091730 }));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_predict_follows_tree_splits() {
    let server = test_server(config_for(&fixture_dir()));

    let mut features = example_features();
    features["area"] = json!(4200);
    features["bathrooms"] = json!(1);
    features["airconditioning"] = json!("no");
    features["prefarea"] = json!("no");

    let response = server
        .post("/predict")
        .json(&json!({ "features": features }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["prediction"], json!(4591730));
}

#[tokio::test]
async fn test_same_request_gives_same_prediction() {
    let server = test_server(config_for(&fixture_dir()));
    let payload = json!({ "features": example_features() });

    let first: Value = server.post("/predict").json(&payload).await.json();
    let second: Value = server.post("/predict").json(&payload).await.json();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_features_report_missing_keys() {
    let server = test_server(config_for(&fixture_dir()));

    let response = server
        .post("/predict")
        .json(&json!({ "features": {} }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body.get("prediction").is_none());
    let error = body["error"].as_str().expect("error should be a string");
    assert!(error.starts_with("missing required features:"));
    for key in ["area", "parking", "mainroad", "furnishingstatus"] {
        assert!(error.contains(key), "'{}' not reported in: {}", key, error);
    }
}

#[tokio::test]
async fn test_missing_features_key_is_bad_request() {
    let server = test_server(config_for(&fixture_dir()));

    let response = server.post("/predict").json(&example_features()).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("'features'"));
}

#[tokio::test]
async fn test_invalid_json_body_is_bad_request() {
    let server = test_server(config_for(&fixture_dir()));

    let response = server.post("/predict").text("{not json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .starts_with("request body is not valid JSON"));
}

#[tokio::test]
async fn test_wrong_feature_type_is_bad_request() {
    let server = test_server(config_for(&fixture_dir()));
    let mut features = example_features();
    features["bedrooms"] = json!("three");

    let response = server
        .post("/predict")
        .json(&json!({ "features": features }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_category_ignored_by_fixture_encoder() {
    let server = test_server(config_for(&fixture_dir()));
    let mut features = example_features();
    // The fixture encoder is fitted with handle_unknown = ignore, and no
    // tree splits on furnishing status.
    features["furnishingstatus"] = json!("luxury");

    let response = server
        .post("/predict")
        .json(&json!({ "features": features }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["prediction"], json!(5091730));
}

#[tokio::test]
async fn test_unknown_category_rejected_by_strict_encoder() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    copy_fixtures(dir.path());
    let encoder_path = dir.path().join("one_hot_encoder.json");
    let mut encoder = read_json(&encoder_path);
    encoder["handle_unknown"] = json!("error");
    write_json(&encoder_path, &encoder);

    let server = test_server(config_for(dir.path()));
    let mut features = example_features();
    features["furnishingstatus"] = json!("luxury");

    let response = server
        .post("/predict")
        .json(&json!({ "features": features }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "unknown category 'luxury' for feature 'furnishingstatus'" })
    );
}

#[tokio::test]
async fn test_column_mismatch_is_internal_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    copy_fixtures(dir.path());
    let columns_path = dir.path().join("model_columns.json");
    let mut columns = read_json(&columns_path);
    columns[19] = json!("furnishingstatus_partly");
    write_json(&columns_path, &columns);

    let server = test_server(config_for(dir.path()));

    let response = server
        .post("/predict")
        .json(&json!({ "features": example_features() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("schema mismatch:"));
    assert!(error.contains("furnishingstatus_partly"));
}

#[tokio::test]
async fn test_reordered_columns_still_predict() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    copy_fixtures(dir.path());

    // Swap two stored columns and retarget the tree that splits on one of
    // them, as a training run with that column order would have produced.
    let columns_path = dir.path().join("model_columns.json");
    let mut columns = read_json(&columns_path);
    columns[14] = json!("mainroad_no");
    columns[5] = json!("airconditioning_yes");
    write_json(&columns_path, &columns);

    let model_path = dir.path().join("model.json");
    let mut model = read_json(&model_path);
    model["trees"][1]["feature"][0] = json!(5);
    write_json(&model_path, &model);

    let server = test_server(config_for(dir.path()));
    let response = server
        .post("/predict")
        .json(&json!({ "features": example_features() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["prediction"], json!(5091730));
}

#[tokio::test]
async fn test_flattened_error_status() {
    let mut config = config_for(&fixture_dir());
    config.errors.flatten_status = true;
    let server = test_server(config);

    let response = server
        .post("/predict")
        .json(&json!({ "features": {} }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body.get("error").is_some());
    assert!(body.get("prediction").is_none());
}

#[tokio::test]
async fn test_health_is_constant() {
    let server = test_server(config_for(&fixture_dir()));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_landing_page() {
    let server = test_server(config_for(&fixture_dir()));

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.text();
    assert!(page.contains("<form id=\"predict-form\">"));
    assert!(page.contains("/predict"));
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let server = test_server(config_for(&fixture_dir()));

    let response = server.get("/api-docs/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let doc: Value = response.json();
    assert!(doc["paths"]["/predict"]["post"].is_object());
    assert!(doc["paths"]["/health"]["get"].is_object());
    assert!(doc["components"]["schemas"]["FeatureSet"].is_object());
}
