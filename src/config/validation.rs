use std::collections::HashSet;

use super::models::ServiceConfig;

/// Validates the logical consistency of a ServiceConfig.
/// Returns Ok(()) if valid, or Err(Vec<String>) with a list of error messages if invalid.
pub fn validate_service_config(config: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let artifacts = &config.artifacts;

    let files = [
        ("model_file", &artifacts.model_file),
        ("columns_file", &artifacts.columns_file),
        ("encoder_file", &artifacts.encoder_file),
    ];

    for (key, file) in &files {
        if file.trim().is_empty() {
            errors.push(format!("artifacts.{} must not be empty.", key));
        }
    }

    let mut seen = HashSet::new();
    for (key, file) in &files {
        if !file.trim().is_empty() && !seen.insert(file.as_str()) {
            errors.push(format!(
                "artifacts.{} '{}' is already used by another artifact.",
                key, file
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
