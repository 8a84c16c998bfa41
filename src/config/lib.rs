use std::path::Path;

use tracing::info;

use super::constants;
use super::models::ServiceConfig;

pub fn load_config(path: &str) -> Result<ServiceConfig, Box<dyn std::error::Error + Send + Sync>> {
    let contents = std::fs::read_to_string(path)?;
    let config: ServiceConfig = serde_yaml::from_str(&contents)?;
    Ok(config)
}

/// Resolves the effective configuration.
///
/// An explicit `CONFIG_FILE_PATH` must load. Otherwise `config.yaml` is used
/// when present, falling back to defaults. Environment variables win over
/// the file.
pub fn resolve_config() -> Result<ServiceConfig, Box<dyn std::error::Error + Send + Sync>> {
    let mut config = match constants::config_file_path() {
        Some(path) => {
            info!("Loading configuration from {}", path);
            load_config(&path)
                .map_err(|e| format!("failed to load configuration from {}: {}", path, e))?
        }
        None if Path::new(constants::DEFAULT_CONFIG_PATH).exists() => {
            info!("Loading configuration from {}", constants::DEFAULT_CONFIG_PATH);
            load_config(constants::DEFAULT_CONFIG_PATH)?
        }
        None => {
            info!("No configuration file found, using defaults");
            ServiceConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

pub fn apply_env_overrides(config: &mut ServiceConfig) {
    if let Some(dir) = constants::artifact_dir() {
        config.artifacts.dir = dir;
    }
    if let Some(flatten) = constants::flatten_error_status() {
        config.errors.flatten_status = flatten;
    }
}
