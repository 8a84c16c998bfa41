use std::env;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_PORT: &str = "3000";

pub fn config_file_path() -> Option<String> {
    env::var("CONFIG_FILE_PATH").ok()
}

pub fn port() -> String {
    env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string())
}

pub fn artifact_dir() -> Option<PathBuf> {
    env::var("ARTIFACT_DIR").ok().map(PathBuf::from)
}

pub fn flatten_error_status() -> Option<bool> {
    env::var("FLATTEN_ERROR_STATUS")
        .ok()
        .and_then(|value| value.parse().ok())
}
