use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::artifacts::ArtifactPaths;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ServiceConfig {
    #[serde(default)]
    pub artifacts: ArtifactConfig,
    #[serde(default)]
    pub errors: ErrorConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactConfig {
    #[serde(default = "default_artifact_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_model_file")]
    pub model_file: String,
    #[serde(default = "default_columns_file")]
    pub columns_file: String,
    #[serde(default = "default_encoder_file")]
    pub encoder_file: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: default_artifact_dir(),
            model_file: default_model_file(),
            columns_file: default_columns_file(),
            encoder_file: default_encoder_file(),
        }
    }
}

impl ArtifactConfig {
    pub fn paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            model: self.dir.join(&self.model_file),
            columns: self.dir.join(&self.columns_file),
            encoder: self.dir.join(&self.encoder_file),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ErrorConfig {
    /// Answer failed predictions with 200 and an `error` body instead of a
    /// 4xx/5xx status.
    #[serde(default)]
    pub flatten_status: bool,
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_model_file() -> String {
    "model.json".to_string()
}

fn default_columns_file() -> String {
    "model_columns.json".to_string()
}

fn default_encoder_file() -> String {
    "one_hot_encoder.json".to_string()
}
