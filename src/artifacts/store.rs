use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

use super::encoder::OneHotEncoder;
use super::error::ArtifactLoadError;
use super::regressor::{Regressor, RegressorArtifact};
use crate::models::features::CATEGORICAL_FEATURES;

#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub columns: PathBuf,
    pub encoder: PathBuf,
}

/// The three fitted artifacts the service predicts with. Immutable once
/// built.
pub struct ArtifactStore {
    regressor: Box<dyn Regressor>,
    columns: Vec<String>,
    encoder: OneHotEncoder,
}

impl std::fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("regressor", &self.regressor.kind())
            .field("columns", &self.columns)
            .field("encoder", &self.encoder)
            .finish()
    }
}

fn read_json<T: DeserializeOwned>(artifact: &'static str, path: &Path) -> Result<T, ArtifactLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactLoadError::Io {
        artifact,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactLoadError::Parse {
        artifact,
        path: path.to_path_buf(),
        source,
    })
}

impl ArtifactStore {
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactLoadError> {
        let model: RegressorArtifact = read_json("model", &paths.model)?;
        let columns: Vec<String> = read_json("columns", &paths.columns)?;
        let encoder: OneHotEncoder = read_json("encoder", &paths.encoder)?;

        let regressor = model
            .into_regressor()
            .map_err(|reason| ArtifactLoadError::invalid("model", reason))?;

        let store = Self::new(regressor, columns, encoder)?;
        info!(
            "Loaded {} model with {} columns from {}",
            store.regressor.kind(),
            store.columns.len(),
            paths.model.display()
        );
        Ok(store)
    }

    pub fn new(
        regressor: Box<dyn Regressor>,
        columns: Vec<String>,
        encoder: OneHotEncoder,
    ) -> Result<Self, ArtifactLoadError> {
        encoder
            .validate()
            .map_err(|reason| ArtifactLoadError::invalid("encoder", reason))?;

        if encoder.feature_names_in != CATEGORICAL_FEATURES {
            return Err(ArtifactLoadError::invalid(
                "encoder",
                format!(
                    "fitted on {:?}, expected {:?}",
                    encoder.feature_names_in, CATEGORICAL_FEATURES
                ),
            ));
        }

        if columns.is_empty() {
            return Err(ArtifactLoadError::invalid("columns", "column list is empty"));
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ArtifactLoadError::invalid(
                    "columns",
                    format!("column '{}' appears more than once", column),
                ));
            }
        }

        if regressor.n_features() != columns.len() {
            return Err(ArtifactLoadError::invalid(
                "model",
                format!(
                    "model expects {} features but the column list has {}",
                    regressor.n_features(),
                    columns.len()
                ),
            ));
        }

        Ok(Self {
            regressor,
            columns,
            encoder,
        })
    }

    pub fn regressor(&self) -> &dyn Regressor {
        self.regressor.as_ref()
    }

    /// Column names in the order the regressor was fitted on.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn encoder(&self) -> &OneHotEncoder {
        &self.encoder
    }
}
