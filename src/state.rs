use crate::artifacts::{ArtifactLoadError, ArtifactStore};
use crate::config::models::ServiceConfig;
use crate::prediction::PredictionService;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub predictor: Arc<PredictionService>,
}

impl AppState {
    /// Loads the artifacts named by `config`. Fails rather than serving with
    /// a partial artifact set.
    pub fn new(config: ServiceConfig) -> Result<Self, ArtifactLoadError> {
        let store = ArtifactStore::load(&config.artifacts.paths())?;
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: ServiceConfig, store: ArtifactStore) -> Self {
        Self {
            config: Arc::new(config),
            predictor: Arc::new(PredictionService::new(store)),
        }
    }
}
