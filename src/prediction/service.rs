use tracing::{debug, warn};

use super::assembly::ColumnLayout;
use super::error::PredictionError;
use crate::artifacts::ArtifactStore;
use crate::models::features::{FeatureSet, NUMERICAL_FEATURES};

/// Turns a validated [`FeatureSet`] into a price estimate using the loaded
/// artifacts.
#[derive(Debug)]
pub struct PredictionService {
    store: ArtifactStore,
    /// Resolved once; a mismatch is reported on every request.
    layout: Result<ColumnLayout, String>,
}

impl PredictionService {
    pub fn new(store: ArtifactStore) -> Self {
        let assembled: Vec<String> = NUMERICAL_FEATURES
            .iter()
            .map(|name| name.to_string())
            .chain(store.encoder().feature_names_out())
            .collect();

        let layout = ColumnLayout::resolve(&assembled, store.columns());
        if let Err(reason) = &layout {
            warn!(
                "Stored model columns do not match the assembled feature layout, \
                 predictions will fail: {}",
                reason
            );
        }

        Self { store, layout }
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Builds the model-ready row: numerical columns, then one-hot
    /// indicators, laid out in the stored column order.
    pub fn assemble(&self, features: &FeatureSet) -> Result<Vec<f64>, PredictionError> {
        let encoded = self.store.encoder().transform(&features.categorical())?;

        let layout = self
            .layout
            .as_ref()
            .map_err(|reason| PredictionError::SchemaMismatch(reason.clone()))?;

        let mut values = Vec::with_capacity(layout.width());
        values.extend_from_slice(&features.numerical());
        values.extend(encoded);
        layout.arrange(&values)
    }

    /// Raw regressor output for one feature set.
    pub fn predict_raw(&self, features: &FeatureSet) -> Result<f64, PredictionError> {
        let row = self.assemble(features)?;
        let raw = self.store.regressor().predict(&row)?;
        debug!("Raw model output: {}", raw);
        Ok(raw)
    }

    pub fn predict(&self, features: &FeatureSet) -> Result<i64, PredictionError> {
        round_up(self.predict_raw(features)?)
    }
}

/// Ceiling of the model output. Prices are always rounded up.
pub fn round_up(raw: f64) -> Result<i64, PredictionError> {
    if !raw.is_finite() {
        return Err(PredictionError::Inference(format!(
            "model returned a non-finite value: {}",
            raw
        )));
    }
    let rounded = raw.ceil();
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(PredictionError::Inference(format!(
            "model output {} does not fit in an integer",
            raw
        )));
    }
    Ok(rounded as i64)
}
