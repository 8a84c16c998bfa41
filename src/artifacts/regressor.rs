use serde::{Deserialize, Serialize};
use thiserror::Error;

const LEAF: i64 = -1;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct InferenceError(pub String);

/// Anything that maps one assembled row to a single price estimate.
pub trait Regressor: Send + Sync {
    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError>;

    /// Width of the row the regressor was fitted on.
    fn n_features(&self) -> usize;

    fn kind(&self) -> &'static str;
}

/// On-disk form of `model.json`, tagged by `kind`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressorArtifact {
    GradientBoosting(GradientBoostingRegressor),
    Linear(LinearRegressor),
}

impl RegressorArtifact {
    pub fn into_regressor(self) -> Result<Box<dyn Regressor>, String> {
        match self {
            RegressorArtifact::GradientBoosting(model) => {
                model.validate()?;
                Ok(Box::new(model))
            }
            RegressorArtifact::Linear(model) => {
                model.validate()?;
                Ok(Box::new(model))
            }
        }
    }
}

fn check_width(expected: usize, row: &[f64]) -> Result<(), InferenceError> {
    if row.len() != expected {
        return Err(InferenceError(format!(
            "model expects {} features, got {}",
            expected,
            row.len()
        )));
    }
    Ok(())
}

/// One fitted decision tree, stored as parallel node arrays.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegressionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl RegressionTree {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        let nodes = self.value.len();
        if nodes == 0 {
            return Err("tree has no nodes".to_string());
        }
        if [
            self.children_left.len(),
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
        ]
        .iter()
        .any(|&len| len != nodes)
        {
            return Err("tree node arrays differ in length".to_string());
        }

        for node in 0..nodes {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == LEAF {
                if right != LEAF {
                    return Err(format!("node {} has only one child", node));
                }
                continue;
            }
            for child in [left, right] {
                if child < 0 || child as usize >= nodes || child as usize == node {
                    return Err(format!("node {} points at invalid child {}", node, child));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!(
                    "node {} splits on feature {} outside 0..{}",
                    node, feature, n_features
                ));
            }
        }

        Ok(())
    }

    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError> {
        let mut node = 0usize;
        // A well-formed tree reaches a leaf in fewer steps than it has nodes.
        for _ in 0..self.value.len() {
            let left = self.children_left[node];
            if left == LEAF {
                return Ok(self.value[node]);
            }
            let feature = self.feature[node] as usize;
            node = if row[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
        Err(InferenceError(
            "decision tree traversal did not reach a leaf".to_string(),
        ))
    }
}

/// Gradient boosted trees with squared-error loss:
/// `init + learning_rate * sum(tree(row))`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GradientBoostingRegressor {
    pub n_features: usize,
    pub init: f64,
    pub learning_rate: f64,
    pub trees: Vec<RegressionTree>,
}

impl GradientBoostingRegressor {
    pub fn validate(&self) -> Result<(), String> {
        if !self.init.is_finite() || !self.learning_rate.is_finite() {
            return Err("init and learning_rate must be finite".to_string());
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|reason| format!("tree {}: {}", index, reason))?;
        }
        Ok(())
    }
}

impl Regressor for GradientBoostingRegressor {
    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError> {
        check_width(self.n_features, row)?;
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.predict(row)?;
        }
        Ok(self.init + self.learning_rate * sum)
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn kind(&self) -> &'static str {
        "gradient_boosting"
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinearRegressor {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearRegressor {
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("linear model has no coefficients".to_string());
        }
        Ok(())
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError> {
        check_width(self.coefficients.len(), row)?;
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(weight, value)| weight * value)
            .sum();
        Ok(self.intercept + dot)
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}
