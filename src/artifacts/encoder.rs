use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// What the encoder does with a category it was not fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    #[default]
    Error,
    Ignore,
}

/// Which category, if any, is dropped from a feature's indicator block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPolicy {
    First,
    IfBinary,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("unknown category '{value}' for feature '{feature}'")]
    UnknownCategory { feature: String, value: String },

    #[error("encoder expects {expected} categorical values, got {actual}")]
    Arity { expected: usize, actual: usize },
}

/// A fitted one-hot encoder.
///
/// Each input feature expands into one indicator column per known category,
/// minus the dropped one. Output columns are named `<feature>_<category>`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OneHotEncoder {
    pub feature_names_in: Vec<String>,
    pub categories: Vec<Vec<String>>,
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
    #[serde(default)]
    pub drop: Option<DropPolicy>,
}

impl OneHotEncoder {
    pub fn validate(&self) -> Result<(), String> {
        if self.feature_names_in.len() != self.categories.len() {
            return Err(format!(
                "{} input features but {} category lists",
                self.feature_names_in.len(),
                self.categories.len()
            ));
        }

        for (feature, categories) in self.feature_names_in.iter().zip(&self.categories) {
            if categories.is_empty() {
                return Err(format!("feature '{}' has no known categories", feature));
            }
            let mut seen = HashSet::new();
            for category in categories {
                if !seen.insert(category.as_str()) {
                    return Err(format!(
                        "feature '{}' lists category '{}' more than once",
                        feature, category
                    ));
                }
            }
        }

        Ok(())
    }

    fn dropped_index(&self, feature: usize) -> Option<usize> {
        match self.drop {
            Some(DropPolicy::First) => Some(0),
            Some(DropPolicy::IfBinary) if self.categories[feature].len() == 2 => Some(0),
            _ => None,
        }
    }

    fn width(&self, feature: usize) -> usize {
        let known = self.categories[feature].len();
        match self.dropped_index(feature) {
            Some(_) => known - 1,
            None => known,
        }
    }

    pub fn feature_names_out(&self) -> Vec<String> {
        let mut names = Vec::new();
        for (index, feature) in self.feature_names_in.iter().enumerate() {
            let dropped = self.dropped_index(index);
            for (position, category) in self.categories[index].iter().enumerate() {
                if Some(position) != dropped {
                    names.push(format!("{}_{}", feature, category));
                }
            }
        }
        names
    }

    /// Encodes one row of categorical values, given in `feature_names_in`
    /// order.
    pub fn transform(&self, values: &[&str]) -> Result<Vec<f64>, EncodeError> {
        if values.len() != self.feature_names_in.len() {
            return Err(EncodeError::Arity {
                expected: self.feature_names_in.len(),
                actual: values.len(),
            });
        }

        let mut encoded = Vec::with_capacity(self.feature_names_out_len());
        for (index, value) in values.iter().enumerate() {
            let dropped = self.dropped_index(index);
            let hit = self.categories[index].iter().position(|c| c == value);

            match hit {
                Some(hit) => {
                    for position in 0..self.categories[index].len() {
                        if Some(position) == dropped {
                            continue;
                        }
                        encoded.push(if position == hit { 1.0 } else { 0.0 });
                    }
                }
                None => match self.handle_unknown {
                    HandleUnknown::Error => {
                        return Err(EncodeError::UnknownCategory {
                            feature: self.feature_names_in[index].clone(),
                            value: value.to_string(),
                        });
                    }
                    HandleUnknown::Ignore => {
                        encoded.extend(std::iter::repeat_n(0.0, self.width(index)));
                    }
                },
            }
        }

        Ok(encoded)
    }

    fn feature_names_out_len(&self) -> usize {
        (0..self.categories.len()).map(|i| self.width(i)).sum()
    }
}
