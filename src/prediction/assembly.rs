use std::collections::HashMap;

use super::error::PredictionError;

/// Maps the assembled column sequence (numerical columns, then encoder
/// output) onto the column order the model was fitted with.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// `source[i]` is the assembled position feeding stored column `i`.
    source: Vec<usize>,
}

impl ColumnLayout {
    /// Fails unless `assembled` and `stored` hold exactly the same names.
    pub fn resolve(assembled: &[String], stored: &[String]) -> Result<Self, String> {
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(assembled.len());
        for (index, name) in assembled.iter().enumerate() {
            if positions.insert(name.as_str(), index).is_some() {
                return Err(format!("assembled column '{}' appears more than once", name));
            }
        }

        let missing: Vec<&str> = stored
            .iter()
            .map(String::as_str)
            .filter(|name| !positions.contains_key(name))
            .collect();
        let unexpected: Vec<&str> = assembled
            .iter()
            .map(String::as_str)
            .filter(|name| !stored.iter().any(|s| s == name))
            .collect();

        if !missing.is_empty() || !unexpected.is_empty() {
            let mut problems = Vec::new();
            if !missing.is_empty() {
                problems.push(format!("columns not produced: {}", missing.join(", ")));
            }
            if !unexpected.is_empty() {
                problems.push(format!("columns unknown to the model: {}", unexpected.join(", ")));
            }
            return Err(problems.join("; "));
        }

        if assembled.len() != stored.len() {
            return Err(format!(
                "assembled {} columns, model expects {}",
                assembled.len(),
                stored.len()
            ));
        }

        let source = stored.iter().map(|name| positions[name.as_str()]).collect();
        Ok(Self { source })
    }

    pub fn width(&self) -> usize {
        self.source.len()
    }

    /// Lays `values` (in assembled order) out in stored column order.
    pub fn arrange(&self, values: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if values.len() != self.source.len() {
            return Err(PredictionError::SchemaMismatch(format!(
                "assembled {} values, model expects {}",
                values.len(),
                self.source.len()
            )));
        }
        Ok(self.source.iter().map(|&index| values[index]).collect())
    }
}
