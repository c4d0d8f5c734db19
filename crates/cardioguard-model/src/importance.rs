use serde::{Deserialize, Serialize};

use cardioguard_core::Field;

use crate::RiskClassifier;

/// One entry of the "top contributing features" readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub field: Field,
    /// Column name as the model knows it (e.g. `thalach`).
    pub feature: String,
    /// Rounded to three decimals.
    pub importance: f64,
}

/// The `n` most important features of a classifier, highest first. Ties keep
/// model order. Empty if the classifier reports no importances.
pub fn top_features(classifier: &dyn RiskClassifier, n: usize) -> Vec<FeatureImportance> {
    let Some(importances) = classifier.feature_importances() else {
        return Vec::new();
    };

    let mut ranked: Vec<(Field, f64)> = Field::ALL
        .iter()
        .copied()
        .zip(importances.iter().copied())
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(field, importance)| FeatureImportance {
            field,
            feature: field.model_code().to_string(),
            importance: (importance * 1000.0).round() / 1000.0,
        })
        .collect()
}
