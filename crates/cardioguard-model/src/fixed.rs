use cardioguard_core::ParameterSet;

use crate::RiskClassifier;
use crate::error::ClassifierError;

/// Classifier stub that ignores its input and returns a configured value.
///
/// Used as a test double and for replaying a probability obtained elsewhere.
/// The value is returned as-is; range checking happens downstream.
#[derive(Debug, Clone)]
pub struct FixedProbability {
    probability: f64,
    name: String,
}

impl FixedProbability {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            name: "fixed-probability".to_string(),
        }
    }

    pub fn named(probability: f64, name: impl Into<String>) -> Self {
        Self {
            probability,
            name: name.into(),
        }
    }
}

impl RiskClassifier for FixedProbability {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, _params: &ParameterSet) -> Result<f64, ClassifierError> {
        Ok(self.probability)
    }
}
