use std::path::Path;

use cardioguard_core::{FEATURE_COUNT, ParameterSet};

use crate::RiskClassifier;
use crate::artifact::ModelArtifact;
use crate::error::ClassifierError;

/// Standardized logistic regression backed by a [`ModelArtifact`].
///
/// Stateless after construction, so a single instance can serve concurrent
/// callers through a shared reference.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    name: String,
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    importances: Option<[f64; FEATURE_COUNT]>,
}

impl LogisticClassifier {
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        Self::from_artifact(ModelArtifact::load(path)?)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ClassifierError> {
        artifact.check()?;
        Ok(Self {
            name: artifact.name,
            mean: to_array("scaler_mean", artifact.scaler_mean)?,
            scale: to_array("scaler_scale", artifact.scaler_scale)?,
            coefficients: to_array("coefficients", artifact.coefficients)?,
            intercept: artifact.intercept,
            importances: artifact
                .feature_importances
                .map(|v| to_array("feature_importances", v))
                .transpose()?,
        })
    }

    /// Linear score before the sigmoid.
    pub fn decision_function(&self, params: &ParameterSet) -> f64 {
        params
            .feature_vector()
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .zip(&self.coefficients)
            .fold(self.intercept, |acc, ((x, (mean, scale)), coef)| {
                acc + coef * (x - mean) / scale
            })
    }
}

impl RiskClassifier for LogisticClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, params: &ParameterSet) -> Result<f64, ClassifierError> {
        let z = self.decision_function(params);
        let p = 1.0 / (1.0 + (-z).exp());
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ClassifierError::InvalidOutput(p));
        }
        Ok(p)
    }

    fn feature_importances(&self) -> Option<&[f64]> {
        self.importances.as_ref().map(|v| v.as_slice())
    }
}

fn to_array(name: &str, values: Vec<f64>) -> Result<[f64; FEATURE_COUNT], ClassifierError> {
    values.try_into().map_err(|v: Vec<f64>| {
        ClassifierError::FeatureMismatch(format!(
            "{name} has {} entries, expected {FEATURE_COUNT}",
            v.len()
        ))
    })
}
