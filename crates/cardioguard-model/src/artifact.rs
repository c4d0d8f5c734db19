//! Persisted model artifact.
//!
//! A trained logistic model exported as JSON: the standard-scaler statistics
//! the model was fitted with, its coefficients and intercept, and optionally
//! the feature importances reported at training time. Feature order is the
//! model order declared by [`Field::ALL`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use cardioguard_core::{FEATURE_COUNT, Field};

use crate::error::ClassifierError;

/// Artifact layout version this build reads.
pub const ARTIFACT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub name: String,
    pub feature_names: Vec<String>,
    pub scaler_mean: Vec<f64>,
    pub scaler_scale: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_importances: Option<Vec<f64>>,
}

impl ModelArtifact {
    /// Read and check an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ClassifierError::ArtifactRead {
                path: path.display().to_string(),
                source,
            })?;
        let artifact = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), model = %artifact.name, "model artifact loaded");
        Ok(artifact)
    }

    pub fn from_json(contents: &str) -> Result<Self, ClassifierError> {
        let artifact: ModelArtifact = serde_json::from_str(contents)?;
        artifact.check()?;
        Ok(artifact)
    }

    /// Verify version, feature order, dimensions and numeric sanity.
    pub fn check(&self) -> Result<(), ClassifierError> {
        if self.format_version != ARTIFACT_VERSION {
            return Err(ClassifierError::UnsupportedVersion {
                found: self.format_version,
                expected: ARTIFACT_VERSION,
            });
        }

        let expected: Vec<&str> = Field::ALL.iter().map(|f| f.model_code()).collect();
        if self.feature_names != expected {
            return Err(ClassifierError::FeatureMismatch(format!(
                "expected features {expected:?}, artifact declares {:?}",
                self.feature_names
            )));
        }

        check_vector("scaler_mean", &self.scaler_mean)?;
        check_vector("scaler_scale", &self.scaler_scale)?;
        check_vector("coefficients", &self.coefficients)?;
        if let Some(importances) = &self.feature_importances {
            check_vector("feature_importances", importances)?;
        }

        if let Some(i) = self.scaler_scale.iter().position(|s| *s == 0.0) {
            return Err(ClassifierError::InvalidArtifact(format!(
                "scaler_scale for '{}' is zero",
                self.feature_names[i]
            )));
        }
        if !self.intercept.is_finite() {
            return Err(ClassifierError::InvalidArtifact(
                "intercept is not finite".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_vector(name: &str, values: &[f64]) -> Result<(), ClassifierError> {
    if values.len() != FEATURE_COUNT {
        return Err(ClassifierError::FeatureMismatch(format!(
            "{name} has {} entries, expected {FEATURE_COUNT}",
            values.len()
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ClassifierError::InvalidArtifact(format!(
            "{name} contains a non-finite value"
        )));
    }
    Ok(())
}
