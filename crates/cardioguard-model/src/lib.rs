//! cardioguard-model
//!
//! The risk classifier seam. The trained model is an opaque artifact loaded
//! once at startup; everything downstream sees it only through
//! [`RiskClassifier`], so tests can substitute [`fixed::FixedProbability`].

pub mod artifact;
pub mod error;
pub mod fixed;
pub mod importance;
pub mod logistic;

use cardioguard_core::ParameterSet;

use error::ClassifierError;

/// Capability implemented by every risk model.
pub trait RiskClassifier: Send + Sync {
    /// Identifier reported alongside assessments (e.g. the artifact name).
    fn name(&self) -> &str;

    /// Probability of heart disease for the given parameters, in `[0, 1]`.
    fn predict(&self, params: &ParameterSet) -> Result<f64, ClassifierError>;

    /// Training-time feature importances in model order, if the model has them.
    fn feature_importances(&self) -> Option<&[f64]> {
        None
    }
}
