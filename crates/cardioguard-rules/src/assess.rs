//! End-to-end assessment: validate → predict → evaluate.
//!
//! The classifier is passed in by reference. It is loaded once by the host
//! process and shared read-only across evaluations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cardioguard_core::{ParameterSet, Probability, RawParameters, RiskReport};
use cardioguard_model::RiskClassifier;
use cardioguard_model::error::ClassifierError;
use cardioguard_model::importance::{FeatureImportance, top_features};

use crate::error::AssessError;
use crate::evaluator::RiskEvaluator;

/// How many features the importance readout lists.
pub const TOP_FEATURE_COUNT: usize = 3;

/// A report together with the context it was produced in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    pub evaluated_at: jiff::Timestamp,
    /// Name of the classifier that produced the probability.
    pub model: String,
    pub parameters: ParameterSet,
    pub report: RiskReport,
    /// Cosmetic readout of the model; not derived from the parameters.
    pub top_features: Vec<FeatureImportance>,
}

/// Validate raw form input, then score it. Nothing reaches the classifier
/// unless validation succeeds.
pub fn assess(
    classifier: &dyn RiskClassifier,
    evaluator: &RiskEvaluator,
    raw: &RawParameters,
) -> Result<Assessment, AssessError> {
    let params = raw.validate().inspect_err(|e| {
        tracing::debug!(field = %e.field, kind = ?e.kind, "parameter validation failed");
    })?;
    assess_validated(classifier, evaluator, params)
}

/// Score an already validated parameter set. Classifier failures are
/// returned as-is; there is no retry.
pub fn assess_validated(
    classifier: &dyn RiskClassifier,
    evaluator: &RiskEvaluator,
    params: ParameterSet,
) -> Result<Assessment, AssessError> {
    let raw_probability = classifier.predict(&params).inspect_err(|e| {
        tracing::warn!(model = classifier.name(), error = %e, "classifier failed");
    })?;
    let probability = Probability::new(raw_probability)
        .map_err(|_| ClassifierError::InvalidOutput(raw_probability))?;

    let report = evaluator.evaluate(&params, probability);
    tracing::info!(
        model = classifier.name(),
        risk_percent = report.risk_percent,
        risk_level = %report.risk_level,
        health_score = report.health_score,
        drivers = report.risk_drivers.len(),
        "assessment complete"
    );

    Ok(Assessment {
        id: Uuid::new_v4(),
        evaluated_at: jiff::Timestamp::now(),
        model: classifier.name().to_string(),
        parameters: params,
        report,
        top_features: top_features(classifier, TOP_FEATURE_COUNT),
    })
}
