use std::sync::Arc;

use cardioguard_model::RiskClassifier;
use cardioguard_rules::RiskEvaluator;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The classifier is loaded once at startup and only read afterwards, so
/// concurrent requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn RiskClassifier>,
    pub evaluator: RiskEvaluator,
}

impl AppState {
    pub fn new(classifier: Arc<dyn RiskClassifier>) -> Self {
        Self {
            classifier,
            evaluator: RiskEvaluator::default(),
        }
    }
}
