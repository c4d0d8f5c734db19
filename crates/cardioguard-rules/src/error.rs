use thiserror::Error;

use cardioguard_core::ValidationError;
use cardioguard_model::error::ClassifierError;

/// Why an assessment produced no report. Both variants pass the underlying
/// error through unchanged.
#[derive(Debug, Error)]
pub enum AssessError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
