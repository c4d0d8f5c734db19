use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use cardioguard_core::ValidationError;
use cardioguard_export::error::ExportError;
use cardioguard_rules::AssessError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation(Vec<ValidationError>),
    Classifier(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<ValidationError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Validation(errors) => {
                let message = match errors.as_slice() {
                    [only] => only.message.clone(),
                    _ => format!("{} parameters are invalid", errors.len()),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, message, errors)
            }
            ApiError::Classifier(msg) => {
                tracing::error!("classifier error: {msg}");
                (StatusCode::BAD_GATEWAY, "risk model unavailable".to_string(), Vec::new())
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error: message, details })).into_response()
    }
}

impl From<AssessError> for ApiError {
    fn from(e: AssessError) -> Self {
        match e {
            AssessError::Validation(err) => ApiError::Validation(vec![err]),
            AssessError::Classifier(err) => ApiError::Classifier(err.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
