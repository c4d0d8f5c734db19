use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use cardioguard_core::RawParameters;
use cardioguard_export::render::render_default;
use cardioguard_rules::assess_validated;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Json,
    Markdown,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssessQuery {
    #[serde(default)]
    format: ResponseFormat,
}

/// Score one parameter set. The body is parsed by hand so malformed JSON is a
/// 400 and a well-formed but invalid form is a 422 listing every bad field.
pub async fn assess_parameters(
    State(state): State<AppState>,
    Query(query): Query<AssessQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let raw: RawParameters = serde_json::from_slice(&body)?;

    let errors = raw.validation_errors();
    if !errors.is_empty() {
        tracing::info!(invalid = errors.len(), "rejected assessment request");
        return Err(ApiError::Validation(errors));
    }
    let params = raw.validate().map_err(|e| ApiError::Validation(vec![e]))?;

    let assessment = assess_validated(state.classifier.as_ref(), &state.evaluator, params)?;

    let response = match query.format {
        ResponseFormat::Json => Json(assessment).into_response(),
        ResponseFormat::Markdown => (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            render_default(&assessment)?,
        )
            .into_response(),
    };
    Ok(response)
}
