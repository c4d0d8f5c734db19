use axum::Json;
use serde::Serialize;

use cardioguard_core::{Field, FieldRange, InputValue, RawParameters};

/// One form field as a client needs it to build an input form.
#[derive(Serialize)]
pub struct FieldDescriptor {
    key: &'static str,
    label: &'static str,
    model_code: &'static str,
    range: FieldRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<[&'static str; 2]>,
    default: Option<InputValue>,
}

pub async fn list_parameters() -> Json<Vec<FieldDescriptor>> {
    let defaults = RawParameters::form_defaults();
    let fields = Field::ALL
        .iter()
        .map(|&field| FieldDescriptor {
            key: field.key(),
            label: field.label(),
            model_code: field.model_code(),
            range: field.range(),
            choices: field.choice_labels(),
            default: defaults.get(field).cloned(),
        })
        .collect();
    Json(fields)
}
