use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::models::field::{Field, FieldRange};

/// Why a raw input value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationKind {
    Missing,
    OutOfRange,
    NotAnInteger,
    NotANumber,
    UnknownLabel,
}

/// A clinical parameter that failed validation. Always names the field and
/// its allowed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
    pub expected_range: FieldRange,
    pub message: String,
}

impl ValidationError {
    pub fn missing(field: Field) -> Self {
        let range = field.range();
        Self {
            field,
            kind: ValidationKind::Missing,
            expected_range: range,
            message: format!("{field}: required value is missing (allowed range {range})"),
        }
    }

    pub fn out_of_range(field: Field, value: f64) -> Self {
        let range = field.range();
        Self {
            field,
            kind: ValidationKind::OutOfRange,
            expected_range: range,
            message: format!("{field}: value {value} is outside range {range}"),
        }
    }

    pub fn not_an_integer(field: Field, value: f64) -> Self {
        let range = field.range();
        Self {
            field,
            kind: ValidationKind::NotAnInteger,
            expected_range: range,
            message: format!("{field}: value {value} must be a whole number in range {range}"),
        }
    }

    pub fn not_a_number(field: Field, label: &str) -> Self {
        let range = field.range();
        Self {
            field,
            kind: ValidationKind::NotANumber,
            expected_range: range,
            message: format!("{field}: expected a number in range {range}, got '{label}'"),
        }
    }

    pub fn unknown_label(field: Field, label: &str, allowed: [&str; 2]) -> Self {
        let range = field.range();
        Self {
            field,
            kind: ValidationKind::UnknownLabel,
            expected_range: range,
            message: format!(
                "{field}: unrecognized choice '{label}' (expected '{}' or '{}', range {range})",
                allowed[0], allowed[1],
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProbabilityError {
    #[error("probability is not a finite number")]
    NotFinite,

    #[error("probability {0} is outside [0, 1]")]
    OutOfRange(f64),
}
