use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Defines the valid closed range for a clinical parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    /// `Some(1.0)` for integer-valued fields.
    pub step: Option<f64>,
}

impl FieldRange {
    pub const fn integer(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    pub const fn continuous(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn in_bounds(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn on_step(&self, value: f64) -> bool {
        match self.step {
            Some(step) => {
                let remainder = (value - self.min) % step;
                // Allow floating point tolerance
                remainder.abs() < 1e-9 || (step - remainder.abs()) < 1e-9
            }
            None => true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.in_bounds(value) && self.on_step(value)
    }
}

impl fmt::Display for FieldRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// One of the 13 clinical parameters, declared in model feature order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Field {
    Age,
    Sex,
    ChestPainType,
    RestingBp,
    Cholesterol,
    FastingSugarHigh,
    RestEcg,
    MaxHeartRate,
    ExerciseAngina,
    StDepression,
    StSlope,
    MajorVessels,
    Thalassemia,
}

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 13;

impl Field {
    /// All fields in model feature order.
    pub const ALL: [Field; FEATURE_COUNT] = [
        Field::Age,
        Field::Sex,
        Field::ChestPainType,
        Field::RestingBp,
        Field::Cholesterol,
        Field::FastingSugarHigh,
        Field::RestEcg,
        Field::MaxHeartRate,
        Field::ExerciseAngina,
        Field::StDepression,
        Field::StSlope,
        Field::MajorVessels,
        Field::Thalassemia,
    ];

    /// Stable snake_case key used in JSON bodies and error messages.
    pub fn key(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Sex => "sex",
            Field::ChestPainType => "chest_pain_type",
            Field::RestingBp => "resting_bp",
            Field::Cholesterol => "cholesterol",
            Field::FastingSugarHigh => "fasting_sugar_high",
            Field::RestEcg => "rest_ecg",
            Field::MaxHeartRate => "max_heart_rate",
            Field::ExerciseAngina => "exercise_angina",
            Field::StDepression => "st_depression",
            Field::StSlope => "st_slope",
            Field::MajorVessels => "major_vessels",
            Field::Thalassemia => "thalassemia",
        }
    }

    /// Human-readable form label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Sex => "Sex",
            Field::ChestPainType => "Chest Pain Type",
            Field::RestingBp => "Resting Blood Pressure",
            Field::Cholesterol => "Cholesterol",
            Field::FastingSugarHigh => "Fasting Sugar >120",
            Field::RestEcg => "Rest ECG",
            Field::MaxHeartRate => "Max Heart Rate",
            Field::ExerciseAngina => "Exercise Induced Angina",
            Field::StDepression => "ST Depression (Oldpeak)",
            Field::StSlope => "Slope",
            Field::MajorVessels => "Major Vessels",
            Field::Thalassemia => "Thal",
        }
    }

    /// Column name the trained model was fitted with.
    pub fn model_code(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Sex => "sex",
            Field::ChestPainType => "cp",
            Field::RestingBp => "trestbps",
            Field::Cholesterol => "chol",
            Field::FastingSugarHigh => "fbs",
            Field::RestEcg => "restecg",
            Field::MaxHeartRate => "thalach",
            Field::ExerciseAngina => "exang",
            Field::StDepression => "oldpeak",
            Field::StSlope => "slope",
            Field::MajorVessels => "ca",
            Field::Thalassemia => "thal",
        }
    }

    pub fn range(self) -> FieldRange {
        match self {
            Field::Age => FieldRange::integer(20.0, 100.0),
            Field::Sex => FieldRange::integer(0.0, 1.0),
            Field::ChestPainType => FieldRange::integer(0.0, 3.0),
            Field::RestingBp => FieldRange::integer(80.0, 200.0),
            Field::Cholesterol => FieldRange::integer(100.0, 600.0),
            Field::FastingSugarHigh => FieldRange::integer(0.0, 1.0),
            Field::RestEcg => FieldRange::integer(0.0, 2.0),
            Field::MaxHeartRate => FieldRange::integer(60.0, 220.0),
            Field::ExerciseAngina => FieldRange::integer(0.0, 1.0),
            Field::StDepression => FieldRange::continuous(0.0, 6.0),
            Field::StSlope => FieldRange::integer(0.0, 2.0),
            Field::MajorVessels => FieldRange::integer(0.0, 4.0),
            Field::Thalassemia => FieldRange::integer(0.0, 3.0),
        }
    }

    /// Selector labels for binary fields, indexed by encoded value
    /// (`[label for 0, label for 1]`).
    pub fn choice_labels(self) -> Option<[&'static str; 2]> {
        match self {
            Field::Sex => Some(["Female", "Male"]),
            Field::FastingSugarHigh | Field::ExerciseAngina => Some(["No", "Yes"]),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
