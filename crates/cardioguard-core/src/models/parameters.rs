use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::models::field::{FEATURE_COUNT, Field};

/// A single value as submitted by a form: either a number or, for the binary
/// selector fields, one of the selector labels ("Male"/"Female", "Yes"/"No").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum InputValue {
    Number(f64),
    Label(String),
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Number(value)
    }
}

impl From<i32> for InputValue {
    fn from(value: i32) -> Self {
        InputValue::Number(f64::from(value))
    }
}

impl From<&str> for InputValue {
    fn from(label: &str) -> Self {
        InputValue::Label(label.to_string())
    }
}

impl From<String> for InputValue {
    fn from(label: String) -> Self {
        InputValue::Label(label)
    }
}

/// Unvalidated form input. Every field is optional here; [`RawParameters::validate`]
/// turns it into a [`ParameterSet`] or reports what is wrong.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct RawParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest_pain_type: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_bp: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fasting_sugar_high: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_ecg: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heart_rate: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_angina: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st_depression: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st_slope: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_vessels: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thalassemia: Option<InputValue>,
}

impl RawParameters {
    /// The values the input form starts with.
    pub fn form_defaults() -> Self {
        Self {
            age: Some(45.into()),
            sex: Some("Male".into()),
            chest_pain_type: Some(1.into()),
            resting_bp: Some(120.into()),
            cholesterol: Some(220.into()),
            fasting_sugar_high: Some("No".into()),
            rest_ecg: Some(1.into()),
            max_heart_rate: Some(150.into()),
            exercise_angina: Some("No".into()),
            st_depression: Some(1.0.into()),
            st_slope: Some(1.into()),
            major_vessels: Some(0.into()),
            thalassemia: Some(2.into()),
        }
    }

    pub fn get(&self, field: Field) -> Option<&InputValue> {
        match field {
            Field::Age => self.age.as_ref(),
            Field::Sex => self.sex.as_ref(),
            Field::ChestPainType => self.chest_pain_type.as_ref(),
            Field::RestingBp => self.resting_bp.as_ref(),
            Field::Cholesterol => self.cholesterol.as_ref(),
            Field::FastingSugarHigh => self.fasting_sugar_high.as_ref(),
            Field::RestEcg => self.rest_ecg.as_ref(),
            Field::MaxHeartRate => self.max_heart_rate.as_ref(),
            Field::ExerciseAngina => self.exercise_angina.as_ref(),
            Field::StDepression => self.st_depression.as_ref(),
            Field::StSlope => self.st_slope.as_ref(),
            Field::MajorVessels => self.major_vessels.as_ref(),
            Field::Thalassemia => self.thalassemia.as_ref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<InputValue>) -> &mut Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    pub fn clear(&mut self, field: Field) -> &mut Self {
        *self.slot_mut(field) = None;
        self
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<InputValue> {
        match field {
            Field::Age => &mut self.age,
            Field::Sex => &mut self.sex,
            Field::ChestPainType => &mut self.chest_pain_type,
            Field::RestingBp => &mut self.resting_bp,
            Field::Cholesterol => &mut self.cholesterol,
            Field::FastingSugarHigh => &mut self.fasting_sugar_high,
            Field::RestEcg => &mut self.rest_ecg,
            Field::MaxHeartRate => &mut self.max_heart_rate,
            Field::ExerciseAngina => &mut self.exercise_angina,
            Field::StDepression => &mut self.st_depression,
            Field::StSlope => &mut self.st_slope,
            Field::MajorVessels => &mut self.major_vessels,
            Field::Thalassemia => &mut self.thalassemia,
        }
    }

    /// Validate every field in model order, stopping at the first failure.
    pub fn validate(&self) -> Result<ParameterSet, ValidationError> {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            *slot = resolve(field, self.get(field))?;
        }
        Ok(ParameterSet::from_validated(values))
    }

    /// Every validation failure, in model order. Empty when the input is valid.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        Field::ALL
            .iter()
            .filter_map(|&field| resolve(field, self.get(field)).err())
            .collect()
    }
}

/// Map one raw value to its numeric encoding, enforcing the field's range.
fn resolve(field: Field, value: Option<&InputValue>) -> Result<f64, ValidationError> {
    let number = match value {
        None => return Err(ValidationError::missing(field)),
        Some(InputValue::Number(n)) => *n,
        Some(InputValue::Label(label)) => match field.choice_labels() {
            Some(labels) => match labels.iter().position(|l| *l == label.as_str()) {
                Some(code) => code as f64,
                None => return Err(ValidationError::unknown_label(field, label, labels)),
            },
            None => return Err(ValidationError::not_a_number(field, label)),
        },
    };

    let range = field.range();
    if !range.in_bounds(number) {
        return Err(ValidationError::out_of_range(field, number));
    }
    if !range.on_step(number) {
        return Err(ValidationError::not_an_integer(field, number));
    }
    Ok(number)
}

/// Biological sex as encoded for the model: Male → 1, Female → 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn code(self) -> u8 {
        match self {
            Sex::Female => 0,
            Sex::Male => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

/// A validated clinical parameter vector. Immutable; the only ways to obtain
/// one are [`RawParameters::validate`] and deserialization, which validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters", into = "RawParameters")]
pub struct ParameterSet {
    age: u16,
    sex: Sex,
    chest_pain_type: u16,
    resting_bp: u16,
    cholesterol: u16,
    fasting_sugar_high: bool,
    rest_ecg: u16,
    max_heart_rate: u16,
    exercise_angina: bool,
    st_depression: f64,
    st_slope: u16,
    major_vessels: u16,
    thalassemia: u16,
}

impl ParameterSet {
    /// Values must already be range- and step-checked, in model order.
    fn from_validated(values: [f64; FEATURE_COUNT]) -> Self {
        let [
            age,
            sex,
            chest_pain_type,
            resting_bp,
            cholesterol,
            fasting_sugar_high,
            rest_ecg,
            max_heart_rate,
            exercise_angina,
            st_depression,
            st_slope,
            major_vessels,
            thalassemia,
        ] = values;

        Self {
            age: age as u16,
            sex: if sex == 1.0 { Sex::Male } else { Sex::Female },
            chest_pain_type: chest_pain_type as u16,
            resting_bp: resting_bp as u16,
            cholesterol: cholesterol as u16,
            fasting_sugar_high: fasting_sugar_high == 1.0,
            rest_ecg: rest_ecg as u16,
            max_heart_rate: max_heart_rate as u16,
            exercise_angina: exercise_angina == 1.0,
            st_depression,
            st_slope: st_slope as u16,
            major_vessels: major_vessels as u16,
            thalassemia: thalassemia as u16,
        }
    }

    pub fn age(&self) -> u16 {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn chest_pain_type(&self) -> u16 {
        self.chest_pain_type
    }

    pub fn resting_bp(&self) -> u16 {
        self.resting_bp
    }

    pub fn cholesterol(&self) -> u16 {
        self.cholesterol
    }

    pub fn fasting_sugar_high(&self) -> bool {
        self.fasting_sugar_high
    }

    pub fn rest_ecg(&self) -> u16 {
        self.rest_ecg
    }

    pub fn max_heart_rate(&self) -> u16 {
        self.max_heart_rate
    }

    pub fn exercise_angina(&self) -> bool {
        self.exercise_angina
    }

    pub fn st_depression(&self) -> f64 {
        self.st_depression
    }

    pub fn st_slope(&self) -> u16 {
        self.st_slope
    }

    pub fn major_vessels(&self) -> u16 {
        self.major_vessels
    }

    pub fn thalassemia(&self) -> u16 {
        self.thalassemia
    }

    /// Numeric encoding of a single field.
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Age => f64::from(self.age),
            Field::Sex => f64::from(self.sex.code()),
            Field::ChestPainType => f64::from(self.chest_pain_type),
            Field::RestingBp => f64::from(self.resting_bp),
            Field::Cholesterol => f64::from(self.cholesterol),
            Field::FastingSugarHigh => f64::from(u8::from(self.fasting_sugar_high)),
            Field::RestEcg => f64::from(self.rest_ecg),
            Field::MaxHeartRate => f64::from(self.max_heart_rate),
            Field::ExerciseAngina => f64::from(u8::from(self.exercise_angina)),
            Field::StDepression => self.st_depression,
            Field::StSlope => f64::from(self.st_slope),
            Field::MajorVessels => f64::from(self.major_vessels),
            Field::Thalassemia => f64::from(self.thalassemia),
        }
    }

    /// The classifier input row, in model feature order.
    pub fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        Field::ALL.map(|field| self.value(field))
    }
}

impl TryFrom<RawParameters> for ParameterSet {
    type Error = ValidationError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

impl From<ParameterSet> for RawParameters {
    fn from(params: ParameterSet) -> Self {
        let mut raw = RawParameters::default();
        for field in Field::ALL {
            raw.set(field, params.value(field));
        }
        raw
    }
}
