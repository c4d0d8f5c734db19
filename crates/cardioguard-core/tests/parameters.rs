use cardioguard_core::{Field, RawParameters, ValidationKind};
use proptest::prelude::*;

/// Strategy producing an in-range numeric value for every field.
fn valid_values() -> impl Strategy<Value = Vec<f64>> {
    Field::ALL
        .iter()
        .map(|field| {
            let range = field.range();
            if range.step.is_some() {
                (range.min as i32..=range.max as i32)
                    .prop_map(f64::from)
                    .boxed()
            } else {
                (0u32..=60).prop_map(|tenths| f64::from(tenths) / 10.0).boxed()
            }
        })
        .collect::<Vec<_>>()
}

fn raw_from(values: &[f64]) -> RawParameters {
    let mut raw = RawParameters::default();
    for (field, value) in Field::ALL.iter().zip(values) {
        raw.set(*field, *value);
    }
    raw
}

proptest! {
    #[test]
    fn in_range_values_always_validate(values in valid_values()) {
        let params = raw_from(&values).validate().expect("in-range input must validate");
        prop_assert_eq!(params.feature_vector().to_vec(), values);
    }

    #[test]
    fn age_outside_range_never_validates(age in prop_oneof![0i32..20, 101i32..400]) {
        let mut raw = RawParameters::form_defaults();
        raw.set(Field::Age, age);

        let err = raw.validate().unwrap_err();
        prop_assert_eq!(err.field, Field::Age);
        prop_assert_eq!(err.kind, ValidationKind::OutOfRange);
    }
}

#[test]
fn form_body_with_labels_deserializes() {
    let body = r#"{
        "age": 61, "sex": "Female", "chest_pain_type": 2, "resting_bp": 145,
        "cholesterol": 250, "fasting_sugar_high": "Yes", "rest_ecg": 0,
        "max_heart_rate": 110, "exercise_angina": "Yes", "st_depression": 2.4,
        "st_slope": 2, "major_vessels": 1, "thalassemia": 3
    }"#;

    let raw: RawParameters = serde_json::from_str(body).unwrap();
    let params = raw.validate().unwrap();

    assert_eq!(params.age(), 61);
    assert_eq!(params.value(Field::Sex), 0.0);
    assert!(params.fasting_sugar_high());
    assert!(params.exercise_angina());
    assert_eq!(params.st_depression(), 2.4);
}

#[test]
fn empty_body_reports_every_field_missing() {
    let raw: RawParameters = serde_json::from_str("{}").unwrap();
    let errors = raw.validation_errors();

    assert_eq!(errors.len(), Field::ALL.len());
    assert!(errors.iter().all(|e| e.kind == ValidationKind::Missing));
}
