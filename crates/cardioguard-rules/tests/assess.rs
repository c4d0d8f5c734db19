use std::sync::atomic::{AtomicUsize, Ordering};

use cardioguard_core::{Field, ParameterSet, RawParameters, RiskLevel, ValidationKind};
use cardioguard_model::RiskClassifier;
use cardioguard_model::artifact::ModelArtifact;
use cardioguard_model::error::ClassifierError;
use cardioguard_model::fixed::FixedProbability;
use cardioguard_model::logistic::LogisticClassifier;
use cardioguard_rules::{AssessError, RiskEvaluator, assess};

/// Counts calls so tests can prove the classifier was or was not reached.
struct CountingClassifier {
    calls: AtomicUsize,
    result: fn() -> Result<f64, ClassifierError>,
}

impl CountingClassifier {
    fn new(result: fn() -> Result<f64, ClassifierError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result,
        }
    }
}

impl RiskClassifier for CountingClassifier {
    fn name(&self) -> &str {
        "counting"
    }

    fn predict(&self, _params: &ParameterSet) -> Result<f64, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.result)()
    }
}

#[test]
fn fixed_probability_flows_into_report() {
    let assessment = assess(
        &FixedProbability::new(0.15),
        &RiskEvaluator::default(),
        &RawParameters::form_defaults(),
    )
    .unwrap();

    assert_eq!(assessment.model, "fixed-probability");
    assert_eq!(assessment.report.risk_percent, 15.0);
    assert_eq!(assessment.report.risk_level, RiskLevel::Low);
    assert!(assessment.top_features.is_empty());
}

#[test]
fn invalid_input_never_reaches_classifier() {
    let classifier = CountingClassifier::new(|| Ok(0.5));
    let mut raw = RawParameters::form_defaults();
    raw.set(Field::Age, 150);

    let err = assess(&classifier, &RiskEvaluator::default(), &raw).unwrap_err();

    match err {
        AssessError::Validation(e) => {
            assert_eq!(e.field, Field::Age);
            assert_eq!(e.kind, ValidationKind::OutOfRange);
            assert_eq!(e.to_string(), "age: value 150 is outside range [20, 100]");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn classifier_failure_is_propagated_without_retry() {
    let classifier =
        CountingClassifier::new(|| Err(ClassifierError::Inference("backend down".to_string())));

    let err = assess(
        &classifier,
        &RiskEvaluator::default(),
        &RawParameters::form_defaults(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        AssessError::Classifier(ClassifierError::Inference(_))
    ));
    assert_eq!(err.to_string(), "inference failed: backend down");
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn out_of_range_probability_is_a_classifier_error() {
    let err = assess(
        &FixedProbability::new(1.5),
        &RiskEvaluator::default(),
        &RawParameters::form_defaults(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        AssessError::Classifier(ClassifierError::InvalidOutput(p)) if p == 1.5
    ));
}

#[test]
fn artifact_model_reports_top_features() {
    let artifact =
        ModelArtifact::from_json(include_str!("../../cardioguard-model/fixtures/demo_model.json"))
            .unwrap();
    let model = LogisticClassifier::from_artifact(artifact).unwrap();

    let assessment = assess(
        &model,
        &RiskEvaluator::default(),
        &RawParameters::form_defaults(),
    )
    .unwrap();

    assert_eq!(assessment.model, "cardioguard-demo-logistic");
    assert_eq!(assessment.top_features.len(), 3);
    assert_eq!(assessment.report.risk_level, RiskLevel::Low);
}

#[test]
fn assessment_round_trips_through_json() {
    let assessment = assess(
        &FixedProbability::new(0.5),
        &RiskEvaluator::default(),
        &RawParameters::form_defaults(),
    )
    .unwrap();

    let json = serde_json::to_string(&assessment).unwrap();
    let back: cardioguard_rules::Assessment = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, assessment.id);
    assert_eq!(back.parameters, assessment.parameters);
    assert_eq!(back.report, assessment.report);
}
