use cardioguard_core::{ParameterSet, Probability, RiskReport, StatusFlag};

use crate::rules::{self, BASE_HEALTH_SCORE, RuleSet};

/// Turns a validated parameter set and a model probability into a report.
///
/// Evaluation is a pure function of its inputs: no logging, no I/O, no
/// interior state. Identical inputs give identical reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEvaluator {
    rules: RuleSet,
}

impl RiskEvaluator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn evaluate(&self, params: &ParameterSet, probability: Probability) -> RiskReport {
        let risk_percent = probability.percent();
        let risk_level = rules::risk_level_for(risk_percent);

        let status_flags = self
            .rules
            .status_checks
            .iter()
            .map(|check| StatusFlag {
                parameter: check.parameter.to_string(),
                status: check.normal.classify((check.value)(params)),
            })
            .collect();

        let risk_drivers = rules::matching(self.rules.risk_drivers, params)
            .map(|label| label.to_string())
            .collect();

        let mut recommended_actions: Vec<String> =
            rules::matching(self.rules.recommended_actions, params)
                .map(|label| label.to_string())
                .collect();
        if recommended_actions.is_empty() {
            recommended_actions.push(self.rules.fallback_action.to_string());
        }

        RiskReport {
            probability: probability.value(),
            risk_percent,
            risk_level,
            status_flags,
            risk_drivers,
            health_score: self.health_score(params, risk_percent),
            recommended_actions,
            followup_message: rules::followup_message(risk_level).to_string(),
        }
    }

    /// Base score minus the first matching probability tier and every
    /// matching clinical penalty, floored at zero.
    pub fn health_score(&self, params: &ParameterSet, risk_percent: f64) -> u8 {
        let tier_penalty = self
            .rules
            .probability_penalties
            .iter()
            .find(|tier| risk_percent > tier.above_percent)
            .map_or(0, |tier| u32::from(tier.penalty));

        let clinical_penalty: u32 = rules::matching(self.rules.clinical_penalties, params)
            .map(|penalty| u32::from(*penalty))
            .sum();

        let score = u32::from(BASE_HEALTH_SCORE).saturating_sub(tier_penalty + clinical_penalty);
        score as u8
    }
}

#[cfg(test)]
mod tests {
    use cardioguard_core::{Field, ParameterStatus, RawParameters, RiskLevel};

    use super::*;
    use crate::rules::{Rule, StatusCheck};

    fn params(overrides: &[(Field, f64)]) -> ParameterSet {
        let mut raw = RawParameters::form_defaults();
        for (field, value) in overrides {
            raw.set(*field, *value);
        }
        raw.validate().unwrap()
    }

    #[test]
    fn percent_penalty_tiers_are_exclusive() {
        let evaluator = RiskEvaluator::default();
        let p = params(&[]);
        assert_eq!(evaluator.health_score(&p, 40.0), 100);
        assert_eq!(evaluator.health_score(&p, 40.01), 85);
        assert_eq!(evaluator.health_score(&p, 70.0), 85);
        assert_eq!(evaluator.health_score(&p, 70.01), 75);
    }

    #[test]
    fn clinical_penalties_stack() {
        let evaluator = RiskEvaluator::default();
        let p = params(&[
            (Field::Cholesterol, 300.0),
            (Field::RestingBp, 160.0),
            (Field::FastingSugarHigh, 1.0),
            (Field::ExerciseAngina, 1.0),
        ]);
        assert_eq!(evaluator.health_score(&p, 90.0), 100 - 25 - 10 - 10 - 5 - 10);
    }

    static HARSH_PENALTIES: [Rule<u8>; 2] = [
        Rule {
            id: "always",
            applies: |_| true,
            outcome: 80,
        },
        Rule {
            id: "always_again",
            applies: |_| true,
            outcome: 80,
        },
    ];

    #[test]
    fn score_floors_at_zero_under_custom_policy() {
        let rules = RuleSet {
            clinical_penalties: &HARSH_PENALTIES,
            ..RuleSet::standard()
        };
        let evaluator = RiskEvaluator::new(rules);
        assert_eq!(evaluator.health_score(&params(&[]), 99.0), 0);
    }

    static NO_STATUS_CHECKS: [StatusCheck; 0] = [];

    #[test]
    fn custom_policy_can_drop_status_checks() {
        let rules = RuleSet {
            status_checks: &NO_STATUS_CHECKS,
            ..RuleSet::standard()
        };
        let report = RiskEvaluator::new(rules).evaluate(&params(&[]), Probability::new(0.1).unwrap());
        assert!(report.status_flags.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn status_flags_cover_low_and_high_readings() {
        let report = RiskEvaluator::default().evaluate(
            &params(&[
                (Field::RestingBp, 85.0),
                (Field::Cholesterol, 241.0),
                (Field::MaxHeartRate, 200.0),
            ]),
            Probability::new(0.2).unwrap(),
        );

        let statuses: Vec<_> = report
            .status_flags
            .iter()
            .map(|f| (f.parameter.as_str(), f.status))
            .collect();
        assert_eq!(
            statuses,
            vec![
                ("Blood Pressure", ParameterStatus::BelowNormal),
                ("Cholesterol", ParameterStatus::AboveNormal),
                ("Max Heart Rate", ParameterStatus::Normal),
            ]
        );
    }
}
