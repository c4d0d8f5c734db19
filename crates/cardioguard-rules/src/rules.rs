//! Rule tables.
//!
//! Every threshold that shapes a report lives here as data: ordered tables of
//! `(predicate, outcome)` pairs that [`crate::evaluator::RiskEvaluator`] walks
//! once. Table order is output order.

use std::fmt;

use cardioguard_core::{ParameterSet, ParameterStatus, RiskLevel};

/// Lower edge (inclusive) of the MODERATE band, in percent.
pub const MODERATE_BAND_START: f64 = 30.0;

/// Lower edge (inclusive) of the HIGH band, in percent.
pub const HIGH_BAND_START: f64 = 70.0;

/// Health score before penalties.
pub const BASE_HEALTH_SCORE: u8 = 100;

/// Used when no action rule matches.
pub const FALLBACK_ACTION: &str = "Maintain current healthy lifestyle with periodic check-ups";

/// A single independent rule: when `applies` holds, `outcome` is emitted.
#[derive(Clone, Copy)]
pub struct Rule<T: 'static> {
    pub id: &'static str,
    pub applies: fn(&ParameterSet) -> bool,
    pub outcome: T,
}

/// Inclusive normal range for a status check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalRange {
    pub low: f64,
    pub high: f64,
}

impl NormalRange {
    pub fn classify(&self, value: f64) -> ParameterStatus {
        if value < self.low {
            ParameterStatus::BelowNormal
        } else if value > self.high {
            ParameterStatus::AboveNormal
        } else {
            ParameterStatus::Normal
        }
    }
}

#[derive(Clone, Copy)]
pub struct StatusCheck {
    pub parameter: &'static str,
    pub value: fn(&ParameterSet) -> f64,
    pub normal: NormalRange,
}

/// Probability-based penalty tier. Tiers are tried in order and only the
/// first one whose threshold is exceeded applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityTier {
    pub above_percent: f64,
    pub penalty: u8,
}

pub static STATUS_CHECKS: [StatusCheck; 3] = [
    StatusCheck {
        parameter: "Blood Pressure",
        value: |p| f64::from(p.resting_bp()),
        normal: NormalRange {
            low: 90.0,
            high: 140.0,
        },
    },
    StatusCheck {
        parameter: "Cholesterol",
        value: |p| f64::from(p.cholesterol()),
        normal: NormalRange {
            low: 150.0,
            high: 240.0,
        },
    },
    StatusCheck {
        parameter: "Max Heart Rate",
        value: |p| f64::from(p.max_heart_rate()),
        normal: NormalRange {
            low: 120.0,
            high: 200.0,
        },
    },
];

pub static RISK_DRIVERS: [Rule<&str>; 6] = [
    Rule {
        id: "chest_pain",
        applies: |p| p.chest_pain_type() > 1,
        outcome: "Abnormal chest pain pattern",
    },
    Rule {
        id: "major_vessels",
        applies: |p| p.major_vessels() > 0,
        outcome: "Coronary vessel blockage indicator",
    },
    Rule {
        id: "thalassemia",
        applies: |p| p.thalassemia() > 2,
        outcome: "Thalassemia abnormality",
    },
    Rule {
        id: "st_depression",
        applies: |p| p.st_depression() > 1.0,
        outcome: "ST depression irregularity",
    },
    Rule {
        id: "cholesterol",
        applies: |p| p.cholesterol() > 240,
        outcome: "Elevated cholesterol level",
    },
    Rule {
        id: "resting_bp",
        applies: |p| p.resting_bp() > 140,
        outcome: "High resting blood pressure",
    },
];

pub static PROBABILITY_PENALTIES: [ProbabilityTier; 2] = [
    ProbabilityTier {
        above_percent: 70.0,
        penalty: 25,
    },
    ProbabilityTier {
        above_percent: 40.0,
        penalty: 15,
    },
];

pub static CLINICAL_PENALTIES: [Rule<u8>; 4] = [
    Rule {
        id: "cholesterol",
        applies: |p| p.cholesterol() > 240,
        outcome: 10,
    },
    Rule {
        id: "resting_bp",
        applies: |p| p.resting_bp() > 140,
        outcome: 10,
    },
    Rule {
        id: "fasting_sugar",
        applies: |p| p.fasting_sugar_high(),
        outcome: 5,
    },
    Rule {
        id: "exercise_angina",
        applies: |p| p.exercise_angina(),
        outcome: 10,
    },
];

pub static RECOMMENDED_ACTIONS: [Rule<&str>; 5] = [
    Rule {
        id: "cholesterol",
        applies: |p| p.cholesterol() > 240,
        outcome: "Adopt low-fat, high-fiber diet",
    },
    Rule {
        id: "resting_bp",
        applies: |p| p.resting_bp() > 140,
        outcome: "Reduce sodium intake and monitor blood pressure",
    },
    Rule {
        id: "max_heart_rate",
        applies: |p| p.max_heart_rate() < 120,
        outcome: "Increase aerobic exercise gradually",
    },
    Rule {
        id: "fasting_sugar",
        applies: |p| p.fasting_sugar_high(),
        outcome: "Control sugar intake and monitor glucose",
    },
    Rule {
        id: "age",
        applies: |p| p.age() > 50,
        outcome: "Schedule periodic cardiology screening",
    },
];

/// Band a rounded percentage. Intervals are half-open, lower bound inclusive.
pub fn risk_level_for(percent: f64) -> RiskLevel {
    if percent < MODERATE_BAND_START {
        RiskLevel::Low
    } else if percent < HIGH_BAND_START {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

pub fn followup_message(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "Consult a cardiologist for detailed clinical evaluation.",
        RiskLevel::Moderate => "Medical check-up recommended in the near term.",
        RiskLevel::Low => "Continue preventive lifestyle and routine monitoring.",
    }
}

/// The outcomes of every rule in `rules` that applies to `params`, in table order.
pub fn matching<'a, T>(
    rules: &'a [Rule<T>],
    params: &'a ParameterSet,
) -> impl Iterator<Item = &'a T> + 'a {
    rules
        .iter()
        .filter(move |rule| (rule.applies)(params))
        .map(|rule| &rule.outcome)
}

/// One complete scoring policy.
#[derive(Clone, Copy)]
pub struct RuleSet {
    pub status_checks: &'static [StatusCheck],
    pub risk_drivers: &'static [Rule<&'static str>],
    pub probability_penalties: &'static [ProbabilityTier],
    pub clinical_penalties: &'static [Rule<u8>],
    pub recommended_actions: &'static [Rule<&'static str>],
    pub fallback_action: &'static str,
}

impl RuleSet {
    /// The policy the product ships with.
    pub fn standard() -> Self {
        Self {
            status_checks: &STATUS_CHECKS,
            risk_drivers: &RISK_DRIVERS,
            probability_penalties: &PROBABILITY_PENALTIES,
            clinical_penalties: &CLINICAL_PENALTIES,
            recommended_actions: &RECOMMENDED_ACTIONS,
            fallback_action: FALLBACK_ACTION,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn ids<T>(rules: &[Rule<T>]) -> Vec<&'static str> {
            rules.iter().map(|r| r.id).collect()
        }

        f.debug_struct("RuleSet")
            .field(
                "status_checks",
                &self
                    .status_checks
                    .iter()
                    .map(|c| c.parameter)
                    .collect::<Vec<_>>(),
            )
            .field("risk_drivers", &ids(self.risk_drivers))
            .field("probability_penalties", &self.probability_penalties)
            .field("clinical_penalties", &ids(self.clinical_penalties))
            .field("recommended_actions", &ids(self.recommended_actions))
            .field("fallback_action", &self.fallback_action)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_range_is_inclusive_at_both_ends() {
        let range = NormalRange {
            low: 90.0,
            high: 140.0,
        };
        assert_eq!(range.classify(89.0), ParameterStatus::BelowNormal);
        assert_eq!(range.classify(90.0), ParameterStatus::Normal);
        assert_eq!(range.classify(140.0), ParameterStatus::Normal);
        assert_eq!(range.classify(141.0), ParameterStatus::AboveNormal);
    }

    #[test]
    fn bands_partition_at_thirty_and_seventy() {
        assert_eq!(risk_level_for(0.0), RiskLevel::Low);
        assert_eq!(risk_level_for(29.99), RiskLevel::Low);
        assert_eq!(risk_level_for(30.0), RiskLevel::Moderate);
        assert_eq!(risk_level_for(69.99), RiskLevel::Moderate);
        assert_eq!(risk_level_for(70.0), RiskLevel::High);
        assert_eq!(risk_level_for(100.0), RiskLevel::High);
    }

    #[test]
    fn probability_tiers_are_ordered_high_to_low() {
        assert!(
            PROBABILITY_PENALTIES
                .windows(2)
                .all(|w| w[0].above_percent > w[1].above_percent)
        );
    }

    #[test]
    fn rule_ids_are_unique_within_each_table() {
        fn unique<T>(rules: &[Rule<T>]) -> bool {
            let mut ids: Vec<_> = rules.iter().map(|r| r.id).collect();
            ids.sort_unstable();
            ids.windows(2).all(|w| w[0] != w[1])
        }
        assert!(unique(&RISK_DRIVERS));
        assert!(unique(&CLINICAL_PENALTIES));
        assert!(unique(&RECOMMENDED_ACTIONS));
    }
}
