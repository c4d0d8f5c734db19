use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse risk band derived from the predicted probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("LOW"),
            Self::Moderate => f.write_str("MODERATE"),
            Self::High => f.write_str("HIGH"),
        }
    }
}

/// Where a measured value sits relative to its normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ParameterStatus {
    BelowNormal,
    Normal,
    AboveNormal,
}

impl ParameterStatus {
    pub fn description(self) -> &'static str {
        match self {
            Self::BelowNormal => "Below normal range",
            Self::Normal => "Within normal range",
            Self::AboveNormal => "Above normal range",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusFlag {
    pub parameter: String,
    pub status: ParameterStatus,
}

/// The outcome of one evaluation. Built once, never mutated, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskReport {
    pub probability: f64,
    /// `probability * 100`, rounded to two decimals.
    pub risk_percent: f64,
    pub risk_level: RiskLevel,
    pub status_flags: Vec<StatusFlag>,
    /// May be empty; the renderer supplies its own fallback line.
    pub risk_drivers: Vec<String>,
    /// 0–100 heuristic wellness indicator.
    pub health_score: u8,
    /// Never empty.
    pub recommended_actions: Vec<String>,
    pub followup_message: String,
}
