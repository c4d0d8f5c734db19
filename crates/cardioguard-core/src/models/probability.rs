use serde::{Deserialize, Serialize};

use crate::error::ProbabilityError;

/// A classifier output checked to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    pub fn new(value: f64) -> Result<Self, ProbabilityError> {
        if !value.is_finite() {
            return Err(ProbabilityError::NotFinite);
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ProbabilityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Percentage rounded to two decimals.
    ///
    /// Rounds the exact value of `p * 100` once. Scaling by a further 100
    /// before rounding can turn 70.004999... into 70.005 and round it up.
    pub fn percent(self) -> f64 {
        let percent = self.0 * 100.0;
        format!("{percent:.2}").parse().unwrap_or(percent)
    }
}

impl TryFrom<f64> for Probability {
    type Error = ProbabilityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}
