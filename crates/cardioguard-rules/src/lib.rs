//! cardioguard-rules
//!
//! Threshold rules that turn a parameter set and a model probability into a
//! [`RiskReport`](cardioguard_core::RiskReport): risk band, parameter status,
//! risk drivers, health score, recommended actions and follow-up. The rules
//! are plain data in [`rules`]; [`evaluator::RiskEvaluator`] is the single
//! engine that applies them.

pub mod assess;
pub mod error;
pub mod evaluator;
pub mod rules;

pub use assess::{Assessment, assess, assess_validated};
pub use error::AssessError;
pub use evaluator::RiskEvaluator;
pub use rules::RuleSet;
