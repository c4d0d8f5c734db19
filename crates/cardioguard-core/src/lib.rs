//! cardioguard-core
//!
//! Pure domain types: the clinical parameter vector, its validation, and the
//! risk report value object. No model or I/O dependency; every other
//! CardioGuard crate builds on these types.

pub mod error;
pub mod models;

pub use error::{ProbabilityError, ValidationError, ValidationKind};
pub use models::field::{FEATURE_COUNT, Field, FieldRange};
pub use models::parameters::{InputValue, ParameterSet, RawParameters, Sex};
pub use models::probability::Probability;
pub use models::report::{ParameterStatus, RiskLevel, RiskReport, StatusFlag};
