pub mod field;
pub mod parameters;
pub mod probability;
pub mod report;
