pub mod assess;
pub mod health;
pub mod parameters;
