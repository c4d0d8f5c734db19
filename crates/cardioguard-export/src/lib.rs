//! cardioguard-export
//!
//! Text rendering of assessments through Tera templates.

pub mod error;
pub mod render;
