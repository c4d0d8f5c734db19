//! cardioguard-cli
//!
//! Command-line front end: config file handling and parameter input.

pub mod config;
pub mod input;
pub mod resolve;
