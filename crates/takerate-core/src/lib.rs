//! # takerate-core
//! Foundation types, configuration, and traits for the take-rate model.

pub mod config;
pub mod constants;
pub mod error;
pub mod money;
pub mod traits;
pub mod types;
