//! Configuration model for charter.
//!
//! This module defines the Config struct that represents the optional
//! `charter.yaml` at the repository root. Unknown fields are ignored, every
//! field has a default, and values are validated after parsing.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use types::PlanFormat;

/// File name of the configuration file, relative to the repository root.
pub const CONFIG_FILE_NAME: &str = "charter.yaml";
