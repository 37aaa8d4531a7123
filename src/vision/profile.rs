//! The vision profile record.

use crate::error::{CharterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inferred application domain of a vision document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Education,
    Healthcare,
    Finance,
    Ecommerce,
    Social,
    Iot,
    Enterprise,
    Gaming,
    Media,
    #[default]
    General,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Education => "education",
            Domain::Healthcare => "healthcare",
            Domain::Finance => "finance",
            Domain::Ecommerce => "ecommerce",
            Domain::Social => "social",
            Domain::Iot => "iot",
            Domain::Enterprise => "enterprise",
            Domain::Gaming => "gaming",
            Domain::Media => "media",
            Domain::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short- and long-term goals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

/// Everything extracted from one vision document.
///
/// Built once by [`analyze`](super::analyze) and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionProfile {
    pub mission: String,
    /// At most 10, first occurrence order, no duplicates.
    pub principles: Vec<String>,
    pub goals: Goals,
    pub constraints: Vec<String>,
    pub success_criteria: Vec<String>,
    pub domain: Domain,
    /// At most 5, lower-cased.
    pub stakeholders: Vec<String>,
    /// At most 7, drawn from a fixed vocabulary.
    pub values: Vec<String>,
    /// At most 5 sentences.
    pub architecture_hints: Vec<String>,
}

impl VisionProfile {
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Architecture hints joined and lower-cased, for substring tests.
    pub fn hints_text(&self) -> String {
        self.architecture_hints.join(" ").to_lowercase()
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CharterError::UserError(format!("failed to serialize vision profile: {}", e))
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| CharterError::UserError(format!("failed to parse vision profile: {}", e)))
    }
}
