//! Configuration types and defaults for charter.

use serde::{Deserialize, Serialize};

/// Serialization format for the sprint plan artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanFormat {
    #[default]
    Yaml,
    Json,
}

impl PlanFormat {
    /// Parse a plan format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Vision document candidates, tried in order; the first existing file wins.
pub fn default_vision_candidates() -> Vec<String> {
    vec![
        "docs/product/vision.md".to_string(),
        "docs/vision.md".to_string(),
        "VISION.md".to_string(),
        "README.md".to_string(),
    ]
}

pub(crate) fn default_backlog_path() -> String {
    "docs/development/backlog-v1.md".to_string()
}
pub(crate) fn default_output_dir() -> String {
    ".mas-system".to_string()
}
pub(crate) fn default_sprint_plan_path() -> String {
    "tools/agent-orchestration/current-sprint.yaml".to_string()
}
pub(crate) fn default_merge_constitution_path() -> String {
    ".github/agents/pr-merge-constitution.yaml".to_string()
}
pub(crate) fn default_agents_dir() -> String {
    ".github/agents".to_string()
}
pub(crate) fn default_sprint_duration_days() -> u32 {
    14
}
pub(crate) fn default_specialization_threshold() -> usize {
    3
}
pub(crate) fn default_high_priority_threshold() -> usize {
    5
}
