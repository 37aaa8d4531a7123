//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a charter run.
///
/// All paths are relative to the repository root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Source documents
    // =========================================================================
    /// Vision document candidates, tried in order.
    #[serde(default = "default_vision_candidates")]
    pub vision_candidates: Vec<String>,

    /// Backlog document consumed by sprint planning.
    #[serde(default = "default_backlog_path")]
    pub backlog_path: String,

    // =========================================================================
    // Output locations
    // =========================================================================
    /// Directory receiving the bootstrap artifacts and the run log.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Where the sprint plan is written and later read for demand analysis.
    #[serde(default = "default_sprint_plan_path")]
    pub sprint_plan_path: String,

    /// Where the merge-review constitution is written.
    #[serde(default = "default_merge_constitution_path")]
    pub merge_constitution_path: String,

    /// Root directory for rendered agent definitions.
    #[serde(default = "default_agents_dir")]
    pub agents_dir: String,

    // =========================================================================
    // Sprint planning
    // =========================================================================
    #[serde(default = "default_sprint_duration_days")]
    pub sprint_duration_days: u32,

    #[serde(default)]
    pub sprint_plan_format: PlanFormat,

    // =========================================================================
    // Agent demand analysis
    // =========================================================================
    /// Minimum tasks of one agent type before a specialist is proposed.
    #[serde(default = "default_specialization_threshold")]
    pub specialization_threshold: usize,

    /// Task count at which a proposed specialist becomes high priority.
    #[serde(default = "default_high_priority_threshold")]
    pub high_priority_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vision_candidates: default_vision_candidates(),
            backlog_path: default_backlog_path(),
            output_dir: default_output_dir(),
            sprint_plan_path: default_sprint_plan_path(),
            merge_constitution_path: default_merge_constitution_path(),
            agents_dir: default_agents_dir(),
            sprint_duration_days: default_sprint_duration_days(),
            sprint_plan_format: PlanFormat::default(),
            specialization_threshold: default_specialization_threshold(),
            high_priority_threshold: default_high_priority_threshold(),
        }
    }
}
