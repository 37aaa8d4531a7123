//! Backlog and sprint plan records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Case-insensitive parse; anything unrecognised is `Medium`.
    pub fn parse(word: &str) -> Self {
        match word.trim().to_lowercase().as_str() {
            "critical" => Priority::Critical,
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    #[default]
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
}

/// The kind of agent a sprint task is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskAgentType {
    UiAgent,
    DataAgent,
    TestAgent,
    DocAgent,
    BackendAgent,
    GeneralAgent,
}

impl TaskAgentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskAgentType::UiAgent => "ui-agent",
            TaskAgentType::DataAgent => "data-agent",
            TaskAgentType::TestAgent => "test-agent",
            TaskAgentType::DocAgent => "doc-agent",
            TaskAgentType::BackendAgent => "backend-agent",
            TaskAgentType::GeneralAgent => "general-agent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// `N.M` as written in the backlog.
    pub id: String,
    pub title: String,
    pub tasks: Vec<String>,
    #[serde(default)]
    pub status: StoryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    /// `Epic N` as written in the backlog.
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub goal: String,
    pub stories: Vec<Story>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backlog {
    pub epics: Vec<Epic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintTask {
    /// `TASK-001`, numbered across the whole plan.
    pub id: String,
    pub epic: String,
    pub story: String,
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    pub estimated_points: u32,
    pub agent_type: TaskAgentType,
}

/// How the sprint ties back to the vision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAlignment {
    pub vision_goals: Vec<String>,
    pub success_criteria: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintPlan {
    pub sprint_goal: String,
    pub duration_days: u32,
    pub epics: Vec<Epic>,
    pub alignment: PlanAlignment,
    pub tasks: Vec<SprintTask>,
}
