//! Sprint planning.

use super::model::{Backlog, Epic, PlanAlignment, Priority, SprintPlan, SprintTask, TaskAgentType, TaskStatus};
use crate::config::PlanFormat;
use crate::error::{CharterError, Result};
use crate::vision::VisionProfile;
use tracing::debug;

pub const MAX_SPRINT_EPICS: usize = 3;
const MAX_ALIGNED_GOALS: usize = 2;
const DEFAULT_POINTS: u32 = 2;
const FOUNDATION_GOAL: &str = "Initialize project foundation";

/// Story point estimate by keyword, first match wins.
pub const POINT_RULES: &[(&[&str], u32)] = &[
    (&["implementation", "integration", "system", "architecture"], 5),
    (&["design", "create", "build", "add"], 3),
    (&["setup", "update", "fix", "document"], 1),
];

/// Agent routing by keyword, first match wins.
pub const AGENT_TYPE_RULES: &[(&[&str], TaskAgentType)] = &[
    (&["ui", "screen", "component", "view"], TaskAgentType::UiAgent),
    (&["database", "storage", "data", "schema"], TaskAgentType::DataAgent),
    (&["test", "testing", "validation"], TaskAgentType::TestAgent),
    (&["document", "docs", "guide"], TaskAgentType::DocAgent),
    (&["api", "endpoint", "service"], TaskAgentType::BackendAgent),
];

fn first_match<'a, T: Copy>(rules: &'a [(&'a [&'a str], T)], text: &str) -> Option<T> {
    let lower = text.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, value)| *value)
}

pub fn estimate_points(description: &str) -> u32 {
    first_match(POINT_RULES, description).unwrap_or(DEFAULT_POINTS)
}

pub fn suggest_agent_type(description: &str) -> TaskAgentType {
    first_match(AGENT_TYPE_RULES, description).unwrap_or(TaskAgentType::GeneralAgent)
}

/// Plan a sprint over the first critical epics of `backlog`.
pub fn plan_sprint(backlog: &Backlog, profile: &VisionProfile, duration_days: u32) -> SprintPlan {
    let epics: Vec<Epic> = backlog
        .epics
        .iter()
        .filter(|e| e.priority == Priority::Critical)
        .take(MAX_SPRINT_EPICS)
        .cloned()
        .collect();

    let plan = SprintPlan {
        sprint_goal: sprint_goal(&epics),
        duration_days,
        alignment: PlanAlignment {
            vision_goals: profile
                .goals
                .short_term
                .iter()
                .take(MAX_ALIGNED_GOALS)
                .cloned()
                .collect(),
            success_criteria: profile.success_criteria.clone(),
        },
        tasks: sprint_tasks(&epics),
        epics,
    };

    debug!(
        epics = plan.epics.len(),
        tasks = plan.tasks.len(),
        "planned sprint"
    );
    plan
}

fn sprint_goal(epics: &[Epic]) -> String {
    if epics.is_empty() {
        return FOUNDATION_GOAL.to_string();
    }
    let goals: Vec<&str> = epics.iter().take(2).map(|e| e.goal.as_str()).collect();
    format!("Deliver {}", goals.join(" and "))
}

fn sprint_tasks(epics: &[Epic]) -> Vec<SprintTask> {
    let descriptions = epics.iter().flat_map(|epic| {
        epic.stories
            .iter()
            .flat_map(move |story| story.tasks.iter().map(move |task| (epic, story, task)))
    });

    descriptions
        .enumerate()
        .map(|(i, (epic, story, description))| SprintTask {
            id: format!("TASK-{:03}", i + 1),
            epic: epic.title.clone(),
            story: story.title.clone(),
            description: description.clone(),
            priority: epic.priority,
            status: TaskStatus::Todo,
            estimated_points: estimate_points(description),
            agent_type: suggest_agent_type(description),
        })
        .collect()
}

/// Serialize a plan in the configured format.
pub fn render_sprint_plan(plan: &SprintPlan, format: PlanFormat) -> Result<String> {
    match format {
        PlanFormat::Yaml => serde_yaml::to_string(plan).map_err(|e| {
            CharterError::UserError(format!("failed to serialize sprint plan: {}", e))
        }),
        PlanFormat::Json => serde_json::to_string_pretty(plan)
            .map(|json| json + "\n")
            .map_err(|e| {
                CharterError::UserError(format!("failed to serialize sprint plan: {}", e))
            }),
    }
}
