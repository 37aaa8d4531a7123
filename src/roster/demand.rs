//! Sprint task demand analysis.
//!
//! Counts sprint tasks per agent type and suggests a specialist for every
//! type whose volume crosses the specialization threshold.

use super::catalog::catalog_rank;
use super::model::DemandPriority;
use crate::backlog::SprintTask;
use crate::config::Config;
use crate::error::{CharterError, DocumentKind, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::path::Path;
use tracing::debug;

const MAX_SAMPLE_TASKS: usize = 3;

/// The parts of a sprint task demand analysis looks at.
///
/// Deserialized leniently so hand-edited plans with unknown agent types or
/// missing estimates still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandTask {
    #[serde(default = "default_agent_type")]
    pub agent_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_points")]
    pub estimated_points: u32,
}

fn default_agent_type() -> String {
    "general-agent".to_string()
}

fn default_points() -> u32 {
    2
}

impl From<&SprintTask> for DemandTask {
    fn from(task: &SprintTask) -> Self {
        Self {
            agent_type: task.agent_type.as_str().to_string(),
            description: task.description.clone(),
            estimated_points: task.estimated_points,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlanTasks {
    #[serde(default)]
    tasks: Vec<DemandTask>,
}

/// Task counts at which a type earns a specialist, and a high priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandThresholds {
    pub specialization: usize,
    pub high_priority: usize,
}

impl Default for DemandThresholds {
    fn default() -> Self {
        Self {
            specialization: 3,
            high_priority: 5,
        }
    }
}

impl From<&Config> for DemandThresholds {
    fn from(config: &Config) -> Self {
        Self {
            specialization: config.specialization_threshold,
            high_priority: config.high_priority_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSuggestion {
    pub agent_type: String,
    pub task_count: usize,
    pub avg_complexity: f64,
    pub sample_tasks: Vec<String>,
    pub priority: DemandPriority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandAnalysis {
    pub suggestions: Vec<DemandSuggestion>,
    pub total_tasks: usize,
    pub unique_agent_types: usize,
}

struct TypeDemand<'a> {
    agent_type: &'a str,
    descriptions: Vec<&'a str>,
    points: Vec<u32>,
}

/// Group `tasks` by agent type and suggest specialists.
///
/// Suggestions are sorted by task count, highest first. Equal counts keep
/// catalog order, and uncatalogued types follow in first-seen order.
pub fn analyze_task_demand(tasks: &[DemandTask], thresholds: DemandThresholds) -> DemandAnalysis {
    let mut demand: Vec<TypeDemand<'_>> = Vec::new();
    for task in tasks {
        let entry = match demand.iter().position(|d| d.agent_type == task.agent_type) {
            Some(index) => &mut demand[index],
            None => {
                demand.push(TypeDemand {
                    agent_type: &task.agent_type,
                    descriptions: Vec::new(),
                    points: Vec::new(),
                });
                let last = demand.len() - 1;
                &mut demand[last]
            }
        };
        entry.descriptions.push(&task.description);
        entry.points.push(task.estimated_points);
    }

    let mut suggestions: Vec<DemandSuggestion> = demand
        .iter()
        .filter(|d| d.descriptions.len() >= thresholds.specialization)
        .map(|d| {
            let task_count = d.descriptions.len();
            let total: u32 = d.points.iter().sum();
            DemandSuggestion {
                agent_type: d.agent_type.to_string(),
                task_count,
                avg_complexity: f64::from(total) / task_count as f64,
                sample_tasks: d
                    .descriptions
                    .iter()
                    .take(MAX_SAMPLE_TASKS)
                    .map(|s| s.to_string())
                    .collect(),
                priority: if task_count >= thresholds.high_priority {
                    DemandPriority::High
                } else {
                    DemandPriority::Medium
                },
            }
        })
        .collect();

    suggestions.sort_by_key(|s| {
        (
            Reverse(s.task_count),
            catalog_rank(&s.agent_type).unwrap_or(usize::MAX),
        )
    });

    debug!(
        total_tasks = tasks.len(),
        agent_types = demand.len(),
        suggestions = suggestions.len(),
        "analyzed task demand"
    );

    DemandAnalysis {
        suggestions,
        total_tasks: tasks.len(),
        unique_agent_types: demand.len(),
    }
}

/// Read the tasks of a sprint plan file, YAML or JSON by extension.
pub fn load_demand_tasks(path: &Path) -> Result<Vec<DemandTask>> {
    if !path.is_file() {
        return Err(CharterError::not_found(DocumentKind::SprintPlan, [path]));
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        CharterError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let plan: PlanTasks = if is_json {
        serde_json::from_str(&content).map_err(|e| {
            CharterError::UserError(format!("invalid sprint plan '{}': {}", path.display(), e))
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            CharterError::UserError(format!("invalid sprint plan '{}': {}", path.display(), e))
        })?
    };

    Ok(plan.tasks)
}
