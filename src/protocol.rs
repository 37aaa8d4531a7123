//! Agent communication protocol.
//!
//! A fixed record describing how agents talk to each other: message shapes,
//! coordination patterns, standard workflows and where shared state lives.
//! Only `created` varies between runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PROTOCOL_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateFormat {
    pub agent: String,
    pub task: String,
    pub status: Vec<String>,
    pub progress: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequestFormat {
    pub from_agent: String,
    pub to_agent: String,
    pub task: String,
    pub priority: Vec<String>,
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequestFormat {
    pub agent: String,
    pub decision: String,
    pub options: String,
    pub recommendation: String,
    pub rationale: String,
}

/// Field types of each message, by message kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFormats {
    pub status_update: StatusUpdateFormat,
    pub task_request: TaskRequestFormat,
    pub decision_request: DecisionRequestFormat,
}

impl MessageFormats {
    pub const COUNT: usize = 3;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingStructure {
    pub frequency: BTreeMap<String, String>,
    pub channels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationProtocol {
    pub version: String,
    pub created: DateTime<Utc>,
    pub message_formats: MessageFormats,
    pub coordination_patterns: BTreeMap<String, String>,
    pub workflows: BTreeMap<String, Vec<String>>,
    pub state_management: BTreeMap<String, String>,
    pub conflict_resolution: BTreeMap<String, String>,
    pub reporting_structure: ReportingStructure,
}

pub fn communication_protocol(created: DateTime<Utc>) -> CommunicationProtocol {
    CommunicationProtocol {
        version: PROTOCOL_VERSION.to_string(),
        created,
        message_formats: message_formats(),
        coordination_patterns: pairs(&[
            ("parallel", "Independent tasks executed simultaneously"),
            ("sequential", "Tasks with dependencies executed in order"),
            ("divide_conquer", "Large task split among multiple agents"),
            ("review_iterate", "Cycles of implementation and review"),
        ]),
        workflows: workflows(),
        state_management: pairs(&[
            ("sprint_plan", "YAML file in tools/agent-orchestration/"),
            ("task_status", "GitHub Issues"),
            ("code_changes", "Pull Requests"),
            ("decisions", "ADRs in docs/adr/"),
            ("agent_coordination", "Coordination issues"),
        ]),
        conflict_resolution: pairs(&[
            ("design_conflict", "Consult constitution and vision"),
            ("priority_conflict", "Sprint goal alignment"),
            ("resource_conflict", "Critical path priority"),
            ("technical_conflict", "Enforcement agent decision"),
            ("vision_conflict", "Human escalation"),
        ]),
        reporting_structure: ReportingStructure {
            frequency: pairs(&[
                ("status_updates", "daily"),
                ("progress_reports", "weekly"),
                ("sprint_reviews", "end_of_sprint"),
            ]),
            channels: pairs(&[
                ("status", "GitHub Issues"),
                ("progress", "PR descriptions"),
                ("reviews", "Discussion threads"),
            ]),
        },
    }
}

fn message_formats() -> MessageFormats {
    MessageFormats {
        status_update: StatusUpdateFormat {
            agent: "string".to_string(),
            task: "string".to_string(),
            status: strings(&["in-progress", "completed", "blocked", "failed"]),
            progress: "object".to_string(),
            context: "array".to_string(),
        },
        task_request: TaskRequestFormat {
            from_agent: "string".to_string(),
            to_agent: "string".to_string(),
            task: "string".to_string(),
            priority: strings(&["high", "medium", "low"]),
            deadline: "datetime".to_string(),
        },
        decision_request: DecisionRequestFormat {
            agent: "string".to_string(),
            decision: "string".to_string(),
            options: "array".to_string(),
            recommendation: "string".to_string(),
            rationale: "string".to_string(),
        },
    }
}

fn workflows() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "feature_development".to_string(),
            strings(&[
                "Design",
                "Implementation",
                "Testing",
                "Review",
                "Documentation",
                "Deployment",
            ]),
        ),
        (
            "bug_fix".to_string(),
            strings(&[
                "Investigation",
                "Fix Implementation",
                "Testing",
                "Review",
                "Deployment",
            ]),
        ),
        (
            "architecture_decision".to_string(),
            strings(&[
                "Problem Analysis",
                "Options Exploration",
                "Decision Proposal",
                "Review",
                "ADR Creation",
                "Implementation",
            ]),
        ),
    ])
}

fn pairs(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
