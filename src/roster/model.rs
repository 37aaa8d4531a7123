//! Agent specification records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an agent sits in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AgentType {
    Coordination,
    #[default]
    Development,
    Enforcement,
}

impl AgentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentType::Coordination => "coordination",
            AgentType::Development => "development",
            AgentType::Enforcement => "enforcement",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an agent is allowed to decide on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Authority {
    Coordinate,
    Assign,
    #[default]
    Implement,
    Validate,
    Document,
    Enforce,
}

impl Authority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::Coordinate => "coordinate",
            Authority::Assign => "assign",
            Authority::Implement => "implement",
            Authority::Validate => "validate",
            Authority::Document => "document",
            Authority::Enforce => "enforce",
        }
    }

    /// Title-cased name, e.g. `Coordinate`.
    pub fn title(&self) -> &'static str {
        match self {
            Authority::Coordinate => "Coordinate",
            Authority::Assign => "Assign",
            Authority::Implement => "Implement",
            Authority::Validate => "Validate",
            Authority::Document => "Document",
            Authority::Enforce => "Enforce",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a demand-driven specialist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandPriority {
    High,
    Medium,
}

/// One agent of the roster.
///
/// Only `agent_id`, `title` and `role` are required when reading a
/// specification file; everything else has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub agent_id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub agent_type: AgentType,
    pub role: String,
    #[serde(default)]
    pub authority: Authority,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,

    // =========================================================================
    // Demand-driven specialists only
    // =========================================================================
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quality_gates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<DemandPriority>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_tasks: Vec<String>,
}

impl AgentSpec {
    pub fn new(
        agent_id: &str,
        title: &str,
        agent_type: AgentType,
        role: &str,
        authority: Authority,
        responsibilities: &[&str],
    ) -> Self {
        Self {
            agent_id: agent_id.to_string(),
            title: title.to_string(),
            agent_type,
            role: role.to_string(),
            authority,
            responsibilities: responsibilities.iter().map(|r| r.to_string()).collect(),
            capabilities: Vec::new(),
            quality_gates: Vec::new(),
            rationale: None,
            priority: None,
            sample_tasks: Vec::new(),
        }
    }
}

/// On-disk shape of an agent specifications file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub agents: Vec<AgentSpec>,
}
