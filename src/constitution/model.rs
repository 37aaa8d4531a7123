//! Constitution records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a core law is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LawEnforcement {
    #[default]
    Automatic,
}

/// What happens to work that violates a core law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViolationAction {
    #[default]
    Reject,
}

/// A vision principle promoted to an enforced law.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreLaw {
    /// `LAW-001`, `LAW-002`, ...
    pub id: String,
    pub principle: String,
    pub enforcement: LawEnforcement,
    pub violation_action: ViolationAction,
    pub checks: Vec<String>,
}

/// One of the fixed governance principles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipleRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub validation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityGate {
    pub name: String,
    pub checks: Vec<String>,
    pub required: bool,
}

/// A named requirement with the checks that verify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    pub checks: Vec<String>,
}

/// An enforcement level: what it covers and what a failure triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub description: String,
    pub applies_to: Vec<String>,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAuthority {
    pub implement: String,
    pub propose: String,
    pub escalate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalLevels {
    pub code: String,
    pub architecture: String,
    pub vision: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionFramework {
    pub agent_authority: AgentAuthority,
    pub review_required: Vec<String>,
    pub approval_levels: ApprovalLevels,
}

/// Which checks run automatically, which need an agent, which need a human.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcementRules {
    pub automatic: Vec<String>,
    pub agent_review: Vec<String>,
    pub human_approval: Vec<String>,
}

/// Who resolves each kind of conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    pub technical_blocker: String,
    pub architecture_conflict: String,
    pub vision_conflict: String,
    pub resource_constraint: String,
}

/// The governance record derived from a vision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constitution {
    pub version: String,
    pub created: DateTime<Utc>,
    pub source_vision: String,

    // =========================================================================
    // Derived from the vision
    // =========================================================================
    pub core_laws: Vec<CoreLaw>,
    pub principles: Vec<PrincipleRule>,
    pub decision_framework: DecisionFramework,
    pub quality_gates: Vec<QualityGate>,
    pub review_criteria: Vec<String>,
    pub enforcement: EnforcementRules,
    pub escalation: Escalation,

    // =========================================================================
    // Conditional requirement sets
    // =========================================================================
    #[serde(default)]
    pub technical_requirements: BTreeMap<String, Requirement>,
    #[serde(default)]
    pub security_requirements: BTreeMap<String, Requirement>,
    #[serde(default)]
    pub enforcement_levels: BTreeMap<String, Policy>,
}
