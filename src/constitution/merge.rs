//! Pull-request merge constitution.
//!
//! The rule set review agents apply to incoming changes. Core principles
//! come from the vision; the remaining sections are fixed policy, with the
//! technical, security and enforcement-level sections shared with the
//! governance constitution.

use super::derive::{
    CONSTITUTION_VERSION, enforcement_levels, requirement, security_requirements, strings,
    technical_requirements,
};
use super::model::{Policy, Requirement};
use super::rules::{principle_checks, value_checks};
use crate::vision::{Domain, VisionProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

pub const MAX_CORE_PRINCIPLES: usize = 7;
const MIN_CORE_PRINCIPLES: usize = 3;
const MAX_VALUE_PRINCIPLES: usize = 3;
const MAX_PRINCIPLE_ID_LEN: usize = 40;

/// A principle every merged change must respect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorePrinciple {
    pub id: String,
    pub description: String,
    pub enforcement: String,
    pub checks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestingRequirements {
    pub unit_tests: String,
    pub integration_tests: String,
    pub coverage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestingPolicy {
    pub requirements: TestingRequirements,
    pub checks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationPolicy {
    pub required: Vec<String>,
    pub checks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStylePolicy {
    pub requirements: Vec<String>,
    pub checks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeQuality {
    pub testing: TestingPolicy,
    pub documentation: DocumentationPolicy,
    pub code_style: CodeStylePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakingChangesPolicy {
    pub allowed: bool,
    pub conditions: Vec<String>,
    pub required_docs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcementAgentDuty {
    pub checks: String,
    pub authority: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanReview {
    pub required_for: Vec<String>,
    pub reviewers: String,
    pub approval_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProcess {
    pub automated_checks: Vec<String>,
    pub enforcement_agents: BTreeMap<String, EnforcementAgentDuty>,
    pub human_review: HumanReview,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionProcess {
    pub allowed: bool,
    pub process: Vec<String>,
    pub documentation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub tracked: Vec<String>,
    pub reporting: Vec<String>,
}

/// The merge-review rule set derived from a vision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConstitution {
    pub version: String,
    pub last_updated: NaiveDate,
    pub generated_from: String,
    pub domain: Domain,
    pub core_principles: Vec<CorePrinciple>,
    pub technical_requirements: BTreeMap<String, Requirement>,
    pub code_quality: CodeQuality,
    pub security: BTreeMap<String, Requirement>,
    pub architecture: BTreeMap<String, Requirement>,
    pub breaking_changes: BreakingChangesPolicy,
    pub enforcement_levels: BTreeMap<String, Policy>,
    pub review_process: ReviewProcess,
    pub exceptions: ExceptionProcess,
    pub metrics: Metrics,
}

pub fn derive_merge_constitution(
    profile: &VisionProfile,
    source_vision: &Path,
    last_updated: NaiveDate,
) -> MergeConstitution {
    MergeConstitution {
        version: CONSTITUTION_VERSION.to_string(),
        last_updated,
        generated_from: source_vision.display().to_string(),
        domain: profile.domain,
        core_principles: core_principles(profile),
        technical_requirements: technical_requirements(profile),
        code_quality: code_quality(),
        security: security_requirements(profile),
        architecture: architecture_requirements(),
        breaking_changes: breaking_changes_policy(),
        enforcement_levels: enforcement_levels(),
        review_process: review_process(),
        exceptions: exception_process(),
        metrics: metrics(),
    }
}

/// Identifier for a principle: the text before any `:`, snake-cased.
///
/// `"Offline-First: works anywhere"` becomes `offline_first`.
pub fn principle_id(principle: &str) -> String {
    let name = principle.split(':').next().unwrap_or_default().trim();
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .take(MAX_PRINCIPLE_ID_LEN)
        .collect()
}

fn core_principles(profile: &VisionProfile) -> Vec<CorePrinciple> {
    let mut seen = HashSet::new();
    let mut principles = Vec::new();

    for (i, principle) in profile.principles.iter().take(MAX_CORE_PRINCIPLES).enumerate() {
        let mut id = principle_id(principle);
        if id.is_empty() {
            id = format!("principle_{}", i + 1);
        }
        if !seen.insert(id.clone()) {
            continue;
        }
        principles.push(CorePrinciple {
            id,
            description: principle.clone(),
            enforcement: "mandatory".to_string(),
            checks: principle_checks(principle),
        });
    }

    if principles.len() < MIN_CORE_PRINCIPLES {
        for value in profile.values.iter().take(MAX_VALUE_PRINCIPLES) {
            let id = format!("{}_focused", value);
            if !seen.insert(id.clone()) {
                continue;
            }
            principles.push(CorePrinciple {
                id,
                description: format!("Maintain {} as a core value", value),
                enforcement: "mandatory".to_string(),
                checks: value_checks(value),
            });
        }
    }

    principles
}

fn code_quality() -> CodeQuality {
    CodeQuality {
        testing: TestingPolicy {
            requirements: TestingRequirements {
                unit_tests: "Required for new code".to_string(),
                integration_tests: "Required for key workflows".to_string(),
                coverage: "Maintain or improve".to_string(),
            },
            checks: strings(&[
                "Tests written and passing",
                "Coverage requirements met",
                "Key scenarios tested",
                "Tests are maintainable",
            ]),
        },
        documentation: DocumentationPolicy {
            required: strings(&[
                "Code comments for complex logic",
                "API documentation for public interfaces",
                "README updates if needed",
                "ADR for architectural decisions",
            ]),
            checks: strings(&[
                "Documentation updated",
                "Changes explained in PR",
                "Examples provided where helpful",
                "Breaking changes documented",
            ]),
        },
        code_style: CodeStylePolicy {
            requirements: strings(&[
                "Follows project conventions",
                "Linter passes",
                "Consistent formatting",
                "Meaningful names",
            ]),
            checks: strings(&[
                "Linter passes",
                "Style guide followed",
                "No warnings introduced",
                "Code review approved",
            ]),
        },
    }
}

fn architecture_requirements() -> BTreeMap<String, Requirement> {
    BTreeMap::from([
        (
            "vision_compliance".to_string(),
            requirement(
                "Changes must align with project vision",
                &[
                    "Aligns with stated mission",
                    "Follows vision principles",
                    "Supports vision goals",
                    "No conflicts with vision constraints",
                ],
            ),
        ),
        (
            "pattern_consistency".to_string(),
            requirement(
                "Follow established code patterns",
                &[
                    "Uses existing patterns where applicable",
                    "New patterns justified and documented",
                    "Consistent with architecture",
                    "No architectural violations",
                ],
            ),
        ),
    ])
}

fn breaking_changes_policy() -> BreakingChangesPolicy {
    BreakingChangesPolicy {
        allowed: true,
        conditions: strings(&[
            "Clearly documented",
            "Migration path provided",
            "Justified by significant benefit",
            "Approved by maintainers",
        ]),
        required_docs: strings(&[
            "BREAKING CHANGE tag in commit",
            "Migration guide",
            "Deprecation timeline",
            "Backward compatibility plan if possible",
        ]),
    }
}

fn review_process() -> ReviewProcess {
    let duty = |checks: &str, authority: &str| EnforcementAgentDuty {
        checks: checks.to_string(),
        authority: authority.to_string(),
    };

    ReviewProcess {
        automated_checks: strings(&[
            "Linter",
            "Unit tests",
            "Security scan",
            "Coverage check",
            "Build verification",
        ]),
        enforcement_agents: BTreeMap::from([
            ("constitutional_judge".to_string(), duty("core_principles", "Block merge")),
            ("security_enforcement".to_string(), duty("security", "Block merge")),
            ("quality_enforcement".to_string(), duty("code_quality", "Request changes")),
        ]),
        human_review: HumanReview {
            required_for: strings(&[
                "Architectural changes",
                "Breaking changes",
                "Security-sensitive changes",
                "New dependencies",
            ]),
            reviewers: "Maintainers".to_string(),
            approval_count: 1,
        },
    }
}

fn exception_process() -> ExceptionProcess {
    ExceptionProcess {
        allowed: true,
        process: strings(&[
            "Document reason for exception",
            "Propose alternative compliance",
            "Get approval from maintainer",
            "Create issue to address properly",
        ]),
        documentation: strings(&[
            "Exception noted in PR",
            "Follow-up issue created",
            "Timeline for proper fix",
            "Risk assessment",
        ]),
    }
}

fn metrics() -> Metrics {
    Metrics {
        tracked: strings(&[
            "First-time approval rate",
            "Common failure reasons",
            "Time to merge",
            "Rework frequency",
        ]),
        reporting: strings(&["Weekly summary", "Trend analysis", "Process improvements"]),
    }
}
