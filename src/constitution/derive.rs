//! Governance constitution derivation.

use super::model::{
    AgentAuthority, ApprovalLevels, Constitution, CoreLaw, DecisionFramework, EnforcementRules,
    Escalation, LawEnforcement, Policy, PrincipleRule, QualityGate, Requirement, ViolationAction,
};
use super::rules::principle_checks;
use crate::vision::{Domain, VisionProfile};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

pub const CONSTITUTION_VERSION: &str = "1.0";
pub const MAX_CORE_LAWS: usize = 5;

/// Derive the governance constitution.
///
/// Everything except `created` is a function of `profile` and
/// `source_vision`, so two derivations with the same timestamp are equal.
pub fn derive_constitution(
    profile: &VisionProfile,
    source_vision: &Path,
    created: DateTime<Utc>,
) -> Constitution {
    let constitution = Constitution {
        version: CONSTITUTION_VERSION.to_string(),
        created,
        source_vision: source_vision.display().to_string(),
        core_laws: core_laws(profile),
        principles: default_principles(),
        decision_framework: decision_framework(),
        quality_gates: quality_gates(profile.domain),
        review_criteria: review_criteria(),
        enforcement: enforcement_rules(),
        escalation: escalation_paths(),
        technical_requirements: technical_requirements(profile),
        security_requirements: security_requirements(profile),
        enforcement_levels: enforcement_levels(),
    };

    debug!(
        core_laws = constitution.core_laws.len(),
        quality_gates = constitution.quality_gates.len(),
        technical_requirements = constitution.technical_requirements.len(),
        "derived constitution"
    );

    constitution
}

/// The first five principles as `LAW-001`..`LAW-005`.
pub fn core_laws(profile: &VisionProfile) -> Vec<CoreLaw> {
    profile
        .principles
        .iter()
        .take(MAX_CORE_LAWS)
        .enumerate()
        .map(|(i, principle)| CoreLaw {
            id: format!("LAW-{:03}", i + 1),
            principle: principle.clone(),
            enforcement: LawEnforcement::Automatic,
            violation_action: ViolationAction::Reject,
            checks: principle_checks(principle),
        })
        .collect()
}

pub fn default_principles() -> Vec<PrincipleRule> {
    [
        (
            "Vision Alignment",
            "All work must align with project vision",
            "Check against vision goals",
        ),
        (
            "Quality First",
            "Quality cannot be compromised for speed",
            "All quality gates must pass",
        ),
        (
            "Simplicity",
            "Choose simple solutions over complex",
            "Complexity review required",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, description, validation))| PrincipleRule {
        id: format!("PRIN-{:03}", i + 1),
        name: name.to_string(),
        description: description.to_string(),
        validation: validation.to_string(),
    })
    .collect()
}

pub fn decision_framework() -> DecisionFramework {
    DecisionFramework {
        agent_authority: AgentAuthority {
            implement: "Implementation details".to_string(),
            propose: "Architectural changes".to_string(),
            escalate: "Vision/principle changes".to_string(),
        },
        review_required: strings(&[
            "Breaking changes",
            "New dependencies",
            "Architecture decisions",
            "Security changes",
        ]),
        approval_levels: ApprovalLevels {
            code: "any-agent".to_string(),
            architecture: "enforcement-agent".to_string(),
            vision: "human".to_string(),
        },
    }
}

/// Code quality, vision alignment and security gates, plus accessibility for
/// education projects.
pub fn quality_gates(domain: Domain) -> Vec<QualityGate> {
    let mut gates = vec![
        gate("Code Quality", &["linting", "tests", "coverage"]),
        gate("Vision Alignment", &["goals", "principles", "constraints"]),
        gate("Security", &["vulnerability-scan", "secrets-check"]),
    ];
    if domain == Domain::Education {
        gates.push(gate("Accessibility", &["wcag", "screen-reader"]));
    }
    gates
}

fn gate(name: &str, checks: &[&str]) -> QualityGate {
    QualityGate {
        name: name.to_string(),
        checks: strings(checks),
        required: true,
    }
}

pub fn review_criteria() -> Vec<String> {
    strings(&[
        "Aligns with vision",
        "Follows principles",
        "Meets quality gates",
        "Has adequate tests",
        "Documentation updated",
        "No security issues",
    ])
}

pub fn enforcement_rules() -> EnforcementRules {
    EnforcementRules {
        automatic: strings(&["Linting", "Tests", "Security scans"]),
        agent_review: strings(&["Code review", "Architecture review", "Complexity review"]),
        human_approval: strings(&["Vision changes", "Release decisions", "Major pivots"]),
    }
}

pub fn escalation_paths() -> Escalation {
    Escalation {
        technical_blocker: "coordination-agent".to_string(),
        architecture_conflict: "enforcement-agent".to_string(),
        vision_conflict: "human".to_string(),
        resource_constraint: "human".to_string(),
    }
}

/// Requirement sets triggered by hints, constraints and values.
///
/// Each entry is decided on its own; any combination can appear.
pub fn technical_requirements(profile: &VisionProfile) -> BTreeMap<String, Requirement> {
    let mut requirements = BTreeMap::new();

    let hints = profile.hints_text();
    if ["mobile", "phone", "device"].iter().any(|kw| hints.contains(kw)) {
        requirements.insert(
            "device_compatibility".to_string(),
            requirement(
                "Ensure compatibility with target devices",
                &[
                    "Tested on target devices or emulators",
                    "Performance within acceptable range",
                    "No crashes on target platforms",
                    "Resource usage acceptable",
                ],
            ),
        );
    }

    let constraints = profile.constraints.join(" ").to_lowercase();
    let values = profile.values.join(" ");
    let mentions_performance = |text: &str| text.contains("performance") || text.contains("fast");
    if mentions_performance(&constraints) || mentions_performance(&values) {
        requirements.insert(
            "performance".to_string(),
            requirement(
                "Meet performance requirements",
                &[
                    "Performance benchmarks run",
                    "No performance regressions",
                    "Response times acceptable",
                    "Resource usage optimized",
                ],
            ),
        );
    }

    let resource_bound = profile.constraints.iter().any(|c| {
        let c = c.to_lowercase();
        c.contains("storage") || c.contains("memory") || c.contains("resource")
    });
    if resource_bound {
        requirements.insert(
            "resource_constraints".to_string(),
            requirement(
                "Respect resource constraints",
                &[
                    "Storage impact documented",
                    "Memory usage acceptable",
                    "Resource cleanup implemented",
                    "Efficient data structures used",
                ],
            ),
        );
    }

    requirements
}

/// Data protection always; privacy when the vision values privacy.
pub fn security_requirements(profile: &VisionProfile) -> BTreeMap<String, Requirement> {
    let mut requirements = BTreeMap::new();
    requirements.insert(
        "data_protection".to_string(),
        Requirement {
            description: "Protect sensitive data".to_string(),
            requirements: strings(&[
                "Sensitive data encrypted at rest",
                "Secure communication (HTTPS)",
                "Input validation present",
                "No hardcoded secrets",
            ]),
            checks: strings(&[
                "Security scan passes",
                "No known vulnerabilities",
                "Secrets properly managed",
                "Input sanitized",
            ]),
        },
    );

    if profile.has_value("private") {
        requirements.insert(
            "privacy".to_string(),
            Requirement {
                description: "Respect user privacy".to_string(),
                requirements: strings(&[
                    "Minimal data collection",
                    "User consent obtained",
                    "Data anonymized where possible",
                    "Privacy policy compliance",
                ]),
                checks: strings(&[
                    "Privacy review done",
                    "PII handled correctly",
                    "Consent flow appropriate",
                    "Audit trail in place",
                ]),
            },
        );
    }

    requirements
}

pub fn enforcement_levels() -> BTreeMap<String, Policy> {
    [
        (
            "critical",
            "Must pass, no exceptions",
            &["core_principles", "security"][..],
            "Block merge",
        ),
        (
            "required",
            "Must pass or have approved exception",
            &[
                "technical_requirements",
                "code_quality (testing, documentation)",
                "architecture",
            ][..],
            "Block merge or require approval",
        ),
        (
            "recommended",
            "Should pass, exceptions allowed with justification",
            &["code_style (minor issues)", "performance (context-dependent)"][..],
            "Warning, require justification",
        ),
    ]
    .into_iter()
    .map(|(level, description, applies_to, action)| {
        (
            level.to_string(),
            Policy {
                description: description.to_string(),
                applies_to: strings(applies_to),
                action: action.to_string(),
            },
        )
    })
    .collect()
}

pub(super) fn requirement(description: &str, checks: &[&str]) -> Requirement {
    Requirement {
        description: description.to_string(),
        requirements: Vec::new(),
        checks: strings(checks),
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
