//! Constitution derivation.
//!
//! Two rule sets are derived from a [`VisionProfile`](crate::vision::VisionProfile):
//!
//! - [`Constitution`]: the governance record for the agent system (core laws,
//!   quality gates, decision framework, escalation paths)
//! - [`MergeConstitution`]: the rule set pull-request review agents enforce
//!
//! Both are pure functions of the profile plus a timestamp passed in by the
//! caller. The principle-to-check mapping they share lives in [`rules`].

mod derive;
mod merge;
mod model;
pub mod rules;


pub use derive::{
    MAX_CORE_LAWS, core_laws, decision_framework, default_principles, derive_constitution,
    enforcement_levels, enforcement_rules, escalation_paths, quality_gates, review_criteria,
    security_requirements, technical_requirements,
};
pub use merge::{
    MAX_CORE_PRINCIPLES, MergeConstitution, CorePrinciple, derive_merge_constitution,
    principle_id,
};
pub use model::{
    AgentAuthority, ApprovalLevels, Constitution, CoreLaw, DecisionFramework, EnforcementRules,
    Escalation, LawEnforcement, Policy, PrincipleRule, QualityGate, Requirement, ViolationAction,
};
