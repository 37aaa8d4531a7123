//! Catalog of demand-driven specialist agents.

use super::demand::{DemandAnalysis, DemandSuggestion};
use super::model::{AgentSpec, AgentType, Authority};

/// A specialist the system knows how to staff for a sprint task type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialistTemplate {
    /// Sprint task `agent_type` this specialist absorbs.
    pub task_agent_type: &'static str,
    pub agent_id: &'static str,
    pub title: &'static str,
    pub role: &'static str,
    pub authority: Authority,
    pub responsibilities: &'static [&'static str],
    pub capabilities: &'static [&'static str],
    pub quality_gates: &'static [&'static str],
}

/// Catalog order is also the tie-break order of demand suggestions.
pub const SPECIALIST_CATALOG: &[SpecialistTemplate] = &[
    SpecialistTemplate {
        task_agent_type: "ui-agent",
        agent_id: "ui-development-agent",
        title: "UI Development Agent",
        role: "Develop user interface components and screens for the mobile app",
        authority: Authority::Implement,
        responsibilities: &[
            "Implement mobile UI components",
            "Ensure offline-first UI patterns",
            "Optimize for low-end devices",
            "Follow mobile design guidelines",
            "Write UI tests",
        ],
        capabilities: &[
            "React Native/Flutter development",
            "Mobile UI/UX implementation",
            "Responsive design",
            "Accessibility compliance",
            "Performance optimization",
        ],
        quality_gates: &[
            "UI renders correctly on 2GB device",
            "Works in airplane mode",
            "Passes accessibility checks",
            "Performance targets met",
        ],
    },
    SpecialistTemplate {
        task_agent_type: "data-agent",
        agent_id: "data-layer-agent",
        title: "Data Layer Agent",
        role: "Design and implement data storage, models, and offline sync",
        authority: Authority::Implement,
        responsibilities: &[
            "Design data models",
            "Implement local storage (SQLite)",
            "Create sync mechanisms",
            "Handle data migrations",
            "Ensure data integrity",
        ],
        capabilities: &[
            "Database design",
            "SQLite/local storage",
            "Sync logic implementation",
            "Data validation",
            "Migration strategies",
        ],
        quality_gates: &[
            "Schema is optimized",
            "Data persists correctly",
            "Sync handles conflicts",
            "No data loss scenarios",
        ],
    },
    SpecialistTemplate {
        task_agent_type: "test-agent",
        agent_id: "quality-assurance-agent",
        title: "Quality Assurance Agent",
        role: "Implement comprehensive testing for features",
        authority: Authority::Validate,
        responsibilities: &[
            "Write unit tests",
            "Create integration tests",
            "Test offline scenarios",
            "Performance testing",
            "Device compatibility testing",
        ],
        capabilities: &[
            "Test framework expertise",
            "Offline testing",
            "Device simulation",
            "Performance profiling",
            "Test automation",
        ],
        quality_gates: &[
            "80%+ code coverage",
            "All offline scenarios tested",
            "Device tests passing",
            "Performance validated",
        ],
    },
    SpecialistTemplate {
        task_agent_type: "doc-agent",
        agent_id: "documentation-agent",
        title: "Documentation Agent",
        role: "Create and maintain project documentation",
        authority: Authority::Document,
        responsibilities: &[
            "Write user documentation",
            "Maintain developer guides",
            "Create API documentation",
            "Update ADRs as needed",
            "Ensure documentation accuracy",
        ],
        capabilities: &[
            "Technical writing",
            "Documentation tools",
            "API documentation",
            "Tutorial creation",
            "Markdown expertise",
        ],
        quality_gates: &[
            "Documentation is clear",
            "Examples work",
            "Links are valid",
            "Stays synchronized with code",
        ],
    },
    SpecialistTemplate {
        task_agent_type: "backend-agent",
        agent_id: "backend-development-agent",
        title: "Backend Development Agent",
        role: "Implement backend services and APIs (optional features)",
        authority: Authority::Implement,
        responsibilities: &[
            "Design REST/GraphQL APIs",
            "Implement sync endpoints",
            "Ensure APIs are optional",
            "Handle authentication",
            "Optimize for low bandwidth",
        ],
        capabilities: &[
            "API design",
            "Backend development",
            "Database integration",
            "Security implementation",
            "Performance optimization",
        ],
        quality_gates: &[
            "API is optional (offline works)",
            "Secure authentication",
            "Handles low bandwidth",
            "Proper error handling",
        ],
    },
];

pub(super) fn catalog_rank(task_agent_type: &str) -> Option<usize> {
    SPECIALIST_CATALOG
        .iter()
        .position(|t| t.task_agent_type == task_agent_type)
}

/// Specialist spec for one suggestion, or `None` for uncatalogued types.
pub fn specialist_for(suggestion: &DemandSuggestion) -> Option<AgentSpec> {
    let template = SPECIALIST_CATALOG
        .iter()
        .find(|t| t.task_agent_type == suggestion.agent_type)?;

    let mut spec = AgentSpec::new(
        template.agent_id,
        template.title,
        AgentType::Development,
        template.role,
        template.authority,
        template.responsibilities,
    );
    spec.capabilities = to_strings(template.capabilities);
    spec.quality_gates = to_strings(template.quality_gates);
    spec.rationale = Some(format!(
        "High volume of {} tasks ({} tasks) requires dedicated specialization",
        suggestion.agent_type, suggestion.task_count
    ));
    spec.priority = Some(suggestion.priority);
    spec.sample_tasks = suggestion.sample_tasks.clone();
    Some(spec)
}

/// Specialist specs for every catalogued suggestion, in suggestion order.
pub fn suggest_agents(analysis: &DemandAnalysis) -> Vec<AgentSpec> {
    analysis.suggestions.iter().filter_map(specialist_for).collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
