//! Roster derivation from a vision profile.

use super::model::{AgentSpec, AgentType, Authority};
use crate::vision::VisionProfile;
use std::collections::HashSet;
use tracing::debug;

/// Assemble the roster for `profile`, inserting `specialists` between the
/// development and enforcement agents.
///
/// A specialist whose `agent_id` is already taken by a base agent is dropped.
pub fn derive_roster(profile: &VisionProfile, specialists: &[AgentSpec]) -> Vec<AgentSpec> {
    let mut agents = coordination_agents();
    agents.extend(development_agents(profile));
    agents.extend(specialists.iter().cloned());
    agents.extend(enforcement_agents());

    let roster = dedup_by_agent_id(agents);
    debug!(agents = roster.len(), "derived agent roster");
    roster
}

/// The roster without specialists.
pub fn base_roster(profile: &VisionProfile) -> Vec<AgentSpec> {
    derive_roster(profile, &[])
}

/// Drop later agents whose `agent_id` was already seen.
pub fn dedup_by_agent_id(agents: Vec<AgentSpec>) -> Vec<AgentSpec> {
    let mut seen = HashSet::new();
    agents
        .into_iter()
        .filter(|agent| {
            let fresh = seen.insert(agent.agent_id.clone());
            if !fresh {
                debug!(agent_id = %agent.agent_id, "dropping duplicate agent");
            }
            fresh
        })
        .collect()
}

fn coordination_agents() -> Vec<AgentSpec> {
    vec![
        AgentSpec::new(
            "master-coordinator",
            "Master Coordination Agent",
            AgentType::Coordination,
            "Orchestrate overall system execution",
            Authority::Coordinate,
            &[
                "Sprint planning",
                "Task assignment",
                "Progress tracking",
                "Blocker resolution",
            ],
        ),
        AgentSpec::new(
            "task-dispatcher",
            "Task Dispatcher Agent",
            AgentType::Coordination,
            "Assign tasks to appropriate agents",
            Authority::Assign,
            &[
                "Task analysis",
                "Agent matching",
                "Load balancing",
                "Priority management",
            ],
        ),
    ]
}

fn development_agents(profile: &VisionProfile) -> Vec<AgentSpec> {
    let mut agents = vec![
        AgentSpec::new(
            "implementation-agent",
            "Implementation Agent",
            AgentType::Development,
            "Implement features and functionality",
            Authority::Implement,
            &[],
        ),
        AgentSpec::new(
            "test-agent",
            "Quality Assurance Agent",
            AgentType::Development,
            "Ensure quality through testing",
            Authority::Validate,
            &[],
        ),
        AgentSpec::new(
            "documentation-agent",
            "Documentation Agent",
            AgentType::Development,
            "Maintain project documentation",
            Authority::Document,
            &[],
        ),
    ];

    let hints = profile.hints_text();
    if hints.contains("mobile") {
        agents.push(AgentSpec::new(
            "mobile-agent",
            "Mobile Development Agent",
            AgentType::Development,
            "Develop mobile applications",
            Authority::Implement,
            &[],
        ));
    }
    if hints.contains("api") {
        agents.push(AgentSpec::new(
            "api-agent",
            "API Development Agent",
            AgentType::Development,
            "Design and implement APIs",
            Authority::Implement,
            &[],
        ));
    }

    agents
}

fn enforcement_agents() -> Vec<AgentSpec> {
    vec![
        AgentSpec::new(
            "constitutional-judge",
            "Constitutional Judge Agent",
            AgentType::Enforcement,
            "Ensure compliance with constitution",
            Authority::Enforce,
            &[
                "Review changes for principle violations",
                "Validate vision alignment",
                "Enforce core laws",
            ],
        ),
        AgentSpec::new(
            "security-enforcer",
            "Security Enforcement Agent",
            AgentType::Enforcement,
            "Ensure security standards",
            Authority::Enforce,
            &[
                "Security scanning",
                "Vulnerability detection",
                "Secret detection",
            ],
        ),
        AgentSpec::new(
            "quality-enforcer",
            "Quality Enforcement Agent",
            AgentType::Enforcement,
            "Ensure quality standards",
            Authority::Enforce,
            &[
                "Code quality checks",
                "Test coverage validation",
                "Performance validation",
            ],
        ),
    ]
}
