//! Bootstrap summary document.

use super::agent::bullets;
use super::render_failure;
use super::template::{render_template, variables};
use crate::constitution::Constitution;
use crate::error::Result;
use crate::protocol::{CommunicationProtocol, MessageFormats};
use crate::roster::{AgentSpec, AgentType};
use crate::vision::VisionProfile;
use chrono::{DateTime, Utc};

const SUMMARY_MISSION_CHARS: usize = 200;
const SUMMARY_LIST_ITEMS: usize = 5;

const SUMMARY_TEMPLATE: &str = "\
# Multi-Agent System Bootstrap Summary

## Vision Analysis

**Domain**: {domain}
**Mission**: {mission}

### Core Principles ({principle_count})
{principles}

### Success Criteria ({criteria_count})
{criteria}

## Constitution

**Core Laws**: {law_count}
**Quality Gates**: {gate_count}

## Agent System

**Total Agents**: {agent_count}

### By Type
- Coordination: {coordination_count}
- Development: {development_count}
- Enforcement: {enforcement_count}

### Agent List
{agents}

## Communication Protocol

**Message Formats**: {format_count}
**Coordination Patterns**: {pattern_count}
**Workflows**: {workflow_count}

## Next Steps

1. Review generated constitution for accuracy
2. Validate agent specifications
3. Create agent definition files
4. Initialize coordination system
5. Begin sprint planning and execution

---
Generated on {generated}
";

fn first_lines(items: &[String]) -> String {
    items
        .iter()
        .take(SUMMARY_LIST_ITEMS)
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_mission(mission: &str) -> String {
    if mission.chars().count() <= SUMMARY_MISSION_CHARS {
        return mission.to_string();
    }
    let head: String = mission.chars().take(SUMMARY_MISSION_CHARS).collect();
    format!("{}...", head)
}

/// Render the human-readable summary of one bootstrap run.
pub fn render_bootstrap_summary(
    profile: &VisionProfile,
    constitution: &Constitution,
    agents: &[AgentSpec],
    protocol: &CommunicationProtocol,
    generated: DateTime<Utc>,
) -> Result<String> {
    let count_of = |agent_type: AgentType| {
        agents
            .iter()
            .filter(|a| a.agent_type == agent_type)
            .count()
            .to_string()
    };
    let agent_lines: Vec<String> = agents
        .iter()
        .map(|a| format!("{} ({})", a.title, a.agent_id))
        .collect();

    let vars = variables([
        ("domain", profile.domain.to_string()),
        ("mission", truncate_mission(&profile.mission)),
        ("principle_count", profile.principles.len().to_string()),
        ("principles", first_lines(&profile.principles)),
        ("criteria_count", profile.success_criteria.len().to_string()),
        ("criteria", first_lines(&profile.success_criteria)),
        ("law_count", constitution.core_laws.len().to_string()),
        ("gate_count", constitution.quality_gates.len().to_string()),
        ("agent_count", agents.len().to_string()),
        ("coordination_count", count_of(AgentType::Coordination)),
        ("development_count", count_of(AgentType::Development)),
        ("enforcement_count", count_of(AgentType::Enforcement)),
        ("agents", bullets(&agent_lines, &[])),
        ("format_count", MessageFormats::COUNT.to_string()),
        ("pattern_count", protocol.coordination_patterns.len().to_string()),
        ("workflow_count", protocol.workflows.len().to_string()),
        ("generated", generated.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
    ]);

    render_template(SUMMARY_TEMPLATE, &vars).map_err(|e| render_failure("bootstrap summary", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constitution::derive_constitution;
    use crate::protocol::communication_protocol;
    use crate::roster::base_roster;
    use crate::test_support::SAMPLE_VISION;
    use crate::vision::analyze;
    use chrono::TimeZone;
    use std::path::Path;

    fn render(profile: &VisionProfile) -> String {
        let at = Utc.with_ymd_and_hms(2026, 4, 2, 8, 15, 0).unwrap();
        let constitution = derive_constitution(profile, Path::new("VISION.md"), at);
        let agents = base_roster(profile);
        let protocol = communication_protocol(at);
        render_bootstrap_summary(profile, &constitution, &agents, &protocol, at).unwrap()
    }

    #[test]
    fn summary_reports_counts() {
        let doc = render(&analyze(SAMPLE_VISION));

        assert!(doc.contains("**Domain**: education"));
        assert!(doc.contains("### Core Principles (5)"));
        assert!(doc.contains("**Core Laws**: 5"));
        assert!(doc.contains("**Quality Gates**: 4"));
        assert!(doc.contains("**Total Agents**: 10"));
        assert!(doc.contains("- Coordination: 2\n- Development: 5\n- Enforcement: 3"));
        assert!(doc.contains("- Master Coordination Agent (master-coordinator)"));
        assert!(doc.contains("**Message Formats**: 3"));
        assert!(doc.contains("**Workflows**: 3"));
        assert!(doc.contains("Generated on 2026-04-02 08:15:00 UTC"));
    }

    #[test]
    fn long_mission_is_shortened() {
        let profile = VisionProfile {
            mission: "m".repeat(300),
            ..VisionProfile::default()
        };
        let doc = render(&profile);
        assert!(doc.contains(&format!("**Mission**: {}...\n", "m".repeat(200))));
    }

    #[test]
    fn summary_lists_at_most_five_principles() {
        let profile = VisionProfile {
            principles: (1..=8).map(|i| format!("Principle {}", i)).collect(),
            ..VisionProfile::default()
        };
        let doc = render(&profile);
        assert!(doc.contains("### Core Principles (8)"));
        assert!(doc.contains("- Principle 5\n"));
        assert!(!doc.contains("- Principle 6"));
    }
}
