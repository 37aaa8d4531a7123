//! Agent definition documents.

use super::render_failure;
use super::template::{render_template, variables};
use crate::error::Result;
use crate::roster::{AgentSpec, AgentType, Authority};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Specification file named in the footer of generated definitions.
pub const DEFINITION_SOURCE: &str = ".mas-system/agent-specifications.yaml";

const AGENT_DEFINITION_TEMPLATE: &str = "\
# {title}

## Role
{role}

## Authority
**{authority}** - {authority_description}

## Responsibilities
{responsibilities}

## Capabilities
{capabilities}

## Communication

### Status Updates
```yaml
agent: {agent_id}
task: [task-description]
status: [in-progress|completed|blocked|failed]
progress:
  completed: [list]
  in_progress: [list]
  blocked: [list]
context:
  - [relevant information]
```

### Task Requests
```yaml
from: {agent_id}
to: [target-agent]
task: [description]
priority: [high|medium|low]
deadline: [datetime]
```

## Integration Points
{integration}

## Quality Standards
{quality_standards}

## Success Metrics
{success_metrics}

## Related Documents
- [Communication Protocol](../communication-protocol.md)
{related_docs}

## Notes
{notes}

---
*Generated: {generated_date}*
*From: {source}*
";

const DEFAULT_RESPONSIBILITIES: &[&str] = &[
    "Execute assigned tasks",
    "Report progress",
    "Coordinate with other agents",
];

const DEFAULT_CAPABILITIES: &[&str] = &["Task execution", "Status reporting", "Team collaboration"];

const DEFAULT_NOTES: &str = "This agent was generated automatically from project vision analysis.";

pub fn authority_description(authority: Authority) -> &'static str {
    match authority {
        Authority::Coordinate => {
            "Can orchestrate work across agents, assign tasks, and make coordination decisions"
        }
        Authority::Assign => "Can assign tasks to agents and manage work distribution",
        Authority::Implement => {
            "Can implement features and make implementation decisions within scope"
        }
        Authority::Validate => "Can validate quality and approve/reject work",
        Authority::Document => "Can create and update documentation",
        Authority::Enforce => "Can enforce rules and block work that violates standards",
    }
}

/// Sub-directory of the agents directory holding definitions of this type.
pub fn definition_dir(agent_type: AgentType) -> &'static str {
    match agent_type {
        AgentType::Enforcement => "enforcement-agents",
        AgentType::Coordination | AgentType::Development => "mutagen-agents",
    }
}

/// `{agents_dir}/{mutagen,enforcement}-agents/{agent_id}.md`
pub fn definition_path(agents_dir: &Path, spec: &AgentSpec) -> PathBuf {
    agents_dir
        .join(definition_dir(spec.agent_type))
        .join(format!("{}.md", spec.agent_id))
}

fn integration_points(agent_type: AgentType) -> &'static str {
    match agent_type {
        AgentType::Coordination => "\
### With Other Agents
- Receives status updates from all development and enforcement agents
- Assigns tasks to development agents
- Coordinates multi-agent workflows
- Escalates blockers to appropriate agents

### With System
- Creates and updates GitHub Issues for coordination
- Triggers workflows as needed
- Maintains shared state in coordination files",
        AgentType::Development => "\
### With Coordination Agents
- Receives task assignments
- Reports progress and status
- Requests help when blocked

### With Enforcement Agents
- Submits work for review
- Addresses review feedback
- Ensures compliance with standards

### With Other Development Agents
- Collaborates on complex features
- Hands off work at integration points
- Coordinates on shared components",
        AgentType::Enforcement => "\
### With Development Agents
- Reviews submitted work
- Provides feedback and approval/rejection
- Validates compliance with standards

### With Coordination Agents
- Reports enforcement status
- Escalates violations
- Recommends process improvements

### With System
- Automated checks via CI/CD
- Manual reviews via PR comments
- Blocks merge on violations",
    }
}

fn quality_standards(agent_type: AgentType) -> &'static [&'static str] {
    match agent_type {
        AgentType::Coordination => &[
            "Plans are clear and achievable",
            "Task assignments are appropriate",
            "Progress tracking is accurate",
            "Blockers are resolved quickly",
            "Communication is timely and clear",
        ],
        AgentType::Development => &[
            "Code follows project standards",
            "Tests are written and passing",
            "Documentation is updated",
            "Changes are minimal and focused",
            "Work aligns with vision and constitution",
        ],
        AgentType::Enforcement => &[
            "Reviews are thorough and constructive",
            "Feedback is specific and actionable",
            "Standards are applied consistently",
            "False positives are minimized",
            "Review turnaround is timely",
        ],
    }
}

fn success_metrics(agent_type: AgentType) -> &'static [&'static str] {
    match agent_type {
        AgentType::Coordination => &[
            "Sprint goals achieved 80%+ of time",
            "Task assignments appropriate for agent skills",
            "Blockers resolved within 24 hours",
            "All agents have clear work assignments",
            "Progress visible to stakeholders",
        ],
        AgentType::Development => &[
            "Features completed on time",
            "Code review approval on first submission 80%+",
            "No critical bugs introduced",
            "Test coverage maintained/improved",
            "Documentation updated with changes",
        ],
        AgentType::Enforcement => &[
            "Reviews completed within 4 hours",
            "Feedback leads to improved quality",
            "False positive rate < 10%",
            "Standards violations caught before merge",
            "Constructive feedback provided",
        ],
    }
}

fn related_docs(agent_type: AgentType) -> &'static [&'static str] {
    match agent_type {
        AgentType::Coordination => &[
            "[Autonomous Sprint Driver](autonomous-sprint-driver.md)",
            "[Multi-Agent Collaboration](multi-agent-collaboration-agent.md)",
            "[Task Breakdown Agent](task-breakdown-agent.md)",
        ],
        AgentType::Development => &[
            "[AI Agent Instructions](../../docs/development/ai-agent-instructions.md)",
            "[Coding Principles](../../docs/development/coding-principles.md)",
        ],
        AgentType::Enforcement => &[
            "[PR Merge Constitution](../pr-merge-constitution.yaml)",
            "[Constitutional Judge](constitutional-judge-agent.md)",
        ],
    }
}

/// Render `- item` lines, or `fallback` when `items` is empty.
pub(super) fn bullets<S: AsRef<str>>(items: &[S], fallback: &[&str]) -> String {
    if items.is_empty() {
        return bullets(fallback, &[]);
    }
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the markdown definition of one agent.
///
/// Missing responsibilities and capabilities are replaced by generic ones;
/// integration points, standards and metrics depend only on the agent type.
pub fn render_agent_definition(spec: &AgentSpec, generated: NaiveDate) -> Result<String> {
    let mut capabilities = bullets(&spec.capabilities, DEFAULT_CAPABILITIES);
    if !spec.quality_gates.is_empty() {
        capabilities.push_str("\n\n### Quality Gates\n");
        capabilities.push_str(&bullets(&spec.quality_gates, &[]));
    }

    let notes = match &spec.rationale {
        Some(rationale) => rationale.clone(),
        None => DEFAULT_NOTES.to_string(),
    };

    let vars = variables([
        ("title", spec.title.clone()),
        ("agent_id", spec.agent_id.clone()),
        ("role", spec.role.clone()),
        ("authority", spec.authority.title().to_string()),
        (
            "authority_description",
            authority_description(spec.authority).to_string(),
        ),
        (
            "responsibilities",
            bullets(&spec.responsibilities, DEFAULT_RESPONSIBILITIES),
        ),
        ("capabilities", capabilities),
        ("integration", integration_points(spec.agent_type).to_string()),
        (
            "quality_standards",
            bullets(quality_standards(spec.agent_type), &[]),
        ),
        (
            "success_metrics",
            bullets(success_metrics(spec.agent_type), &[]),
        ),
        ("related_docs", bullets(related_docs(spec.agent_type), &[])),
        ("notes", notes),
        ("generated_date", generated.format("%Y-%m-%d").to_string()),
        ("source", DEFINITION_SOURCE.to_string()),
    ]);

    render_template(AGENT_DEFINITION_TEMPLATE, &vars)
        .map_err(|e| render_failure(&format!("definition of '{}'", spec.agent_id), e))
}
