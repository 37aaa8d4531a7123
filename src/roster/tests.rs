//! Tests for roster derivation, demand analysis and specification files.

use super::*;
use crate::error::CharterError;
use crate::exit_codes;
use crate::test_support::SAMPLE_VISION;
use crate::vision::{VisionProfile, analyze};
use std::collections::HashSet;
use tempfile::TempDir;

fn ids(agents: &[AgentSpec]) -> Vec<&str> {
    agents.iter().map(|a| a.agent_id.as_str()).collect()
}

fn profile_with_hints(hints: &[&str]) -> VisionProfile {
    VisionProfile {
        architecture_hints: hints.iter().map(|s| s.to_string()).collect(),
        ..VisionProfile::default()
    }
}

fn task(agent_type: &str, description: &str, points: u32) -> DemandTask {
    DemandTask {
        agent_type: agent_type.to_string(),
        description: description.to_string(),
        estimated_points: points,
    }
}

fn tasks_of(agent_type: &str, count: usize) -> Vec<DemandTask> {
    (0..count)
        .map(|i| task(agent_type, &format!("{} task {}", agent_type, i + 1), 2))
        .collect()
}

#[test]
fn base_roster_without_hints() {
    let roster = base_roster(&VisionProfile::default());
    assert_eq!(
        ids(&roster),
        vec![
            "master-coordinator",
            "task-dispatcher",
            "implementation-agent",
            "test-agent",
            "documentation-agent",
            "constitutional-judge",
            "security-enforcer",
            "quality-enforcer",
        ]
    );
}

#[test]
fn mobile_hint_adds_mobile_agent() {
    let roster = base_roster(&profile_with_hints(&["A Mobile first client"]));
    assert_eq!(roster.len(), 9);
    assert_eq!(roster[5].agent_id, "mobile-agent");
    assert!(!ids(&roster).contains(&"api-agent"));
}

#[test]
fn sample_vision_gets_mobile_and_api_agents() {
    let roster = base_roster(&analyze(SAMPLE_VISION));
    assert_eq!(roster.len(), 10);
    assert_eq!(roster[5].agent_id, "mobile-agent");
    assert_eq!(roster[6].agent_id, "api-agent");
}

#[test]
fn roster_types_and_authorities() {
    let roster = base_roster(&VisionProfile::default());
    assert_eq!(roster[0].agent_type, AgentType::Coordination);
    assert_eq!(roster[0].authority, Authority::Coordinate);
    assert_eq!(roster[1].authority, Authority::Assign);
    assert_eq!(roster[3].authority, Authority::Validate);
    assert_eq!(roster[4].authority, Authority::Document);
    assert!(roster[5..].iter().all(|a| a.agent_type == AgentType::Enforcement));
}

#[test]
fn specialists_sit_between_development_and_enforcement() {
    let analysis = analyze_task_demand(&tasks_of("ui-agent", 3), DemandThresholds::default());
    let specialists = suggest_agents(&analysis);
    let roster = derive_roster(&VisionProfile::default(), &specialists);

    assert_eq!(roster.len(), 9);
    assert_eq!(roster[5].agent_id, "ui-development-agent");
    assert_eq!(roster[6].agent_id, "constitutional-judge");
}

#[test]
fn duplicate_specialist_is_dropped_keep_first() {
    let analysis = analyze_task_demand(&tasks_of("doc-agent", 4), DemandThresholds::default());
    let specialists = suggest_agents(&analysis);
    assert_eq!(specialists[0].agent_id, "documentation-agent");

    let roster = derive_roster(&VisionProfile::default(), &specialists);
    let unique: HashSet<&str> = ids(&roster).into_iter().collect();
    assert_eq!(unique.len(), roster.len());
    assert_eq!(roster.len(), 8);

    let docs = roster.iter().find(|a| a.agent_id == "documentation-agent").unwrap();
    assert_eq!(docs.role, "Maintain project documentation");
}

#[test]
fn demand_threshold_and_priority() {
    let mut tasks = tasks_of("ui-agent", 5);
    tasks.extend(tasks_of("data-agent", 3));
    tasks.extend(tasks_of("test-agent", 2));

    let analysis = analyze_task_demand(&tasks, DemandThresholds::default());

    assert_eq!(analysis.total_tasks, 10);
    assert_eq!(analysis.unique_agent_types, 3);
    assert_eq!(analysis.suggestions.len(), 2);
    assert_eq!(analysis.suggestions[0].agent_type, "ui-agent");
    assert_eq!(analysis.suggestions[0].priority, DemandPriority::High);
    assert_eq!(analysis.suggestions[1].agent_type, "data-agent");
    assert_eq!(analysis.suggestions[1].priority, DemandPriority::Medium);
}

#[test]
fn demand_ties_follow_catalog_then_first_seen() {
    let mut tasks = tasks_of("custom-agent", 3);
    tasks.extend(tasks_of("backend-agent", 3));
    tasks.extend(tasks_of("other-agent", 3));
    tasks.extend(tasks_of("ui-agent", 3));

    let analysis = analyze_task_demand(&tasks, DemandThresholds::default());
    let order: Vec<&str> = analysis
        .suggestions
        .iter()
        .map(|s| s.agent_type.as_str())
        .collect();
    assert_eq!(order, vec!["ui-agent", "backend-agent", "custom-agent", "other-agent"]);
}

#[test]
fn demand_samples_and_average() {
    let tasks = vec![
        task("data-agent", "Design schema", 3),
        task("data-agent", "Implement storage system", 5),
        task("data-agent", "Fix data bug", 1),
        task("data-agent", "Tune data queries", 2),
    ];
    let analysis = analyze_task_demand(&tasks, DemandThresholds::default());
    let suggestion = &analysis.suggestions[0];

    assert_eq!(suggestion.task_count, 4);
    assert!((suggestion.avg_complexity - 2.75).abs() < f64::EPSILON);
    assert_eq!(
        suggestion.sample_tasks,
        vec!["Design schema", "Implement storage system", "Fix data bug"]
    );
}

#[test]
fn demand_uses_custom_thresholds() {
    let thresholds = DemandThresholds {
        specialization: 2,
        high_priority: 2,
    };
    let analysis = analyze_task_demand(&tasks_of("test-agent", 2), thresholds);
    assert_eq!(analysis.suggestions.len(), 1);
    assert_eq!(analysis.suggestions[0].priority, DemandPriority::High);
}

#[test]
fn uncatalogued_types_produce_no_specialist() {
    let analysis = analyze_task_demand(&tasks_of("general-agent", 6), DemandThresholds::default());
    assert_eq!(analysis.suggestions.len(), 1);
    assert!(suggest_agents(&analysis).is_empty());
}

#[test]
fn specialist_carries_rationale_and_samples() {
    let analysis = analyze_task_demand(&tasks_of("backend-agent", 5), DemandThresholds::default());
    let spec = specialist_for(&analysis.suggestions[0]).unwrap();

    assert_eq!(spec.agent_id, "backend-development-agent");
    assert_eq!(spec.agent_type, AgentType::Development);
    assert_eq!(spec.capabilities.len(), 5);
    assert_eq!(spec.priority, Some(DemandPriority::High));
    assert_eq!(spec.sample_tasks.len(), 3);
    assert_eq!(
        spec.rationale.as_deref(),
        Some("High volume of backend-agent tasks (5 tasks) requires dedicated specialization")
    );
}

#[test]
fn spec_file_missing_field_is_validation_error() {
    let yaml = "\
agents:
- agent_id: good-agent
  title: Good Agent
  role: Does good work
- agent_id: no-role
  title: No Role Agent
";
    let records = parse_specifications(yaml).unwrap();
    assert_eq!(records.len(), 2);

    let good = records[0].as_ref().unwrap();
    assert_eq!(good.agent_type, AgentType::Development);
    assert_eq!(good.authority, Authority::Implement);

    let err = records[1].as_ref().unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    assert!(err.to_string().contains("'role'"));
}

#[test]
fn spec_file_blank_field_is_missing() {
    let records = parse_specifications("agents:\n- agent_id: '  '\n  title: T\n  role: R\n").unwrap();
    let err = records[0].as_ref().unwrap_err();
    assert!(err.to_string().contains("'agent_id'"));
}

#[test]
fn spec_file_agent_id_must_be_slug() {
    let yaml = "agents:\n\
                - agent_id: ../../../outside\n  title: Escape\n  role: R\n\
                - agent_id: UI Agent\n  title: Spaced\n  role: R\n\
                - agent_id: ui-agent-2\n  title: Fine\n  role: R\n";
    let records = parse_specifications(yaml).unwrap();

    for record in &records[..2] {
        let err = record.as_ref().unwrap_err();
        assert!(matches!(err, CharterError::ValidationError(_)));
        assert!(err.to_string().contains("'agent_id'"));
    }
    assert_eq!(records[2].as_ref().unwrap().agent_id, "ui-agent-2");
}

#[test]
fn spec_file_bad_enum_is_validation_error() {
    let yaml = "agents:\n- agent_id: a\n  title: A\n  role: R\n  authority: rule\n";
    let records = parse_specifications(yaml).unwrap();
    assert!(matches!(records[0], Err(CharterError::ValidationError(_))));
}

#[test]
fn spec_file_without_agents_is_empty() {
    assert!(parse_specifications("other: 1\n").unwrap().is_empty());
    assert!(parse_specifications("agents: 3\n").is_err());
}

#[test]
fn roster_yaml_round_trip() {
    let analysis = analyze_task_demand(&tasks_of("ui-agent", 3), DemandThresholds::default());
    let roster = derive_roster(&analyze(SAMPLE_VISION), &suggest_agents(&analysis));

    let yaml = roster_yaml(&roster).unwrap();
    assert!(yaml.contains("type: coordination"));

    let parsed: Vec<AgentSpec> = parse_specifications(&yaml)
        .unwrap()
        .into_iter()
        .collect::<crate::error::Result<_>>()
        .unwrap();
    assert_eq!(parsed, roster);
}

#[test]
fn load_specifications_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_specifications(&temp_dir.path().join("agents.yaml")).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::DOCUMENT_NOT_FOUND);
}

#[test]
fn load_demand_tasks_reads_yaml_and_json() {
    let temp_dir = TempDir::new().unwrap();
    let yaml_path = temp_dir.path().join("plan.yaml");
    std::fs::write(
        &yaml_path,
        "sprint_goal: x\ntasks:\n- description: Build screen\n  agent_type: ui-agent\n  estimated_points: 3\n- description: Something\n",
    )
    .unwrap();
    let json_path = temp_dir.path().join("plan.json");
    std::fs::write(
        &json_path,
        r#"{"tasks": [{"description": "Write docs", "agent_type": "doc-agent"}]}"#,
    )
    .unwrap();

    let yaml_tasks = load_demand_tasks(&yaml_path).unwrap();
    assert_eq!(yaml_tasks.len(), 2);
    assert_eq!(yaml_tasks[1].agent_type, "general-agent");
    assert_eq!(yaml_tasks[1].estimated_points, 2);

    let json_tasks = load_demand_tasks(&json_path).unwrap();
    assert_eq!(json_tasks[0].agent_type, "doc-agent");
}

#[test]
fn load_demand_tasks_missing_plan() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_demand_tasks(&temp_dir.path().join("current-sprint.yaml")).unwrap_err();
    assert!(err.to_string().starts_with("sprint plan document not found"));
}
