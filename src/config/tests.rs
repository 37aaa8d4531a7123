//! Tests for config functionality.

use crate::config::types::default_vision_candidates;
use crate::config::{Config, PlanFormat};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.vision_candidates, default_vision_candidates());
    assert_eq!(config.vision_candidates[0], "docs/product/vision.md");
    assert_eq!(config.vision_candidates.last().unwrap(), "README.md");
    assert_eq!(config.backlog_path, "docs/development/backlog-v1.md");
    assert_eq!(config.output_dir, ".mas-system");
    assert_eq!(
        config.sprint_plan_path,
        "tools/agent-orchestration/current-sprint.yaml"
    );
    assert_eq!(config.agents_dir, ".github/agents");
    assert_eq!(config.sprint_duration_days, 14);
    assert_eq!(config.sprint_plan_format, PlanFormat::Yaml);
    assert_eq!(config.specialization_threshold, 3);
    assert_eq!(config.high_priority_threshold, 5);
}

#[test]
fn test_parse_empty_yaml_uses_defaults() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
output_dir: build/governance
sprint_duration_days: 10
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.output_dir, "build/governance");
    assert_eq!(config.sprint_duration_days, 10);
    assert_eq!(config.backlog_path, "docs/development/backlog-v1.md");
    assert_eq!(config.specialization_threshold, 3);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
vision_candidates:
  - VISION.md
backlog_path: BACKLOG.md
output_dir: out
sprint_plan_path: out/sprint.json
merge_constitution_path: out/merge.yaml
agents_dir: out/agents
sprint_duration_days: 7
sprint_plan_format: json
specialization_threshold: 2
high_priority_threshold: 4
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.vision_candidates, vec!["VISION.md"]);
    assert_eq!(config.backlog_path, "BACKLOG.md");
    assert_eq!(config.sprint_plan_path, "out/sprint.json");
    assert_eq!(config.merge_constitution_path, "out/merge.yaml");
    assert_eq!(config.agents_dir, "out/agents");
    assert_eq!(config.sprint_duration_days, 7);
    assert_eq!(config.sprint_plan_format, PlanFormat::Json);
    assert_eq!(config.specialization_threshold, 2);
    assert_eq!(config.high_priority_threshold, 4);
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
output_dir: out
future_feature: enabled
nested:
  flag: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.output_dir, "out");
}

#[test]
fn test_validate_empty_candidates_fails() {
    let err = Config::from_yaml("vision_candidates: []").unwrap_err();
    assert!(err.to_string().contains("vision_candidates"));
}

#[test]
fn test_validate_zero_duration_fails() {
    let err = Config::from_yaml("sprint_duration_days: 0").unwrap_err();
    assert!(err.to_string().contains("sprint_duration_days"));
}

#[test]
fn test_validate_threshold_ordering() {
    let err = Config::from_yaml("specialization_threshold: 6").unwrap_err();
    assert!(err.to_string().contains("high_priority_threshold"));

    let config = Config::from_yaml("specialization_threshold: 5\nhigh_priority_threshold: 5");
    assert!(config.is_ok());
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("sprint_duration_days: [not a number").unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

#[test]
fn test_yaml_round_trip() {
    let config = Config {
        output_dir: "custom".to_string(),
        sprint_plan_format: PlanFormat::Json,
        ..Config::default()
    };

    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("charter.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_or_default_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("charter.yaml");
    std::fs::write(&path, "sprint_duration_days: 21\n").unwrap();

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.sprint_duration_days, 21);
}

#[test]
fn test_plan_format_from_str() {
    assert_eq!(PlanFormat::from_str("yaml"), Some(PlanFormat::Yaml));
    assert_eq!(PlanFormat::from_str("YML"), Some(PlanFormat::Yaml));
    assert_eq!(PlanFormat::from_str("json"), Some(PlanFormat::Json));
    assert_eq!(PlanFormat::from_str("toml"), None);
}
