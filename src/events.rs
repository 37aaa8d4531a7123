//! Append-only run log.
//!
//! Every command that writes artifacts records one event in
//! `{output_dir}/events.ndjson`, one JSON object per line:
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: the command that ran (`bootstrap`, `sprint`, ...)
//! - `actor`: `user@HOST`
//! - `details`: freeform object with command-specific details
//!
//! The log is an audit trail only; [`record_event`] downgrades failures to
//! warnings so a broken log never fails a run.
//!
//! ```no_run
//! use charter::context::ProjectContext;
//! use charter::events::{Event, EventAction, append_event};
//! use serde_json::json;
//!
//! let ctx = ProjectContext::resolve(None)?;
//! let event = Event::new(EventAction::Sprint).with_details(json!({"tasks": 4}));
//! append_event(&ctx, &event)?;
//! # Ok::<(), charter::error::CharterError>(())
//! ```

use crate::context::ProjectContext;
use crate::error::{CharterError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::warn;

/// Commands that write artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Bootstrap,
    Sprint,
    Define,
    MergeConstitution,
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventAction::Bootstrap => write!(f, "bootstrap"),
            EventAction::Sprint => write!(f, "sprint"),
            EventAction::Define => write!(f, "define"),
            EventAction::MergeConstitution => write!(f, "merge_constitution"),
        }
    }
}

/// One run log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,
    pub action: EventAction,
    pub actor: String,
    pub details: Value,
}

impl Event {
    /// Event stamped with the current time and the local actor.
    pub fn new(action: EventAction) -> Self {
        Self::at(action, Utc::now())
    }

    /// Event stamped with an explicit time, matching the run's artifacts.
    pub fn at(action: EventAction, ts: DateTime<Utc>) -> Self {
        Self {
            ts,
            action,
            actor: actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize to a single JSON line.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            CharterError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append one event to the run log, creating the file and its directory.
pub fn append_event(ctx: &ProjectContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_path();
    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = events_file.parent()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| {
            CharterError::UserError(format!(
                "failed to create run log directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            CharterError::UserError(format!(
                "failed to open run log '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        CharterError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Append an event, logging a warning instead of failing.
pub fn record_event(ctx: &ProjectContext, event: &Event) {
    if let Err(err) = append_event(ctx, event) {
        warn!(action = %event.action, "run log not updated: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> ProjectContext {
        ProjectContext::with_config(temp_dir.path(), Config::default())
    }

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Bootstrap);

        assert_eq!(event.action, EventAction::Bootstrap);
        assert!(event.actor.contains('@'));
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_event_serialization_is_single_line() {
        let event = Event::new(EventAction::MergeConstitution)
            .with_details(json!({"dry_run": false, "principles": 5}));

        let line = event.to_ndjson_line().unwrap();

        assert!(!line.contains('\n'));
        assert!(line.contains("\"merge_constitution\""));
        let parsed: Event = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.details["principles"], 5);
    }

    #[test]
    fn test_append_event_creates_file_and_dir() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        append_event(&ctx, &Event::new(EventAction::Sprint)).unwrap();

        let content = fs::read_to_string(ctx.events_path()).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_append_event_appends_lines() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        append_event(&ctx, &Event::new(EventAction::Bootstrap)).unwrap();
        append_event(&ctx, &Event::new(EventAction::Define)).unwrap();

        let content = fs::read_to_string(ctx.events_path()).unwrap();
        let actions: Vec<EventAction> = content
            .lines()
            .map(|l| serde_json::from_str::<Event>(l).unwrap().action)
            .collect();
        assert_eq!(actions, vec![EventAction::Bootstrap, EventAction::Define]);
    }

    #[test]
    fn test_record_event_swallows_failures() {
        let temp_dir = TempDir::new().unwrap();
        // Output dir is a file, so the log cannot be created.
        fs::write(temp_dir.path().join(".mas-system"), "blocker").unwrap();
        let ctx = context(&temp_dir);

        record_event(&ctx, &Event::new(EventAction::Bootstrap));

        assert!(append_event(&ctx, &Event::new(EventAction::Bootstrap)).is_err());
    }
}
