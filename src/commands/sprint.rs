//! Implementation of the `charter sprint` command.

use super::{load_vision_document, path_or};
use crate::backlog::{SprintPlan, load_backlog, plan_sprint, render_sprint_plan};
use crate::cli::SprintArgs;
use crate::config::PlanFormat;
use crate::context::ProjectContext;
use crate::error::{CharterError, Result};
use crate::events::{Event, EventAction, record_event};
use crate::fs::atomic_write_file;
use crate::vision::analyze;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct SprintOutcome {
    pub path: PathBuf,
    pub plan: SprintPlan,
}

/// Plan the next sprint from the configured backlog and write it.
pub fn run_sprint(
    ctx: &ProjectContext,
    args: &SprintArgs,
    now: DateTime<Utc>,
) -> Result<SprintOutcome> {
    let format = match args.format.as_deref() {
        Some(raw) => PlanFormat::from_str(raw).ok_or_else(|| {
            CharterError::UserError(format!(
                "unknown sprint plan format '{}' (expected yaml or json)",
                raw
            ))
        })?,
        None => ctx.config.sprint_plan_format,
    };

    let backlog = load_backlog(&ctx.backlog_path())?;
    let document = load_vision_document(ctx, args.vision.as_deref())?;
    let profile = analyze(&document.content);

    let plan = plan_sprint(&backlog, &profile, ctx.config.sprint_duration_days);
    let content = render_sprint_plan(&plan, format)?;

    let path = path_or(ctx, args.output.as_deref(), ctx.sprint_plan_path());
    atomic_write_file(&path, &content)?;
    info!(tasks = plan.tasks.len(), path = %path.display(), "wrote sprint plan");

    record_event(
        ctx,
        &Event::at(EventAction::Sprint, now).with_details(json!({
            "path": ctx.relative_path(&path).display().to_string(),
            "epics": plan.epics.len(),
            "tasks": plan.tasks.len(),
        })),
    );

    Ok(SprintOutcome { path, plan })
}

pub(super) fn cmd_sprint(ctx: &ProjectContext, args: SprintArgs) -> Result<()> {
    let SprintOutcome { path, plan } = run_sprint(ctx, &args, Utc::now())?;

    println!("Sprint goal: {}", plan.sprint_goal);
    println!("Duration:    {} days", plan.duration_days);

    if plan.tasks.is_empty() {
        println!();
        println!("No critical epics found in the backlog; the plan has no tasks.");
    } else {
        let points: u32 = plan.tasks.iter().map(|t| t.estimated_points).sum();
        println!();
        println!("Tasks ({}, {} points):", plan.tasks.len(), points);
        for task in &plan.tasks {
            println!(
                "  {} [{}] {}pt  {}",
                task.id,
                task.agent_type.as_str(),
                task.estimated_points,
                task.description
            );
        }
    }

    println!();
    println!("Plan written to {}", path.display());
    Ok(())
}
