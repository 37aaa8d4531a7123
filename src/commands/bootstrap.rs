//! Implementation of the `charter bootstrap` command.
//!
//! Runs the full pipeline and writes the five bootstrap artifacts. When a
//! sprint plan is given, its task demand adds specialist agents to the
//! roster first.

use super::{load_vision_document, path_or};
use crate::artifacts::{bootstrap_artifacts, write_artifacts};
use crate::cli::BootstrapArgs;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::events::{Event, EventAction, record_event};
use crate::pipeline::{PipelineOutput, run_pipeline};
use crate::roster::{
    AgentSpec, DemandThresholds, analyze_task_demand, load_demand_tasks, suggest_agents,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a bootstrap run produced.
#[derive(Debug)]
pub struct BootstrapOutcome {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub output: PipelineOutput,
}

/// Run the pipeline and write its artifacts.
///
/// Every artifact is rendered before the first write. If some writes fail
/// the others are still attempted and the error reports how many failed.
pub fn run_bootstrap(
    ctx: &ProjectContext,
    args: &BootstrapArgs,
    now: DateTime<Utc>,
) -> Result<BootstrapOutcome> {
    let document = load_vision_document(ctx, args.vision.as_deref())?;

    let specialists = match &args.sprint_plan {
        Some(plan) => demand_specialists(ctx, &ctx.resolve_path(plan))?,
        None => Vec::new(),
    };

    let output = run_pipeline(&document, &specialists, now);
    let output_dir = path_or(ctx, args.output.as_deref(), ctx.output_dir());
    let artifacts = bootstrap_artifacts(&output_dir, &output, now)?;

    let report = write_artifacts(&artifacts);
    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "wrote bootstrap artifacts"
    );

    record_event(
        ctx,
        &Event::at(EventAction::Bootstrap, now).with_details(json!({
            "vision": document.path.display().to_string(),
            "output_dir": ctx.relative_path(&output_dir).display().to_string(),
            "agents": output.agents.len(),
            "specialists": specialists.len(),
            "written": report.written.len(),
            "failed": report.failed.len(),
        })),
    );

    let written = report.into_result()?;
    Ok(BootstrapOutcome {
        output_dir,
        written,
        output,
    })
}

fn demand_specialists(ctx: &ProjectContext, plan: &Path) -> Result<Vec<AgentSpec>> {
    let tasks = load_demand_tasks(plan)?;
    let analysis = analyze_task_demand(&tasks, DemandThresholds::from(&ctx.config));
    Ok(suggest_agents(&analysis))
}

pub(super) fn cmd_bootstrap(ctx: &ProjectContext, args: BootstrapArgs) -> Result<()> {
    let outcome = run_bootstrap(ctx, &args, Utc::now())?;
    let profile = &outcome.output.profile;

    println!("Bootstrapped multi-agent system");
    println!();
    println!("  Vision:        {}", outcome.output.vision_path.display());
    println!("  Domain:        {}", profile.domain);
    println!("  Core laws:     {}", outcome.output.constitution.core_laws.len());
    println!("  Agents:        {}", outcome.output.agents.len());
    println!();
    println!("Artifacts written to {}:", outcome.output_dir.display());
    for path in &outcome.written {
        if let Some(name) = path.file_name() {
            println!("  {}", name.to_string_lossy());
        }
    }
    println!();
    println!("Next: run `charter define` to render agent definitions.");

    Ok(())
}
