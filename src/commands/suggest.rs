//! Implementation of the `charter suggest` command.
//!
//! Read-only: analyzes an existing sprint plan and prints the specialist
//! agents its task volume calls for.

use super::path_or;
use crate::cli::SuggestArgs;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::roster::{
    AgentSpec, DemandAnalysis, DemandThresholds, analyze_task_demand, load_demand_tasks,
    suggest_agents,
};

#[derive(Debug)]
pub struct SuggestOutcome {
    pub analysis: DemandAnalysis,
    pub agents: Vec<AgentSpec>,
}

pub fn run_suggest(ctx: &ProjectContext, args: &SuggestArgs) -> Result<SuggestOutcome> {
    let path = path_or(ctx, args.sprint_plan.as_deref(), ctx.sprint_plan_path());
    let tasks = load_demand_tasks(&path)?;
    let analysis = analyze_task_demand(&tasks, DemandThresholds::from(&ctx.config));
    let agents = suggest_agents(&analysis);
    Ok(SuggestOutcome { analysis, agents })
}

pub(super) fn cmd_suggest(ctx: &ProjectContext, args: SuggestArgs) -> Result<()> {
    let SuggestOutcome { analysis, agents } = run_suggest(ctx, &args)?;

    println!(
        "Analyzed {} task(s) across {} agent type(s)",
        analysis.total_tasks, analysis.unique_agent_types
    );

    if analysis.suggestions.is_empty() {
        println!();
        println!(
            "No specialists needed (threshold: {} tasks per agent type).",
            ctx.config.specialization_threshold
        );
        return Ok(());
    }

    println!();
    println!("Demand:");
    for suggestion in &analysis.suggestions {
        println!(
            "  {:<16} {} tasks, avg {:.1} points, {:?} priority",
            suggestion.agent_type,
            suggestion.task_count,
            suggestion.avg_complexity,
            suggestion.priority
        );
    }

    if !agents.is_empty() {
        println!();
        println!("Suggested specialists:");
        for agent in &agents {
            println!("  {} ({})", agent.agent_id, agent.title);
            if let Some(rationale) = &agent.rationale {
                println!("    {}", rationale);
            }
        }
        println!();
        println!("Run `charter bootstrap --sprint-plan <FILE>` to add them to the roster.");
    }

    Ok(())
}
