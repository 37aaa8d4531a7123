//! Agent roster derivation.
//!
//! The roster is the ordered list of agents a project needs: fixed
//! coordination agents, development agents (some conditional on the
//! vision's architecture hints), demand-driven specialists from sprint task
//! analysis, and fixed enforcement agents. `agent_id` is unique within a
//! roster.

mod catalog;
mod demand;
mod derive;
mod model;
mod spec_file;

#[cfg(test)]
mod tests;

pub use catalog::{SPECIALIST_CATALOG, SpecialistTemplate, specialist_for, suggest_agents};
pub use demand::{
    DemandAnalysis, DemandSuggestion, DemandTask, DemandThresholds, analyze_task_demand,
    load_demand_tasks,
};
pub use derive::{base_roster, dedup_by_agent_id, derive_roster};
pub use model::{AgentSpec, AgentType, Authority, DemandPriority, RosterFile};
pub use spec_file::{REQUIRED_FIELDS, load_specifications, parse_specifications, roster_yaml};
