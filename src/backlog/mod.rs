//! Backlog parsing and sprint planning.
//!
//! A backlog is markdown with one block per epic:
//!
//! ```text
//! ## Epic 1: Lesson Reader
//!
//! ### Priority: Critical
//! **Goal**: Students can read lessons offline
//!
//! **1.1 Reader screen**
//! - [ ] Build the lesson screen component
//! ```
//!
//! The sprint plan takes the critical epics, numbers their tasks and tags
//! each with an estimate and the kind of agent that should pick it up.

mod model;
mod parse;
mod plan;


pub use model::{
    Backlog, Epic, PlanAlignment, Priority, SprintPlan, SprintTask, Story, StoryStatus,
    TaskAgentType, TaskStatus,
};
pub use parse::{load_backlog, parse_backlog};
pub use plan::{
    AGENT_TYPE_RULES, MAX_SPRINT_EPICS, POINT_RULES, estimate_points, plan_sprint,
    render_sprint_plan, suggest_agent_type,
};
