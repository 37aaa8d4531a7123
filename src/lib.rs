//! Charter: derive governance for a multi-agent team from a project vision.
//!
//! The library exposes the pipeline stages as plain functions over typed
//! records:
//!
//! - [`vision`]: locate a vision document and interpret it into a profile
//! - [`constitution`]: derive laws, gates and policies from the profile
//! - [`roster`]: derive the agent roster, optionally with demand-driven specialists
//! - [`backlog`]: parse a backlog and plan the next sprint
//! - [`protocol`]: the fixed inter-agent communication protocol
//! - [`render`]: markdown renderers for agent definitions and the run summary
//! - [`artifacts`]: serialize and write a run's outputs
//!
//! The `charter` binary wires these together behind [`cli`] and [`commands`].

pub mod artifacts;
pub mod backlog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constitution;
pub mod context;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod markdown;
pub mod pipeline;
pub mod protocol;
pub mod render;
pub mod roster;
pub mod vision;

#[cfg(test)]
mod test_support;
