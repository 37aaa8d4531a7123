//! The forward pass from vision document to governance records.
//!
//! ```text
//! VisionDocument -> VisionProfile -> Constitution
//!                                 -> AgentSpec[] (+ specialists)
//!                                 -> CommunicationProtocol
//! ```
//!
//! Single pass, no retries, no I/O. Discovery happens before and writing
//! happens after, in the command layer.

use crate::constitution::{Constitution, derive_constitution};
use crate::protocol::{CommunicationProtocol, communication_protocol};
use crate::roster::{AgentSpec, derive_roster};
use crate::vision::{VisionDocument, VisionProfile, analyze};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::info;

/// Everything one bootstrap run derives.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub vision_path: PathBuf,
    pub profile: VisionProfile,
    pub constitution: Constitution,
    pub agents: Vec<AgentSpec>,
    pub protocol: CommunicationProtocol,
}

/// Run the pipeline over an already loaded vision document.
///
/// `specialists` are demand-driven agents to slot into the roster; pass an
/// empty slice for the vision-only roster.
pub fn run_pipeline(
    vision: &VisionDocument,
    specialists: &[AgentSpec],
    now: DateTime<Utc>,
) -> PipelineOutput {
    let profile = analyze(&vision.content);
    info!(domain = %profile.domain, path = %vision.path.display(), "interpreted vision");

    let constitution = derive_constitution(&profile, &vision.path, now);
    info!(core_laws = constitution.core_laws.len(), "derived constitution");

    let agents = derive_roster(&profile, specialists);
    info!(agents = agents.len(), "derived agent roster");

    PipelineOutput {
        vision_path: vision.path.clone(),
        protocol: communication_protocol(now),
        constitution,
        agents,
        profile,
    }
}
