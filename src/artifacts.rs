//! Artifact assembly and writing.
//!
//! Every artifact of a run is serialized in memory first; nothing touches
//! the filesystem until all of them rendered. Writes are then independent:
//! each goes through [`atomic_write_file`], a failure is logged and counted,
//! and the remaining artifacts are still written.

use crate::constitution::MergeConstitution;
use crate::error::{CharterError, Result};
use crate::fs::atomic_write_file;
use crate::pipeline::PipelineOutput;
use crate::render::render_bootstrap_summary;
use crate::roster::roster_yaml;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const VISION_ANALYSIS_FILE: &str = "vision-analysis.yaml";
pub const CONSTITUTION_FILE: &str = "constitution.yaml";
pub const AGENT_SPECIFICATIONS_FILE: &str = "agent-specifications.yaml";
pub const PROTOCOL_FILE: &str = "communication-protocol.yaml";
pub const SUMMARY_FILE: &str = "bootstrap-summary.md";

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Short name used in logs and the run log.
    pub name: &'static str,
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(name: &'static str, path: PathBuf, content: String) -> Self {
        Self {
            name,
            path,
            content,
        }
    }
}

/// Outcome of writing a batch of artifacts.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<CharterError>,
}

impl WriteReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    /// The written paths, or an error when anything failed.
    ///
    /// A batch of one reports its own `WriteFailure`; larger batches report
    /// `PartialWrite`.
    pub fn into_result(mut self) -> Result<Vec<PathBuf>> {
        let total = self.total();
        match self.failed.len() {
            0 => Ok(self.written),
            1 if total == 1 => Err(self.failed.remove(0)),
            failed => Err(CharterError::PartialWrite { failed, total }),
        }
    }
}

/// Write every artifact, continuing past failures.
pub fn write_artifacts(artifacts: &[Artifact]) -> WriteReport {
    let mut report = WriteReport::default();
    for artifact in artifacts {
        match atomic_write_file(&artifact.path, &artifact.content) {
            Ok(()) => {
                debug!(artifact = artifact.name, path = %artifact.path.display(), "wrote artifact");
                report.written.push(artifact.path.clone());
            }
            Err(err) => {
                warn!(artifact = artifact.name, "{}", err);
                report.failed.push(err);
            }
        }
    }
    report
}

/// Serialize any record as YAML.
pub fn to_yaml<T: Serialize>(value: &T, what: &str) -> Result<String> {
    serde_yaml::to_string(value)
        .map_err(|e| CharterError::UserError(format!("failed to serialize {}: {}", what, e)))
}

/// The five bootstrap artifacts, rendered under `output_dir`.
pub fn bootstrap_artifacts(
    output_dir: &Path,
    output: &PipelineOutput,
    generated: DateTime<Utc>,
) -> Result<Vec<Artifact>> {
    Ok(vec![
        Artifact::new(
            "vision_analysis",
            output_dir.join(VISION_ANALYSIS_FILE),
            output.profile.to_yaml()?,
        ),
        Artifact::new(
            "constitution",
            output_dir.join(CONSTITUTION_FILE),
            to_yaml(&output.constitution, "constitution")?,
        ),
        Artifact::new(
            "agents",
            output_dir.join(AGENT_SPECIFICATIONS_FILE),
            roster_yaml(&output.agents)?,
        ),
        Artifact::new(
            "protocol",
            output_dir.join(PROTOCOL_FILE),
            to_yaml(&output.protocol, "communication protocol")?,
        ),
        Artifact::new(
            "summary",
            output_dir.join(SUMMARY_FILE),
            render_bootstrap_summary(
                &output.profile,
                &output.constitution,
                &output.agents,
                &output.protocol,
                generated,
            )?,
        ),
    ])
}

/// Merge constitution YAML preceded by a provenance comment block.
pub fn merge_constitution_document(
    constitution: &MergeConstitution,
    generated: DateTime<Utc>,
) -> Result<String> {
    let body = to_yaml(constitution, "merge constitution")?;
    Ok(format!(
        "# PR Merge Constitution\n\
         # This document was automatically generated from the project vision.\n\
         # Generated: {}\n\
         # Source: {}\n\n{}",
        generated.format("%Y-%m-%d %H:%M:%S"),
        constitution.generated_from,
        body
    ))
}
