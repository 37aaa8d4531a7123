//! Read-only commands that print one derived record as YAML.

use super::load_vision_document;
use crate::artifacts::to_yaml;
use crate::cli::VisionArgs;
use crate::constitution::derive_constitution;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::protocol::communication_protocol;
use crate::roster::{base_roster, roster_yaml};
use crate::vision::analyze;
use chrono::{DateTime, Utc};

pub fn interpret_yaml(ctx: &ProjectContext, args: &VisionArgs) -> Result<String> {
    let document = load_vision_document(ctx, args.vision.as_deref())?;
    analyze(&document.content).to_yaml()
}

pub fn constitution_yaml(
    ctx: &ProjectContext,
    args: &VisionArgs,
    now: DateTime<Utc>,
) -> Result<String> {
    let document = load_vision_document(ctx, args.vision.as_deref())?;
    let profile = analyze(&document.content);
    to_yaml(&derive_constitution(&profile, &document.path, now), "constitution")
}

pub fn agents_yaml(ctx: &ProjectContext, args: &VisionArgs) -> Result<String> {
    let document = load_vision_document(ctx, args.vision.as_deref())?;
    roster_yaml(&base_roster(&analyze(&document.content)))
}

pub fn protocol_yaml(now: DateTime<Utc>) -> Result<String> {
    to_yaml(&communication_protocol(now), "communication protocol")
}

pub(super) fn cmd_interpret(ctx: &ProjectContext, args: VisionArgs) -> Result<()> {
    print!("{}", interpret_yaml(ctx, &args)?);
    Ok(())
}

pub(super) fn cmd_constitution(ctx: &ProjectContext, args: VisionArgs) -> Result<()> {
    print!("{}", constitution_yaml(ctx, &args, Utc::now())?);
    Ok(())
}

pub(super) fn cmd_agents(ctx: &ProjectContext, args: VisionArgs) -> Result<()> {
    print!("{}", agents_yaml(ctx, &args)?);
    Ok(())
}

pub(super) fn cmd_protocol() -> Result<()> {
    print!("{}", protocol_yaml(Utc::now())?);
    Ok(())
}
