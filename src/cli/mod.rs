//! CLI argument parsing for charter.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Charter: derive governance for a multi-agent team from a project vision.
///
/// Reads a free-form vision document and produces:
/// - a structured vision profile
/// - a constitution of laws, gates and policies
/// - an agent roster and communication protocol
/// - sprint plans and agent definitions
#[derive(Parser, Debug)]
#[command(name = "charter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository root (defaults to the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub repo_root: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for charter.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interpret the vision document and print the profile as YAML.
    Interpret(VisionArgs),

    /// Derive the constitution and print it as YAML.
    Constitution(VisionArgs),

    /// Derive the agent roster and print it as YAML.
    Agents(VisionArgs),

    /// Print the fixed communication protocol as YAML.
    Protocol,

    /// Run the full pipeline and write every bootstrap artifact.
    ///
    /// Writes the vision analysis, constitution, agent specifications,
    /// communication protocol and summary into the output directory.
    Bootstrap(BootstrapArgs),

    /// Plan the next sprint from the backlog.
    ///
    /// Takes the critical epics, numbers their tasks and estimates points
    /// and agent types.
    Sprint(SprintArgs),

    /// Suggest specialist agents from the tasks of a sprint plan.
    Suggest(SuggestArgs),

    /// Render agent definition documents from an agent specifications file.
    Define(DefineArgs),

    /// Derive the merge-review constitution from the vision.
    MergeConstitution(MergeConstitutionArgs),
}

/// Vision selection shared by the read-only commands.
#[derive(Parser, Debug)]
pub struct VisionArgs {
    /// Vision document to read instead of searching the configured candidates.
    #[arg(long, value_name = "FILE")]
    pub vision: Option<PathBuf>,
}

/// Arguments for the `bootstrap` command.
#[derive(Parser, Debug)]
pub struct BootstrapArgs {
    /// Vision document to read instead of searching the configured candidates.
    #[arg(long, value_name = "FILE")]
    pub vision: Option<PathBuf>,

    /// Output directory (defaults to the configured `output_dir`).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Sprint plan whose task demand adds specialist agents to the roster.
    #[arg(long, value_name = "FILE")]
    pub sprint_plan: Option<PathBuf>,
}

/// Arguments for the `sprint` command.
#[derive(Parser, Debug)]
pub struct SprintArgs {
    /// Vision document used for the plan's alignment section.
    #[arg(long, value_name = "FILE")]
    pub vision: Option<PathBuf>,

    /// Where to write the plan (defaults to the configured `sprint_plan_path`).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Plan format: yaml or json (defaults to the configured format).
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `suggest` command.
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Sprint plan to analyze (defaults to the configured `sprint_plan_path`).
    #[arg(long, value_name = "FILE")]
    pub sprint_plan: Option<PathBuf>,
}

/// Arguments for the `define` command.
#[derive(Parser, Debug)]
pub struct DefineArgs {
    /// Agent specifications file (defaults to the bootstrap output).
    #[arg(long, value_name = "FILE")]
    pub spec_file: Option<PathBuf>,

    /// Render only the agent with this ID.
    #[arg(long, value_name = "ID")]
    pub single: Option<String>,
}

/// Arguments for the `merge-constitution` command.
#[derive(Parser, Debug)]
pub struct MergeConstitutionArgs {
    /// Vision document to read instead of searching the configured candidates.
    #[arg(long, value_name = "FILE")]
    pub vision: Option<PathBuf>,

    /// Where to write the constitution (defaults to the configured path).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the document instead of writing it.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_interpret_with_vision() {
        let cli = Cli::try_parse_from(["charter", "interpret", "--vision", "VISION.md"]).unwrap();
        if let Command::Interpret(args) = cli.command {
            assert_eq!(args.vision, Some(PathBuf::from("VISION.md")));
        } else {
            panic!("Expected Interpret command");
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["charter", "protocol", "--repo-root", "/repo", "-vv"])
            .unwrap();
        assert_eq!(cli.repo_root, Some(PathBuf::from("/repo")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Protocol));
    }

    #[test]
    fn parse_bootstrap_defaults() {
        let cli = Cli::try_parse_from(["charter", "bootstrap"]).unwrap();
        if let Command::Bootstrap(args) = cli.command {
            assert!(args.vision.is_none());
            assert!(args.output.is_none());
            assert!(args.sprint_plan.is_none());
        } else {
            panic!("Expected Bootstrap command");
        }
    }

    #[test]
    fn parse_bootstrap_with_sprint_plan() {
        let cli = Cli::try_parse_from([
            "charter",
            "bootstrap",
            "-o",
            "out",
            "--sprint-plan",
            "plan.yaml",
        ])
        .unwrap();
        if let Command::Bootstrap(args) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("out")));
            assert_eq!(args.sprint_plan, Some(PathBuf::from("plan.yaml")));
        } else {
            panic!("Expected Bootstrap command");
        }
    }

    #[test]
    fn parse_sprint_format() {
        let cli = Cli::try_parse_from(["charter", "sprint", "--format", "json"]).unwrap();
        if let Command::Sprint(args) = cli.command {
            assert_eq!(args.format.as_deref(), Some("json"));
        } else {
            panic!("Expected Sprint command");
        }
    }

    #[test]
    fn parse_define_single() {
        let cli = Cli::try_parse_from(["charter", "define", "--single", "ui-agent"]).unwrap();
        if let Command::Define(args) = cli.command {
            assert_eq!(args.single.as_deref(), Some("ui-agent"));
            assert!(args.spec_file.is_none());
        } else {
            panic!("Expected Define command");
        }
    }

    #[test]
    fn parse_merge_constitution_dry_run() {
        let cli = Cli::try_parse_from(["charter", "merge-constitution", "--dry-run"]).unwrap();
        if let Command::MergeConstitution(args) = cli.command {
            assert!(args.dry_run);
            assert!(args.output.is_none());
        } else {
            panic!("Expected MergeConstitution command");
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["charter", "claim"]).is_err());
    }
}
