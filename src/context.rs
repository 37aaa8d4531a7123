//! Project context resolution for charter.
//!
//! Every command works against exactly one repository root. This module
//! resolves that root (an explicit `--repo-root` or the current directory),
//! loads `charter.yaml` from it, and turns the configured relative paths into
//! absolute ones.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{CharterError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths and configuration for one charter run.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path to the repository root.
    pub repo_root: PathBuf,

    /// Configuration loaded from `charter.yaml` (or defaults).
    pub config: Config,
}

impl ProjectContext {
    /// Resolve the context from an explicit root, or the current working
    /// directory when `repo_root` is `None`.
    pub fn resolve(repo_root: Option<&Path>) -> Result<Self> {
        match repo_root {
            Some(root) => Self::resolve_from(root),
            None => {
                let cwd = env::current_dir().map_err(|e| {
                    CharterError::UserError(format!(
                        "failed to get current working directory: {}",
                        e
                    ))
                })?;
                Self::resolve_from(&cwd)
            }
        }
    }

    /// Resolve the context rooted at `root`.
    ///
    /// # Returns
    ///
    /// * `Ok(ProjectContext)` - root exists and the config (if any) is valid
    /// * `Err(CharterError::UserError)` - root is not a directory or config is invalid
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(CharterError::UserError(format!(
                "repository root '{}' is not a directory",
                root.display()
            )));
        }

        let repo_root = root.canonicalize().map_err(|e| {
            CharterError::UserError(format!(
                "failed to resolve repository root '{}': {}",
                root.display(),
                e
            ))
        })?;

        let config = Config::load_or_default(repo_root.join(CONFIG_FILE_NAME))?;

        Ok(Self { repo_root, config })
    }

    /// Build a context with an explicit config, without touching the filesystem.
    pub fn with_config<P: Into<PathBuf>>(repo_root: P, config: Config) -> Self {
        Self {
            repo_root: repo_root.into(),
            config,
        }
    }

    /// Resolve a path given on the command line or in config.
    ///
    /// Absolute paths are returned unchanged, relative paths are joined to
    /// the repository root.
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.repo_root.join(path)
        }
    }

    /// `path` relative to the repository root when it lies inside it.
    ///
    /// Used for paths recorded in artifacts so they do not leak the checkout
    /// location.
    pub fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.repo_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    /// Vision document candidates in lookup order.
    pub fn vision_candidates(&self) -> Vec<PathBuf> {
        self.config
            .vision_candidates
            .iter()
            .map(|c| self.resolve_path(c))
            .collect()
    }

    pub fn backlog_path(&self) -> PathBuf {
        self.resolve_path(&self.config.backlog_path)
    }

    /// Directory receiving bootstrap artifacts and the run log.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.output_dir)
    }

    pub fn sprint_plan_path(&self) -> PathBuf {
        self.resolve_path(&self.config.sprint_plan_path)
    }

    pub fn merge_constitution_path(&self) -> PathBuf {
        self.resolve_path(&self.config.merge_constitution_path)
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.agents_dir)
    }

    /// Default agent specifications file written by `bootstrap`.
    pub fn agent_specifications_path(&self) -> PathBuf {
        self.output_dir().join("agent-specifications.yaml")
    }

    /// Run log location.
    pub fn events_path(&self) -> PathBuf {
        self.output_dir().join("events.ndjson")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn resolve_from_uses_defaults_without_config() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();

        let root = temp_dir.path().canonicalize().unwrap();
        assert_eq!(ctx.repo_root, root);
        assert_eq!(ctx.config, Config::default());
        assert_eq!(ctx.output_dir(), root.join(".mas-system"));
        assert_eq!(
            ctx.backlog_path(),
            root.join("docs/development/backlog-v1.md")
        );
        assert_eq!(ctx.events_path(), root.join(".mas-system/events.ndjson"));
    }

    #[test]
    fn resolve_from_reads_config_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("charter.yaml"),
            "output_dir: governance\nvision_candidates: [PLAN.md]\n",
        )
        .unwrap();

        let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();
        let root = temp_dir.path().canonicalize().unwrap();

        assert_eq!(ctx.output_dir(), root.join("governance"));
        assert_eq!(ctx.vision_candidates(), vec![root.join("PLAN.md")]);
    }

    #[test]
    fn resolve_from_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("charter.yaml"), "sprint_duration_days: 0\n").unwrap();

        let err = ProjectContext::resolve_from(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("sprint_duration_days"));
    }

    #[test]
    fn resolve_from_rejects_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = ProjectContext::resolve_from(&missing).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    }

    #[test]
    fn resolve_path_keeps_absolute_paths() {
        let ctx = ProjectContext::with_config("/repo", Config::default());
        assert_eq!(ctx.resolve_path("/etc/vision.md"), PathBuf::from("/etc/vision.md"));
        assert_eq!(ctx.resolve_path("VISION.md"), PathBuf::from("/repo/VISION.md"));
    }

    #[test]
    fn relative_path_strips_repo_root_only() {
        let ctx = ProjectContext::with_config("/repo", Config::default());
        assert_eq!(
            ctx.relative_path(Path::new("/repo/docs/vision.md")),
            PathBuf::from("docs/vision.md")
        );
        assert_eq!(ctx.relative_path(Path::new("/elsewhere/v.md")), PathBuf::from("/elsewhere/v.md"));
    }

    #[test]
    #[serial]
    fn resolve_without_root_uses_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let ctx = ProjectContext::resolve(None).unwrap();
        assert_eq!(ctx.repo_root, temp_dir.path().canonicalize().unwrap());
    }
}
