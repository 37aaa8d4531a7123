//! Atomic artifact writes.
//!
//! All writes follow the same pattern:
//! 1. Write content to `.{filename}.tmp` in the target directory
//! 2. Sync the temp file to disk
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing destination on both POSIX and
//! Windows, and is atomic when source and destination share a filesystem,
//! which is guaranteed by keeping the temp file next to the target.

use crate::error::{CharterError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// Every failure is reported as [`CharterError::WriteFailure`] naming the
/// target path, and the temp file is removed.
///
/// # Example
///
/// ```no_run
/// use charter::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new(".mas-system/constitution.yaml"), b"version: '1.0'\n")?;
/// # Ok::<(), charter::error::CharterError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            write_failure(path, format!("failed to create '{}': {}", parent.display(), e))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content).map_err(|reason| write_failure(path, reason))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_failure(path, format!("failed to move temp file into place: {}", e))
    })?;

    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn write_failure(path: &Path, reason: String) -> CharterError {
    CharterError::WriteFailure {
        path: path.to_path_buf(),
        reason,
    }
}

/// `.{filename}.tmp` in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| write_failure(target, "invalid file path".to_string()))?;
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::result::Result<(), String> {
    let mut file = File::create(path)
        .map_err(|e| format!("failed to create temp file '{}': {}", path.display(), e))?;

    let written = file.write_all(content).and_then(|_| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(format!("failed to write temp file: {}", e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("constitution.yaml");

        atomic_write(&file_path, b"version: '1.0'\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "version: '1.0'\n");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("roster.yaml");
        fs::write(&file_path, "agents: []\n").unwrap();

        atomic_write_file(&file_path, "agents:\n- agent_id: test-agent\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("test-agent"));
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir
            .path()
            .join(".github")
            .join("agents")
            .join("enforcement-agents")
            .join("constitutional-judge.md");

        atomic_write_file(&file_path, "# Constitutional Judge Agent\n").unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_temp_file_does_not_linger() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("summary.md");

        atomic_write(&file_path, b"# Summary").unwrap();

        assert!(!temp_dir.path().join(".summary.md.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/out/plan.yaml")).unwrap();
        assert_eq!(temp, PathBuf::from("/out/.plan.yaml.tmp"));
    }

    #[test]
    fn test_write_into_file_parent_fails_with_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = atomic_write(blocker.join("artifact.yaml"), b"x").unwrap_err();

        match err {
            CharterError::WriteFailure { path, .. } => {
                assert_eq!(path, blocker.join("artifact.yaml"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
