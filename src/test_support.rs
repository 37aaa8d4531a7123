use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The process working directory is global; hold the lock even if a #[serial] is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A vision document exercising every extracted section.
pub(crate) const SAMPLE_VISION: &str = "\
# Offline Classroom

Tools for teachers in low-connectivity schools.

## Mission Statement

Give every student access to quality learning material, even without a network connection.

## Guiding Principles

- Offline-first: the app must work without network
- Simple: one tap to start a lesson
- Secure: student data stays on the device
- Fast: screens load in under a second
- Accessible: usable by anyone, anywhere

## Short Term Goals

1. Ship the lesson reader to pilot schools
2. Support Android phones with 2GB of memory

## Long Term Goals

- Expand to 500 schools across three regions

## Constraints

- Limited storage on low-end devices
- Intermittent power supply

## Success Criteria

- 80% of pilot teachers use it weekly
- Lessons open in under one second

## Architecture

A mobile app with an optional sync api. The platform keeps all content private to the school.
";

/// A backlog with one critical epic and one low-priority epic.
pub(crate) const SAMPLE_BACKLOG: &str = "\
# Backlog v1

## Epic 1: Lesson Reader

### Priority: Critical
**Goal**: Students can read lessons offline

**1.1 Reader screen**
- [ ] Build the lesson screen component
- [x] Add page navigation view

**1.2 Local storage**
- [ ] Design the lesson database schema
- [ ] Implement storage sync system

## Epic 2: Analytics

### Priority: Low
**Goal**: Teachers see usage reports

**2.1 Reports**
- [ ] Create usage report endpoint
";

/// Create a temporary repository containing the sample vision and backlog.
pub(crate) fn create_sample_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    std::fs::create_dir_all(root.join("docs/product")).unwrap();
    std::fs::create_dir_all(root.join("docs/development")).unwrap();
    std::fs::write(root.join("docs/product/vision.md"), SAMPLE_VISION).unwrap();
    std::fs::write(root.join("docs/development/backlog-v1.md"), SAMPLE_BACKLOG).unwrap();

    temp_dir
}
