//! Filesystem utilities for charter.
//!
//! Artifacts are always written through [`atomic_write`] so a failed run never
//! leaves a half-written constitution, roster or sprint plan behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
