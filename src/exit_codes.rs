//! Exit code constants for the charter CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: A required source document could not be located
//! - 3: Validation failure (malformed specification record)
//! - 4: Artifact write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// No vision, backlog, sprint plan or specification file was found.
pub const DOCUMENT_NOT_FOUND: i32 = 2;

/// A specification record is missing a required field.
pub const VALIDATION_FAILURE: i32 = 3;

/// One or more artifacts could not be written.
pub const WRITE_FAILURE: i32 = 4;
