//! Exit code constants for the coverletter CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing selection, bad config)
//! - 2: Validation failure (empty fields, empty letter)
//! - 3: Source failure (template or output file unreadable/unwritable)
//! - 4: Backend failure (HTTP error status, script exit code, timeout)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing template selection, invalid config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: one or more fields empty, or nothing to save.
pub const VALIDATION_FAILURE: i32 = 2;

/// Source failure: a template, config or output path could not be read or written.
pub const SOURCE_FAILURE: i32 = 3;

/// Backend failure: the remote model or the generation script reported an error.
pub const BACKEND_FAILURE: i32 = 4;
