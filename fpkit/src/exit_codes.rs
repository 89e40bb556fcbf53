//! Stable exit codes for fpkit CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, unreadable records or other errors.
pub const INVALID: i32 = 1;
/// `fpkit find` found no record with the requested id.
pub const NOT_FOUND: i32 = 2;
