//! Side-effecting collaborators.
//!
//! Anything touching the filesystem or a platform handle lives here. Platform
//! handles are reached through traits so callers can inject in-memory
//! implementations.

pub mod config;
pub mod history;
pub mod records;
pub mod timer;
