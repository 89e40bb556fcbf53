//! Deterministic, pure helpers.
//!
//! Core modules must be free of I/O side effects. Every operation takes its
//! inputs by reference and returns freshly built values, so callers can share
//! the same sequence across threads without coordination.

pub mod collection;
pub mod func;
pub mod keys;
pub mod predicate;
pub mod record;
pub mod text;
pub mod url;
