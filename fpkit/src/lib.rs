//! Small functional helpers for working with records, predicates, strings and URLs.
//!
//! The crate keeps a strict separation between pure logic and side effects:
//!
//! - **[`core`]**: Pure, deterministic helpers (predicate combinators,
//!   identifier-indexed sequence operations, text and URL codecs). No I/O, and
//!   no helper ever mutates its input.
//! - **[`io`]**: Side-effecting collaborators (config files, record files,
//!   history sync). Platform handles sit behind traits so they can be swapped
//!   for in-memory versions in tests.
//!
//! The `fpkit` binary wires both together for command-line use.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod random;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
