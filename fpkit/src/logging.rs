//! Diagnostics for the `fpkit` binary.
//!
//! Filter directives come from `FPKIT_LOG`, then `RUST_LOG`. Output goes to
//! stderr so it never mixes with JSON printed on stdout.

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var read before `RUST_LOG`.
pub const LOG_ENV: &str = "FPKIT_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the global subscriber.
///
/// # Example
/// ```bash
/// FPKIT_LOG=fpkit=debug fpkit remove --file records.json --id 3
/// ```
pub fn init() {
    let directives = env::var(LOG_ENV).or_else(|_| env::var("RUST_LOG"));
    tracing_subscriber::registry()
        .with(filter(directives.ok().as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

/// Filter for `directives`, or `warn` when they are unset or unparsable.
pub fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_warn() {
        assert_eq!(filter(None).to_string(), "warn");
    }

    #[test]
    fn filter_uses_given_directives() {
        assert_eq!(filter(Some("fpkit=debug")).to_string(), "fpkit=debug");
    }
}
