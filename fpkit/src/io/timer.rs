//! Deferred execution on background threads.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Result, anyhow};
use tracing::debug;

/// Handle that completes once `duration` has elapsed.
pub fn timer(duration: Duration) -> JoinHandle<()> {
    thread::spawn(move || thread::sleep(duration))
}

/// Run `func` on a background thread after `duration`.
///
/// The returned handle yields `func`'s result when joined.
pub fn delay<F, T>(func: F, duration: Duration) -> JoinHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(duration);
        debug!(delay_ms = duration.as_millis() as u64, "run delayed function");
        func()
    })
}

/// Wait for a handle from [`timer`] or [`delay`].
pub fn wait<T>(handle: JoinHandle<T>) -> Result<T> {
    handle
        .join()
        .map_err(|_| anyhow!("delayed function panicked"))
}
