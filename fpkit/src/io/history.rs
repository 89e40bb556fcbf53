//! Query-string sync with a browsing history.
//!
//! The history handle is injected through [`History`], so the sync logic runs
//! the same against a real platform binding or [`MemoryHistory`].

use tracing::debug;

use crate::core::url::{QueryParams, get_query_params, query_obj_to_str};

/// Session history that can report the current location and push a new
/// query string.
pub trait History {
    /// Current location, including any query string.
    fn location(&self) -> String;

    /// Push a new entry whose query string is `query` (starting with `?`).
    fn push_state(&mut self, query: &str);
}

/// In-memory history: pushed queries replace the query part of the location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    location: String,
    entries: Vec<String>,
}

impl MemoryHistory {
    pub fn new(location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            entries: vec![location.clone()],
            location,
        }
    }

    /// Every location visited, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn push_state(&mut self, query: &str) {
        let base_end = self
            .location
            .find(['?', '#'])
            .unwrap_or(self.location.len());
        self.location = format!("{}{}", &self.location[..base_end], query);
        self.entries.push(self.location.clone());
    }
}

/// Push `params` as the new query string.
pub fn set_query_params<H: History + ?Sized>(history: &mut H, params: &QueryParams) {
    let query = format!("?{}", query_obj_to_str(params));
    debug!(query = %query, "push query params");
    history.push_state(&query);
}

/// Merge `params` over the query parameters of `url` and push the result.
pub fn assign_query_params<H: History + ?Sized>(history: &mut H, url: &str, params: &QueryParams) {
    let merged = get_query_params(url).assign(params);
    set_query_params(history, &merged);
}

/// Merge `params` over the current location's query parameters and push.
pub fn append_query_params<H: History + ?Sized>(history: &mut H, params: &QueryParams) {
    let url = history.location();
    assign_query_params(history, &url, params);
}
