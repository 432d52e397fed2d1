//! Landing-page redirect.
//!
//! The site root has no content of its own: it forwards to the most recent
//! year. "Most recent" is simply the last discovered entry, which relies on the
//! listing yielding years in ascending order.

use crate::types::RouteEntry;
use serde::Serialize;

/// HTTP status used for the landing redirect (temporary, so next year's
/// route takes over without clients caching the old target).
pub const REDIRECT_STATUS: u16 = 302;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub status: u16,
    /// Target year, `None` when no year exists.
    pub year: Option<String>,
}

impl Redirect {
    /// Absolute path to send the client to: `/<year>`, or `/` without a year.
    pub fn location(&self) -> String {
        match &self.year {
            Some(year) => format!("/{year}"),
            None => "/".to_string(),
        }
    }
}

pub fn latest_redirect(entries: &[RouteEntry]) -> Redirect {
    Redirect {
        status: REDIRECT_STATUS,
        year: entries.last().map(|e| e.year.clone()),
    }
}
