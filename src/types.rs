//! Shared types handed from discovery to whatever renders navigation.

use serde::{Deserialize, Serialize};

/// One discovered top-level route.
///
/// `components` is 0 unless component enrichment ran and found matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub year: String,
    #[serde(default)]
    pub components: usize,
}

impl RouteEntry {
    pub fn new(year: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            components: 0,
        }
    }

    pub fn with_components(year: impl Into<String>, components: usize) -> Self {
        Self {
            year: year.into(),
            components,
        }
    }
}

/// Layout data for the navigation template: every year, in discovery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavData {
    pub years: Vec<RouteEntry>,
}
