//! Route discovery.
//!
//! Finds the top-level routes ("years") under a routes root. The site's routes
//! directory looks like this:
//!
//! ```text
//! src/routes/
//! ├── +layout.server.ts        # Root-level file: not a year
//! ├── +page.server.ts
//! ├── 2022/
//! │   └── +page.svelte         # → "2022"
//! ├── 2023/
//! │   ├── +page.server.ts      # → "2023"
//! │   ├── +page.svelte         # (already seen)
//! │   └── sub/+page.svelte     # (already seen: only the first segment counts)
//! ├── [slug]/+page.svelte      # Dynamic segment: excluded
//! └── (marketing)/about/...    # Route group: excluded
//! ```
//!
//! ## Rules
//!
//! - A path with `[` or `(` in any segment below the root is dropped whole.
//! - Every remaining file at least one directory deep contributes the first
//!   segment below the root, exactly as named on disk. Segments that are blank
//!   after trimming contribute nothing.
//! - Years are de-duplicated, keeping first-discovered order. The order of the
//!   listing is preserved otherwise; [`FsListing`](crate::listing::FsListing)
//!   lists lexicographically, so the last year is the most recent one.
//!
//! ## Missing Roots
//!
//! A routes root that is missing or unreadable is an error under
//! [`MissingRoot::Fail`]. Under [`MissingRoot::Empty`] it means "no years".
//! A missing components root under `Empty` leaves the years intact with
//! `components: 0`.
//!
//! [`discover_pages`] is the stricter page-marker walk: one entry per marker
//! file, named after its parent directory, without de-duplication. It exists
//! for diagnostics; navigation always uses [`discover_routes`].

use crate::components::count_components;
use crate::config::{MissingRoot, SiteConfig};
use crate::listing::{ListingError, ListingSource, normalize_root, relative_to};
use crate::types::RouteEntry;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),
}

impl DiscoveryError {
    /// True when a listing root is missing or unreadable.
    pub fn is_not_found(&self) -> bool {
        match self {
            DiscoveryError::Listing(e) => e.is_not_found(),
        }
    }
}

/// Where to look for routes and, optionally, components to count.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryOptions {
    pub routes_root: String,
    /// When set, each entry's `components` is filled from this root.
    pub components_root: Option<String>,
    pub on_missing_root: MissingRoot,
}

impl DiscoveryOptions {
    pub fn new(routes_root: impl Into<String>) -> Self {
        Self {
            routes_root: routes_root.into(),
            components_root: None,
            on_missing_root: MissingRoot::Fail,
        }
    }

    pub fn with_components(mut self, components_root: impl Into<String>) -> Self {
        self.components_root = Some(components_root.into());
        self
    }

    pub fn on_missing_root(mut self, policy: MissingRoot) -> Self {
        self.on_missing_root = policy;
        self
    }

    pub fn from_config(config: &SiteConfig, enrich: bool) -> Self {
        let options = Self::new(&config.routes_root).on_missing_root(config.on_missing_root);
        if enrich {
            options.with_components(&config.components_root)
        } else {
            options
        }
    }
}

/// Discover all top-level routes, optionally counting components per route.
pub fn discover_routes(
    source: &impl ListingSource,
    options: &DiscoveryOptions,
) -> Result<Vec<RouteEntry>, DiscoveryError> {
    let Some(paths) = list_or_skip(source, &options.routes_root, options.on_missing_root)? else {
        return Ok(Vec::new());
    };
    let years = route_years(&paths, &options.routes_root);

    let component_paths = match &options.components_root {
        Some(root) => list_or_skip(source, root, options.on_missing_root)?.map(|p| (root, p)),
        None => None,
    };
    let entries = match component_paths {
        Some((root, component_paths)) => count_components(&years, &component_paths, root),
        None => years.into_iter().map(RouteEntry::new).collect(),
    };

    tracing::info!(
        root = %options.routes_root,
        files = paths.len(),
        routes = entries.len(),
        "discovered routes"
    );
    Ok(entries)
}

/// Reduce a listing to its unique top-level route segments.
pub fn route_years(paths: &[String], root: &str) -> Vec<String> {
    let root = normalize_root(root);
    let mut seen = HashSet::new();
    let mut years = Vec::new();

    for path in paths {
        let Some(rel) = relative_to(path, &root) else {
            continue;
        };
        let segments: Vec<&str> = rel.split('/').collect();
        if has_special_segment(&segments) {
            tracing::debug!(path = %path, "skipping dynamic or grouped route");
            continue;
        }
        // Files directly in the root are layouts and loaders, not routes
        if segments.len() < 2 {
            continue;
        }
        let year = segments[0];
        if year.trim().is_empty() {
            continue;
        }
        if seen.insert(year) {
            years.push(year.to_string());
        }
    }

    years
}

/// One entry per page-marker file, named after the marker's parent directory.
///
/// Unlike [`discover_routes`], nested pages report their own directory and
/// repeated names are kept.
pub fn discover_pages(
    source: &impl ListingSource,
    root: &str,
    marker: &str,
    on_missing_root: MissingRoot,
) -> Result<Vec<RouteEntry>, DiscoveryError> {
    let paths = list_or_skip(source, root, on_missing_root)?.unwrap_or_default();
    Ok(page_routes(&paths, root, marker))
}

/// List `root`, turning a missing root into `None` under [`MissingRoot::Empty`].
fn list_or_skip(
    source: &impl ListingSource,
    root: &str,
    policy: MissingRoot,
) -> Result<Option<Vec<String>>, DiscoveryError> {
    match source.list_paths(root) {
        Ok(paths) => Ok(Some(paths)),
        Err(e) if e.is_not_found() && policy == MissingRoot::Empty => {
            tracing::warn!("{e}; treating it as empty");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Pure half of [`discover_pages`].
pub fn page_routes(paths: &[String], root: &str, marker: &str) -> Vec<RouteEntry> {
    let root = normalize_root(root);
    paths
        .iter()
        .filter_map(|path| relative_to(path, &root))
        .filter_map(|rel| {
            let segments: Vec<&str> = rel.split('/').collect();
            if has_special_segment(&segments) {
                return None;
            }
            match segments.as_slice() {
                [.., parent, file] if *file == marker => {
                    (!parent.trim().is_empty()).then(|| RouteEntry::new(*parent))
                }
                _ => None,
            }
        })
        .collect()
}

/// `[` marks a dynamic parameter, `(` a route group.
fn is_special_segment(segment: &str) -> bool {
    segment.contains('[') || segment.contains('(')
}

fn has_special_segment(segments: &[&str]) -> bool {
    segments.iter().any(|s| is_special_segment(s))
}
