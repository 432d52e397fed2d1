//! File listing sources.
//!
//! Discovery never touches the filesystem directly. It asks a [`ListingSource`]
//! for the paths under a root and works on plain strings from there, so the same
//! reduction runs against a live directory walk or a fixed list of module paths
//! known at build time.
//!
//! ## Path Format
//!
//! Every source returns `/`-separated paths that start with the root they were
//! asked about, in the order the source discovered them:
//!
//! ```text
//! list_paths("src/routes")
//!   src/routes/+layout.server.ts
//!   src/routes/2022/+page.svelte
//!   src/routes/2023/+page.server.ts
//!   src/routes/2023/+page.svelte
//! ```
//!
//! Only files are listed; directories show up implicitly through the files
//! inside them.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// `NotFound` covers both a missing root and one that cannot be read.
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Listing root not found: {0}")]
    NotFound(PathBuf),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ListingError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ListingError::NotFound(_))
    }
}

/// Anything that can enumerate the file paths under a root.
pub trait ListingSource {
    fn list_paths(&self, root: &str) -> Result<Vec<String>, ListingError>;
}

/// Recursive walk of a directory tree on disk.
///
/// Roots are resolved against `base` (the project directory). Entries are
/// sorted by file name at every level, which yields paths in ascending
/// lexicographic order. Hidden entries (dot-prefixed) are skipped.
#[derive(Debug, Clone)]
pub struct FsListing {
    base: PathBuf,
}

impl FsListing {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl ListingSource for FsListing {
    fn list_paths(&self, root: &str) -> Result<Vec<String>, ListingError> {
        let root_dir = self.base.join(root);
        if !root_dir.is_dir() {
            return Err(ListingError::NotFound(root_dir));
        }

        let prefix = normalize_root(root);
        let mut paths = Vec::new();
        let walker = WalkDir::new(&root_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself could not be read
                Err(e) if e.depth() == 0 => {
                    tracing::debug!(root = %root_dir.display(), error = %e, "unreadable listing root");
                    return Err(ListingError::NotFound(root_dir.clone()));
                }
                Err(e) => return Err(e.into()),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            // walkdir only yields paths below root_dir
            let Ok(rel) = entry.path().strip_prefix(&root_dir) else {
                continue;
            };
            let rel = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            paths.push(join_root(&prefix, &rel));
        }

        tracing::debug!(root = %root_dir.display(), files = paths.len(), "walked listing root");
        Ok(paths)
    }
}

/// A fixed set of module paths, the way a bundler's glob import sees them.
///
/// `list_paths` returns the known paths that sit below `root`, in insertion
/// order. A root with no matches is an empty listing, not an error: a glob that
/// matches nothing is still a valid glob.
#[derive(Debug, Clone, Default)]
pub struct StaticListing {
    paths: Vec<String>,
}

impl StaticListing {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl ListingSource for StaticListing {
    fn list_paths(&self, root: &str) -> Result<Vec<String>, ListingError> {
        let prefix = normalize_root(root);
        Ok(self
            .paths
            .iter()
            .filter(|p| relative_to(p, &prefix).is_some())
            .cloned()
            .collect())
    }
}

/// Strip a trailing `/` and turn `\` into `/` so roots compare as strings.
pub fn normalize_root(root: &str) -> String {
    let root = root.replace('\\', "/");
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() && root.starts_with('/') {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Return the part of `path` below `root`, without the leading `/`.
///
/// `None` when `path` is not under `root`. An empty root matches every path
/// as-is (minus any leading `/`).
pub fn relative_to<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    if root.is_empty() {
        return Some(path.trim_start_matches('/'));
    }
    if root == "/" {
        return path.strip_prefix('/');
    }
    let rest = path.strip_prefix(root)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

fn join_root(root: &str, rel: &str) -> String {
    match root {
        "" => rel.to_string(),
        "/" => format!("/{rel}"),
        _ => format!("{root}/{rel}"),
    }
}
