//! Per-year component counts.
//!
//! Components live in a separate tree, grouped by year one level above the
//! file:
//!
//! ```text
//! src/lib/components/
//! ├── Snow.svelte                  # Shared: no year directory
//! └── days/
//!     ├── 2023/
//!     │   ├── DayOne.svelte        # counts for 2023
//!     │   └── DayThree.svelte      # counts for 2023
//!     └── 2024/
//!         └── DayOne.svelte        # counts for 2024
//! ```
//!
//! An entry belongs to a year when its parent directory is named exactly like
//! the year. Entries too shallow to have a parent directory (files at the
//! components root) fall back to a substring match, so `Wreath2023.svelte`
//! still counts for 2023.

use crate::listing::{normalize_root, relative_to};
use crate::types::RouteEntry;

/// Pair every year with the number of matching component paths.
///
/// Paths are made relative to `root` when they sit below it and used as-is
/// otherwise. Years without matches get `components: 0`.
pub fn count_components(years: &[String], paths: &[String], root: &str) -> Vec<RouteEntry> {
    let root = normalize_root(root);
    let relative: Vec<&str> = paths
        .iter()
        .map(|p| relative_to(p, &root).unwrap_or(p.as_str()))
        .collect();

    years
        .iter()
        .map(|year| {
            let count = relative.iter().filter(|p| belongs_to(p, year)).count();
            RouteEntry::with_components(year.as_str(), count)
        })
        .collect()
}

fn belongs_to(path: &str, year: &str) -> bool {
    let segments: Vec<&str> = path.split('/').collect();
    match segments.as_slice() {
        [.., parent, _] => *parent == year,
        _ => path.contains(year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::paths;

    fn counts(entries: &[RouteEntry]) -> Vec<(&str, usize)> {
        entries
            .iter()
            .map(|e| (e.year.as_str(), e.components))
            .collect()
    }

    #[test]
    fn counts_by_parent_directory() {
        let years = paths(&["2023", "2024"]);
        let listing = paths(&["days/2023/one", "days/2023/two", "days/2024/one"]);
        let entries = count_components(&years, &listing, "");
        assert_eq!(counts(&entries), vec![("2023", 2), ("2024", 1)]);
    }

    #[test]
    fn year_without_matches_is_zero() {
        let years = paths(&["2022", "2023"]);
        let listing = paths(&["days/2023/one"]);
        let entries = count_components(&years, &listing, "");
        assert_eq!(counts(&entries), vec![("2022", 0), ("2023", 1)]);
    }

    #[test]
    fn exact_match_beats_substring() {
        // "12023" contains "2023" but is not the parent directory name
        let years = paths(&["2023"]);
        let listing = paths(&["days/12023/one", "2023/archive/one"]);
        let entries = count_components(&years, &listing, "");
        assert_eq!(counts(&entries), vec![("2023", 0)]);
    }

    #[test]
    fn root_level_files_fall_back_to_substring() {
        let years = paths(&["2023", "2024"]);
        let listing = paths(&[
            "src/lib/components/Wreath2023.svelte",
            "src/lib/components/Snow.svelte",
        ]);
        let entries = count_components(&years, &listing, "src/lib/components");
        assert_eq!(counts(&entries), vec![("2023", 1), ("2024", 0)]);
    }

    #[test]
    fn paths_made_relative_to_root() {
        let years = paths(&["components"]);
        // Relative to the root, "Snow.svelte" has no parent directory
        let listing = paths(&["src/lib/components/Snow.svelte"]);
        let entries = count_components(&years, &listing, "src/lib/components/");
        assert_eq!(counts(&entries), vec![("components", 0)]);
    }

    #[test]
    fn no_years_no_entries() {
        let listing = paths(&["days/2023/one"]);
        assert!(count_components(&[], &listing, "").is_empty());
    }
}
