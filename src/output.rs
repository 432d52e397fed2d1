//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Routes
//!
//! ```text
//! Years
//! 001 2022 (1 component)
//! 002 2023 (3 components)
//!
//! Redirect
//!     302 → /2023
//! ```
//!
//! ## Pages
//!
//! ```text
//! Pages
//! 001 2022
//! 002 2023
//! 003 day-one
//! ```
//!
//! ## Data
//!
//! ```text
//! 2023
//!     Kids (2)
//!         001 Ava: 3
//!     Presents (1)
//!         001 Sled: 12.5
//! ```
//!
//! # Architecture
//!
//! Every command renders through a `format_*` function that builds the lines
//! and a thin `print_*` wrapper around it. Only the wrappers touch stdout.

use crate::data::{KIDS_DATASET, PRESENTS_DATASET, YearData, dataset_url};
use crate::redirect::Redirect;
use crate::types::RouteEntry;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entry header: positional index + name, with optional count.
///
/// ```text
/// 001 2023 (3 components)
/// 001 2023
/// ```
fn entry_header(index: usize, name: &str, components: Option<usize>) -> String {
    match components {
        Some(1) => format!("{} {} (1 component)", format_index(index), name),
        Some(n) => format!("{} {} ({} components)", format_index(index), name, n),
        None => format!("{} {}", format_index(index), name),
    }
}

fn push_entries(lines: &mut Vec<String>, entries: &[RouteEntry], with_counts: bool) {
    if entries.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        let count = with_counts.then_some(entry.components);
        lines.push(entry_header(i + 1, &entry.year, count));
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Format discovered years followed by the landing redirect.
pub fn format_routes_output(
    entries: &[RouteEntry],
    with_counts: bool,
    redirect: &Redirect,
) -> Vec<String> {
    let mut lines = vec!["Years".to_string()];
    push_entries(&mut lines, entries, with_counts);
    lines.push(String::new());
    lines.push("Redirect".to_string());
    lines.push(format!("{}{}", indent(1), format_redirect(redirect)));
    lines
}

pub fn print_routes_output(entries: &[RouteEntry], with_counts: bool, redirect: &Redirect) {
    for line in format_routes_output(entries, with_counts, redirect) {
        println!("{}", line);
    }
}

/// `302 → /2023`
pub fn format_redirect(redirect: &Redirect) -> String {
    format!("{} → {}", redirect.status, redirect.location())
}

// ============================================================================
// Pages
// ============================================================================

pub fn format_pages_output(entries: &[RouteEntry]) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    push_entries(&mut lines, entries, false);
    lines
}

pub fn print_pages_output(entries: &[RouteEntry]) {
    for line in format_pages_output(entries) {
        println!("{}", line);
    }
}

// ============================================================================
// Year data
// ============================================================================

pub fn format_year_data(year: &str, data: &YearData) -> Vec<String> {
    let mut lines = vec![year.to_string()];

    lines.push(format!("{}Kids ({})", indent(1), data.kids.len()));
    for (i, kid) in data.kids.iter().enumerate() {
        lines.push(format!(
            "{}{} {}: {}",
            indent(2),
            format_index(i + 1),
            kid.name,
            kid.tally
        ));
    }

    lines.push(format!("{}Presents ({})", indent(1), data.presents.len()));
    for (i, present) in data.presents.iter().enumerate() {
        lines.push(format!(
            "{}{} {}: {}",
            indent(2),
            format_index(i + 1),
            present.name,
            present.weight
        ));
    }

    lines
}

pub fn print_year_data(year: &str, data: &YearData) {
    for line in format_year_data(year, data) {
        println!("{}", line);
    }
}

/// Remote URLs of every dataset a year page loads.
pub fn format_dataset_urls(base_url: &str, year: &str) -> Vec<String> {
    [KIDS_DATASET, PRESENTS_DATASET]
        .iter()
        .map(|dataset| dataset_url(base_url, year, dataset))
        .collect()
}

pub fn print_dataset_urls(base_url: &str, year: &str) {
    for line in format_dataset_urls(base_url, year) {
        println!("{}", line);
    }
}
