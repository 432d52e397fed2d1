//! # advent-routes
//!
//! Route discovery for a year-based advent challenge site. The site keeps one
//! route directory per year; this crate finds those years, counts the
//! components each year ships, and decides where the landing page redirects.
//!
//! # Data Flow
//!
//! ```text
//! ListingSource ─ list_paths(root) ─→ paths
//!     → drop [dynamic] and (group) paths
//!     → first segment below the root
//!     → de-duplicate (first-discovered order)
//!     → optional component counts
//!     → Vec<RouteEntry> ─→ navigation / latest_redirect
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`listing`] | `ListingSource` trait, directory walk and static module listings |
//! | [`routes`] | Year discovery and the page-marker walk |
//! | [`components`] | Per-year component counts |
//! | [`redirect`] | Landing redirect to the latest year |
//! | [`data`] | Typed, validated parsing of per-year JSON datasets |
//! | [`config`] | `advent.toml` loading and validation |
//! | [`types`] | `RouteEntry` and navigation data |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Injected Listings
//!
//! Discovery works on path strings handed over by a [`listing::ListingSource`].
//! A live walk ([`listing::FsListing`]) and a fixed list of module paths
//! ([`listing::StaticListing`]) go through the same reduction, and tests need no
//! filesystem unless they want one.
//!
//! ## Ordering Is Load-Bearing
//!
//! The landing redirect picks the last year. Discovery keeps listing order and
//! `FsListing` lists lexicographically, so numeric year names come out in
//! chronological order.

pub mod components;
pub mod config;
pub mod data;
pub mod listing;
pub mod output;
pub mod redirect;
pub mod routes;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
