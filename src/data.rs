//! Per-year challenge data.
//!
//! Each year page loads JSON datasets published at a fixed endpoint:
//!
//! ```text
//! https://advent.sveltesociety.dev/data/2023/day-one.json    → [Kid]
//! https://advent.sveltesociety.dev/data/2023/day-three.json  → [Present]
//! ```
//!
//! This module owns the parsing boundary. Payloads are deserialized into typed
//! records and every record is validated before anything downstream sees it, so
//! a malformed payload is a [`DataError`] instead of a half-filled page. It does
//! not fetch over HTTP; [`load_year`] reads a local mirror with the same layout
//! as the endpoint (`<dir>/<year>/<dataset>.json`).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://advent.sveltesociety.dev/data";

/// Dataset holding the naughty/nice tallies.
pub const KIDS_DATASET: &str = "day-one";
/// Dataset holding present weights.
pub const PRESENTS_DATASET: &str = "day-three";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid record {index}: {reason}")]
    Invalid { index: usize, reason: String },
}

/// A typed dataset row with its own validity rules.
pub trait Record: DeserializeOwned {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kid {
    pub name: String,
    pub tally: i64,
}

impl Record for Kid {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("kid name must not be empty".into());
        }
        if self.tally < 0 {
            return Err(format!("tally for {} must not be negative", self.name));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Present {
    pub name: String,
    pub weight: f64,
}

impl Record for Present {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("present name must not be empty".into());
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(format!(
                "weight for {} must be a non-negative number",
                self.name
            ));
        }
        Ok(())
    }
}

/// Everything a year page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearData {
    pub kids: Vec<Kid>,
    pub presents: Vec<Present>,
}

/// Remote location of a dataset: `<base>/<year>/<dataset>.json`.
pub fn dataset_url(base: &str, year: &str, dataset: &str) -> String {
    format!("{}/{year}/{dataset}.json", base.trim_end_matches('/'))
}

/// Local mirror location of a dataset: `<dir>/<year>/<dataset>.json`.
pub fn dataset_path(dir: &Path, year: &str, dataset: &str) -> PathBuf {
    dir.join(year).join(format!("{dataset}.json"))
}

/// Deserialize a JSON array and validate every record.
pub fn parse_records<T: Record>(json: &str) -> Result<Vec<T>, DataError> {
    let records: Vec<T> = serde_json::from_str(json)?;
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|reason| DataError::Invalid { index, reason })?;
    }
    Ok(records)
}

/// Read and parse one dataset from a local mirror.
pub fn load_dataset<T: Record>(dir: &Path, year: &str, dataset: &str) -> Result<Vec<T>, DataError> {
    let path = dataset_path(dir, year, dataset);
    let content = fs::read_to_string(&path).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;
    let records = parse_records(&content)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

/// Load the kids and presents datasets for a year.
pub fn load_year(dir: &Path, year: &str) -> Result<YearData, DataError> {
    Ok(YearData {
        kids: load_dataset(dir, year, KIDS_DATASET)?,
        presents: load_dataset(dir, year, PRESENTS_DATASET)?,
    })
}
