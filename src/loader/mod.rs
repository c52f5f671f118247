//! Benchmark result file loading.
//!
//! Input is a Google Benchmark JSON document:
//!
//! ```json
//! {
//!   "context": { ... },
//!   "benchmarks": [
//!     { "name": "BM_Parse_mean", "real_time": 120.4, "cpu_time": 119.8, ... }
//!   ]
//! }
//! ```
//!
//! Only `benchmarks[].name`, `real_time` and `cpu_time` are read; everything
//! else is ignored.

use crate::error::{CompareError, Result};
use crate::model::MeasurementRecord;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load every measurement record from a benchmark JSON file.
///
/// The file handle is held only for the duration of the read.
///
/// # Errors
///
/// - `Io` if the file cannot be opened or read
/// - `Parse` if the contents are not well-formed JSON
/// - `MissingBenchmarks` if there is no top-level `benchmarks` array
/// - `InvalidRecord` if a record lacks a string `name` or has non-numeric timings
pub fn load_benchmark_file(path: &Path) -> Result<Vec<MeasurementRecord>> {
    debug!(path = %path.display(), "Reading benchmark file");
    let contents = fs::read_to_string(path).map_err(|e| CompareError::io(path, e))?;
    let records = parse_benchmark_document(&contents, path)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "Loaded benchmark records"
    );
    Ok(records)
}

/// Parse the text of a benchmark document.
///
/// `origin` is only used to label errors.
///
/// # Errors
///
/// Same as [`load_benchmark_file`], minus `Io`.
pub fn parse_benchmark_document(contents: &str, origin: &Path) -> Result<Vec<MeasurementRecord>> {
    let document: Value = serde_json::from_str(contents).map_err(|source| CompareError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    let entries = document
        .get("benchmarks")
        .and_then(Value::as_array)
        .ok_or_else(|| CompareError::MissingBenchmarks {
            path: origin.to_path_buf(),
        })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            MeasurementRecord::deserialize(entry).map_err(|e| CompareError::InvalidRecord {
                path: origin.to_path_buf(),
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
