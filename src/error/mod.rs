//! Error types and handling for `bench_compare`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Every failure aborts the comparison; there is no partial report
//! - Usage errors are the only kind rendered as a plain usage message
//! - [`StructuredError`] maps each variant to a stable code, exit code and hint

mod structured;

pub use structured::{ErrorCode, StructuredError};

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for `bench_compare` operations.
#[derive(Error, Debug)]
pub enum CompareError {
    // === Invocation ===
    /// Wrong arguments on the command line.
    #[error("Invalid usage: {detail}")]
    Usage { detail: String },

    // === Input Errors ===
    /// A benchmark file could not be opened or read.
    #[error("Cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A benchmark file is not well-formed JSON.
    #[error("Cannot parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document has no `benchmarks` array.
    #[error("'{}' has no 'benchmarks' array", .path.display())]
    MissingBenchmarks { path: PathBuf },

    /// A measurement record is malformed (e.g. lacks `name`).
    #[error("'{}': benchmark record #{index} is invalid: {reason}", .path.display())]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        reason: String,
    },

    // === Comparison Errors ===
    /// A baseline mean is exactly zero, so no percentage change exists.
    #[error("Baseline {metric} for '{benchmark}' is zero; percentage change is undefined")]
    ZeroBaseline {
        benchmark: String,
        metric: &'static str,
    },

    // === Configuration Errors ===
    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed.
    #[error("Cannot parse config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    // === Output Errors ===
    /// Writing the report to standard output failed.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl CompareError {
    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("Check the path to the benchmark result file")
            }
            Self::Parse { .. } | Self::MissingBenchmarks { .. } => Some(
                "Produce input with --benchmark_out=<file> --benchmark_out_format=json",
            ),
            Self::InvalidRecord { .. } => Some("Every benchmark record needs a string 'name'"),
            Self::ZeroBaseline { .. } => {
                Some("Re-run the baseline; a zero mean cannot serve as a reference")
            }
            Self::ConfigParse { .. } => {
                Some("Valid config keys: sample_size, min_improvement_pct")
            }
            _ => None,
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        StructuredError::from_error(self).code.exit_code()
    }

    /// Build an I/O error bound to the file being read.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type using `CompareError`.
pub type Result<T> = std::result::Result<T, CompareError>;
