//! `bench_compare` - compare two Google Benchmark runs.
//!
//! The pipeline is strictly linear:
//!
//! 1. [`loader`] reads a benchmark JSON document into measurement records.
//! 2. [`aggregate`] groups records into one statistics bundle per logical name.
//! 3. [`report`] joins baseline and optimized bundles, computing percentage
//!    changes and a significance estimate from [`stats`].
//! 4. [`format`] renders the comparison table, legend and summary.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod logging;
pub mod model;
pub mod report;
pub mod stats;

pub use error::{CompareError, ErrorCode, Result, StructuredError};
