//! CLI definitions and entry point.

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

/// Usage line printed on invalid invocation.
pub const USAGE: &str = "Usage: bench-compare baseline.json optimized.json";

/// Compare two Google Benchmark JSON runs and flag significant CPU changes
#[derive(Parser, Debug)]
#[command(name = "bench-compare", author, version, about, long_about = None)]
pub struct Cli {
    /// Benchmark results of the reference build
    pub baseline_file: PathBuf,

    /// Benchmark results of the build under test
    pub optimized_file: PathBuf,

    /// YAML settings file
    #[arg(long, env = "BENCH_COMPARE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Assumed repetitions behind each mean [default: 20]
    #[arg(long, env = "BENCH_COMPARE_SAMPLE_SIZE")]
    pub sample_size: Option<u32>,

    /// Minimum CPU improvement, in percent, to list a benchmark [default: 2.0]
    #[arg(long = "min-improvement", env = "BENCH_COMPARE_MIN_IMPROVEMENT")]
    pub min_improvement_pct: Option<f64>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Settings supplied on the command line or through the environment.
    #[must_use]
    pub fn overrides(&self) -> crate::config::CliOverrides {
        crate::config::CliOverrides {
            config_path: self.config.clone(),
            sample_size: self.sample_size,
            min_improvement_pct: self.min_improvement_pct,
        }
    }
}
