//! Configuration management for `bench_compare`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI flags
//! 2. Environment variables (resolved by clap into the same fields)
//! 3. Explicit config file (`--config`)
//! 4. Project config (`.bench-compare.yaml` in the working directory)
//! 5. Defaults
//!
//! With no configuration at all the defaults reproduce the reference report.

use crate::error::{CompareError, Result};
use crate::stats::DEFAULT_SAMPLE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project config filename looked up in the working directory.
pub const PROJECT_CONFIG_FILENAME: &str = ".bench-compare.yaml";

/// CPU change (in percent) a benchmark must improve by to be listed.
pub const DEFAULT_MIN_IMPROVEMENT_PCT: f64 = 2.0;

/// Settings for one comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompareConfig {
    /// Assumed repetitions behind each mean.
    pub sample_size: u32,
    /// A row counts as an improvement when its CPU change is below
    /// `-min_improvement_pct`.
    pub min_improvement_pct: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            min_improvement_pct: DEFAULT_MIN_IMPROVEMENT_PCT,
        }
    }
}

/// Partial settings read from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub sample_size: Option<u32>,
    pub min_improvement_pct: Option<f64>,
}

impl ConfigLayer {
    /// Parse a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| CompareError::io(path, e))?;
        Self::from_yaml(&contents, path)
    }

    fn from_yaml(contents: &str, path: &Path) -> Result<Self> {
        // An empty YAML document deserializes to unit, not a map.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|source| CompareError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_to(&self, config: &mut CompareConfig) {
        if let Some(n) = self.sample_size {
            config.sample_size = n;
        }
        if let Some(pct) = self.min_improvement_pct {
            config.min_improvement_pct = pct;
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub sample_size: Option<u32>,
    pub min_improvement_pct: Option<f64>,
}

/// Resolve the effective configuration.
///
/// `project_dir` is searched for [`PROJECT_CONFIG_FILENAME`]; pass `None`
/// to skip project config.
///
/// # Errors
///
/// Returns an error if a config file is unreadable or malformed, or if the
/// resolved values are out of range.
pub fn load_config(cli: &CliOverrides, project_dir: Option<&Path>) -> Result<CompareConfig> {
    let mut config = CompareConfig::default();

    if let Some(dir) = project_dir {
        let path = dir.join(PROJECT_CONFIG_FILENAME);
        if path.is_file() {
            debug!(path = %path.display(), "Applying project config");
            ConfigLayer::load(&path)?.apply_to(&mut config);
        }
    }

    if let Some(path) = &cli.config_path {
        debug!(path = %path.display(), "Applying config file");
        ConfigLayer::load(path)
            .map_err(|e| match e {
                CompareError::Io { path, source } => CompareError::Config(format!(
                    "cannot read config '{}': {source}",
                    path.display()
                )),
                other => other,
            })?
            .apply_to(&mut config);
    }

    ConfigLayer {
        sample_size: cli.sample_size,
        min_improvement_pct: cli.min_improvement_pct,
    }
    .apply_to(&mut config);

    validate(&config)?;
    debug!(?config, "Resolved configuration");
    Ok(config)
}

fn validate(config: &CompareConfig) -> Result<()> {
    if config.sample_size == 0 {
        return Err(CompareError::Config(
            "sample_size must be at least 1".to_string(),
        ));
    }
    if !config.min_improvement_pct.is_finite() || config.min_improvement_pct < 0.0 {
        return Err(CompareError::Config(format!(
            "min_improvement_pct must be a non-negative number, got {}",
            config.min_improvement_pct
        )));
    }
    Ok(())
}
