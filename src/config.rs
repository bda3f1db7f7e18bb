//! Configuration resolution and management
//!
//! The ledger lives in a single per-user directory, `~/.tally` by default,
//! overridable with `--dir` or the `TALLY_DIR` environment variable. An
//! optional `config.toml` inside that directory supplies defaults such as
//! the report window. Everything is resolved once at startup into a
//! `Config` value that operations receive by reference; there is no
//! process-wide mutable state.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Directory under the home directory that holds the ledger
pub const DEFAULT_DIR_NAME: &str = ".tally";

/// Name of the store file inside the ledger directory
pub const TASK_FILE: &str = "tasks.json";

/// Name of the optional config file inside the ledger directory
pub const CONFIG_FILE: &str = "config.toml";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Ledger directory
    pub data_dir: PathBuf,
    /// Store file inside the ledger directory
    pub task_file: PathBuf,
    /// Default report window in days
    pub report_days: i64,
}

impl Config {
    /// Resolve configuration from an optional directory override
    ///
    /// Reads `config.toml` from the ledger directory when present; a
    /// missing file yields defaults, a malformed or invalid one is an
    /// error.
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let file = FileConfig::load(&data_dir.join(CONFIG_FILE))?;
        Ok(Self {
            task_file: data_dir.join(TASK_FILE),
            report_days: file.report.days,
            data_dir,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let base = BaseDirs::new()
        .ok_or_else(|| Error::InvalidConfig("could not determine home directory".to_string()))?;
    Ok(base.home_dir().join(DEFAULT_DIR_NAME))
}

/// On-disk contents of `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Report configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Days to look back when no `-d` flag is given
    #[serde(default = "default_report_days")]
    pub days: i64,
}

fn default_report_days() -> i64 {
    7
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            days: default_report_days(),
        }
    }
}

impl FileConfig {
    /// Load a config file, or defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.report.days < 1 {
            return Err(Error::InvalidConfig(
                "report.days must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
