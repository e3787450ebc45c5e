//! `regscan.toml` run configuration.
//!
//! ```toml
//! as_of = "2026-01-01"
//!
//! [tables]
//! master = "data/bridge/yakga_ingredient_master.csv"
//! secondary = "data/bridge/atc_mapping.csv"
//! reimbursement = "data/hira/drug_prices.json"
//!
//! [inputs]
//! statuses = "data/global_statuses.json"
//! trials = "data/cris_trials.json"
//!
//! [scoring]
//! reimbursed_atc_prefixes = ["L01", "A10", "C09"]
//! high_cost_threshold = 1000000
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StandardsError};

pub const DEFAULT_CONFIG_FILE: &str = "regscan.toml";

fn default_high_cost_threshold() -> f64 {
    1_000_000.0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Reference date for elapsed-time notes.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default)]
    pub tables: TablePaths,
    #[serde(default)]
    pub inputs: InputPaths,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablePaths {
    #[serde(default)]
    pub master: Option<PathBuf>,
    #[serde(default)]
    pub secondary: Option<PathBuf>,
    #[serde(default)]
    pub reimbursement: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputPaths {
    #[serde(default)]
    pub statuses: Option<PathBuf>,
    #[serde(default)]
    pub trials: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Three-character ATC prefixes with domestic reimbursement.
    #[serde(default)]
    pub reimbursed_atc_prefixes: Vec<String>,
    /// Price ceiling (KRW) above which an ingredient is noted as high cost.
    #[serde(default = "default_high_cost_threshold")]
    pub high_cost_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            reimbursed_atc_prefixes: Vec::new(),
            high_cost_threshold: default_high_cost_threshold(),
        }
    }
}

impl ScanConfig {
    /// Read, validate and resolve a config file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StandardsError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let mut config: Self = toml::from_str(&contents).map_err(|e| StandardsError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Load `path` when given, else `regscan.toml` in the working directory
    /// if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.scoring.high_cost_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(StandardsError::InvalidConfig {
                message: format!("scoring.high_cost_threshold must be a non-negative number, got {threshold}"),
            });
        }
        if let Some(prefix) = self
            .scoring
            .reimbursed_atc_prefixes
            .iter()
            .find(|prefix| prefix.trim().chars().count() != 3)
        {
            return Err(StandardsError::InvalidConfig {
                message: format!("ATC prefix '{prefix}' must be exactly 3 characters"),
            });
        }
        Ok(())
    }

    /// Make every relative path absolute against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.tables.master,
            &mut self.tables.secondary,
            &mut self.tables.reimbursement,
            &mut self.inputs.statuses,
            &mut self.inputs.trials,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
