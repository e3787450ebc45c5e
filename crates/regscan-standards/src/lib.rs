//! Reference table loaders and run configuration.
//!
//! Reads the registry exports the ingredient bridge is built from (ingredient
//! master, ATC mapping, HIRA price list) plus the parsed approval statuses and
//! clinical trials fed to the analyzer.

pub mod config;
pub mod csv_utils;
pub mod error;
pub mod loaders;

pub use config::{DEFAULT_CONFIG_FILE, InputPaths, ScanConfig, ScoringConfig, TablePaths};
pub use error::{Result, StandardsError};
pub use loaders::{
    load_master_table, load_reference_tables, load_reimbursement_table, load_secondary_table,
    load_statuses, load_trials,
};
