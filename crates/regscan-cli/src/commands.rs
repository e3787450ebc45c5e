use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use regscan_cli::run::{AnalysisReport, run_analysis, run_lookup};
use regscan_model::MatchResult;
use regscan_standards::ScanConfig;
use tracing::info;

use crate::cli::{AnalyzeArgs, LookupArgs, TableArgs};

pub fn run_analyze(config_path: Option<&Path>, args: &AnalyzeArgs) -> Result<AnalysisReport> {
    let mut config = ScanConfig::discover(config_path).context("load config")?;
    apply_table_overrides(&mut config, &args.tables);
    if let Some(path) = &args.statuses {
        config.inputs.statuses = Some(path.clone());
    }
    if let Some(path) = &args.trials {
        config.inputs.trials = Some(path.clone());
    }
    if !args.atc_prefixes.is_empty() {
        config.scoring.reimbursed_atc_prefixes = args.atc_prefixes.clone();
    }
    if let Some(as_of) = args.as_of {
        config.as_of = Some(as_of);
    }
    if let Some(threshold) = args.high_cost_threshold {
        config.scoring.high_cost_threshold = threshold;
    }
    config.validate().context("validate config")?;

    let report = run_analysis(&config, Local::now().date_naive())?;

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote analysis report");
    }
    Ok(report)
}

pub fn run_lookup_command(config_path: Option<&Path>, args: &LookupArgs) -> Result<Vec<MatchResult>> {
    let mut config = ScanConfig::discover(config_path).context("load config")?;
    apply_table_overrides(&mut config, &args.tables);
    run_lookup(&config, &args.names)
}

fn apply_table_overrides(config: &mut ScanConfig, tables: &TableArgs) {
    if let Some(path) = &tables.master {
        config.tables.master = Some(path.clone());
    }
    if let Some(path) = &tables.secondary {
        config.tables.secondary = Some(path.clone());
    }
    if let Some(path) = &tables.reimbursement {
        config.tables.reimbursement = Some(path.clone());
    }
}
