//! Config-driven runs shared by the `analyze` and `lookup` commands.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use regscan_map::{BridgeStats, IngredientBridge};
use regscan_model::{DomesticImpact, MatchResult};
use regscan_scan::{BatchSummary, DomesticImpactAnalyzer, KoreaRelevanceScorer};
use regscan_standards::{ScanConfig, load_reference_tables, load_statuses, load_trials};
use serde::Serialize;
use tracing::{info, info_span};

/// Output of one `analyze` run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub as_of: NaiveDate,
    pub bridge: BridgeStats,
    pub summary: BatchSummary,
    pub impacts: Vec<DomesticImpact>,
    /// INNs of imminent ingredients, highest global score first.
    pub imminent: Vec<String>,
    /// INNs of reimbursed ingredients above the high-cost threshold.
    pub high_value: Vec<String>,
}

/// Load the reference tables named in `config` into a fresh bridge.
pub fn build_bridge(config: &ScanConfig) -> Result<Arc<IngredientBridge>> {
    let tables = load_reference_tables(&config.tables).context("load reference tables")?;
    Ok(Arc::new(IngredientBridge::from_tables(&tables)))
}

/// Run a full domestic impact analysis.
///
/// Elapsed-time notes are computed against `config.as_of`, or `today` when
/// the config has no date.
pub fn run_analysis(config: &ScanConfig, today: NaiveDate) -> Result<AnalysisReport> {
    let span = info_span!("analysis");
    let _guard = span.enter();

    let statuses_path = config
        .inputs
        .statuses
        .as_deref()
        .ok_or_else(|| anyhow!("no statuses file given (set inputs.statuses or pass STATUSES)"))?;
    let statuses = load_statuses(statuses_path).context("load approval statuses")?;

    let bridge = build_bridge(config)?;
    let as_of = config.as_of.unwrap_or(today);

    let mut analyzer = DomesticImpactAnalyzer::new()
        .with_bridge(Arc::clone(&bridge))
        .with_scorer(KoreaRelevanceScorer::new(
            &config.scoring.reimbursed_atc_prefixes,
        ))
        .with_as_of(as_of)
        .with_high_cost_threshold(config.scoring.high_cost_threshold);

    if let Some(path) = config.inputs.trials.as_deref() {
        let trials = load_trials(path).context("load clinical trials")?;
        analyzer.load_trials(&trials);
    }

    let impacts = analyzer.analyze_batch(&statuses).to_vec();
    let summary = analyzer.summary();
    let imminent = analyzer
        .imminent_drugs()
        .into_iter()
        .map(|impact| impact.inn.clone())
        .collect();
    let high_value = analyzer
        .high_value_reimbursed(config.scoring.high_cost_threshold)
        .into_iter()
        .map(|impact| impact.inn.clone())
        .collect();

    info!(
        total = summary.total,
        reimbursed = summary.reimbursed_count,
        "analysis finished"
    );

    Ok(AnalysisReport {
        as_of,
        bridge: bridge.stats(),
        summary,
        impacts,
        imminent,
        high_value,
    })
}

/// Resolve names against the reference tables named in `config`.
pub fn run_lookup<S: AsRef<str>>(config: &ScanConfig, names: &[S]) -> Result<Vec<MatchResult>> {
    let bridge = build_bridge(config)?;
    bridge
        .batch_lookup(names)
        .context("resolve ingredient names")
}
