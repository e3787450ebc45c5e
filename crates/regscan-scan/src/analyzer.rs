//! Domestic impact analyzer.
//!
//! Each analysis runs in a fixed order: copy identity and global fields,
//! copy approvals, enrich with reimbursement and trial data, classify,
//! score, then annotate.

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::NaiveDate;
use regscan_map::IngredientBridge;
use regscan_model::{
    Agency, ClinicalTrial, DomesticImpact, DomesticStatus, GlobalApprovalStatus, MatchResult,
    ReimbursementStatus,
};
use tracing::{debug, info, info_span, warn};

use crate::decision::determine_status;
use crate::error::{Result, ScanError};
use crate::notes::{NoteContext, analysis_notes};
use crate::score::KoreaRelevanceScorer;
use crate::summary::BatchSummary;
use crate::trials::TrialIndex;

const MAX_GLOBAL_SCORE: u8 = 100;

#[derive(Debug, Default)]
pub struct DomesticImpactAnalyzer {
    bridge: Option<Arc<IngredientBridge>>,
    scorer: KoreaRelevanceScorer,
    trials: TrialIndex,
    notes: NoteContext,
    results: Vec<DomesticImpact>,
}

impl DomesticImpactAnalyzer {
    /// Analyzer without reimbursement data, trials or ATC prefixes.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bridge(mut self, bridge: Arc<IngredientBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    #[must_use]
    pub fn with_scorer(mut self, scorer: KoreaRelevanceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Reference date for elapsed-time notes.
    #[must_use]
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.notes.as_of = Some(as_of);
        self
    }

    #[must_use]
    pub fn with_high_cost_threshold(mut self, threshold: f64) -> Self {
        self.notes.high_cost_threshold = threshold;
        self
    }

    /// Replace the trial index. Returns the number of indexed drug names.
    pub fn load_trials(&mut self, trials: &[ClinicalTrial]) -> usize {
        self.trials.load(trials)
    }

    pub fn trials(&self) -> &TrialIndex {
        &self.trials
    }

    /// Analyze one ingredient.
    pub fn analyze(&self, status: &GlobalApprovalStatus) -> Result<DomesticImpact> {
        let mut impact = DomesticImpact::new(status.inn.trim());
        impact.global_score = status.global_score.min(MAX_GLOBAL_SCORE);
        impact.hot_issue_reasons = status.hot_issue_reasons.clone();

        copy_approvals(&mut impact, status);

        if let Some(matched) = self.reimbursement(status)? {
            apply_reimbursement(&mut impact, &matched);
        }

        let trial_name = status.lookup_name().unwrap_or_default();
        impact.trials = self.trials.lookup(trial_name).to_vec();
        impact.has_active_trial = !impact.trials.is_empty();

        impact.domestic_status = determine_status(&impact);

        let indication = status.foreign_indications();
        let relevance = self.scorer.score(
            &impact,
            status.atc_code.as_deref(),
            Some(indication.as_str()).filter(|text| !text.is_empty()),
        );
        impact.korea_relevance_score = relevance.score;
        impact.korea_relevance_reasons = relevance.reasons;

        impact.analysis_notes = analysis_notes(&impact, &self.notes);

        debug!(
            inn = %impact.inn,
            status = %impact.domestic_status,
            korea_relevance = impact.korea_relevance_score,
            "analyzed ingredient"
        );
        Ok(impact)
    }

    fn reimbursement(&self, status: &GlobalApprovalStatus) -> Result<Option<MatchResult>> {
        if let Some(precomputed) = &status.reimbursement {
            return Ok(Some(precomputed.clone()));
        }
        let (Some(bridge), Some(name)) = (&self.bridge, status.lookup_name()) else {
            return Ok(None);
        };
        bridge
            .lookup(name)
            .map(Some)
            .map_err(|source| ScanError::Bridge {
                inn: status.inn.clone(),
                source,
            })
    }

    /// Analyze every status, replacing the previous batch.
    ///
    /// A failing item is logged and recorded as a `NotApplicable` impact with
    /// a failure note, so the output always has one impact per input.
    pub fn analyze_batch(&mut self, statuses: &[GlobalApprovalStatus]) -> &[DomesticImpact] {
        let span = info_span!("analyze_batch", count = statuses.len());
        let _guard = span.enter();

        let mut results = Vec::with_capacity(statuses.len());
        let mut failed = 0usize;
        for status in statuses {
            match self.analyze(status) {
                Ok(impact) => results.push(impact),
                Err(error) => {
                    warn!(inn = %status.inn, %error, "ingredient analysis failed");
                    failed += 1;
                    results.push(failed_impact(status, &error));
                }
            }
        }
        self.results = results;

        info!(
            analyzed = self.results.len(),
            failed, "domestic impact analysis complete"
        );
        &self.results
    }

    /// Results of the last batch, in input order.
    pub fn results(&self) -> &[DomesticImpact] {
        &self.results
    }

    pub fn filter_by_status(&self, status: DomesticStatus) -> Vec<&DomesticImpact> {
        self.results
            .iter()
            .filter(|impact| impact.domestic_status == status)
            .collect()
    }

    /// Imminent ingredients, highest global score first.
    pub fn imminent_drugs(&self) -> Vec<&DomesticImpact> {
        let mut imminent = self.filter_by_status(DomesticStatus::Imminent);
        imminent.sort_by_key(|impact| Reverse(impact.global_score));
        imminent
    }

    /// Reimbursed ingredients priced at or above `min_price`, most expensive
    /// first.
    pub fn high_value_reimbursed(&self, min_price: f64) -> Vec<&DomesticImpact> {
        let mut high_value: Vec<&DomesticImpact> = self
            .results
            .iter()
            .filter(|impact| impact.reimbursement_status == Some(ReimbursementStatus::Reimbursed))
            .filter(|impact| impact.price_ceiling.is_some_and(|price| price >= min_price))
            .collect();
        high_value.sort_by(|a, b| {
            let a = a.price_ceiling.unwrap_or(0.0);
            let b = b.price_ceiling.unwrap_or(0.0);
            b.total_cmp(&a)
        });
        high_value
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_impacts(&self.results)
    }
}

fn copy_approvals(impact: &mut DomesticImpact, status: &GlobalApprovalStatus) {
    for (agency, record) in status.approvals() {
        if !record.is_approved() {
            continue;
        }
        let date = record.approval_date;
        match agency {
            Agency::Fda => {
                impact.fda_approved = true;
                impact.fda_date = date;
            }
            Agency::Ema => {
                impact.ema_approved = true;
                impact.ema_date = date;
            }
            Agency::Pmda => {
                impact.pmda_approved = true;
                impact.pmda_date = date;
            }
            Agency::Mfds => {
                impact.mfds_approved = true;
                impact.mfds_date = date;
                impact.mfds_brand_name = record.brand_name.clone();
            }
        }
    }
}

fn apply_reimbursement(impact: &mut DomesticImpact, matched: &MatchResult) {
    impact.reimbursement_status = Some(matched.status);
    impact.ingredient_code = matched.ingredient_code.clone();
    impact.reimbursement_criteria = matched.criteria.clone();
    impact.price_ceiling = matched.price_ceiling;
}

fn failed_impact(status: &GlobalApprovalStatus, error: &ScanError) -> DomesticImpact {
    let mut impact = DomesticImpact::new(status.inn.trim());
    impact.global_score = status.global_score.min(MAX_GLOBAL_SCORE);
    impact.hot_issue_reasons = status.hot_issue_reasons.clone();
    impact.analysis_notes = vec![format!("Analysis failed: {error}")];
    impact
}
