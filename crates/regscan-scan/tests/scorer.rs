//! Korea relevance scorer rules.

use regscan_model::{ClinicalTrial, DomesticImpact, ReimbursementStatus};
use regscan_scan::KoreaRelevanceScorer;

fn impact() -> DomesticImpact {
    DomesticImpact::new("testumab")
}

fn with_trials(mut impact: DomesticImpact, count: usize) -> DomesticImpact {
    impact.trials = (0..count)
        .map(|i| ClinicalTrial::new(format!("KCT{i:04}"), "Phase 3"))
        .collect();
    impact.has_active_trial = count > 0;
    impact
}

#[test]
fn empty_impact_scores_zero() {
    let score = KoreaRelevanceScorer::default().score(&impact(), None, None);
    assert_eq!(score.score, 0);
    assert!(score.reasons.is_empty());
}

#[test]
fn mfds_approval_scores_twenty() {
    let mut impact = impact();
    impact.mfds_approved = true;
    let score = KoreaRelevanceScorer::default().score(&impact, None, None);
    assert_eq!(score.score, 20);
    assert_eq!(score.reasons, vec!["MFDS approved"]);
}

#[test]
fn reimbursement_statuses() {
    let scorer = KoreaRelevanceScorer::default();
    let mut impact = impact();

    impact.reimbursement_status = Some(ReimbursementStatus::Reimbursed);
    let score = scorer.score(&impact, None, None);
    assert_eq!(score.score, 20);
    assert_eq!(score.reasons, vec!["HIRA reimbursed"]);

    impact.reimbursement_status = Some(ReimbursementStatus::Deleted);
    let score = scorer.score(&impact, None, None);
    assert_eq!(score.score, 5);
    assert_eq!(score.reasons, vec!["HIRA reimbursement deleted"]);

    impact.reimbursement_status = Some(ReimbursementStatus::NotCovered);
    assert_eq!(scorer.score(&impact, None, None).score, 0);
}

#[test]
fn single_trial_scores_fifteen() {
    let score = KoreaRelevanceScorer::default().score(&with_trials(impact(), 1), None, None);
    assert_eq!(score.score, 15);
    assert_eq!(score.reasons.len(), 1);
    assert!(score.reasons[0].contains("clinical trials (1)"));
}

#[test]
fn multiple_trials_add_bonus_in_one_reason() {
    let score = KoreaRelevanceScorer::default().score(&with_trials(impact(), 3), None, None);
    assert_eq!(score.score, 20);
    assert_eq!(score.reasons.len(), 1);
    assert!(score.reasons[0].contains("(3)"));
}

#[test]
fn atc_prefix_in_reimbursed_set() {
    let scorer = KoreaRelevanceScorer::new(["L01"]);
    let score = scorer.score(&impact(), Some("L01X"), None);
    assert_eq!(score.score, 15);
    assert!(score.reasons[0].contains("therapeutic area"));

    assert_eq!(scorer.score(&impact(), Some("N05A"), None).score, 0);
    assert_eq!(scorer.score(&impact(), Some("L0"), None).score, 0);
}

#[test]
fn atc_rule_skipped_without_prefixes() {
    let score = KoreaRelevanceScorer::default().score(&impact(), Some("L01X"), None);
    assert_eq!(score.score, 0);
}

#[test]
fn high_burden_indication() {
    let scorer = KoreaRelevanceScorer::default();
    let score = scorer.score(&impact(), None, Some("advanced cancer treatment"));
    assert_eq!(score.score, 15);
    assert_eq!(score.reasons, vec!["High-burden domestic indication"]);

    assert_eq!(
        scorer
            .score(&impact(), None, Some("DIABETES mellitus type 2"))
            .score,
        15
    );
    assert_eq!(
        scorer
            .score(&impact(), None, Some("cosmetic procedure"))
            .score,
        0
    );
}

#[test]
fn orphan_designation_from_hot_issue_reasons() {
    let scorer = KoreaRelevanceScorer::default();

    let mut impact = impact();
    impact.hot_issue_reasons = vec!["Orphan Drug Designation".to_string()];
    let score = scorer.score(&impact, None, None);
    assert_eq!(score.score, 10);
    assert_eq!(score.reasons, vec!["Orphan drug designation"]);

    impact.hot_issue_reasons = vec!["희귀의약품 지정".to_string()];
    assert_eq!(scorer.score(&impact, None, None).score, 10);
}

#[test]
fn full_combination_scores_one_hundred() {
    let scorer = KoreaRelevanceScorer::new(["L01"]);
    let mut impact = with_trials(impact(), 2);
    impact.mfds_approved = true;
    impact.reimbursement_status = Some(ReimbursementStatus::Reimbursed);
    impact.hot_issue_reasons = vec!["Orphan Drug".to_string()];

    let score = scorer.score(&impact, Some("L01XC"), Some("non-small cell lung cancer"));
    assert_eq!(score.score, 100);
    assert_eq!(score.reasons.len(), 6);
}

#[test]
fn score_never_exceeds_one_hundred() {
    let scorer = KoreaRelevanceScorer::new(["L01"]);
    let mut impact = with_trials(impact(), 10);
    impact.mfds_approved = true;
    impact.reimbursement_status = Some(ReimbursementStatus::Reimbursed);
    impact.hot_issue_reasons = vec!["희귀의약품".to_string(), "orphan".to_string()];

    let score = scorer.score(&impact, Some("L01"), Some("cancer asthma hiv"));
    assert!(score.score <= 100);
}
