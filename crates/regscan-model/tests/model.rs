//! Tests for regscan-model types.

use chrono::NaiveDate;
use regscan_model::{
    ClinicalTrial, DomesticImpact, DomesticStatus, GlobalApprovalStatus, Quadrant,
    ReimbursementStatus,
};

fn impact_with_scores(global_score: u8, korea_relevance_score: u8) -> DomesticImpact {
    DomesticImpact {
        global_score,
        korea_relevance_score,
        ..DomesticImpact::new("test-drug")
    }
}

#[test]
fn quadrant_classification() {
    assert_eq!(impact_with_scores(80, 60).quadrant(), Quadrant::TopPriority);
    assert_eq!(impact_with_scores(70, 30).quadrant(), Quadrant::Watch);
    assert_eq!(impact_with_scores(40, 55).quadrant(), Quadrant::Track);
    assert_eq!(impact_with_scores(30, 20).quadrant(), Quadrant::Normal);
}

#[test]
fn quadrant_thresholds_are_inclusive() {
    assert_eq!(impact_with_scores(60, 50).quadrant(), Quadrant::TopPriority);
    assert_eq!(impact_with_scores(59, 50).quadrant(), Quadrant::Track);
    assert_eq!(impact_with_scores(60, 49).quadrant(), Quadrant::Watch);
}

#[test]
fn quadrant_follows_score_changes() {
    let mut impact = impact_with_scores(10, 10);
    assert_eq!(impact.quadrant(), Quadrant::Normal);
    impact.korea_relevance_score = 90;
    assert_eq!(impact.quadrant(), Quadrant::Track);
}

#[test]
fn summary_line_lists_all_sources() {
    let impact = DomesticImpact {
        fda_approved: true,
        ema_approved: true,
        mfds_approved: true,
        reimbursement_status: Some(ReimbursementStatus::Reimbursed),
        price_ceiling: Some(1_200_000.0),
        has_active_trial: true,
        trials: vec![
            ClinicalTrial::new("KCT0000001", "Trial 1"),
            ClinicalTrial::new("KCT0000002", "Trial 2"),
        ],
        ..DomesticImpact::new("pembrolizumab")
    };
    insta::assert_snapshot!(
        impact.summary_line(),
        @"Global: FDA+EMA | MFDS: approved | HIRA: reimbursed (₩1,200,000) | CRIS: 2 active"
    );
}

#[test]
fn summary_line_for_unapproved_ingredient() {
    let impact = DomesticImpact {
        pmda_approved: true,
        reimbursement_status: Some(ReimbursementStatus::NotFound),
        ..DomesticImpact::new("belumosudil")
    };
    insta::assert_snapshot!(impact.summary_line(), @"Global: PMDA | MFDS: not approved");
}

#[test]
fn impact_serializes_without_quadrant() {
    let impact = impact_with_scores(60, 50);
    let json = serde_json::to_value(&impact).expect("serialize impact");
    assert_eq!(json["domestic_status"], "not_applicable");
    assert!(json.get("quadrant").is_none());

    let round: DomesticImpact = serde_json::from_value(json).expect("deserialize impact");
    assert_eq!(round, impact);
    assert_eq!(round.domestic_status, DomesticStatus::NotApplicable);
}

#[test]
fn global_status_deserializes_with_defaults() {
    let json = r#"{
        "inn": "pembrolizumab",
        "atc_code": "L01FF02",
        "fda": {"status": "approved", "approval_date": "2014-09-04", "indication": "melanoma"},
        "mfds": {"status": "pending"},
        "global_score": 85,
        "hot_issue_reasons": ["FDA Breakthrough Therapy"]
    }"#;
    let status: GlobalApprovalStatus = serde_json::from_str(json).expect("parse status");

    assert_eq!(status.inn, "pembrolizumab");
    assert_eq!(status.atc_code.as_deref(), Some("L01FF02"));
    let fda = status.fda.as_ref().expect("fda record");
    assert!(fda.is_approved());
    assert_eq!(fda.approval_date, NaiveDate::from_ymd_opt(2014, 9, 4));
    assert!(!status.mfds.as_ref().expect("mfds record").is_approved());
    assert!(status.ema.is_none());
    assert!(status.reimbursement.is_none());
    assert_eq!(status.global_score, 85);
}
