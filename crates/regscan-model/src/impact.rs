//! Domestic impact of a globally tracked ingredient.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{DomesticStatus, HotIssueLevel, Quadrant, ReimbursementStatus};
use crate::trial::ClinicalTrial;

/// Classified, scored view of one ingredient on the domestic market.
///
/// Created by the analyzer; `quadrant` is derived from the two scores on
/// every read and is not part of the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomesticImpact {
    pub inn: String,
    pub domestic_status: DomesticStatus,

    // Foreign approvals
    pub fda_approved: bool,
    pub fda_date: Option<NaiveDate>,
    pub ema_approved: bool,
    pub ema_date: Option<NaiveDate>,
    pub pmda_approved: bool,
    pub pmda_date: Option<NaiveDate>,

    // Domestic approval
    pub mfds_approved: bool,
    pub mfds_date: Option<NaiveDate>,
    pub mfds_brand_name: Option<String>,

    // HIRA reimbursement
    pub reimbursement_status: Option<ReimbursementStatus>,
    pub ingredient_code: Option<String>,
    pub reimbursement_criteria: Option<String>,
    pub price_ceiling: Option<f64>,

    // CRIS trials
    pub trials: Vec<ClinicalTrial>,
    pub has_active_trial: bool,

    pub global_score: u8,
    pub hot_issue_reasons: Vec<String>,
    pub korea_relevance_score: u8,
    pub korea_relevance_reasons: Vec<String>,
    pub analysis_notes: Vec<String>,
}

impl DomesticImpact {
    /// An impact with no approvals, no enrichment and a placeholder status.
    pub fn new(inn: impl Into<String>) -> Self {
        Self {
            inn: inn.into(),
            domestic_status: DomesticStatus::NotApplicable,
            fda_approved: false,
            fda_date: None,
            ema_approved: false,
            ema_date: None,
            pmda_approved: false,
            pmda_date: None,
            mfds_approved: false,
            mfds_date: None,
            mfds_brand_name: None,
            reimbursement_status: None,
            ingredient_code: None,
            reimbursement_criteria: None,
            price_ceiling: None,
            trials: Vec::new(),
            has_active_trial: false,
            global_score: 0,
            hot_issue_reasons: Vec::new(),
            korea_relevance_score: 0,
            korea_relevance_reasons: Vec::new(),
            analysis_notes: Vec::new(),
        }
    }

    /// Approved by at least one foreign agency (FDA, EMA or PMDA).
    pub fn is_globally_approved(&self) -> bool {
        self.fda_approved || self.ema_approved || self.pmda_approved
    }

    /// Days elapsed between the earliest foreign approval and `as_of`.
    pub fn days_since_global_approval(&self, as_of: NaiveDate) -> Option<i64> {
        [self.fda_date, self.ema_date, self.pmda_date]
            .into_iter()
            .flatten()
            .min()
            .map(|first| (as_of - first).num_days())
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_scores(self.global_score, self.korea_relevance_score)
    }

    pub fn hot_issue_level(&self) -> HotIssueLevel {
        HotIssueLevel::from_score(self.global_score)
    }

    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    /// One-line human summary, e.g.
    /// `Global: FDA+EMA | MFDS: approved | HIRA: reimbursed (₩1,200,000) | CRIS: 2 active`.
    pub fn summary_line(&self) -> String {
        let mut parts = Vec::new();

        let foreign: Vec<&str> = [
            ("FDA", self.fda_approved),
            ("EMA", self.ema_approved),
            ("PMDA", self.pmda_approved),
        ]
        .into_iter()
        .filter(|(_, approved)| *approved)
        .map(|(agency, _)| agency)
        .collect();
        if !foreign.is_empty() {
            parts.push(format!("Global: {}", foreign.join("+")));
        }

        if self.mfds_approved {
            parts.push("MFDS: approved".to_string());
        } else {
            parts.push("MFDS: not approved".to_string());
        }

        match self.reimbursement_status {
            Some(ReimbursementStatus::Reimbursed) => match self.price_ceiling {
                Some(price) if price > 0.0 => {
                    parts.push(format!("HIRA: reimbursed ({})", format_krw(price)));
                }
                _ => parts.push("HIRA: reimbursed".to_string()),
            },
            Some(ReimbursementStatus::Deleted) => parts.push("HIRA: deleted".to_string()),
            Some(ReimbursementStatus::NotCovered) => parts.push("HIRA: not covered".to_string()),
            Some(ReimbursementStatus::NotFound | ReimbursementStatus::Herbal) | None => {}
        }

        if self.has_active_trial {
            parts.push(format!("CRIS: {} active", self.trials.len()));
        }

        parts.join(" | ")
    }
}

/// Format a KRW amount rounded to whole won with thousands separators.
pub fn format_krw(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-₩{grouped}")
    } else {
        format!("₩{grouped}")
    }
}
