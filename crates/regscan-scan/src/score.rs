//! Korea relevance scoring.
//!
//! A weighted rule set over the enriched impact. Every rule that fires adds
//! its weight and one human-readable reason; the sum is clamped to 100.
//!
//! | Rule | Weight |
//! |------|--------|
//! | MFDS approved | 20 |
//! | HIRA reimbursed | 20 |
//! | HIRA reimbursement deleted | 5 |
//! | Active domestic trial (+5 for two or more) | 15 |
//! | ATC class reimbursed domestically | 15 |
//! | High-burden domestic indication | 15 |
//! | Orphan designation | 10 |

use std::collections::BTreeSet;

use regscan_model::{DomesticImpact, ReimbursementStatus};
use serde::{Deserialize, Serialize};

pub const MFDS_APPROVED_WEIGHT: u8 = 20;
pub const REIMBURSED_WEIGHT: u8 = 20;
pub const DELETED_WEIGHT: u8 = 5;
pub const ACTIVE_TRIAL_WEIGHT: u8 = 15;
pub const MULTIPLE_TRIAL_BONUS: u8 = 5;
pub const ATC_CLASS_WEIGHT: u8 = 15;
pub const HIGH_BURDEN_WEIGHT: u8 = 15;
pub const ORPHAN_WEIGHT: u8 = 10;

const MAX_SCORE: u8 = 100;

/// Disease areas with a high domestic patient burden, matched as lowercase
/// substrings of the indication text.
const HIGH_BURDEN_KEYWORDS: &[&str] = &[
    "cancer",
    "carcinoma",
    "tumor",
    "neoplasm",
    "lymphoma",
    "leukemia",
    "diabetes",
    "hypertension",
    "asthma",
    "copd",
    "hiv",
    "hepatitis",
    "stroke",
    "heart failure",
    "dementia",
    "alzheimer",
    "depression",
    "arthritis",
    "osteoporosis",
    "tuberculosis",
    "obesity",
];

/// True when the indication mentions a high-burden disease area.
pub fn is_high_burden(indication: &str) -> bool {
    let lowered = indication.to_lowercase();
    HIGH_BURDEN_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

fn is_orphan_reason(reason: &str) -> bool {
    reason.to_lowercase().contains("orphan") || reason.contains("희귀")
}

/// Score with the reason for every rule that contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceScore {
    pub score: u8,
    pub reasons: Vec<String>,
}

impl RelevanceScore {
    fn add(&mut self, weight: u8, reason: impl Into<String>) {
        self.score = self.score.saturating_add(weight);
        self.reasons.push(reason.into());
    }
}

#[derive(Debug, Clone, Default)]
pub struct KoreaRelevanceScorer {
    /// Three-character ATC prefixes with domestic reimbursement.
    reimbursed_atc_prefixes: BTreeSet<String>,
}

impl KoreaRelevanceScorer {
    /// Scorer with the given reimbursed ATC prefixes. An empty set disables
    /// the ATC rule.
    pub fn new<I, S>(reimbursed_atc_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            reimbursed_atc_prefixes: reimbursed_atc_prefixes
                .into_iter()
                .map(|prefix| prefix.as_ref().trim().to_uppercase())
                .filter(|prefix| !prefix.is_empty())
                .collect(),
        }
    }

    pub fn reimbursed_atc_prefixes(&self) -> &BTreeSet<String> {
        &self.reimbursed_atc_prefixes
    }

    pub fn score(
        &self,
        impact: &DomesticImpact,
        atc_code: Option<&str>,
        indication: Option<&str>,
    ) -> RelevanceScore {
        let mut result = RelevanceScore::default();

        if impact.mfds_approved {
            result.add(MFDS_APPROVED_WEIGHT, "MFDS approved");
        }

        match impact.reimbursement_status {
            Some(ReimbursementStatus::Reimbursed) => {
                result.add(REIMBURSED_WEIGHT, "HIRA reimbursed");
            }
            Some(ReimbursementStatus::Deleted) => {
                result.add(DELETED_WEIGHT, "HIRA reimbursement deleted");
            }
            _ => {}
        }

        if impact.has_active_trial {
            let count = impact.trial_count();
            let weight = if count >= 2 {
                ACTIVE_TRIAL_WEIGHT + MULTIPLE_TRIAL_BONUS
            } else {
                ACTIVE_TRIAL_WEIGHT
            };
            result.add(weight, format!("Active domestic clinical trials ({count})"));
        }

        if let Some(prefix) = atc_code
            .map(str::trim)
            .filter(|code| code.len() >= 3)
            .and_then(|code| code.get(..3))
            .map(str::to_uppercase)
            && self.reimbursed_atc_prefixes.contains(&prefix)
        {
            result.add(
                ATC_CLASS_WEIGHT,
                format!("Reimbursed therapeutic area ({prefix})"),
            );
        }

        if indication.is_some_and(is_high_burden) {
            result.add(HIGH_BURDEN_WEIGHT, "High-burden domestic indication");
        }

        if impact
            .hot_issue_reasons
            .iter()
            .any(|reason| is_orphan_reason(reason))
        {
            result.add(ORPHAN_WEIGHT, "Orphan drug designation");
        }

        result.score = result.score.min(MAX_SCORE);
        result
    }
}
