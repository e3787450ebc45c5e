//! Batch-level summary of analyzed impacts.

use std::collections::BTreeMap;

use regscan_model::{DomesticImpact, DomesticStatus, ReimbursementStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    /// Count per status; statuses with no impacts are omitted.
    pub by_status: BTreeMap<DomesticStatus, usize>,
    pub reimbursed_count: usize,
    /// Sum of price ceilings over reimbursed impacts (KRW).
    pub reimbursed_price_sum: f64,
    pub with_trials: usize,
    pub globally_approved_not_domestic: usize,
}

impl BatchSummary {
    pub fn from_impacts(impacts: &[DomesticImpact]) -> Self {
        let mut summary = Self {
            total: impacts.len(),
            ..Self::default()
        };

        for impact in impacts {
            *summary.by_status.entry(impact.domestic_status).or_default() += 1;

            if impact.reimbursement_status == Some(ReimbursementStatus::Reimbursed) {
                summary.reimbursed_count += 1;
                summary.reimbursed_price_sum += impact.price_ceiling.unwrap_or(0.0);
            }
            if impact.has_active_trial {
                summary.with_trials += 1;
            }
            if impact.is_globally_approved() && !impact.mfds_approved {
                summary.globally_approved_not_domestic += 1;
            }
        }
        summary
    }

    /// Count for one status, zero when absent.
    pub fn count(&self, status: DomesticStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch() {
        let summary = BatchSummary::from_impacts(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.by_status.is_empty());
        assert_eq!(summary.count(DomesticStatus::Reimbursed), 0);
    }

    #[test]
    fn counts_and_sums() {
        let mut reimbursed = DomesticImpact::new("a");
        reimbursed.mfds_approved = true;
        reimbursed.domestic_status = DomesticStatus::Reimbursed;
        reimbursed.reimbursement_status = Some(ReimbursementStatus::Reimbursed);
        reimbursed.price_ceiling = Some(1200.0);

        let mut unpriced = reimbursed.clone();
        unpriced.inn = "b".to_string();
        unpriced.price_ceiling = None;

        let mut imminent = DomesticImpact::new("c");
        imminent.fda_approved = true;
        imminent.has_active_trial = true;
        imminent.domestic_status = DomesticStatus::Imminent;

        let summary = BatchSummary::from_impacts(&[reimbursed, unpriced, imminent]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.count(DomesticStatus::Reimbursed), 2);
        assert_eq!(summary.count(DomesticStatus::Imminent), 1);
        assert_eq!(summary.reimbursed_count, 2);
        assert_eq!(summary.reimbursed_price_sum, 1200.0);
        assert_eq!(summary.with_trials, 1);
        assert_eq!(summary.globally_approved_not_domestic, 1);
    }
}
