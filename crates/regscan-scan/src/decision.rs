//! Domestic status decision table.

use regscan_model::{DomesticImpact, DomesticStatus, ReimbursementStatus};

/// Global score at which an unapproved ingredient is expected domestically.
pub const EXPECTED_GLOBAL_SCORE: u8 = 60;

/// Classify an enriched impact. Rows are evaluated top to bottom and the
/// first match wins:
///
/// | MFDS | Foreign | Other | Status |
/// |------|---------|-------|--------|
/// | approved | any | reimbursed | `Reimbursed` |
/// | approved | any | deleted | `ApprovedDeleted` |
/// | approved | any | otherwise | `ApprovedNotReimbursed` |
/// | no | approved | active trial | `Imminent` |
/// | no | approved | global score ≥ 60 | `Expected` |
/// | no | approved | otherwise | `Uncertain` |
/// | no | no | | `NotApplicable` |
pub fn determine_status(impact: &DomesticImpact) -> DomesticStatus {
    if impact.mfds_approved {
        return match impact.reimbursement_status {
            Some(ReimbursementStatus::Reimbursed) => DomesticStatus::Reimbursed,
            Some(ReimbursementStatus::Deleted) => DomesticStatus::ApprovedDeleted,
            _ => DomesticStatus::ApprovedNotReimbursed,
        };
    }

    if impact.is_globally_approved() {
        if impact.has_active_trial {
            return DomesticStatus::Imminent;
        }
        if impact.global_score >= EXPECTED_GLOBAL_SCORE {
            return DomesticStatus::Expected;
        }
        return DomesticStatus::Uncertain;
    }

    // Unreachable: every MFDS-approved impact returned above.
    if impact.mfds_approved {
        return DomesticStatus::DomesticOnly;
    }

    DomesticStatus::NotApplicable
}
