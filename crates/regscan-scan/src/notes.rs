//! Free-text analysis notes attached to each impact.

use chrono::NaiveDate;
use regscan_model::{DomesticImpact, DomesticStatus, ReimbursementStatus, format_krw};

/// Price ceiling (KRW) above which an ingredient is flagged as high cost.
pub const DEFAULT_HIGH_COST_THRESHOLD: f64 = 1_000_000.0;

const DAYS_PER_YEAR: i64 = 365;

/// Inputs that are not part of the impact itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteContext {
    /// Reference date for elapsed-time notes; `None` skips them.
    pub as_of: Option<NaiveDate>,
    pub high_cost_threshold: f64,
}

impl Default for NoteContext {
    fn default() -> Self {
        Self {
            as_of: None,
            high_cost_threshold: DEFAULT_HIGH_COST_THRESHOLD,
        }
    }
}

/// Notes for a classified impact. Expects `domestic_status` to be set.
pub fn analysis_notes(impact: &DomesticImpact, ctx: &NoteContext) -> Vec<String> {
    let mut notes = Vec::new();

    if impact.is_globally_approved()
        && !impact.mfds_approved
        && let Some(days) = ctx
            .as_of
            .and_then(|as_of| impact.days_since_global_approval(as_of))
        && days > DAYS_PER_YEAR
    {
        let years = days / DAYS_PER_YEAR;
        let unit = if years == 1 { "year" } else { "years" };
        notes.push(format!(
            "Foreign approval {years} {unit} ago, not approved by MFDS"
        ));
    }

    if impact.mfds_approved {
        match impact.reimbursement_status {
            Some(ReimbursementStatus::NotCovered) => {
                notes.push("MFDS approved but not covered by HIRA".to_string());
            }
            Some(ReimbursementStatus::Deleted) => {
                notes.push("MFDS approved but HIRA reimbursement deleted".to_string());
            }
            _ => {}
        }
    }

    if let Some(price) = impact.price_ceiling
        && price > ctx.high_cost_threshold
    {
        notes.push(format!("High-cost drug (price ceiling {})", format_krw(price)));
    }

    if impact.has_active_trial && !impact.mfds_approved {
        let count = impact.trial_count();
        let unit = if count == 1 { "trial" } else { "trials" };
        notes.push(format!("{count} domestic clinical {unit} in progress"));
    }

    if impact.domestic_status == DomesticStatus::NotApplicable {
        notes.push("No foreign or domestic approval on record".to_string());
    }

    notes
}
