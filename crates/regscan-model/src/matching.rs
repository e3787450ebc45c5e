use serde::{Deserialize, Serialize};

use crate::enums::{MatchMethod, ReimbursementStatus};

/// Result of resolving an ingredient name against the reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Resolved ingredient code, when a master or ATC entry matched.
    pub ingredient_code: Option<String>,
    /// Canonical master name of the resolved code, or the queried token.
    pub ingredient_name: String,
    pub status: ReimbursementStatus,
    /// Raw criteria field of the reimbursement entry used.
    pub criteria: Option<String>,
    /// Price ceiling in KRW.
    pub price_ceiling: Option<f64>,
    pub match_method: MatchMethod,
    /// Name used for the index lookup.
    pub normalized_name: String,
    /// False when the criteria value was not recognized and the status fell
    /// back to reimbursed.
    #[serde(default = "default_true")]
    pub criteria_recognized: bool,
}

fn default_true() -> bool {
    true
}

impl MatchResult {
    /// A result with no code and no reimbursement data.
    pub fn unresolved(
        ingredient_name: impl Into<String>,
        status: ReimbursementStatus,
        match_method: MatchMethod,
        normalized_name: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_code: None,
            ingredient_name: ingredient_name.into(),
            status,
            criteria: None,
            price_ceiling: None,
            match_method,
            normalized_name: normalized_name.into(),
            criteria_recognized: true,
        }
    }

    /// True when a master or ATC code was resolved.
    pub fn is_matched(&self) -> bool {
        self.ingredient_code.is_some()
    }
}
