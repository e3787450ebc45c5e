//! Aggregated per-ingredient approval status across agencies.
//!
//! One [`GlobalApprovalStatus`] is produced per ingredient by the ingestion
//! side, after each agency feed has been parsed and matched by INN. The global
//! score and its reasons are precomputed there.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Agency, ApprovalStatus};
use crate::matching::MatchResult;

/// Approval record from a single agency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgencyApproval {
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub approval_date: Option<NaiveDate>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub indication: Option<String>,
    /// Raw ingredient string from the agency record (MFDS `ITEM_INGR_NAME`).
    #[serde(default)]
    pub ingredient_name: Option<String>,
}

impl AgencyApproval {
    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }

    /// An approved record with the given date.
    pub fn approved(approval_date: Option<NaiveDate>) -> Self {
        Self {
            status: ApprovalStatus::Approved,
            approval_date,
            ..Self::default()
        }
    }
}

/// Global regulatory status of one ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalApprovalStatus {
    /// International Nonproprietary Name.
    pub inn: String,
    #[serde(default)]
    pub normalized_name: Option<String>,
    #[serde(default)]
    pub atc_code: Option<String>,

    #[serde(default)]
    pub fda: Option<AgencyApproval>,
    #[serde(default)]
    pub ema: Option<AgencyApproval>,
    #[serde(default)]
    pub pmda: Option<AgencyApproval>,
    #[serde(default)]
    pub mfds: Option<AgencyApproval>,

    /// Global significance score (0-100).
    #[serde(default)]
    pub global_score: u8,
    #[serde(default)]
    pub hot_issue_reasons: Vec<String>,

    /// Reimbursement lookup already resolved upstream, if any.
    #[serde(default)]
    pub reimbursement: Option<MatchResult>,
}

impl GlobalApprovalStatus {
    pub fn new(inn: impl Into<String>) -> Self {
        Self {
            inn: inn.into(),
            ..Self::default()
        }
    }

    /// The record for one agency.
    pub fn approval(&self, agency: Agency) -> Option<&AgencyApproval> {
        match agency {
            Agency::Fda => self.fda.as_ref(),
            Agency::Ema => self.ema.as_ref(),
            Agency::Pmda => self.pmda.as_ref(),
            Agency::Mfds => self.mfds.as_ref(),
        }
    }

    /// All present agency records, foreign agencies first.
    pub fn approvals(&self) -> impl Iterator<Item = (Agency, &AgencyApproval)> {
        [Agency::Fda, Agency::Ema, Agency::Pmda, Agency::Mfds]
            .into_iter()
            .filter_map(|agency| self.approval(agency).map(|record| (agency, record)))
    }

    /// Agencies with an approved record.
    pub fn approved_agencies(&self) -> Vec<Agency> {
        self.approvals()
            .filter(|(_, record)| record.is_approved())
            .map(|(agency, _)| agency)
            .collect()
    }

    /// Indication text of all foreign agency records, joined by spaces.
    pub fn foreign_indications(&self) -> String {
        self.approvals()
            .filter(|(agency, _)| !agency.is_domestic())
            .filter_map(|(_, record)| record.indication.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Name to resolve against the reference tables: the INN, or the raw
    /// MFDS ingredient string when the INN is blank.
    pub fn lookup_name(&self) -> Option<&str> {
        let inn = self.inn.trim();
        if !inn.is_empty() {
            return Some(inn);
        }
        self.mfds
            .as_ref()
            .and_then(|record| record.ingredient_name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_agencies_lists_only_approved_records() {
        let mut status = GlobalApprovalStatus::new("pembrolizumab");
        status.fda = Some(AgencyApproval::approved(NaiveDate::from_ymd_opt(2014, 9, 4)));
        status.ema = Some(AgencyApproval {
            status: ApprovalStatus::Pending,
            ..AgencyApproval::default()
        });
        status.mfds = Some(AgencyApproval::approved(None));

        assert_eq!(status.approved_agencies(), vec![Agency::Fda, Agency::Mfds]);
    }

    #[test]
    fn lookup_name_falls_back_to_mfds_ingredient() {
        let mut status = GlobalApprovalStatus::new("  ");
        assert_eq!(status.lookup_name(), None);

        status.mfds = Some(AgencyApproval {
            ingredient_name: Some("Amlodipine Besylate".to_string()),
            ..AgencyApproval::default()
        });
        assert_eq!(status.lookup_name(), Some("Amlodipine Besylate"));

        status.inn = "amlodipine".to_string();
        assert_eq!(status.lookup_name(), Some("amlodipine"));
    }

    #[test]
    fn foreign_indications_skip_domestic_record() {
        let mut status = GlobalApprovalStatus::new("x");
        status.fda = Some(AgencyApproval {
            indication: Some("melanoma".to_string()),
            ..AgencyApproval::default()
        });
        status.ema = Some(AgencyApproval {
            indication: Some(" lung cancer ".to_string()),
            ..AgencyApproval::default()
        });
        status.mfds = Some(AgencyApproval {
            indication: Some("domestic only".to_string()),
            ..AgencyApproval::default()
        });
        assert_eq!(status.foreign_indications(), "melanoma lung cancer");
    }
}
