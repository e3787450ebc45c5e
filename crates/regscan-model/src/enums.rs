//! Type-safe enumerations for registry and market-status concepts.
//!
//! The source registries publish these as free-form strings. Every value is
//! parsed into a closed enum at the boundary so that every match over them is
//! exhaustive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RegscanError;

/// HIRA reimbursement status of an ingredient.
///
/// - **Reimbursed**: currently covered by national health insurance
/// - **Deleted**: previously covered, removed from the price list
/// - **NotCovered**: present in the ingredient master but absent from HIRA
/// - **NotFound**: no master entry matched the name
/// - **Herbal**: traditional/herbal medicine, governed by a separate regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReimbursementStatus {
    Reimbursed,
    Deleted,
    NotCovered,
    NotFound,
    Herbal,
}

impl ReimbursementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReimbursementStatus::Reimbursed => "reimbursed",
            ReimbursementStatus::Deleted => "deleted",
            ReimbursementStatus::NotCovered => "not_covered",
            ReimbursementStatus::NotFound => "not_found",
            ReimbursementStatus::Herbal => "herbal",
        }
    }
}

impl fmt::Display for ReimbursementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReimbursementStatus {
    type Err = RegscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "reimbursed" => Ok(ReimbursementStatus::Reimbursed),
            "deleted" => Ok(ReimbursementStatus::Deleted),
            "not_covered" => Ok(ReimbursementStatus::NotCovered),
            "not_found" => Ok(ReimbursementStatus::NotFound),
            "herbal" => Ok(ReimbursementStatus::Herbal),
            _ => Err(RegscanError::unknown("reimbursement status", s)),
        }
    }
}

/// How an ingredient name was resolved against the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// The query was empty.
    NoInput,
    /// The name looked like a herbal ingredient; code matching was skipped.
    HerbalDetected,
    /// Exact match on the normalized (or raw lowercased) master name.
    Normalized,
    /// Exact match on the ATC mapping table after the master index missed.
    AtcFallback,
    /// Nothing matched.
    Unmatched,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::NoInput => "no_input",
            MatchMethod::HerbalDetected => "herbal_detected",
            MatchMethod::Normalized => "normalized",
            MatchMethod::AtcFallback => "atc_fallback",
            MatchMethod::Unmatched => "unmatched",
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domestic market status derived by the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomesticStatus {
    /// MFDS approved and HIRA reimbursed.
    Reimbursed,
    /// MFDS approved, HIRA coverage absent or unknown.
    ApprovedNotReimbursed,
    /// MFDS approved, HIRA coverage deleted.
    ApprovedDeleted,
    /// Foreign approved, not MFDS approved, domestic trial running.
    Imminent,
    /// Foreign approved, not MFDS approved, high global score.
    Expected,
    /// Foreign approved, not MFDS approved, nothing else known.
    Uncertain,
    /// MFDS approved only.
    DomesticOnly,
    /// Outside the scope of the analysis.
    NotApplicable,
}

impl DomesticStatus {
    /// All statuses in display order.
    pub const ALL: [DomesticStatus; 8] = [
        DomesticStatus::Reimbursed,
        DomesticStatus::ApprovedNotReimbursed,
        DomesticStatus::ApprovedDeleted,
        DomesticStatus::Imminent,
        DomesticStatus::Expected,
        DomesticStatus::Uncertain,
        DomesticStatus::DomesticOnly,
        DomesticStatus::NotApplicable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomesticStatus::Reimbursed => "reimbursed",
            DomesticStatus::ApprovedNotReimbursed => "approved_not_reimbursed",
            DomesticStatus::ApprovedDeleted => "approved_deleted",
            DomesticStatus::Imminent => "imminent",
            DomesticStatus::Expected => "expected",
            DomesticStatus::Uncertain => "uncertain",
            DomesticStatus::DomesticOnly => "domestic_only",
            DomesticStatus::NotApplicable => "not_applicable",
        }
    }
}

impl fmt::Display for DomesticStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DomesticStatus {
    type Err = RegscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        DomesticStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| RegscanError::unknown("domestic status", s))
    }
}

/// Priority quadrant derived from the global and Korea relevance scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    TopPriority,
    Watch,
    Track,
    Normal,
}

impl Quadrant {
    /// Global score at or above which an ingredient is globally significant.
    pub const GLOBAL_THRESHOLD: u8 = 60;
    /// Korea relevance score at or above which an ingredient is domestically relevant.
    pub const KOREA_THRESHOLD: u8 = 50;

    /// Classify a pair of scores. Both thresholds are inclusive.
    pub fn from_scores(global_score: u8, korea_relevance_score: u8) -> Self {
        let global = global_score >= Self::GLOBAL_THRESHOLD;
        let korea = korea_relevance_score >= Self::KOREA_THRESHOLD;
        match (global, korea) {
            (true, true) => Quadrant::TopPriority,
            (true, false) => Quadrant::Watch,
            (false, true) => Quadrant::Track,
            (false, false) => Quadrant::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::TopPriority => "top_priority",
            Quadrant::Watch => "watch",
            Quadrant::Track => "track",
            Quadrant::Normal => "normal",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Approval state of a product at a single agency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Approved,
    Pending,
    Rejected,
    Withdrawn,
    NotSubmitted,
    #[default]
    Unknown,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::Withdrawn => "withdrawn",
            ApprovalStatus::NotSubmitted => "not_submitted",
            ApprovalStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Regulatory agencies tracked by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Agency {
    Fda,
    Ema,
    Pmda,
    Mfds,
}

impl Agency {
    /// Agencies whose approval counts as a foreign (global) approval.
    pub const FOREIGN: [Agency; 3] = [Agency::Fda, Agency::Ema, Agency::Pmda];

    pub fn as_str(&self) -> &'static str {
        match self {
            Agency::Fda => "FDA",
            Agency::Ema => "EMA",
            Agency::Pmda => "PMDA",
            Agency::Mfds => "MFDS",
        }
    }

    /// MFDS is the only domestic agency.
    pub fn is_domestic(&self) -> bool {
        matches!(self, Agency::Mfds)
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Agency {
    type Err = RegscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FDA" => Ok(Agency::Fda),
            "EMA" => Ok(Agency::Ema),
            "PMDA" => Ok(Agency::Pmda),
            "MFDS" => Ok(Agency::Mfds),
            _ => Err(RegscanError::unknown("agency", s)),
        }
    }
}

/// Coarse band of the global significance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HotIssueLevel {
    Hot,
    High,
    Mid,
    Low,
}

impl HotIssueLevel {
    /// 80+ HOT, 60-79 HIGH, 40-59 MID, below 40 LOW.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => HotIssueLevel::Hot,
            60..=79 => HotIssueLevel::High,
            40..=59 => HotIssueLevel::Mid,
            _ => HotIssueLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HotIssueLevel::Hot => "HOT",
            HotIssueLevel::High => "HIGH",
            HotIssueLevel::Mid => "MID",
            HotIssueLevel::Low => "LOW",
        }
    }
}

impl fmt::Display for HotIssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
