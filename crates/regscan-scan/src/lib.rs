//! Domestic impact analysis.
//!
//! Turns a [`GlobalApprovalStatus`](regscan_model::GlobalApprovalStatus) into a
//! [`DomesticImpact`](regscan_model::DomesticImpact): reimbursement and trial
//! enrichment, the domestic status decision table, Korea relevance scoring
//! and analysis notes.

pub mod analyzer;
pub mod decision;
pub mod error;
pub mod notes;
pub mod score;
pub mod summary;
pub mod trials;

pub use analyzer::DomesticImpactAnalyzer;
pub use decision::determine_status;
pub use error::{Result, ScanError};
pub use notes::{DEFAULT_HIGH_COST_THRESHOLD, NoteContext, analysis_notes};
pub use score::{KoreaRelevanceScorer, RelevanceScore, is_high_burden};
pub use summary::BatchSummary;
pub use trials::TrialIndex;
