//! Data model shared by the regscan crates.
//!
//! Reference rows flow into the ingredient bridge, [`GlobalApprovalStatus`]
//! flows into the analyzer, and [`DomesticImpact`] comes out.

pub mod approval;
pub mod enums;
pub mod error;
pub mod impact;
pub mod matching;
pub mod reference;
pub mod trial;

pub use approval::{AgencyApproval, GlobalApprovalStatus};
pub use enums::{
    Agency, ApprovalStatus, DomesticStatus, HotIssueLevel, MatchMethod, Quadrant,
    ReimbursementStatus,
};
pub use error::{RegscanError, Result};
pub use impact::{DomesticImpact, format_krw};
pub use matching::MatchResult;
pub use reference::{IngredientInfo, MasterRow, ReferenceTables, ReimbursementRow, SecondaryRow};
pub use trial::ClinicalTrial;
