//! MFDS ingredient name → HIRA reimbursement bridge.
//!
//! The bridge joins three reference tables through the ingredient code:
//!
//! ```text
//! ingredient name ──normalize──► master index ──► ingredient code ──► reimbursement index
//!                 └─lowercase──► ATC mapping  ──┘
//! ```
//!
//! Tables are held in an immutable [`BridgeSnapshot`]. Each load builds the
//! new index outside the lock and swaps a fresh snapshot in, so a lookup
//! always sees one consistent set of tables.

use std::sync::{Arc, PoisonError, RwLock};

use regscan_model::{
    IngredientInfo, MasterRow, MatchMethod, MatchResult, ReferenceTables, ReimbursementRow,
    ReimbursementStatus, SecondaryRow,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{BridgeError, Result};
use crate::herbal::matched_rule;
use crate::index::{MasterIndex, ReimbursementEntry, ReimbursementIndex, SecondaryIndex};
use crate::normalize::{first_ingredient, normalize};

/// One consistent view of the loaded reference tables.
#[derive(Debug, Clone, Default)]
pub struct BridgeSnapshot {
    master: Option<Arc<MasterIndex>>,
    secondary: Arc<SecondaryIndex>,
    reimbursement: Arc<ReimbursementIndex>,
}

impl BridgeSnapshot {
    pub fn master(&self) -> Option<&MasterIndex> {
        self.master.as_deref()
    }

    pub fn secondary(&self) -> &SecondaryIndex {
        &self.secondary
    }

    pub fn reimbursement(&self) -> &ReimbursementIndex {
        &self.reimbursement
    }

    /// Resolve one ingredient name against this snapshot.
    pub fn lookup(&self, name: &str) -> Result<MatchResult> {
        let master = self.master().ok_or(BridgeError::Uninitialized)?;

        let token = first_ingredient(name);
        if token.is_empty() {
            return Ok(MatchResult::unresolved(
                name.trim(),
                ReimbursementStatus::NotFound,
                MatchMethod::NoInput,
                "",
            ));
        }

        let normalized = normalize(token);
        if let Some(rule) = matched_rule(token) {
            debug!(name = token, rule, "herbal ingredient detected");
            return Ok(MatchResult::unresolved(
                token,
                ReimbursementStatus::Herbal,
                MatchMethod::HerbalDetected,
                normalized,
            ));
        }

        let lowered = token.to_lowercase();
        let candidates = master
            .candidates(&normalized)
            .or_else(|| master.candidates(&lowered));

        if let Some(codes) = candidates {
            for code in codes {
                if let Some(entry) = self.reimbursement.primary(code) {
                    return Ok(self.matched(
                        token,
                        code,
                        master.info(code),
                        entry,
                        MatchMethod::Normalized,
                        normalized,
                    ));
                }
            }

            // Known to the master but absent from the price list.
            if let Some(code) = codes.first() {
                let mut result = MatchResult::unresolved(
                    display_name(token, master.info(code)),
                    ReimbursementStatus::NotCovered,
                    MatchMethod::Normalized,
                    normalized,
                );
                result.ingredient_code = Some(code.clone());
                return Ok(result);
            }
        }

        if let Some(code) = self.secondary.code_for(&lowered)
            && let Some(entry) = self.reimbursement.primary(code)
        {
            debug!(name = token, code, "resolved through ATC mapping");
            return Ok(self.matched(
                token,
                code,
                master.info(code),
                entry,
                MatchMethod::AtcFallback,
                lowered,
            ));
        }

        debug!(name = token, normalized = %normalized, "no ingredient code matched");
        Ok(MatchResult::unresolved(
            token,
            ReimbursementStatus::NotFound,
            MatchMethod::Unmatched,
            normalized,
        ))
    }

    fn matched(
        &self,
        token: &str,
        code: &str,
        info: Option<&IngredientInfo>,
        entry: &ReimbursementEntry,
        method: MatchMethod,
        normalized: String,
    ) -> MatchResult {
        let (status, recognized) = status_from_criteria(&entry.criteria);
        if !recognized {
            debug!(
                code,
                criteria = %entry.criteria,
                "unrecognized reimbursement criteria; treating as reimbursed"
            );
        }
        MatchResult {
            ingredient_code: Some(code.to_string()),
            ingredient_name: display_name(token, info),
            status,
            criteria: Some(entry.criteria.clone()),
            price_ceiling: entry.price_ceiling,
            match_method: method,
            normalized_name: normalized,
            criteria_recognized: recognized,
        }
    }
}

fn display_name(token: &str, info: Option<&IngredientInfo>) -> String {
    info.map(|info| info.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| token.to_string())
}

/// Map a reimbursement criteria value to a status.
///
/// Returns `(status, recognized)`. Values are compared whole after trimming,
/// so compounds such as `급여삭제` or `비급여` are not recognized. Unrecognized
/// values, including an empty field, count as reimbursed with
/// `recognized == false`.
pub fn status_from_criteria(criteria: &str) -> (ReimbursementStatus, bool) {
    match criteria.trim().to_ascii_lowercase().as_str() {
        "급여" | "covered" | "reimbursed" => (ReimbursementStatus::Reimbursed, true),
        "삭제" | "removed" | "deleted" => (ReimbursementStatus::Deleted, true),
        _ => (ReimbursementStatus::Reimbursed, false),
    }
}

/// Loaded-table counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BridgeStats {
    pub master_loaded: bool,
    pub reimbursement_loaded: bool,
    pub unique_names: usize,
    pub unique_codes: usize,
    pub reimbursement_codes: usize,
    pub secondary_names: usize,
}

/// Thread-safe ingredient bridge over swappable reference snapshots.
#[derive(Debug, Default)]
pub struct IngredientBridge {
    snapshot: RwLock<Arc<BridgeSnapshot>>,
}

impl IngredientBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bridge with all three tables loaded.
    pub fn from_tables(tables: &ReferenceTables) -> Self {
        let bridge = Self::new();
        bridge.load(tables);
        bridge
    }

    /// Current snapshot. The lock is released before this returns.
    pub fn snapshot(&self) -> Arc<BridgeSnapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn swap(&self, update: impl FnOnce(&mut BridgeSnapshot)) {
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = BridgeSnapshot::clone(&guard);
        update(&mut next);
        *guard = Arc::new(next);
    }

    /// Replace the ingredient master. Returns the number of rows indexed.
    pub fn load_master(&self, rows: &[MasterRow]) -> usize {
        let index = Arc::new(MasterIndex::build(rows));
        let indexed = index.rows();
        info!(
            rows = indexed,
            names = index.unique_names(),
            codes = index.unique_codes(),
            "loaded ingredient master"
        );
        self.swap(|snapshot| snapshot.master = Some(index));
        indexed
    }

    /// Replace the ATC name mapping. Returns the number of distinct names.
    pub fn load_secondary(&self, rows: &[SecondaryRow]) -> usize {
        let index = Arc::new(SecondaryIndex::build(rows));
        let names = index.len();
        info!(names, "loaded ATC name mapping");
        self.swap(|snapshot| snapshot.secondary = index);
        names
    }

    /// Replace the reimbursement table. Returns the number of rows indexed.
    pub fn load_reimbursement(&self, rows: &[ReimbursementRow]) -> usize {
        let index = Arc::new(ReimbursementIndex::build(rows));
        let indexed = index.rows();
        info!(
            rows = indexed,
            codes = index.unique_codes(),
            "loaded reimbursement table"
        );
        self.swap(|snapshot| snapshot.reimbursement = index);
        indexed
    }

    /// Replace all three tables in one swap.
    pub fn load(&self, tables: &ReferenceTables) {
        let master = Arc::new(MasterIndex::build(&tables.master));
        let secondary = Arc::new(SecondaryIndex::build(&tables.secondary));
        let reimbursement = Arc::new(ReimbursementIndex::build(&tables.reimbursement));
        info!(
            master_rows = master.rows(),
            secondary_names = secondary.len(),
            reimbursement_rows = reimbursement.rows(),
            "loaded reference tables"
        );
        self.swap(|snapshot| {
            *snapshot = BridgeSnapshot {
                master: Some(master),
                secondary,
                reimbursement,
            };
        });
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().master.is_some()
    }

    pub fn lookup(&self, name: &str) -> Result<MatchResult> {
        self.snapshot().lookup(name)
    }

    /// Look up every name against the same snapshot, preserving input order.
    pub fn batch_lookup<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<MatchResult>> {
        let snapshot = self.snapshot();
        names
            .iter()
            .map(|name| snapshot.lookup(name.as_ref()))
            .collect()
    }

    pub fn stats(&self) -> BridgeStats {
        let snapshot = self.snapshot();
        let master = snapshot.master();
        BridgeStats {
            master_loaded: master.is_some(),
            reimbursement_loaded: snapshot.reimbursement.unique_codes() > 0,
            unique_names: master.map_or(0, MasterIndex::unique_names),
            unique_codes: master.map_or(0, MasterIndex::unique_codes),
            reimbursement_codes: snapshot.reimbursement.unique_codes(),
            secondary_names: snapshot.secondary.len(),
        }
    }
}
