//! In-memory indices over the reference tables.
//!
//! Each index is built in one pass from parsed rows and never mutated
//! afterwards; the bridge swaps whole indices on reload.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use regscan_model::{IngredientInfo, MasterRow, ReimbursementRow, SecondaryRow};

use crate::normalize::normalize;

/// Ingredient master: name → candidate codes, code → descriptive info.
#[derive(Debug, Clone, Default)]
pub struct MasterIndex {
    /// Keys are both the normalized and the raw lowercased name.
    name_to_codes: HashMap<String, BTreeSet<String>>,
    /// First row seen for each code wins.
    code_to_info: BTreeMap<String, IngredientInfo>,
    rows: usize,
}

impl MasterIndex {
    pub fn build(rows: &[MasterRow]) -> Self {
        let mut index = Self::default();
        for row in rows {
            let raw_name = row.raw_name.trim();
            let code = row.code.trim();
            if raw_name.is_empty() || code.is_empty() {
                continue;
            }

            for key in [normalize(raw_name), raw_name.to_lowercase()] {
                if key.is_empty() {
                    continue;
                }
                index
                    .name_to_codes
                    .entry(key)
                    .or_default()
                    .insert(code.to_string());
            }

            index
                .code_to_info
                .entry(code.to_string())
                .or_insert_with(|| IngredientInfo::from(row));
            index.rows += 1;
        }
        index
    }

    /// Candidate codes for a name key, in ascending code order.
    pub fn candidates(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.name_to_codes.get(key).filter(|codes| !codes.is_empty())
    }

    pub fn info(&self, code: &str) -> Option<&IngredientInfo> {
        self.code_to_info.get(code)
    }

    /// Number of rows indexed.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn unique_names(&self) -> usize {
        self.name_to_codes.len()
    }

    pub fn unique_codes(&self) -> usize {
        self.code_to_info.len()
    }
}

/// ATC mapping: lowercased INN → ingredient code.
#[derive(Debug, Clone, Default)]
pub struct SecondaryIndex {
    name_to_code: HashMap<String, String>,
}

impl SecondaryIndex {
    /// Later rows overwrite earlier rows for a repeated name.
    pub fn build(rows: &[SecondaryRow]) -> Self {
        let mut name_to_code = HashMap::new();
        for row in rows {
            let name = row.name.trim().to_lowercase();
            let code = row.code.trim();
            if !name.is_empty() && !code.is_empty() {
                name_to_code.insert(name, code.to_string());
            }
        }
        Self { name_to_code }
    }

    pub fn code_for(&self, lowered_name: &str) -> Option<&str> {
        self.name_to_code.get(lowered_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.name_to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_code.is_empty()
    }
}

/// A single HIRA price-list entry for an ingredient code.
#[derive(Debug, Clone, PartialEq)]
pub struct ReimbursementEntry {
    pub criteria: String,
    pub price_ceiling: Option<f64>,
}

/// HIRA price list: ingredient code → entries in file order.
#[derive(Debug, Clone, Default)]
pub struct ReimbursementIndex {
    by_code: HashMap<String, Vec<ReimbursementEntry>>,
    rows: usize,
}

impl ReimbursementIndex {
    pub fn build(rows: &[ReimbursementRow]) -> Self {
        let mut index = Self::default();
        for row in rows {
            let code = row.ingredient_code.trim();
            if code.is_empty() {
                continue;
            }
            index
                .by_code
                .entry(code.to_string())
                .or_default()
                .push(ReimbursementEntry {
                    criteria: row.criteria.trim().to_string(),
                    price_ceiling: row.valid_price(),
                });
            index.rows += 1;
        }
        index
    }

    /// The entry used for status derivation: the first one loaded.
    pub fn primary(&self, code: &str) -> Option<&ReimbursementEntry> {
        self.by_code.get(code).and_then(|entries| entries.first())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn unique_codes(&self) -> usize {
        self.by_code.len()
    }
}
