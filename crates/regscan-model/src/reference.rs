//! Reference table rows consumed by the ingredient bridge.
//!
//! These are the already-parsed shapes of the three reference tables:
//!
//! | Table | Source | Join key |
//! |-------|--------|----------|
//! | Ingredient master | data.go.kr ingredient master | generic name → ingredient code |
//! | ATC mapping | HIRA ATC code mapping list | INN → ingredient code |
//! | Reimbursement | HIRA applied drug price list | ingredient code |

use serde::{Deserialize, Serialize};

/// One row of the ingredient master table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MasterRow {
    /// Generic name as published (e.g., "Amlodipine Besylate").
    pub raw_name: String,
    /// Ingredient code (e.g., "111501ATB").
    pub code: String,
    #[serde(default)]
    pub form: String,
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub unit: String,
}

/// Descriptive record kept per ingredient code (first row seen wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInfo {
    pub name: String,
    pub form: String,
    pub strength: String,
    pub unit: String,
}

impl From<&MasterRow> for IngredientInfo {
    fn from(row: &MasterRow) -> Self {
        Self {
            name: row.raw_name.trim().to_string(),
            form: row.form.trim().to_string(),
            strength: row.strength.trim().to_string(),
            unit: row.unit.trim().to_string(),
        }
    }
}

/// One row of the auxiliary ATC mapping table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryRow {
    /// ATC code name (an INN-like ingredient name).
    pub name: String,
    /// Ingredient code the name maps to.
    pub code: String,
}

/// One row of the HIRA reimbursement table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReimbursementRow {
    pub ingredient_code: String,
    /// Reimbursement criteria (e.g., "급여" covered, "삭제" removed).
    #[serde(default)]
    pub criteria: String,
    /// Price ceiling in KRW. Absent, non-finite and negative values are dropped.
    #[serde(default)]
    pub price_ceiling: Option<f64>,
}

impl ReimbursementRow {
    /// Price ceiling with invalid values normalized to `None`.
    pub fn valid_price(&self) -> Option<f64> {
        self.price_ceiling
            .filter(|price| price.is_finite() && *price >= 0.0)
    }
}

/// The three reference tables, loaded together for an atomic reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTables {
    pub master: Vec<MasterRow>,
    pub secondary: Vec<SecondaryRow>,
    pub reimbursement: Vec<ReimbursementRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_prices_normalize_to_none() {
        let mut row = ReimbursementRow {
            ingredient_code: "111501ATB".to_string(),
            criteria: "급여".to_string(),
            price_ceiling: Some(512.0),
        };
        assert_eq!(row.valid_price(), Some(512.0));

        row.price_ceiling = Some(f64::NAN);
        assert_eq!(row.valid_price(), None);

        row.price_ceiling = Some(-1.0);
        assert_eq!(row.valid_price(), None);

        row.price_ceiling = None;
        assert_eq!(row.valid_price(), None);
    }

    #[test]
    fn ingredient_info_trims_master_fields() {
        let row = MasterRow {
            raw_name: " Amlodipine Besylate ".to_string(),
            code: "111501ATB".to_string(),
            form: "정제 ".to_string(),
            strength: "5".to_string(),
            unit: " mg".to_string(),
        };
        let info = IngredientInfo::from(&row);
        assert_eq!(info.name, "Amlodipine Besylate");
        assert_eq!(info.form, "정제");
        assert_eq!(info.unit, "mg");
    }
}
