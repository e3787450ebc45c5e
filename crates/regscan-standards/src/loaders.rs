use std::fs;
use std::path::Path;

use regscan_model::{
    ClinicalTrial, GlobalApprovalStatus, MasterRow, ReferenceTables, ReimbursementRow,
    SecondaryRow,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::TablePaths;
use crate::csv_utils::{get_field, read_csv_rows};
use crate::error::{Result, StandardsError};

/// Ingredient master columns (data.go.kr export).
pub const MASTER_NAME_COLUMN: &str = "일반명";
pub const MASTER_CODE_COLUMN: &str = "일반명코드";
pub const MASTER_FORM_COLUMN: &str = "제형";
pub const MASTER_STRENGTH_COLUMN: &str = "함량";
pub const MASTER_UNIT_COLUMN: &str = "단위";

/// HIRA ATC mapping columns.
pub const ATC_NAME_COLUMN: &str = "ATC코드 명칭";
pub const ATC_CODE_COLUMN: &str = "주성분코드";

/// Load the ingredient master CSV.
pub fn load_master_table(path: &Path) -> Result<Vec<MasterRow>> {
    let table = read_csv_rows(path)?;
    table.require_column(path, MASTER_NAME_COLUMN)?;
    table.require_column(path, MASTER_CODE_COLUMN)?;

    let rows: Vec<MasterRow> = table
        .rows
        .iter()
        .map(|row| MasterRow {
            raw_name: get_field(row, MASTER_NAME_COLUMN),
            code: get_field(row, MASTER_CODE_COLUMN),
            form: get_field(row, MASTER_FORM_COLUMN),
            strength: get_field(row, MASTER_STRENGTH_COLUMN),
            unit: get_field(row, MASTER_UNIT_COLUMN),
        })
        .filter(|row| !row.raw_name.is_empty() && !row.code.is_empty())
        .collect();

    info!(path = %path.display(), rows = rows.len(), "read ingredient master");
    Ok(rows)
}

/// Load the ATC mapping CSV. A missing file yields an empty table.
pub fn load_secondary_table(path: &Path) -> Result<Vec<SecondaryRow>> {
    if !path.exists() {
        debug!(path = %path.display(), "ATC mapping not found; skipping");
        return Ok(Vec::new());
    }
    let table = read_csv_rows(path)?;
    table.require_column(path, ATC_NAME_COLUMN)?;
    table.require_column(path, ATC_CODE_COLUMN)?;

    let rows: Vec<SecondaryRow> = table
        .rows
        .iter()
        .map(|row| SecondaryRow {
            name: get_field(row, ATC_NAME_COLUMN),
            code: get_field(row, ATC_CODE_COLUMN),
        })
        .filter(|row| !row.name.is_empty() && !row.code.is_empty())
        .collect();

    info!(path = %path.display(), rows = rows.len(), "read ATC mapping");
    Ok(rows)
}

/// HIRA price list record as exported; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawReimbursement {
    #[serde(default)]
    ingredient_code: Option<String>,
    #[serde(default, rename = "급여기준", alias = "criteria")]
    criteria: Option<String>,
    #[serde(default)]
    price_ceiling: Option<Value>,
}

/// Price ceilings arrive as numbers or as strings such as "1,234,000".
fn parse_price(value: Option<&Value>) -> Option<f64> {
    let price = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let cleaned: String = text
                .chars()
                .filter(|ch| !matches!(ch, ',' | ' ' | '₩'))
                .collect();
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };
    (price.is_finite() && price >= 0.0).then_some(price)
}

/// Load the HIRA reimbursement JSON (an array of price-list records).
pub fn load_reimbursement_table(path: &Path) -> Result<Vec<ReimbursementRow>> {
    let raw: Vec<RawReimbursement> = read_json(path)?;
    let rows: Vec<ReimbursementRow> = raw
        .into_iter()
        .filter_map(|record| {
            let code = record.ingredient_code.unwrap_or_default().trim().to_string();
            if code.is_empty() {
                return None;
            }
            let price_ceiling = parse_price(record.price_ceiling.as_ref());
            Some(ReimbursementRow {
                ingredient_code: code,
                criteria: record.criteria.unwrap_or_default().trim().to_string(),
                price_ceiling,
            })
        })
        .collect();

    info!(path = %path.display(), rows = rows.len(), "read reimbursement table");
    Ok(rows)
}

/// Load all three reference tables.
pub fn load_reference_tables(paths: &TablePaths) -> Result<ReferenceTables> {
    let master_path = paths
        .master
        .as_deref()
        .ok_or_else(|| StandardsError::InvalidConfig {
            message: "tables.master is not set".to_string(),
        })?;
    let master = load_master_table(master_path)?;
    let secondary = match paths.secondary.as_deref() {
        Some(path) => load_secondary_table(path)?,
        None => Vec::new(),
    };
    let reimbursement = match paths.reimbursement.as_deref() {
        Some(path) => load_reimbursement_table(path)?,
        None => Vec::new(),
    };
    Ok(ReferenceTables {
        master,
        secondary,
        reimbursement,
    })
}

/// Load parsed domestic clinical trials (JSON array).
pub fn load_trials(path: &Path) -> Result<Vec<ClinicalTrial>> {
    let trials: Vec<ClinicalTrial> = read_json(path)?;
    info!(path = %path.display(), trials = trials.len(), "read clinical trials");
    Ok(trials)
}

/// Load per-ingredient global approval statuses (JSON array).
pub fn load_statuses(path: &Path) -> Result<Vec<GlobalApprovalStatus>> {
    let statuses: Vec<GlobalApprovalStatus> = read_json(path)?;
    info!(path = %path.display(), statuses = statuses.len(), "read approval statuses");
    Ok(statuses)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(StandardsError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    serde_json::from_str(contents.trim_start_matches('\u{feff}')).map_err(|e| {
        StandardsError::Json {
            path: path.to_path_buf(),
            source: e,
        }
    })
}
