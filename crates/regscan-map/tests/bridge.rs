//! Integration tests for the ingredient bridge.

use std::sync::Arc;
use std::thread;

use regscan_map::{BridgeError, IngredientBridge};
use regscan_model::{
    MasterRow, MatchMethod, ReferenceTables, ReimbursementRow, ReimbursementStatus, SecondaryRow,
};

fn master(raw_name: &str, code: &str) -> MasterRow {
    MasterRow {
        raw_name: raw_name.to_string(),
        code: code.to_string(),
        form: "tablet".to_string(),
        strength: "5".to_string(),
        unit: "mg".to_string(),
    }
}

fn reimbursement(code: &str, criteria: &str, price: Option<f64>) -> ReimbursementRow {
    ReimbursementRow {
        ingredient_code: code.to_string(),
        criteria: criteria.to_string(),
        price_ceiling: price,
    }
}

fn secondary(name: &str, code: &str) -> SecondaryRow {
    SecondaryRow {
        name: name.to_string(),
        code: code.to_string(),
    }
}

fn sample_tables() -> ReferenceTables {
    ReferenceTables {
        master: vec![
            master("Amlodipine Besylate", "111501ATB"),
            master("Rivastigmine Tartarate", "222801ACH"),
            master("Cetirizine Hydrochloride", "300B"),
            master("Cetirizine Hydrochloride", "100A"),
            master("Valsartan", "400V"),
        ],
        secondary: vec![
            secondary("Pembrolizumab", "640001BIJ"),
            secondary("Nivolumab", "650001BIJ"),
        ],
        reimbursement: vec![
            reimbursement("111501ATB", "급여", Some(512.0)),
            reimbursement("222801ACH", "삭제", None),
            reimbursement("300B", "급여", Some(90.0)),
            reimbursement("640001BIJ", "급여", Some(2_150_000.0)),
        ],
    }
}

fn loaded_bridge() -> IngredientBridge {
    IngredientBridge::from_tables(&sample_tables())
}

#[test]
fn covered_master_ingredient_is_reimbursed() {
    let bridge = loaded_bridge();
    let result = bridge.lookup("Amlodipine Besylate").expect("lookup");

    assert_eq!(result.status, ReimbursementStatus::Reimbursed);
    assert_eq!(result.match_method, MatchMethod::Normalized);
    assert_eq!(result.ingredient_code.as_deref(), Some("111501ATB"));
    assert_eq!(result.ingredient_name, "Amlodipine Besylate");
    assert_eq!(result.normalized_name, "amlodipine besilate");
    assert_eq!(result.criteria.as_deref(), Some("급여"));
    assert_eq!(result.price_ceiling, Some(512.0));
    assert!(result.criteria_recognized);
}

#[test]
fn spelling_variants_resolve_to_same_code() {
    let bridge = loaded_bridge();
    let variant = bridge
        .lookup("amlodipine besilate (as amlodipine 5mg)")
        .expect("lookup");
    assert_eq!(variant.ingredient_code.as_deref(), Some("111501ATB"));
}

#[test]
fn deleted_criteria_maps_to_deleted() {
    let bridge = loaded_bridge();
    let result = bridge.lookup("Rivastigmine Tartrate").expect("lookup");
    assert_eq!(result.status, ReimbursementStatus::Deleted);
    assert_eq!(result.price_ceiling, None);
}

#[test]
fn master_without_price_entry_is_not_covered() {
    let bridge = loaded_bridge();
    let result = bridge.lookup("Valsartan").expect("lookup");
    assert_eq!(result.status, ReimbursementStatus::NotCovered);
    assert_eq!(result.match_method, MatchMethod::Normalized);
    assert_eq!(result.ingredient_code.as_deref(), Some("400V"));
    assert_eq!(result.criteria, None);
}

#[test]
fn candidates_are_tried_in_code_order() {
    let bridge = loaded_bridge();
    // 100A sorts first but has no price entry; 300B does.
    let result = bridge.lookup("Cetirizine Hydrochloride").expect("lookup");
    assert_eq!(result.ingredient_code.as_deref(), Some("300B"));
    assert_eq!(result.status, ReimbursementStatus::Reimbursed);
}

#[test]
fn atc_mapping_is_used_as_fallback() {
    let bridge = loaded_bridge();
    let result = bridge.lookup("Pembrolizumab").expect("lookup");
    assert_eq!(result.match_method, MatchMethod::AtcFallback);
    assert_eq!(result.status, ReimbursementStatus::Reimbursed);
    assert_eq!(result.ingredient_code.as_deref(), Some("640001BIJ"));
    assert_eq!(result.normalized_name, "pembrolizumab");
    assert_eq!(result.price_ceiling, Some(2_150_000.0));
}

#[test]
fn atc_mapping_without_price_entry_is_unmatched() {
    let bridge = loaded_bridge();
    let result = bridge.lookup("Nivolumab").expect("lookup");
    assert_eq!(result.status, ReimbursementStatus::NotFound);
    assert_eq!(result.match_method, MatchMethod::Unmatched);
    assert!(!result.is_matched());
}

#[test]
fn herbal_names_bypass_code_matching() {
    let bridge = loaded_bridge();
    let result = bridge
        .lookup("Ginkgo Biloba Leaf Dried Extract")
        .expect("lookup");
    assert_eq!(result.status, ReimbursementStatus::Herbal);
    assert_eq!(result.match_method, MatchMethod::HerbalDetected);
    assert_eq!(result.ingredient_code, None);
}

#[test]
fn blank_input_is_no_input() {
    let bridge = loaded_bridge();
    for name in ["", "   ", " / Valsartan"] {
        let result = bridge.lookup(name).expect("lookup");
        assert_eq!(result.status, ReimbursementStatus::NotFound);
        assert_eq!(result.match_method, MatchMethod::NoInput);
    }
}

#[test]
fn composite_names_use_first_ingredient() {
    let bridge = loaded_bridge();
    let result = bridge
        .lookup("Amlodipine Besylate/Valsartan")
        .expect("lookup");
    assert_eq!(result.ingredient_code.as_deref(), Some("111501ATB"));
}

#[test]
fn lookup_is_deterministic() {
    let bridge = loaded_bridge();
    let names = [
        "Amlodipine Besylate",
        "Cetirizine Hydrochloride",
        "Pembrolizumab",
        "Unknownumab",
    ];
    let first = bridge.batch_lookup(&names).expect("batch");
    let second = bridge.batch_lookup(&names).expect("batch");
    assert_eq!(first, second);
    assert_eq!(first.len(), names.len());
    assert_eq!(first[3].match_method, MatchMethod::Unmatched);
}

#[test]
fn lookup_before_master_load_fails() {
    let bridge = IngredientBridge::new();
    bridge.load_reimbursement(&sample_tables().reimbursement);
    assert_eq!(
        bridge.lookup("Amlodipine Besylate"),
        Err(BridgeError::Uninitialized)
    );
}

#[test]
fn unrecognized_criteria_are_flagged() {
    let bridge = IngredientBridge::new();
    bridge.load_master(&[master("Metformin Hydrochloride", "500M")]);
    bridge.load_reimbursement(&[reimbursement("500M", "", Some(-3.0))]);

    let result = bridge.lookup("Metformin Hydrochloride").expect("lookup");
    assert_eq!(result.status, ReimbursementStatus::Reimbursed);
    assert!(!result.criteria_recognized);
    assert_eq!(result.price_ceiling, None);
}

#[test]
fn compound_criteria_values_are_flagged() {
    let bridge = IngredientBridge::new();
    bridge.load_master(&[master("Foo", "1"), master("Bar", "2")]);
    bridge.load_reimbursement(&[
        reimbursement("1", "급여삭제", None),
        reimbursement("2", "비급여", None),
    ]);

    for name in ["Foo", "Bar"] {
        let result = bridge.lookup(name).expect("lookup");
        assert_eq!(result.status, ReimbursementStatus::Reimbursed);
        assert!(!result.criteria_recognized, "{name}");
    }
}

#[test]
fn reload_replaces_tables() {
    let bridge = loaded_bridge();
    let before = bridge.snapshot();

    bridge.load_reimbursement(&[reimbursement("111501ATB", "삭제", None)]);

    let result = bridge.lookup("Amlodipine Besylate").expect("lookup");
    assert_eq!(result.status, ReimbursementStatus::Deleted);

    // A snapshot taken before the reload still sees the old tables.
    let old = before.lookup("Amlodipine Besylate").expect("lookup");
    assert_eq!(old.status, ReimbursementStatus::Reimbursed);
}

#[test]
fn stats_reflect_loaded_tables() {
    let empty = IngredientBridge::new().stats();
    assert!(!empty.master_loaded);
    assert!(!empty.reimbursement_loaded);

    let stats = loaded_bridge().stats();
    assert!(stats.master_loaded);
    assert!(stats.reimbursement_loaded);
    assert_eq!(stats.unique_codes, 5);
    assert_eq!(stats.reimbursement_codes, 4);
    assert_eq!(stats.secondary_names, 2);
}

#[test]
fn concurrent_lookups_during_reload() {
    let bridge = Arc::new(loaded_bridge());
    let tables = sample_tables();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let bridge = Arc::clone(&bridge);
            thread::spawn(move || {
                for _ in 0..100 {
                    let result = bridge.lookup("Amlodipine Besylate").expect("lookup");
                    assert_eq!(result.ingredient_code.as_deref(), Some("111501ATB"));
                }
            })
        })
        .collect();

    for _ in 0..10 {
        bridge.load(&tables);
    }
    for reader in readers {
        reader.join().expect("reader thread");
    }
}
