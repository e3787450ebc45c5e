//! Herbal / traditional-medicine ingredient detection.
//!
//! Herbal ingredients are reimbursed under a separate classification regime
//! and never match the generic-ingredient master, so the bridge routes them
//! out before code matching. Detection is a fixed list of named patterns,
//! checked in order against the lowercased name; the first hit wins.

use std::sync::LazyLock;

use regex::Regex;

/// A named herbal detection pattern.
pub struct HerbalRule {
    pub name: &'static str,
    pattern: Regex,
}

impl HerbalRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("Invalid herbal pattern"),
        }
    }

    /// Check the rule against an already lowercased name.
    pub fn matches(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}

static HERBAL_RULES: LazyLock<Vec<HerbalRule>> = LazyLock::new(|| {
    vec![
        // Latin plant-part vocabulary
        HerbalRule::new(
            "plant_part_latin",
            r"\b(radix|folium|fructus|cortex|rhizome|semen|herba|flos)\b",
        ),
        // "Extract (3→1)" or "Extract (3-1)"
        HerbalRule::new("extraction_ratio", r"\bextract\b.*\(\d+[→\-]\d+\)"),
        // "30% ethanol extract", "water soft extract"
        HerbalRule::new(
            "solvent_extract",
            r"\b\d+%\s*(ethanol|water)\s+(soft\s+)?extract\b",
        ),
        HerbalRule::new("dried_or_soft_extract", r"\b(dried|soft)\s+extract\b"),
        // Botanical species epithets common in the herbal pharmacopoeia
        HerbalRule::new(
            "botanical_epithet",
            r"(gigas|japonica|sinensis|chinensis|orientalis)\s*(root|leaf|fruit|bark)?\b",
        ),
        HerbalRule::new(
            "medicinal_genus",
            r"\b(ginkgo|ginseng|angelica|artemisia|alisma|astragalus|panax)\b",
        ),
        // Compound formulas join herbs with a middle dot
        HerbalRule::new("compound_formula_separator", r"·"),
        HerbalRule::new(
            "plant_part_phrase",
            r"\b\w+\s+(root|leaf|bark|fruit|seed|flower)\s*(dried)?\s*(extract)?\b",
        ),
    ]
});

/// The detection rules, in evaluation order.
pub fn herbal_rules() -> &'static [HerbalRule] {
    &HERBAL_RULES
}

/// Name of the first rule that classifies `raw` as herbal.
pub fn matched_rule(raw: &str) -> Option<&'static str> {
    if raw.trim().is_empty() {
        return None;
    }
    let lowered = raw.to_lowercase();
    HERBAL_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.name)
}

/// True when `raw` looks like a herbal or traditional-medicine ingredient.
pub fn is_herbal(raw: &str) -> bool {
    matched_rule(raw).is_some()
}
