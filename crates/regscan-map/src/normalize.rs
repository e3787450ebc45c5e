//! Ingredient name normalization.
//!
//! Normalization only collapses spellings of the *same* compound: case,
//! parenthesized annotations, crystal-water forms and known typos. Different
//! salts (hydrochloride vs dihydrochloride) stay distinct. Matching after
//! normalization is exact string equality.

use std::sync::LazyLock;

use regex::Regex;

/// `(as ...)` salt annotations, e.g. "Amlodipine Besylate (as Amlodipine)".
static AS_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(as[^)]*\)").expect("Invalid annotation regex"));

/// Any other parenthesized clause.
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").expect("Invalid parenthesis regex"));

/// Crystal-water forms of the same compound, longest first.
const HYDRATE_FORMS: &[&str] = &[
    "pentahydrate",
    "tetrahydrate",
    "trihydrate",
    "dihydrate",
    "monohydrate",
    "hemihydrate",
    "hydrate",
    "anhydrous",
];

/// Known misspellings and their standard form.
const TYPO_CORRECTIONS: &[(&str, &str)] = &[("besylate", "besilate"), ("tartarate", "tartrate")];

/// Normalize an ingredient name for exact matching.
///
/// The pass is repeated until the output stops changing: deleting a clause or
/// a hydrate token can splice a new one together, and a fixed point keeps the
/// function idempotent for every input.
pub fn normalize(raw: &str) -> String {
    let mut current = normalize_once(raw);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let without_as = AS_ANNOTATION.replace_all(trimmed, "");
    let mut name = PARENTHESIZED.replace_all(&without_as, "").into_owned();

    for form in HYDRATE_FORMS {
        name = name.replace(form, "");
    }
    for (typo, correct) in TYPO_CORRECTIONS {
        name = name.replace(typo, correct);
    }

    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First ingredient of a composite product string.
///
/// Splits on `/`, then `;`, then `,` and keeps the leading part.
pub fn first_ingredient(raw: &str) -> &str {
    let mut token = raw;
    for sep in ['/', ';', ','] {
        token = token.split(sep).next().unwrap_or("");
    }
    token.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrects_known_typos() {
        assert_eq!(normalize("Amlodipine Besylate"), "amlodipine besilate");
        assert_eq!(normalize("Rivastigmine Tartarate"), "rivastigmine tartrate");
    }

    #[test]
    fn strips_hydrate_forms() {
        assert_eq!(
            normalize("Atorvastatin Calcium Trihydrate"),
            "atorvastatin calcium"
        );
        assert_eq!(normalize("Cefdinir Monohydrate"), "cefdinir");
        assert_eq!(normalize("Caffeine Anhydrous"), "caffeine");
    }

    #[test]
    fn strips_parenthesized_clauses() {
        assert_eq!(
            normalize("Amlodipine Besylate (as Amlodipine 5mg)"),
            "amlodipine besilate"
        );
        assert_eq!(normalize("Metformin HCl (micronized) "), "metformin hcl");
    }

    #[test]
    fn keeps_distinct_salts_apart() {
        assert_eq!(normalize("Cetirizine Hydrochloride"), "cetirizine hydrochloride");
        assert_eq!(
            normalize("Cetirizine Dihydrochloride"),
            "cetirizine dihydrochloride"
        );
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("(as x)"), "");
    }

    #[test]
    fn nested_parentheses_reach_fixed_point() {
        let once = normalize("a (b (c) d) e");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn first_ingredient_splits_composites() {
        assert_eq!(first_ingredient("Amlodipine / Valsartan"), "Amlodipine");
        assert_eq!(first_ingredient("A;B/C"), "A");
        assert_eq!(first_ingredient("Losartan Potassium, Hydrochlorothiazide"), "Losartan Potassium");
        assert_eq!(first_ingredient("  Pembrolizumab "), "Pembrolizumab");
        assert_eq!(first_ingredient(""), "");
    }
}
