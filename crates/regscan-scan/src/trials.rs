//! Domestic clinical trial index keyed by normalized drug name.

use std::collections::BTreeMap;

use regscan_map::normalize;
use regscan_model::ClinicalTrial;
use tracing::info;

/// Names this short after normalization are too ambiguous to index.
const MIN_NAME_LEN: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct TrialIndex {
    by_drug: BTreeMap<String, Vec<ClinicalTrial>>,
}

impl TrialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_trials(trials: &[ClinicalTrial]) -> Self {
        let mut index = Self::new();
        index.load(trials);
        index
    }

    /// Replace the index contents. Returns the number of distinct drug names.
    pub fn load(&mut self, trials: &[ClinicalTrial]) -> usize {
        self.by_drug.clear();
        for trial in trials {
            for drug in &trial.drug_names {
                let key = normalize(drug);
                if key.chars().count() < MIN_NAME_LEN {
                    continue;
                }
                let entries = self.by_drug.entry(key).or_default();
                // A trial listing the same drug twice is attached once.
                if !entries.iter().any(|t| t.trial_id == trial.trial_id) {
                    entries.push(trial.clone());
                }
            }
        }
        info!(
            trials = trials.len(),
            drugs = self.by_drug.len(),
            "loaded clinical trial index"
        );
        self.by_drug.len()
    }

    /// Trials whose drug list contains `name` after normalization.
    pub fn lookup(&self, name: &str) -> &[ClinicalTrial] {
        let key = normalize(name);
        if key.is_empty() {
            return &[];
        }
        self.by_drug.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn drug_count(&self) -> usize {
        self.by_drug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_drug.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(id: &str, drugs: &[&str]) -> ClinicalTrial {
        ClinicalTrial::new(id, format!("Study {id}")).with_drug_names(drugs.iter().copied())
    }

    #[test]
    fn indexes_by_normalized_name() {
        let index = TrialIndex::from_trials(&[trial("KCT0001", &["Pembrolizumab (MK-3475)"])]);
        assert_eq!(index.lookup("PEMBROLIZUMAB").len(), 1);
        assert_eq!(index.lookup("pembrolizumab").len(), 1);
    }

    #[test]
    fn skips_short_names() {
        let index = TrialIndex::from_trials(&[trial("KCT0002", &["AB", "x", " "])]);
        assert!(index.is_empty());
        assert!(index.lookup("ab").is_empty());
    }

    #[test]
    fn collects_trials_per_drug() {
        let index = TrialIndex::from_trials(&[
            trial("KCT0001", &["Nivolumab", "Ipilimumab"]),
            trial("KCT0002", &["Nivolumab", "nivolumab"]),
        ]);
        assert_eq!(index.lookup("Nivolumab").len(), 2);
        assert_eq!(index.lookup("Ipilimumab").len(), 1);
        assert_eq!(index.drug_count(), 2);
    }

    #[test]
    fn reload_replaces_previous_trials() {
        let mut index = TrialIndex::from_trials(&[trial("KCT0001", &["Nivolumab"])]);
        index.load(&[trial("KCT0003", &["Tislelizumab"])]);
        assert!(index.lookup("Nivolumab").is_empty());
        assert_eq!(index.lookup("Tislelizumab").len(), 1);
    }
}
