use serde::{Deserialize, Serialize};

/// A domestic clinical trial registered with CRIS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalTrial {
    /// Registry identifier (e.g., "KCT0001234").
    pub trial_id: String,
    pub title: String,
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub indication: String,
    #[serde(default)]
    pub sponsor: String,
    /// Intervention names the trial is indexed under.
    #[serde(default)]
    pub drug_names: Vec<String>,
}

impl ClinicalTrial {
    pub fn new(trial_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            trial_id: trial_id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper for attaching drug names.
    #[must_use]
    pub fn with_drug_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drug_names = names.into_iter().map(Into::into).collect();
        self
    }
}
