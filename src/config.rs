use crate::{TriggerSet, DEFAULT_TRIGGERS};

/// Host configuration: which triggers it emits and the raw rule texts.
///
/// With the `serde` feature this deserializes from any serde format; a
/// missing `triggers` list falls back to [`DEFAULT_TRIGGERS`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub triggers: Vec<String>,
    pub rules: Vec<String>,
}

impl EngineConfig {
    #[must_use]
    pub fn trigger_set(&self) -> TriggerSet {
        self.triggers.iter().map(String::as_str).collect()
    }

    /// Add a rule text.
    #[must_use]
    pub fn rule(mut self, text: &str) -> Self {
        self.rules.push(text.to_owned());
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            triggers: DEFAULT_TRIGGERS.iter().map(|t| (*t).to_owned()).collect(),
            rules: Vec::new(),
        }
    }
}
