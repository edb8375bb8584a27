use std::collections::BTreeSet;

/// Lifecycle events the host knows how to emit.
pub const DEFAULT_TRIGGERS: &[&str] = &["created", "maximized", "minimized", "fullscreened"];

/// The set of trigger names a host recognizes.
///
/// Rules naming a trigger outside this set still load, but they never fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSet {
    names: BTreeSet<String>,
}

impl TriggerSet {
    /// An empty set; no trigger is recognized.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Add a trigger name to the set.
    #[must_use]
    pub fn with(mut self, name: &str) -> Self {
        self.names.insert(name.to_owned());
        self
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_owned())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for TriggerSet {
    fn default() -> Self {
        DEFAULT_TRIGGERS.iter().copied().collect()
    }
}

impl<'a> FromIterator<&'a str> for TriggerSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(str::to_owned).collect(),
        }
    }
}
