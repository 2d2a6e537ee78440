use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of the persisted key/value store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredKeys(BTreeMap<String, String>);

impl StoredKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Keys whose value differs between `self` and `other`, including keys
    /// present in only one of them. Sorted.
    pub fn changed_keys(&self, other: &StoredKeys) -> Vec<String> {
        let mut changed: Vec<String> = self
            .0
            .iter()
            .filter(|(key, value)| other.0.get(*key) != Some(*value))
            .map(|(key, _)| key.clone())
            .collect();

        changed.extend(
            other
                .0
                .keys()
                .filter(|key| !self.0.contains_key(*key))
                .cloned(),
        );

        changed.sort();
        changed
    }
}
