//! Variable environments for pattern binding.

use crate::Value;
use std::collections::HashMap;

/// A set of variable bindings (name to value).
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    map: HashMap<String, Value>,
}

impl Bindings {
    /// Create new empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create bindings with a single entry.
    pub fn with(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut bindings = Self::new();
        bindings.insert(name, value);
        bindings
    }

    /// Insert a binding, replacing any previous value for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(name.into(), value.into());
    }

    /// Get a binding by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// Check if a variable is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Get all variable names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|s| s.as_str())
    }

    /// Clone with an additional binding.
    pub fn extend_with(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut new_bindings = self.clone();
        new_bindings.insert(name, value);
        new_bindings
    }

    /// Merge with another set of bindings; the other set wins on conflicts.
    pub fn merge(&mut self, other: &Bindings) {
        for (name, value) in &other.map {
            self.map.insert(name.clone(), value.clone());
        }
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}
