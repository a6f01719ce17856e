//! Session-scoped variable store.
//!
//! A flat map from name to string value. Values are untyped: arithmetic
//! commands parse them on demand. The store survives across lines until
//! `clear` empties it or the session ends.

use rustc_hash::FxHashMap;

/// Mapping from variable name to string value.
#[derive(Clone, Debug, Default)]
pub struct VariableStore {
    vars: FxHashMap<String, String>,
}

impl VariableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, overwriting any previous binding.
    ///
    /// Returns the previous value, if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        tracing::debug!(%name, %value, "set variable");
        self.vars.insert(name, value)
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Remove a variable, returning its value if it was bound.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let removed = self.vars.remove(name);
        tracing::debug!(name, found = removed.is_some(), "delete variable");
        removed
    }

    /// Remove every binding.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.vars.len(), "clear variables");
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Resolve an operand: the stored value if `token` names a variable,
    /// otherwise the token itself.
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.get(token).unwrap_or(token)
    }

    /// All bindings ordered by name.
    ///
    /// The map itself is unordered; sorting here keeps `list` output stable.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .vars
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
