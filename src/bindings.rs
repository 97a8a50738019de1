//! Variable bindings supplied to the evaluator
//!
//! Names are matched exactly; any case folding is the caller's business.

use rustc_hash::FxHashMap;
use std::f64::consts::{E, PI};

/// Mapping from variable name to its current numeric value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: FxHashMap<String, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings pre-populated with the constants `pi` and `e`
    pub fn with_constants() -> Self {
        let mut bindings = Self::new();
        bindings.set("pi", PI);
        bindings.set("e", E);
        bindings
    }

    /// Bind `name` to `value`, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Builder-style variant of [`Bindings::set`]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Rebind an existing variable without allocating a new key
    ///
    /// Falls back to inserting when the name is not yet bound.
    pub(crate) fn rebind(&mut self, name: &str, value: f64) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_string(), value);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.set(name, value);
        }
        bindings
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Bindings {
    fn from(pairs: [(K, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut b = Bindings::new();
        assert!(b.is_empty());
        b.set("x", 2.0);
        assert_eq!(b.get("x"), Some(2.0));
        assert_eq!(b.get("X"), None);
        b.rebind("x", 3.0);
        assert_eq!(b.get("x"), Some(3.0));
        b.rebind("y", 1.0);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_constants() {
        let b = Bindings::with_constants();
        assert_eq!(b.get("pi"), Some(PI));
        assert_eq!(b.get("e"), Some(E));
    }

    #[test]
    fn test_from_array() {
        let b = Bindings::from([("a", 1.0), ("b", 2.0)]);
        assert_eq!(b.get("b"), Some(2.0));
        assert_eq!(b.iter().count(), 2);
    }
}
