use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::FromIterator;

use crate::error::{Error, ResultE};

/// Mapping from symbol name to value, used to resolve symbolic properties
/// at forge time.
/// A `Context` is never modified once handed to the engine: every derivation
/// (transformations, local overrides) produces a new one.
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<String, f64>,
}

impl Context {
    pub fn new() -> Self {
        Default::default()
    }
    /// Return a copy of this context with `name` bound to `value`.
    pub fn with<S: Into<String>>(&self, name: S, value: f64) -> Context {
        let mut values = self.values.clone();
        values.insert(name.into(), value);
        Context { values }
    }
    /// Look up a symbol, failing if it isn't defined.
    pub fn get(&self, name: &str) -> ResultE<f64> {
        self.lookup(name).ok_or_else(|| Error::ContextResolution(name.to_string()))
    }
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.values.get(name).cloned()
    }
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
    /// Structural union of the two contexts; bindings in `overrides` shadow ours.
    pub fn merge(&self, overrides: &Context) -> Context {
        if overrides.is_empty() {
            return self.clone();
        }
        let mut values = self.values.clone();
        values.extend(overrides.iter().map(|(k, v)| (k.to_string(), v)));
        Context { values }
    }
    pub fn iter(&self) -> impl Iterator<Item=(&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Bind `name` in place; only for contexts being derived.
    pub(crate) fn bind(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Context {
    fn from_iter<I: IntoIterator<Item=(S, f64)>>(iter: I) -> Self {
        Context {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for Context {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
