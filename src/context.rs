//! Template context handling.
//! A context maps names to arbitrary serializable values and keeps them in
//! insertion order, so templates iterating it see keys in the order they were added.

use indexmap::IndexMap;
use minijinja::Value;
use serde::Serialize;

/// Named values supplied to fill a template's placeholders.
///
/// Values are converted to template values on insertion. Native Rust types
/// and serde-derived records convert directly; numbers held in a
/// `serde_json::Value` do not survive the conversion and should be passed
/// as native numbers instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context {
    values: IndexMap<String, Value>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the context, replacing any previous value under `key`.
    ///
    /// A replaced key keeps its original position.
    pub fn insert<K, V>(&mut self, key: K, value: &V)
    where
        K: Into<String>,
        V: Serialize + ?Sized,
    {
        self.values.insert(key.into(), Value::from_serialize(value));
    }

    /// Builder-style variant of [`Context::insert`].
    pub fn with<K, V>(mut self, key: K, value: &V) -> Self
    where
        K: Into<String>,
        V: Serialize + ?Sized,
    {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
