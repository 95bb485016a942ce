//! `${name}` placeholder expansion over a flat key/value store.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\$\{([a-zA-Z_0-9.]+)\}").ok());

/// Properties whose values may reference other properties as `${name}`.
///
/// Expansion happens on every read and is a single left-to-right pass:
/// substituted text is not expanded again, and a reference to an undefined
/// name expands to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandingProperties {
    values: IndexMap<String, String>,
}

impl ExpandingProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw, unexpanded value. Returns the previous raw value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Expanded value of `key`, or `None` if the key is not defined.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|raw| self.expand(raw))
    }

    /// Raw value of `key` without expansion.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Expand the placeholders of an arbitrary string against these properties.
    pub fn expand(&self, text: &str) -> String {
        let Some(placeholder) = PLACEHOLDER.as_ref() else {
            return text.to_string();
        };
        placeholder
            .replace_all(text, |caps: &Captures<'_>| {
                self.values.get(&caps[1]).cloned().unwrap_or_default()
            })
            .into_owned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ExpandingProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
