//! Insertion-ordered enum-like mappings and the guards over them.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::value::VariantValue;

/// An enum-like mapping: a fixed set of named constants.
///
/// Keys are text identifiers; values are [`VariantValue`] primitives that
/// callers are expected to keep pairwise distinct (not enforced). Entries
/// keep their insertion order; re-inserting an existing key replaces its
/// value without moving the key.
///
/// The mapping is the dynamic counterpart of a Rust enum: route untrusted
/// data through [`VariantMap::parse_value`] or [`VariantMap::is_value`]
/// before treating it as a member of the declared value set.
///
/// # Example
///
/// ```
/// use casewise::VariantMap;
/// use serde_json::json;
///
/// let colors = VariantMap::from_pairs([("RED", "red"), ("GREEN", "green")]);
///
/// assert!(colors.is_value(&json!("red")));
/// assert!(!colors.is_value(&json!("blue")));
/// assert_eq!(colors.parse_value(&json!(null)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantMap {
    entries: Vec<(String, VariantValue)>,
}

impl VariantMap {
    /// An empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from `(key, value)` pairs, in order.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<VariantValue>,
    {
        pairs.into_iter().collect()
    }

    /// Build a same-key/same-value mapping: each name becomes both the key
    /// and the text value, e.g. `["RED", "GREEN"]` -> `{RED: "RED",
    /// GREEN: "GREEN"}`.
    #[must_use]
    pub fn identity<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.into();
                (name.clone(), VariantValue::from(name))
            })
            .collect()
    }

    /// Insert `key -> value`, returning the previous value if the key was
    /// already present. An existing key keeps its position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<VariantValue>,
    ) -> Option<VariantValue> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == key)
        {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    /// The value declared under `key`, if any.
    ///
    /// A `Some` return proves key membership, so this is the narrowing
    /// companion of [`VariantMap::is_key`].
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&VariantValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// True iff `key` is one of the mapping's own keys.
    ///
    /// Only examines the key side; never a value comparison.
    #[must_use]
    pub fn is_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// True iff `candidate` strictly equals one of the declared values.
    ///
    /// Only examines the value side; never a key comparison. Total over
    /// every candidate shape; non-primitive candidates are simply `false`.
    #[must_use]
    pub fn is_value(&self, candidate: &Value) -> bool {
        self.entries.iter().any(|(_, v)| v.matches(candidate))
    }

    /// Validate `candidate` against the declared value set.
    ///
    /// Returns the matching declared value, or `None` when the candidate is
    /// not a member. A null candidate yields `None` immediately, before any
    /// membership comparison. Never panics.
    #[must_use]
    pub fn parse_value(&self, candidate: &Value) -> Option<&VariantValue> {
        if candidate.is_null() {
            return None;
        }
        self.entries
            .iter()
            .map(|(_, v)| v)
            .find(|v| v.matches(candidate))
    }

    /// Key/value pairs in the canonical enumeration order: integer-like keys
    /// first in ascending numeric order, then the remaining keys in
    /// insertion order.
    ///
    /// "Integer-like" is the array-index rule: the canonical base-10 form of
    /// an integer in `0..u32::MAX` (no sign, no leading zeros). Consumers
    /// may rely on this order positionally (e.g. rendering a fixed list), so
    /// it is part of the contract; [`VariantMap::iter`] exposes raw
    /// insertion order instead.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &VariantValue)> {
        let mut integer_like: Vec<(u32, &str, &VariantValue)> = Vec::new();
        let mut text: Vec<(&str, &VariantValue)> = Vec::new();
        for (key, value) in &self.entries {
            match array_index(key) {
                Some(index) => integer_like.push((index, key, value)),
                None => text.push((key, value)),
            }
        }
        integer_like.sort_by_key(|&(index, _, _)| index);
        integer_like
            .into_iter()
            .map(|(_, key, value)| (key, value))
            .chain(text)
            .collect()
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Declared values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &VariantValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariantMap
where
    K: Into<String>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VariantMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// The array-index form of `key`, if it has one.
///
/// Accepts only the canonical base-10 rendering: no sign, no leading zeros
/// (`"0"` itself excepted), value below `u32::MAX`. Anything else, overflow
/// included, is an ordinary text key.
fn array_index(key: &str) -> Option<u32> {
    if key == "0" {
        return Some(0);
    }
    if key.is_empty() || key.starts_with('0') || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&index| index < u32::MAX)
}

impl Serialize for VariantMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VariantMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VariantMapVisitor;

        impl<'de> Visitor<'de> for VariantMapVisitor {
            type Value = VariantMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of primitive (text or number) enum values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<VariantMap, A::Error> {
                let mut map = VariantMap::new();
                while let Some((key, value)) = access.next_entry::<String, VariantValue>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(VariantMapVisitor)
    }
}
