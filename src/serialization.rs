//! JSON object encoding for [`RedBlackTree`] and [`TreeMap`].
//!
//! Both containers serialize as a map in ascending key order, so the JSON
//! produced for string keys is a plain object: `{"a":1,"b":2}`.
//!
//! [`RedBlackTree::from_json`] parses the whole document before touching the
//! receiver. A malformed document leaves the existing entries in place; a
//! well-formed one replaces them.
//!
//! # Examples
//!
//! ```rust
//! use rbmap::tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! tree.put("b".to_string(), 2);
//! tree.put("a".to_string(), 1);
//! assert_eq!(tree.to_json().unwrap(), r#"{"a":1,"b":2}"#);
//!
//! let mut restored: RedBlackTree<String, i32> = RedBlackTree::new();
//! restored.from_json(r#"{"x":10,"y":20}"#).unwrap();
//! assert_eq!(restored.keys(), vec!["x", "y"]);
//! ```

use crate::comparator::Comparator;
use crate::map::TreeMap;
use crate::tree::RedBlackTree;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

// =============================================================================
// Errors
// =============================================================================

/// Failure while converting a container to or from JSON.
#[derive(Debug)]
pub enum SerializationError {
    /// A key or value could not be encoded.
    Encode(serde_json::Error),
    /// The input was not a JSON object of the expected key and value types.
    Decode(serde_json::Error),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(error) => write!(formatter, "failed to encode entries as JSON: {error}"),
            Self::Decode(error) => write!(formatter, "failed to decode entries from JSON: {error}"),
        }
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(error) | Self::Decode(error) => Some(error),
        }
    }
}

// =============================================================================
// Serde
// =============================================================================

impl<K, V, C> serde::Serialize for RedBlackTree<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.size()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Entries decoded from a JSON object, in document order.
struct Entries<K, V>(Vec<(K, V)>);

struct EntriesVisitor<K, V> {
    key_marker: PhantomData<K>,
    value_marker: PhantomData<V>,
}

impl<K, V> EntriesVisitor<K, V> {
    const fn new() -> Self {
        Self {
            key_marker: PhantomData,
            value_marker: PhantomData,
        }
    }
}

impl<'de, K, V> serde::de::Visitor<'de> for EntriesVisitor<K, V>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    type Value = Entries<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(Entries(entries))
    }
}

impl<'de, K, V> serde::Deserialize<'de> for Entries<K, V>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor::new())
    }
}

impl<'de, K, V, C> serde::Deserialize<'de> for RedBlackTree<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let Entries(entries) = Entries::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl<K, V, C> serde::Serialize for TreeMap<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_tree().serialize(serializer)
    }
}

impl<'de, K, V, C> serde::Deserialize<'de> for TreeMap<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RedBlackTree::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// JSON helpers
// =============================================================================

impl<K, V, C> RedBlackTree<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    /// Encodes the entries as a JSON object in ascending key order.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::Encode`] if a key cannot be used as a
    /// JSON object key or a value fails to serialize.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        serde_json::to_string(self).map_err(|error| {
            log::debug!("tree of {} entries failed to encode: {error}", self.size());
            SerializationError::Encode(error)
        })
    }

    /// Encodes the entries as UTF-8 JSON bytes.
    ///
    /// # Errors
    ///
    /// Same as [`RedBlackTree::to_json`].
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(self).map_err(|error| {
            log::debug!("tree of {} entries failed to encode: {error}", self.size());
            SerializationError::Encode(error)
        })
    }
}

impl<K, V, C> RedBlackTree<K, V, C>
where
    K: DeserializeOwned,
    V: DeserializeOwned,
    C: Comparator<K>,
{
    /// Replaces the contents with the entries of a JSON object.
    ///
    /// Duplicate keys in the document keep the last value.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::Decode`] if `json` is not an object of
    /// the expected types. The tree is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::tree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<String, i32> = RedBlackTree::new();
    /// tree.put("kept".to_string(), 1);
    ///
    /// assert!(tree.from_json("not json").is_err());
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[allow(clippy::wrong_self_convention)]
    pub fn from_json(&mut self, json: &str) -> Result<(), SerializationError> {
        let entries = serde_json::from_str(json);
        self.replace_with(entries)
    }

    /// Replaces the contents with the entries of a JSON object given as bytes.
    ///
    /// # Errors
    ///
    /// Same as [`RedBlackTree::from_json`].
    #[allow(clippy::wrong_self_convention)]
    pub fn from_json_slice(&mut self, json: &[u8]) -> Result<(), SerializationError> {
        let entries = serde_json::from_slice(json);
        self.replace_with(entries)
    }

    fn replace_with(
        &mut self,
        entries: Result<Entries<K, V>, serde_json::Error>,
    ) -> Result<(), SerializationError> {
        match entries {
            Ok(Entries(entries)) => {
                log::debug!("decoded {} entries from JSON", entries.len());
                self.clear();
                self.extend(entries);
                Ok(())
            }
            Err(error) => {
                log::debug!("JSON decode failed, keeping {} entries: {error}", self.size());
                Err(SerializationError::Decode(error))
            }
        }
    }
}

impl<K, V, C> TreeMap<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    /// Encodes the entries as a JSON object in ascending key order.
    ///
    /// # Errors
    ///
    /// Same as [`RedBlackTree::to_json`].
    pub fn to_json(&self) -> Result<String, SerializationError> {
        self.as_tree().to_json()
    }
}

impl<K, V, C> TreeMap<K, V, C>
where
    K: DeserializeOwned,
    V: DeserializeOwned,
    C: Comparator<K>,
{
    /// Replaces the contents with the entries of a JSON object.
    ///
    /// # Errors
    ///
    /// Same as [`RedBlackTree::from_json`].
    #[allow(clippy::wrong_self_convention)]
    pub fn from_json(&mut self, json: &str) -> Result<(), SerializationError> {
        self.as_tree_mut().from_json(json)
    }
}
