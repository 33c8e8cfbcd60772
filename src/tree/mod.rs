//! Template-description trees for blockbridge.
//!
//! A template description is a nested structure of renderable blocks: each
//! block is a mapping of attributes, attributes may themselves be mappings,
//! lists, or scalar leaves. This module defines the [`Node`] sum type used
//! throughout the crate, together with the two core operations on it:
//!
//! - [`locate()`] - descend a tree along a key path
//! - [`merge()`] - recursively combine an override fragment into a base tree
//!
//! # Ordering
//!
//! Mapping nodes preserve insertion order. Renderers fall back to that order
//! when no explicit `_order` hint is present, so [`Mapping`] is backed by a
//! plain entry vector rather than a sorted map: deserializing a JSON object
//! through `serde_json::Value` would silently reorder keys, which is exactly
//! what this type exists to avoid.
//!
//! # Examples
//!
//! ```rust
//! use blockbridge::tree::{locate, merge, Node};
//!
//! let base = Node::from_json(r#"{"blocks": {"title": {"tag": "h2"}}}"#)?;
//! let overlay = Node::from_json(r#"{"blocks": {"title": {"tag": "h3"}}}"#)?;
//!
//! let merged = merge(&base, &overlay);
//! let title = locate(&merged, &["blocks", "title", "tag"]);
//! assert_eq!(title.as_str(), Some("h3"));
//! # Ok::<(), blockbridge::BridgeError>(())
//! ```

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::constants::ORDER_HINT_KEY;
use crate::error::BridgeError;

pub mod locate;
pub mod merge;

pub use locate::locate;
pub use merge::merge;

/// An opaque leaf value. Never descended into; atomic during merges.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A text value.
    Str(String),
    /// A numeric value (integer or float, as parsed).
    Number(serde_json::Number),
    /// A boolean value.
    Bool(bool),
    /// The null value.
    Null,
}

/// One node of a template-description tree.
///
/// A node is either an insertion-ordered [`Mapping`] of named children, an
/// ordered list of children, or a [`Scalar`] leaf. The runtime variant of a
/// node is fixed for the duration of a given operation; when a base and an
/// override disagree on the variant at the same position, the merge resolves
/// the conflict in the override's favor (see [`merge`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An ordered collection of unique `(key, child)` pairs.
    Mapping(Mapping),
    /// An ordered sequence of children.
    List(Vec<Node>),
    /// An opaque leaf.
    Scalar(Scalar),
}

/// An insertion-ordered map of child nodes keyed by name.
///
/// Keys are unique. Re-inserting an existing key replaces the value but keeps
/// the entry's original position, so authored ordering survives overrides.
/// Lookup is a linear scan; template trees are small and authored, not
/// adversarial.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
}

impl Mapping {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a reference to the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// already existed. An existing entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes and returns the value for `key`, if present.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl Node {
    /// Returns an empty mapping node, the locator's defined "not found" value.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Mapping(Mapping::new())
    }

    /// Parses a tree from JSON text, preserving object key order.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidTree`] if `text` is not valid JSON.
    pub fn from_json(text: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Renders the tree as compact JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_string()
    }

    /// Returns the inner mapping if this is a mapping node.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the inner mapping mutably if this is a mapping node.
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the inner list if this is a list node.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text of a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::Str(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the value of an integer scalar.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Number(number)) => number.as_i64(),
            _ => None,
        }
    }

    /// Returns the value of a boolean scalar.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` if this is a mapping node with no entries.
    #[must_use]
    pub fn is_empty_mapping(&self) -> bool {
        self.as_mapping().map(Mapping::is_empty).unwrap_or(false)
    }

    /// Attaches an explicit `_order` hint to a mapping node.
    ///
    /// The hint is an ordinary scalar entry consulted by the renderer to
    /// sequence siblings; non-mapping nodes are returned unchanged.
    #[must_use]
    pub fn with_order_hint(mut self, order: i64) -> Self {
        if let Some(mapping) = self.as_mapping_mut() {
            mapping.insert(ORDER_HINT_KEY, order);
        }
        self
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::List(items)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Scalar(Scalar::Str(text.to_string()))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Scalar(Scalar::Str(text))
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Number(value.into()))
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Self::Scalar(Scalar::Number(value.into()))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Mapping(mapping) => mapping.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Scalar(Scalar::Str(text)) => serializer.serialize_str(text),
            Self::Scalar(Scalar::Number(number)) => number.serialize(serializer),
            Self::Scalar(Scalar::Bool(value)) => serializer.serialize_bool(*value),
            Self::Scalar(Scalar::Null) => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Bool(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(value.into())))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(value.into())))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Node, E> {
        // JSON cannot carry NaN/inf, so this only falls back for exotic
        // non-JSON deserializers.
        Ok(serde_json::Number::from_f64(value)
            .map(|number| Node::Scalar(Scalar::Number(number)))
            .unwrap_or(Node::Scalar(Scalar::Null)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Str(value.to_string())))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Str(value)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut mapping = Mapping::new();
        while let Some((key, value)) = map.next_entry::<String, Node>()? {
            mapping.insert(key, value);
        }
        Ok(Node::Mapping(mapping))
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Node::deserialize(deserializer)? {
            Node::Mapping(mapping) => Ok(mapping),
            other => Err(de::Error::custom(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }
}
