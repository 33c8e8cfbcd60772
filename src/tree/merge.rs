//! Recursive merge of an override fragment into a base tree.

use super::{Mapping, Node};

/// Merges `overlay` into `base`, producing a new tree.
///
/// The merge is keyed on the node variants at each matching position:
///
/// - An overlay scalar or list replaces the base value wholesale. Lists are
///   atomic: there is no element-wise merge.
/// - Two mappings merge key by key. The result keeps `base`'s key order for
///   keys present in `base`, then appends overlay-only keys in overlay
///   order. Shared keys recurse; one-sided keys carry their value unchanged.
/// - When the two sides disagree on the variant at a shared key, the
///   overlay's value wins wholesale — an override fragment that supplies a
///   different shape intends a structural change.
///
/// This lets a small fragment reposition or relabel one nested block without
/// restating the rest of the tree: merging an empty mapping is an identity,
/// and an `_order` hint present in the base survives any override that does
/// not restate it.
///
/// The function is total over acyclic trees and never mutates its inputs.
///
/// # Examples
///
/// ```rust
/// use blockbridge::tree::{merge, Node};
///
/// let base = Node::from_json(r#"{"a": 1, "b": {"c": 2}}"#)?;
/// let overlay = Node::from_json(r#"{"b": {"d": 3}, "e": 5}"#)?;
///
/// let merged = merge(&base, &overlay);
/// assert_eq!(merged.to_json(), r#"{"a":1,"b":{"c":2,"d":3},"e":5}"#);
/// # Ok::<(), blockbridge::BridgeError>(())
/// ```
#[must_use]
pub fn merge(base: &Node, overlay: &Node) -> Node {
    match (base, overlay) {
        (Node::Mapping(base_map), Node::Mapping(overlay_map)) => {
            let mut merged = Mapping::new();

            for (key, base_value) in base_map.iter() {
                let value = match overlay_map.get(key) {
                    Some(overlay_value) => merge(base_value, overlay_value),
                    None => base_value.clone(),
                };
                merged.insert(key, value);
            }

            for (key, overlay_value) in overlay_map.iter() {
                if !base_map.contains_key(key) {
                    merged.insert(key, overlay_value.clone());
                }
            }

            Node::Mapping(merged)
        }
        // Scalar or list overlays, and any variant conflict: overlay wins
        // wholesale.
        _ => overlay.clone(),
    }
}
