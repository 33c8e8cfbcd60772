//! Key-path lookup inside template-description trees.

use tracing::trace;

use super::Node;

/// Returns the subtree reached by descending `tree` along `path`.
///
/// Descent only follows mapping nodes: at each step the current node must be
/// a mapping containing the next key. A miss is not an error — it yields an
/// empty mapping node ([`Node::empty`]), which callers treat as "nothing
/// found here". An empty path returns the input tree unchanged.
///
/// The input is never mutated; the result is an owned clone of the located
/// subtree, so callers can re-insert it elsewhere without touching the
/// original.
///
/// # Examples
///
/// ```rust
/// use blockbridge::tree::{locate, Node};
///
/// let tree = Node::from_json(r#"{"blocks": {"title": {"tag": "h2"}}}"#)?;
///
/// let title = locate(&tree, &["blocks", "title"]);
/// assert_eq!(locate(&title, &["tag"]).as_str(), Some("h2"));
///
/// // Missing segments yield an empty mapping, not an error.
/// assert!(locate(&tree, &["blocks", "missing"]).is_empty_mapping());
/// # Ok::<(), blockbridge::BridgeError>(())
/// ```
#[must_use]
pub fn locate(tree: &Node, path: &[&str]) -> Node {
    let mut current = tree;

    for key in path {
        let child = current.as_mapping().and_then(|mapping| mapping.get(key));
        match child {
            Some(child) => current = child,
            None => {
                trace!(key, "path segment not found, returning empty tree");
                return Node::empty();
            }
        }
    }

    current.clone()
}
