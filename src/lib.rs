//! blockbridge - Theme/Marketplace Block Template Bridge
//!
//! An integration layer that lets a block-based site theme rework the
//! template trees and output areas of a marketplace extension at request
//! time. The bridge never renders markup itself: it locates blocks inside
//! nested template trees, builds small override fragments, and merges them
//! back, leaving rendering, sanitization, and translation to the host
//! platform.
//!
//! # Architecture Overview
//!
//! The crate is split along the host boundary:
//!
//! - Template trees are plain data ([`tree::Node`]) with two total
//!   operations: path descent ([`tree::locate`]) and recursive override
//!   merge ([`tree::merge`]).
//! - Host collaborators (translator, sanitizer, renderer, listings,
//!   endpoints, page context) are narrow traits in [`host`], injected into
//!   the bridge rather than reached for globally.
//! - Extension points are named hooks in a [`hooks::FilterRegistry`];
//!   applying a hook threads a value through every registered callback in
//!   priority order.
//! - [`bridge::MarketplaceComponent`] is the composition root: it consults
//!   the host [`host::Environment`] once and registers exactly the handlers
//!   the current process needs.
//!
//! # Core Modules
//!
//! - [`tree`] - Ordered template trees, path descent, and override merge
//! - [`hooks`] - Named extension points with priority-ordered callbacks
//! - [`host`] - Collaborator traits for the host platform boundary
//! - [`bridge`] - The marketplace integration component and its handlers
//! - [`config`] - Process-wide bridge configuration
//! - [`constants`] - Well-known hook names, template keys, and defaults
//! - [`error`] - The crate error type
//!
//! # Example
//!
//! ```rust
//! use blockbridge::tree::{locate, merge, Node};
//!
//! let template = Node::from_json(
//!     r#"{"blocks": {"title": {"tag": "h2"}, "body": {"type": "content"}}}"#,
//! )?;
//! let overlay = Node::from_json(r#"{"blocks": {"title": {"tag": "h3"}}}"#)?;
//!
//! let altered = merge(&template, &overlay);
//! let tag = locate(&altered, &["blocks", "title", "tag"]);
//! assert_eq!(tag.as_str(), Some("h3"));
//!
//! // Keys keep the base tree's order after a merge.
//! let blocks = locate(&altered, &["blocks"]);
//! let keys: Vec<_> = blocks.as_mapping().unwrap().keys().collect();
//! assert_eq!(keys, vec!["title", "body"]);
//! # Ok::<(), blockbridge::BridgeError>(())
//! ```

pub mod bridge;
pub mod config;
pub mod constants;
pub mod error;
pub mod hooks;
pub mod host;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::BridgeError;
