//! Filter registry: named extension points with ordered callbacks.
//!
//! The host platform exposes named locations ("hooks") where external code
//! may observe or transform a value in transit. This module provides the
//! in-process registry the composition root registers its handlers against:
//! each hook holds a list of callbacks ordered by priority, and applying a
//! hook threads a [`Node`] through every callback in turn.
//!
//! Applying a hook nobody registered for is normal in the host model — the
//! value passes through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use blockbridge::hooks::FilterRegistry;
//! use blockbridge::tree::Node;
//!
//! let mut registry = FilterRegistry::new();
//! registry.register_default("theme/v1/areas/site_header", |output| {
//!     let text = output.as_str().unwrap_or_default().to_string();
//!     Ok(Node::from(text + "<header/>"))
//! });
//!
//! let output = registry.apply("theme/v1/areas/site_header", Node::from(""))?;
//! assert_eq!(output.as_str(), Some("<header/>"));
//! # Ok::<(), blockbridge::BridgeError>(())
//! ```

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;
use tracing::{debug, trace};

use crate::constants::DEFAULT_PRIORITY;
use crate::error::BridgeError;
use crate::tree::Node;

/// A callback registered against a hook.
///
/// Callbacks receive the value in transit by value and return the
/// (possibly transformed) value. A callback error aborts the chain.
pub type FilterCallback = Box<dyn Fn(Node) -> Result<Node> + Send + Sync>;

struct RegisteredFilter {
    priority: i32,
    seq: u64,
    callback: FilterCallback,
}

/// Registry of named extension points and their callbacks.
///
/// Callbacks run in ascending priority order; callbacks sharing a priority
/// run in registration order.
#[derive(Default)]
pub struct FilterRegistry {
    filters: HashMap<String, Vec<RegisteredFilter>>,
    next_seq: u64,
}

impl FilterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` against `hook` with an explicit `priority`.
    pub fn register<F>(&mut self, hook: impl Into<String>, priority: i32, callback: F)
    where
        F: Fn(Node) -> Result<Node> + Send + Sync + 'static,
    {
        let hook = hook.into();
        debug!(hook = %hook, priority, "registering filter callback");

        let seq = self.next_seq;
        self.next_seq += 1;

        let chain = self.filters.entry(hook).or_default();
        chain.push(RegisteredFilter {
            priority,
            seq,
            callback: Box::new(callback),
        });
        chain.sort_by_key(|filter| (filter.priority, filter.seq));
    }

    /// Registers `callback` against `hook` at the host's default priority.
    pub fn register_default<F>(&mut self, hook: impl Into<String>, callback: F)
    where
        F: Fn(Node) -> Result<Node> + Send + Sync + 'static,
    {
        self.register(hook, DEFAULT_PRIORITY, callback);
    }

    /// Threads `value` through every callback registered against `hook`.
    ///
    /// With no callbacks registered, the value is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Callback`] carrying the hook name if any
    /// callback in the chain fails; later callbacks do not run.
    pub fn apply(&self, hook: &str, value: Node) -> Result<Node, BridgeError> {
        let Some(chain) = self.filters.get(hook) else {
            trace!(hook, "no filter callbacks registered, passing value through");
            return Ok(value);
        };

        trace!(hook, callbacks = chain.len(), "applying filter chain");
        let mut value = value;
        for filter in chain {
            value = (filter.callback)(value).map_err(|source| BridgeError::Callback {
                hook: hook.to_string(),
                source,
            })?;
        }
        Ok(value)
    }

    /// Returns how many callbacks are registered against `hook`.
    #[must_use]
    pub fn handler_count(&self, hook: &str) -> usize {
        self.filters.get(hook).map(Vec::len).unwrap_or(0)
    }

    /// Returns the registered hook names, sorted for deterministic output.
    #[must_use]
    pub fn hooks(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(&str, usize)> = self
            .filters
            .iter()
            .map(|(hook, chain)| (hook.as_str(), chain.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("FilterRegistry").field("hooks", &counts).finish()
    }
}
