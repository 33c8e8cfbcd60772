//! Error types for blockbridge.
//!
//! The tree core itself is total: a locator miss is a defined empty value
//! and the merger succeeds for every well-formed pair of trees. Failures can
//! only enter the crate at two boundaries — parsing a tree from JSON text,
//! and running a registered filter callback supplied by the host.

use thiserror::Error;

/// The error type for blockbridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// JSON text could not be parsed into a template tree.
    #[error("invalid template tree")]
    InvalidTree(#[from] serde_json::Error),

    /// A filter callback failed while a value was in transit through a hook.
    ///
    /// The hook name is carried so callers can tell which extension point
    /// rejected the value.
    #[error("filter callback failed for hook '{hook}'")]
    Callback {
        /// Name of the extension point whose callback failed.
        hook: String,
        /// The callback's underlying error.
        #[source]
        source: anyhow::Error,
    },
}
