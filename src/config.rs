//! Process-wide bridge configuration.
//!
//! The only shared state between requests is read-only configuration: which
//! host extensions are active and whether the process serves the admin
//! dashboard. [`BridgeConfig`] captures that state as plain data, and
//! [`StaticEnvironment`] exposes it through the [`Environment`] capability
//! query consulted by the composition root.

use serde::{Deserialize, Serialize};

use crate::constants::{COMMERCE_EXTENSION, MARKETPLACE_EXTENSION};
use crate::host::{Environment, Feature};

/// Read-only description of the host environment the bridge runs in.
///
/// # Examples
///
/// ```rust
/// use blockbridge::config::BridgeConfig;
///
/// let config: BridgeConfig = serde_json::from_str(
///     r#"{"active_extensions": ["marketplace"], "admin": false}"#,
/// )?;
/// assert!(config.is_extension_active("marketplace"));
/// assert!(!config.is_extension_active("commerce"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Names of host extensions that are installed and active.
    pub active_extensions: Vec<String>,
    /// Whether the current process serves the admin dashboard.
    pub admin: bool,
}

impl BridgeConfig {
    /// Returns `true` if the named extension is active.
    #[must_use]
    pub fn is_extension_active(&self, name: &str) -> bool {
        self.active_extensions.iter().any(|active| active == name)
    }
}

/// [`Environment`] implementation backed by a [`BridgeConfig`] snapshot.
///
/// Capability answers are fixed at construction; nothing mutates them at
/// call time.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    marketplace: bool,
    commerce: bool,
    admin: bool,
}

impl StaticEnvironment {
    /// Builds the environment from a configuration snapshot.
    #[must_use]
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            marketplace: config.is_extension_active(MARKETPLACE_EXTENSION),
            commerce: config.is_extension_active(COMMERCE_EXTENSION),
            admin: config.admin,
        }
    }
}

impl Environment for StaticEnvironment {
    fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::Marketplace => self.marketplace,
            Feature::Commerce => self.commerce,
            Feature::AdminContext => self.admin,
        }
    }
}
