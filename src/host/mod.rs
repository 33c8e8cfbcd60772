//! Host-platform capabilities and collaborator interfaces.
//!
//! The bridge runs embedded in a host pipeline that owns rendering,
//! sanitization, translation, and request context. Those concerns stay on
//! the host side of the boundary: this module defines the narrow traits the
//! bridge consumes, so the tree logic remains independently testable without
//! a live host environment.
//!
//! [`Environment`] is the capability query consulted once by the composition
//! root when deciding which handlers to register; the remaining traits are
//! constructor-injected collaborators used by individual handlers at call
//! time.

use std::fmt;
use std::sync::Arc;

use crate::tree::Mapping;

/// A host capability the composition root can ask about before registering
/// handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// The marketplace extension is installed and active.
    Marketplace,
    /// The commerce extension is installed and active.
    Commerce,
    /// The current request runs in the admin dashboard rather than the site
    /// front end.
    AdminContext,
}

/// Capability query over the host environment.
///
/// Implementations are read-only at call time; the composition root consults
/// them once at registration, never from inside tree logic.
pub trait Environment: Send + Sync {
    /// Returns `true` if the host currently provides `feature`.
    fn has(&self, feature: Feature) -> bool;
}

/// Translation-string lookup owned by the marketplace extension.
pub trait Translator: Send + Sync {
    /// Returns the translated text registered under `key`, or an empty
    /// string when the key is unknown.
    fn get_string(&self, key: &str) -> String;
}

/// HTML sanitization and URL escaping owned by the host platform.
///
/// The bridge never produces raw markup itself; any text it forwards into a
/// notice or rendered area goes through these.
pub trait Sanitizer: Send + Sync {
    /// Strips disallowed markup from `text`.
    fn sanitize_html(&self, text: &str) -> String;

    /// Escapes `url` for safe embedding in markup.
    fn escape_url(&self, url: &str) -> String;
}

/// Template and part rendering owned by the host pipeline.
pub trait BlockRenderer: Send + Sync {
    /// Renders the named template to markup.
    fn render_template(&self, template: &str) -> String;

    /// Renders the named part with the given context mapping to markup.
    fn render_part(&self, path: &str, context: &Mapping) -> String;
}

/// Listing statistics owned by the marketplace extension.
pub trait Listings: Send + Sync {
    /// Number of currently published listings.
    fn published_count(&self) -> u64;
}

/// Commerce endpoint detection for the current request.
pub trait Endpoints: Send + Sync {
    /// Returns `true` if the current request targets the named commerce
    /// endpoint.
    fn is_endpoint(&self, name: &str) -> bool;
}

/// Page context for the current request.
pub trait PageContext: Send + Sync {
    /// Title of the page being rendered.
    fn current_title(&self) -> String;
}

/// Bundle of host collaborator handles injected into the bridge component.
#[derive(Clone)]
pub struct HostServices {
    /// Capability query for registration-time decisions.
    pub environment: Arc<dyn Environment>,
    /// Translation-string lookup.
    pub translator: Arc<dyn Translator>,
    /// HTML sanitization and URL escaping.
    pub sanitizer: Arc<dyn Sanitizer>,
    /// Template and part rendering.
    pub renderer: Arc<dyn BlockRenderer>,
    /// Listing statistics.
    pub listings: Arc<dyn Listings>,
    /// Commerce endpoint detection.
    pub endpoints: Arc<dyn Endpoints>,
    /// Current page context.
    pub page: Arc<dyn PageContext>,
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
