//! Test utilities for blockbridge.
//!
//! This module provides stub implementations of every host collaborator
//! trait plus a builder that wires them into a [`HostServices`] bundle, so
//! tests can exercise the bridge without a live host pipeline.
//!
//! The stubs are deliberately transparent: the renderer wraps its inputs in
//! angle-bracket markers instead of producing real markup, and the sanitizer
//! passes text through unchanged, so assertions can check exactly what the
//! bridge forwarded to each collaborator.
//!
//! # Example
//!
//! ```rust
//! use blockbridge::test_utils::TestHostBuilder;
//!
//! let services = TestHostBuilder::new()
//!     .with_marketplace()
//!     .with_string("greeting", "hello")
//!     .build();
//! assert_eq!(services.translator.get_string("greeting"), "hello");
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Once};

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{BridgeConfig, StaticEnvironment};
use crate::constants::{COMMERCE_EXTENSION, MARKETPLACE_EXTENSION};
use crate::host::{
    BlockRenderer, Endpoints, HostServices, Listings, PageContext, Sanitizer, Translator,
};
use crate::tree::{Mapping, Node};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only takes effect on the first call regardless of how many times it is
/// invoked. Respects the `RUST_LOG` environment variable, defaulting to
/// `debug` level for the crate when unset.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let default_level = level.unwrap_or(Level::DEBUG);
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("blockbridge={default_level}")));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// [`Translator`] stub backed by an in-memory key/value map.
///
/// Unknown keys return an empty string, matching the host contract.
#[derive(Debug, Default)]
pub struct StubTranslator {
    strings: HashMap<String, String>,
}

impl Translator for StubTranslator {
    fn get_string(&self, key: &str) -> String {
        self.strings.get(key).cloned().unwrap_or_default()
    }
}

/// [`Sanitizer`] stub that passes text and URLs through unchanged.
#[derive(Debug, Default)]
pub struct PassthroughSanitizer;

impl Sanitizer for PassthroughSanitizer {
    fn sanitize_html(&self, text: &str) -> String {
        text.to_string()
    }

    fn escape_url(&self, url: &str) -> String {
        url.to_string()
    }
}

/// [`BlockRenderer`] stub that wraps its inputs in angle-bracket markers.
///
/// Templates render as `<template:NAME>` and parts as
/// `<part:PATH CONTEXT_JSON>`, so tests can assert on both the identifier
/// the bridge asked for and the context it supplied.
#[derive(Debug, Default)]
pub struct StubRenderer;

impl BlockRenderer for StubRenderer {
    fn render_template(&self, template: &str) -> String {
        format!("<template:{template}>")
    }

    fn render_part(&self, path: &str, context: &Mapping) -> String {
        let context = Node::Mapping(context.clone()).to_json();
        format!("<part:{path} {context}>")
    }
}

/// [`Listings`] stub reporting a fixed published count.
#[derive(Debug, Default)]
pub struct StubListings {
    published: u64,
}

impl Listings for StubListings {
    fn published_count(&self) -> u64 {
        self.published
    }
}

/// [`Endpoints`] stub that reports the configured endpoints as active.
#[derive(Debug, Default)]
pub struct StubEndpoints {
    active: Vec<String>,
}

impl Endpoints for StubEndpoints {
    fn is_endpoint(&self, name: &str) -> bool {
        self.active.iter().any(|active| active == name)
    }
}

/// [`PageContext`] stub with a fixed page title.
#[derive(Debug, Default)]
pub struct StubPage {
    title: String,
}

impl PageContext for StubPage {
    fn current_title(&self) -> String {
        self.title.clone()
    }
}

/// Builder assembling a [`HostServices`] bundle from stub collaborators.
///
/// Starts from the most restrictive environment (no extensions active, site
/// front end, zero listings) and lets each test enable exactly what it
/// needs.
#[derive(Debug, Default)]
pub struct TestHostBuilder {
    marketplace: bool,
    commerce: bool,
    admin: bool,
    strings: HashMap<String, String>,
    published: u64,
    endpoints: Vec<String>,
    page_title: String,
}

impl TestHostBuilder {
    /// Creates a builder with nothing active.
    #[must_use]
    pub fn new() -> Self {
        init_test_logging(None);
        Self::default()
    }

    /// Activates the marketplace extension.
    #[must_use]
    pub fn with_marketplace(mut self) -> Self {
        self.marketplace = true;
        self
    }

    /// Activates the commerce extension.
    #[must_use]
    pub fn with_commerce(mut self) -> Self {
        self.commerce = true;
        self
    }

    /// Marks the process as serving the admin dashboard.
    #[must_use]
    pub fn admin(mut self) -> Self {
        self.admin = true;
        self
    }

    /// Registers a translation string under `key`.
    #[must_use]
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    /// Sets the published listing count.
    #[must_use]
    pub fn with_published_listings(mut self, count: u64) -> Self {
        self.published = count;
        self
    }

    /// Marks the named commerce endpoint as the current request target.
    #[must_use]
    pub fn on_endpoint(mut self, name: impl Into<String>) -> Self {
        self.endpoints.push(name.into());
        self
    }

    /// Sets the title of the page being rendered.
    #[must_use]
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    /// Assembles the configured stubs into a [`HostServices`] bundle.
    #[must_use]
    pub fn build(self) -> HostServices {
        let mut active_extensions = Vec::new();
        if self.marketplace {
            active_extensions.push(MARKETPLACE_EXTENSION.to_string());
        }
        if self.commerce {
            active_extensions.push(COMMERCE_EXTENSION.to_string());
        }
        let config = BridgeConfig {
            active_extensions,
            admin: self.admin,
        };

        HostServices {
            environment: Arc::new(StaticEnvironment::from_config(&config)),
            translator: Arc::new(StubTranslator {
                strings: self.strings,
            }),
            sanitizer: Arc::new(PassthroughSanitizer),
            renderer: Arc::new(StubRenderer),
            listings: Arc::new(StubListings {
                published: self.published,
            }),
            endpoints: Arc::new(StubEndpoints {
                active: self.endpoints,
            }),
            page: Arc::new(StubPage {
                title: self.page_title,
            }),
        }
    }
}
