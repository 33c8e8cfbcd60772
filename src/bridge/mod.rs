//! Marketplace integration component.
//!
//! This is the composition root of the crate: it decides, from the host
//! [`Environment`], which handlers to register against which extension
//! points, and implements the handlers themselves. Every handler is a pure
//! transform of its input value plus the injected host collaborators — no
//! handler touches shared mutable state.
//!
//! Registration mirrors the host request lifecycle:
//!
//! - marketplace extension inactive: nothing is registered at all;
//! - admin dashboard: only the admin-notice handler is registered;
//! - site front end: the site-header handler, the template alteration
//!   handlers, and (when the commerce extension is active) the page-header
//!   and account-page-title handlers.
//!
//! The template alteration handlers are where the tree core earns its keep:
//! each one locates a named block inside the incoming template tree, builds
//! a small override fragment around it, and merges that fragment back into
//! the full tree.

use anyhow::Result;
use tracing::debug;

use crate::constants::{
    ACCOUNT_CONTENT_HOOK, ADMIN_NOTICES_HOOK, DEMO_IMPORT_DOCS_URL, DEMO_IMPORT_NOTICE_KEY,
    DEMO_IMPORT_URL_PLACEHOLDER, LISTING_CATEGORY_ORDER, LISTING_CATEGORY_VIEW_BLOCK_HOOK,
    LISTING_VIEW_BLOCK_HOOK, LISTING_VIEW_PAGE_HOOK, ORDER_ENDPOINTS, PAGE_HEADER_HOOK,
    PAGE_TITLE_PART, SITE_HEADER_HOOK, SITE_HEADER_TEMPLATE,
};
use crate::hooks::FilterRegistry;
use crate::host::{Feature, HostServices};
use crate::tree::{locate, merge, Mapping, Node};

/// Builds a nested mapping chain along `path` ending in `leaf`.
fn nested(path: &[&str], leaf: Node) -> Node {
    path.iter().rev().fold(leaf, |child, key| {
        let mut mapping = Mapping::new();
        mapping.insert(*key, child);
        Node::Mapping(mapping)
    })
}

/// Theme-side integration component for the marketplace extension.
///
/// Holds the injected host collaborators and registers its handlers against
/// a [`FilterRegistry`] according to the host environment.
///
/// # Examples
///
/// ```rust,no_run
/// use blockbridge::bridge::MarketplaceComponent;
/// use blockbridge::hooks::FilterRegistry;
/// use blockbridge::host::HostServices;
///
/// # fn wire(services: HostServices) {
/// let component = MarketplaceComponent::new(services);
/// let mut registry = FilterRegistry::new();
/// component.register(&mut registry);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarketplaceComponent {
    services: HostServices,
}

impl MarketplaceComponent {
    /// Creates the component with the given host collaborators.
    #[must_use]
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Registers handlers against `registry` according to the environment.
    ///
    /// Consults the capability query once, here; the handlers themselves
    /// never re-check the environment (except [`get_string`], which the
    /// original contract defines as environment-sensitive at call time).
    ///
    /// [`get_string`]: Self::get_string
    pub fn register(&self, registry: &mut FilterRegistry) {
        let env = &self.services.environment;

        if !env.has(Feature::Marketplace) {
            debug!("marketplace extension inactive, registering no handlers");
            return;
        }

        if env.has(Feature::AdminContext) {
            debug!("admin context, registering notice handler");
            let component = self.clone();
            registry.register_default(ADMIN_NOTICES_HOOK, move |notices| {
                component.add_admin_notices(notices)
            });
            return;
        }

        debug!(
            commerce = env.has(Feature::Commerce),
            "site context, registering front-end handlers"
        );

        let component = self.clone();
        registry.register_default(SITE_HEADER_HOOK, move |output| {
            component.render_site_header(output)
        });

        if env.has(Feature::Commerce) {
            let component = self.clone();
            registry.register_default(PAGE_HEADER_HOOK, move |output| {
                component.hide_page_header(output)
            });

            // Ahead of the account content itself.
            let component = self.clone();
            registry.register(ACCOUNT_CONTENT_HOOK, 1, move |output| {
                component.render_page_title(output)
            });
        }

        let component = self.clone();
        registry.register_default(LISTING_VIEW_BLOCK_HOOK, move |template| {
            component.alter_listing_view_block(template)
        });

        let component = self.clone();
        registry.register_default(LISTING_VIEW_PAGE_HOOK, move |template| {
            component.alter_listing_view_page(template)
        });

        let component = self.clone();
        registry.register_default(LISTING_CATEGORY_VIEW_BLOCK_HOOK, move |template| {
            component.alter_listing_category_view_block(template)
        });
    }

    /// Returns the marketplace translation registered under `key`, or an
    /// empty string when the marketplace extension is inactive.
    #[must_use]
    pub fn get_string(&self, key: &str) -> String {
        if self.services.environment.has(Feature::Marketplace) {
            self.services.translator.get_string(key)
        } else {
            String::new()
        }
    }

    /// Adds the demo-content import notice when no listings are published.
    ///
    /// Existing notices pass through untouched. The notice text comes from
    /// the translator and goes through the host sanitizer; the documentation
    /// URL is escaped before it is substituted into the text.
    ///
    /// # Errors
    ///
    /// Does not fail; the `Result` is the uniform filter-callback shape.
    pub fn add_admin_notices(&self, notices: Node) -> Result<Node> {
        if self.services.listings.published_count() > 0 {
            return Ok(notices);
        }

        let url = self.services.sanitizer.escape_url(DEMO_IMPORT_DOCS_URL);
        let text = self
            .services
            .sanitizer
            .sanitize_html(&self.services.translator.get_string(DEMO_IMPORT_NOTICE_KEY))
            .replace(DEMO_IMPORT_URL_PLACEHOLDER, &url);

        let mut notice = Mapping::new();
        notice.insert("type", "info");
        notice.insert("dismissible", true);
        notice.insert("text", text);

        let mut overlay = Mapping::new();
        overlay.insert("demo_import", Node::Mapping(notice));

        Ok(merge(&notices, &Node::Mapping(overlay)))
    }

    /// Appends the rendered site header template to the header area output.
    ///
    /// # Errors
    ///
    /// Does not fail; the `Result` is the uniform filter-callback shape.
    pub fn render_site_header(&self, output: Node) -> Result<Node> {
        let mut text = output.as_str().unwrap_or_default().to_string();
        text.push_str(&self.services.renderer.render_template(SITE_HEADER_TEMPLATE));
        Ok(Node::from(text))
    }

    /// Empties the page header output on commerce order endpoints.
    ///
    /// # Errors
    ///
    /// Does not fail; the `Result` is the uniform filter-callback shape.
    pub fn hide_page_header(&self, output: Node) -> Result<Node> {
        if self.on_order_endpoint() {
            return Ok(Node::from(""));
        }
        Ok(output)
    }

    /// Renders the page title part into the account content on commerce
    /// order endpoints.
    ///
    /// # Errors
    ///
    /// Does not fail; the `Result` is the uniform filter-callback shape.
    pub fn render_page_title(&self, output: Node) -> Result<Node> {
        if !self.on_order_endpoint() {
            return Ok(output);
        }

        let mut context = Mapping::new();
        context.insert("page_title", self.services.page.current_title());

        let mut text = output.as_str().unwrap_or_default().to_string();
        text.push_str(&self.services.renderer.render_part(PAGE_TITLE_PART, &context));
        Ok(Node::from(text))
    }

    /// Repositions the listing category block inside the listing content
    /// area of the listing view block template.
    ///
    /// # Errors
    ///
    /// Does not fail; the `Result` is the uniform filter-callback shape.
    pub fn alter_listing_view_block(&self, template: Node) -> Result<Node> {
        Ok(self.reposition_listing_category(template, "listing_content"))
    }

    /// Repositions the listing category block inside the page content area
    /// of the listing view page template.
    ///
    /// # Errors
    ///
    /// Does not fail; the `Result` is the uniform filter-callback shape.
    pub fn alter_listing_view_page(&self, template: Node) -> Result<Node> {
        Ok(self.reposition_listing_category(template, "page_content"))
    }

    /// Moves the category count into the category header and renders the
    /// category name as an `h3` in the category view block template.
    ///
    /// # Errors
    ///
    /// Does not fail; the `Result` is the uniform filter-callback shape.
    pub fn alter_listing_category_view_block(&self, template: Node) -> Result<Node> {
        let count = locate(&template, &["blocks", "listing_category_count"]);

        let mut blocks = Mapping::new();
        if !count.is_empty_mapping() {
            blocks.insert(
                "listing_category_header",
                nested(&["blocks", "listing_category_count"], count),
            );
        } else {
            debug!("listing category count block not found, leaving it in place");
        }

        let mut name = Mapping::new();
        name.insert("tag", "h3");
        blocks.insert("listing_category_name", Node::Mapping(name));

        let mut overlay = Mapping::new();
        overlay.insert("blocks", Node::Mapping(blocks));

        Ok(merge(&template, &Node::Mapping(overlay)))
    }

    /// Shared body of the two listing-category repositioning handlers:
    /// locate the category block, attach its presentation order, and merge
    /// it back underneath `content_block`.
    fn reposition_listing_category(&self, template: Node, content_block: &str) -> Node {
        let category = locate(&template, &["blocks", "listing_category"]);
        if category.is_empty_mapping() {
            debug!(content_block, "listing category block not found, template unchanged");
            return template;
        }

        let overlay = nested(
            &["blocks", content_block, "blocks", "listing_category"],
            category.with_order_hint(LISTING_CATEGORY_ORDER),
        );
        merge(&template, &overlay)
    }

    fn on_order_endpoint(&self) -> bool {
        ORDER_ENDPOINTS
            .iter()
            .any(|endpoint| self.services.endpoints.is_endpoint(endpoint))
    }
}
