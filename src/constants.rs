//! Well-known names used throughout the blockbridge crate.
//!
//! Hook identifiers, extension names, and template keys are defined centrally
//! so the registration code and the tests agree on a single spelling.

/// Mapping key carrying an explicit sibling-order hint for the renderer.
pub const ORDER_HINT_KEY: &str = "_order";

/// Default priority for filter callbacks, matching the host platform's
/// registration default.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Name of the marketplace extension this bridge integrates with.
pub const MARKETPLACE_EXTENSION: &str = "marketplace";

/// Name of the commerce extension that adds account/order pages.
pub const COMMERCE_EXTENSION: &str = "commerce";

/// Hook carrying the admin notice mapping.
pub const ADMIN_NOTICES_HOOK: &str = "marketplace/v1/admin_notices";

/// Hook carrying the rendered site header output.
pub const SITE_HEADER_HOOK: &str = "theme/v1/areas/site_header";

/// Hook carrying the rendered page header output.
pub const PAGE_HEADER_HOOK: &str = "theme/v1/areas/page_header";

/// Hook carrying the commerce account page content.
pub const ACCOUNT_CONTENT_HOOK: &str = "commerce/v1/account_content";

/// Hook carrying the listing view block template tree.
pub const LISTING_VIEW_BLOCK_HOOK: &str = "marketplace/v1/templates/listing_view_block";

/// Hook carrying the listing view page template tree.
pub const LISTING_VIEW_PAGE_HOOK: &str = "marketplace/v1/templates/listing_view_page";

/// Hook carrying the listing category view block template tree.
pub const LISTING_CATEGORY_VIEW_BLOCK_HOOK: &str =
    "marketplace/v1/templates/listing_category_view_block";

/// Template rendered into the site header area.
pub const SITE_HEADER_TEMPLATE: &str = "site_header_block";

/// Part rendered as the account page title.
pub const PAGE_TITLE_PART: &str = "page/page-title";

/// Commerce endpoints on which the page header is suppressed and the page
/// title part is rendered instead.
pub const ORDER_ENDPOINTS: [&str; 2] = ["orders", "view-order"];

/// Translation key for the demo-content import notice.
pub const DEMO_IMPORT_NOTICE_KEY: &str = "demo_import_notice";

/// Placeholder replaced with the escaped documentation URL inside the
/// demo-content import notice text.
pub const DEMO_IMPORT_URL_PLACEHOLDER: &str = "%url%";

/// Documentation URL offered in the demo-content import notice.
pub const DEMO_IMPORT_DOCS_URL: &str =
    "https://example.com/docs/themes/#importing-demo-content";

/// Sibling order assigned to the listing category block when it is
/// repositioned inside the listing content area.
pub const LISTING_CATEGORY_ORDER: i64 = 5;
