//! End-to-end tests of bridge registration and hook application.

use blockbridge::bridge::MarketplaceComponent;
use blockbridge::constants::{
    ACCOUNT_CONTENT_HOOK, ADMIN_NOTICES_HOOK, DEMO_IMPORT_NOTICE_KEY, LISTING_VIEW_BLOCK_HOOK,
    ORDER_HINT_KEY, PAGE_HEADER_HOOK, SITE_HEADER_HOOK,
};
use blockbridge::hooks::FilterRegistry;
use blockbridge::test_utils::TestHostBuilder;
use blockbridge::tree::{locate, Node};

fn registered(services: blockbridge::host::HostServices) -> FilterRegistry {
    let component = MarketplaceComponent::new(services);
    let mut registry = FilterRegistry::new();
    component.register(&mut registry);
    registry
}

#[test]
fn front_end_request_renders_site_header() {
    let registry = registered(TestHostBuilder::new().with_marketplace().build());

    let output = registry
        .apply(SITE_HEADER_HOOK, Node::from("<nav/>"))
        .unwrap();

    assert_eq!(output.as_str(), Some("<nav/><template:site_header_block>"));
}

#[test]
fn front_end_request_alters_listing_view_template() {
    let registry = registered(TestHostBuilder::new().with_marketplace().build());

    let template = Node::from_json(
        r#"{
            "blocks": {
                "listing_title": {"type": "part", "_order": 10},
                "listing_category": {"type": "part", "path": "listing/category"},
                "listing_content": {"type": "container", "blocks": {}}
            }
        }"#,
    )
    .unwrap();
    let altered = registry.apply(LISTING_VIEW_BLOCK_HOOK, template).unwrap();

    let moved = locate(
        &altered,
        &["blocks", "listing_content", "blocks", "listing_category"],
    );
    let mapping = moved.as_mapping().unwrap();
    assert_eq!(mapping.get("path").unwrap().as_str(), Some("listing/category"));
    assert_eq!(mapping.get(ORDER_HINT_KEY).unwrap().as_i64(), Some(5));

    // Untouched siblings keep their place and content.
    let title = locate(&altered, &["blocks", "listing_title"]);
    assert_eq!(title.as_mapping().unwrap().get("type").unwrap().as_str(), Some("part"));
}

#[test]
fn admin_request_adds_demo_import_notice() {
    let registry = registered(
        TestHostBuilder::new()
            .with_marketplace()
            .admin()
            .with_string(DEMO_IMPORT_NOTICE_KEY, "See the guide at %url% to import.")
            .build(),
    );

    let notices = registry.apply(ADMIN_NOTICES_HOOK, Node::empty()).unwrap();
    let notice = locate(&notices, &["demo_import"]);
    let mapping = notice.as_mapping().unwrap();

    assert_eq!(mapping.get("type").unwrap().as_str(), Some("info"));
    assert_eq!(mapping.get("dismissible").unwrap().as_bool(), Some(true));
    let text = mapping.get("text").unwrap().as_str().unwrap();
    assert!(text.contains("https://example.com/docs/themes/#importing-demo-content"));
}

#[test]
fn admin_request_registers_no_front_end_hooks() {
    let registry = registered(TestHostBuilder::new().with_marketplace().admin().build());

    // Front-end hooks pass values through untouched.
    let output = registry
        .apply(SITE_HEADER_HOOK, Node::from("<nav/>"))
        .unwrap();
    assert_eq!(output.as_str(), Some("<nav/>"));
    assert_eq!(registry.handler_count(SITE_HEADER_HOOK), 0);
}

#[test]
fn order_endpoint_request_hides_header_and_renders_title() {
    let registry = registered(
        TestHostBuilder::new()
            .with_marketplace()
            .with_commerce()
            .on_endpoint("view-order")
            .with_page_title("Order #1007")
            .build(),
    );

    let header = registry
        .apply(PAGE_HEADER_HOOK, Node::from("<header/>"))
        .unwrap();
    assert_eq!(header.as_str(), Some(""));

    let content = registry.apply(ACCOUNT_CONTENT_HOOK, Node::from("")).unwrap();
    let text = content.as_str().unwrap();
    assert!(text.contains("page/page-title"));
    assert!(text.contains("Order #1007"));
}

#[test]
fn page_title_runs_ahead_of_later_account_callbacks() {
    let services = TestHostBuilder::new()
        .with_marketplace()
        .with_commerce()
        .on_endpoint("orders")
        .with_page_title("Orders")
        .build();
    let component = MarketplaceComponent::new(services);

    let mut registry = FilterRegistry::new();
    // A host callback at the default priority, registered first.
    registry.register_default(ACCOUNT_CONTENT_HOOK, |output| {
        let text = output.as_str().unwrap_or_default().to_string();
        Ok(Node::from(text + "<orders-table/>"))
    });
    component.register(&mut registry);

    let content = registry.apply(ACCOUNT_CONTENT_HOOK, Node::from("")).unwrap();
    let text = content.as_str().unwrap();

    // Priority 1 puts the title before the table despite later registration.
    let title_at = text.find("page/page-title").unwrap();
    let table_at = text.find("<orders-table/>").unwrap();
    assert!(title_at < table_at);
}

#[test]
fn non_order_pages_keep_their_header() {
    let registry = registered(
        TestHostBuilder::new()
            .with_marketplace()
            .with_commerce()
            .build(),
    );

    let header = registry
        .apply(PAGE_HEADER_HOOK, Node::from("<header/>"))
        .unwrap();
    assert_eq!(header.as_str(), Some("<header/>"));
}

#[test]
fn inactive_marketplace_leaves_every_hook_untouched() {
    let registry = registered(TestHostBuilder::new().build());

    assert!(registry.hooks().is_empty());
    let template = Node::from_json(r#"{"blocks": {"listing_category": {}}}"#).unwrap();
    let unchanged = registry
        .apply(LISTING_VIEW_BLOCK_HOOK, template.clone())
        .unwrap();
    assert_eq!(unchanged, template);
}
