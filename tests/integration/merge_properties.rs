//! Behavioural properties of the tree core exercised through the public API.

use blockbridge::tree::{locate, merge, Node};

fn tree(text: &str) -> Node {
    Node::from_json(text).unwrap()
}

#[test]
fn merge_with_empty_overlay_is_identity() {
    let base = tree(r#"{"blocks": {"title": {"tag": "h2"}, "body": [1, 2, 3]}}"#);

    assert_eq!(merge(&base, &Node::empty()), base);
}

#[test]
fn merge_onto_empty_base_yields_overlay() {
    let overlay = tree(r#"{"blocks": {"title": {"tag": "h3"}}}"#);

    assert_eq!(merge(&Node::empty(), &overlay), overlay);
}

#[test]
fn base_key_order_survives_deep_merges() {
    let base = tree(r#"{"z": {"c": 1, "a": 2}, "m": 3, "a": 4}"#);
    let overlay = tree(r#"{"a": 5, "z": {"a": 6, "new": 7}, "extra": 8}"#);

    let merged = merge(&base, &overlay);
    let keys: Vec<_> = merged.as_mapping().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "m", "a", "extra"]);

    let inner = locate(&merged, &["z"]);
    let inner_keys: Vec<_> = inner.as_mapping().unwrap().keys().collect();
    assert_eq!(inner_keys, vec!["c", "a", "new"]);
    assert_eq!(locate(&merged, &["z", "a"]).as_i64(), Some(6));
    assert_eq!(locate(&merged, &["z", "c"]).as_i64(), Some(1));
}

#[test]
fn lists_replace_wholesale() {
    let base = tree(r#"{"tags": ["a", "b", "c"]}"#);
    let overlay = tree(r#"{"tags": ["x"]}"#);

    let merged = merge(&base, &overlay);
    let tags = locate(&merged, &["tags"]);
    assert_eq!(tags.as_list().map(<[Node]>::len), Some(1));
    assert_eq!(tags.as_list().and_then(|list| list[0].as_str()), Some("x"));
}

#[test]
fn type_conflict_resolves_to_overlay() {
    let base = tree(r#"{"area": {"blocks": {"inner": 1}}}"#);
    let overlay = tree(r#"{"area": "disabled"}"#);

    let merged = merge(&base, &overlay);
    assert_eq!(locate(&merged, &["area"]).as_str(), Some("disabled"));

    // And the other way round: a mapping may replace a scalar.
    let restored = merge(&merged, &base);
    assert_eq!(locate(&restored, &["area", "blocks", "inner"]).as_i64(), Some(1));
}

#[test]
fn merge_is_idempotent_over_the_same_overlay() {
    let base = tree(r#"{"blocks": {"title": {"tag": "h2", "_order": 1}}}"#);
    let overlay = tree(r#"{"blocks": {"title": {"tag": "h3"}, "footer": {}}}"#);

    let once = merge(&base, &overlay);
    let twice = merge(&once, &overlay);
    assert_eq!(once, twice);
}

#[test]
fn locate_misses_yield_an_empty_mapping() {
    let base = tree(r#"{"blocks": {"title": {"tag": "h2"}}}"#);

    assert!(locate(&base, &["blocks", "missing"]).is_empty_mapping());
    assert!(locate(&base, &["blocks", "title", "tag", "deeper"]).is_empty_mapping());
    assert!(locate(&Node::from("scalar"), &["blocks"]).is_empty_mapping());
}

#[test]
fn locate_then_merge_round_trips_a_relocated_block() {
    let template = tree(
        r#"{
            "blocks": {
                "category": {"type": "part", "path": "cat", "_order": 20},
                "content": {"blocks": {}}
            }
        }"#,
    );

    let category = locate(&template, &["blocks", "category"]);
    let overlay = tree(r#"{"blocks": {"content": {"blocks": {}}}}"#);
    let mut rebuilt = overlay;
    if let Some(slot) = rebuilt
        .as_mapping_mut()
        .and_then(|blocks| blocks.get_mut("blocks"))
        .and_then(Node::as_mapping_mut)
        .and_then(|content| content.get_mut("content"))
        .and_then(Node::as_mapping_mut)
        .and_then(|inner| inner.get_mut("blocks"))
        .and_then(Node::as_mapping_mut)
    {
        slot.insert("category", category.with_order_hint(5));
    }

    let merged = merge(&template, &rebuilt);
    let moved = locate(&merged, &["blocks", "content", "blocks", "category"]);
    let mapping = moved.as_mapping().unwrap();
    assert_eq!(mapping.get("path").unwrap().as_str(), Some("cat"));
    assert_eq!(mapping.get("_order").unwrap().as_i64(), Some(5));
}

#[test]
fn json_round_trip_preserves_key_order() {
    let text = r#"{"z":1,"a":{"m":true,"b":null},"list":[{"y":1,"x":2}]}"#;
    let parsed = tree(text);

    assert_eq!(parsed.to_json(), text);
}
