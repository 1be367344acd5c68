use super::*;
use serde_json::json;

const SCHEME: &str = r#"{
    "name": "demo",
    "items": [
        {"id": "a", "shape": "rect", "opacity": 100},
        {
            "id": "group",
            "shape": "none",
            "childItems": [
                {"id": "b", "shape": "ellipse", "childItems": [{"id": "c", "shape": "rect"}]}
            ]
        }
    ]
}"#;

#[test]
fn indexes_nested_items() {
    let scheme = SchemeContainer::from_reader(SCHEME.as_bytes()).unwrap();
    assert_eq!(scheme.len(), 4);
    assert_eq!(scheme.items().len(), 2);
    assert_eq!(scheme.item(&ItemId::new("c")).unwrap().shape, "rect");
    assert!(scheme.contains(&ItemId::new("b")));
    assert!(scheme.item(&ItemId::new("zzz")).is_none());
}

#[test]
fn nested_mutation_is_visible_in_output() {
    let mut scheme = SchemeContainer::from_reader(SCHEME.as_bytes()).unwrap();
    scheme
        .item_mut(&ItemId::new("c"))
        .unwrap()
        .set_property("opacity", json!(25));

    let out = scheme.to_value().unwrap();
    assert_eq!(out["name"], json!("demo"));
    assert_eq!(
        out["items"][1]["childItems"][0]["childItems"][0]["opacity"],
        json!(25)
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = SchemeContainer::new(vec![
        Item::new("a", "rect"),
        Item::new("b", "rect").with_child(Item::new("a", "rect")),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate item id"));
}

#[test]
fn unreadable_file_keeps_io_context() {
    let err = SchemeContainer::from_path("target/no-such-dir/missing-scheme.json").unwrap_err();
    assert!(matches!(err, SchemeError::Other(_)));
    assert!(err.to_string().contains("missing-scheme.json"));
}

#[test]
fn malformed_json_is_a_validation_error() {
    let err = SchemeContainer::from_reader("{\"items\": 3}".as_bytes()).unwrap_err();
    assert!(matches!(err, SchemeError::Validation(_)));
}

#[test]
fn writer_output_parses_back() {
    let scheme = SchemeContainer::from_reader(SCHEME.as_bytes()).unwrap();
    let mut buf = Vec::new();
    scheme.to_writer(&mut buf).unwrap();
    let again = SchemeContainer::from_reader(buf.as_slice()).unwrap();
    assert_eq!(again.len(), scheme.len());
}
