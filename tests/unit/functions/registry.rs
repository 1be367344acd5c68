use super::*;

#[test]
fn set_is_registered_under_main() {
    assert_eq!(
        FunctionRegistry::lookup("main", "set"),
        Some(FunctionRef::Main(MainFunction::Set))
    );
    assert_eq!(FunctionRef::Main(MainFunction::Set).to_string(), "main/set");
}

#[test]
fn misses_are_lookups_not_panics() {
    assert_eq!(FunctionRegistry::lookup("main", "hide"), None);
    assert_eq!(FunctionRegistry::lookup("scheme", "set"), None);
    assert_eq!(FunctionRegistry::lookup("other", "set"), None);
}

#[test]
fn resolve_rejects_unknown_names() {
    let err = FunctionRef::resolve("main", "teleport").unwrap_err();
    assert!(matches!(err, SchemeError::UnknownFunction(ref name) if name == "main/teleport"));
    assert!(FunctionRef::resolve("main", "set").is_ok());
}

#[test]
fn scheme_category_is_empty() {
    assert!(FunctionRegistry::functions(Category::Scheme).is_empty());
    assert_eq!(FunctionRegistry::functions(Category::Main).len(), 1);
}

#[test]
fn catalog_lists_set_schema() {
    let catalog = FunctionRegistry::catalog().unwrap();
    assert_eq!(catalog["scheme"], serde_json::json!({}));

    let set = &catalog["main"]["set"];
    assert_eq!(set["name"], "Set");
    assert_eq!(set["args"]["animationDuration"]["value"], 0.5);
    assert_eq!(set["args"]["transition"]["value"], "ease-out");
    assert_eq!(
        set["args"]["transition"]["options"],
        serde_json::json!(["linear", "smooth", "ease-in", "ease-out", "ease-in-out", "bounce"])
    );
    assert_eq!(
        set["args"]["inBackground"]["depends"],
        serde_json::json!({"animated": true})
    );
}
