use super::*;

#[test]
fn resolves_shape_and_common_properties() {
    let shapes = ShapeRegistry::builtin();
    assert_eq!(
        shapes.property("rect", "shapeProps.fill").map(|p| p.kind),
        Some(PropertyType::AdvancedColor)
    );
    assert_eq!(
        shapes.property("rect", "shapeProps.strokeColor").map(|p| p.kind),
        Some(PropertyType::Color)
    );
    assert_eq!(
        shapes.property("ellipse", "opacity").map(|p| p.kind),
        Some(PropertyType::Number)
    );
}

#[test]
fn unknown_shape_still_has_common_properties() {
    let shapes = ShapeRegistry::builtin();
    assert!(!shapes.contains_shape("mystery"));
    assert!(shapes.property("mystery", "shapeProps.fill").is_none());
    assert!(shapes.property("mystery", "area.x").is_some());
    assert!(shapes.property("rect", "shapeProps.nope").is_none());
    assert!(shapes.property("rect", "nope").is_none());
}

#[test]
fn schema_json_extends_registry() {
    let mut shapes = ShapeRegistry::empty();
    let json = r#"{
        "gauge": {
            "needle": {"name": "Needle", "type": "number"},
            "face": {"name": "Face", "type": "advanced-color"},
            "font": {"name": "Font", "type": "font"}
        }
    }"#;
    shapes.extend_from_reader(json.as_bytes()).unwrap();
    assert_eq!(
        shapes.property("gauge", "shapeProps.needle").map(|p| p.kind),
        Some(PropertyType::Number)
    );
    assert_eq!(
        shapes.property("gauge", "shapeProps.face").map(|p| p.kind),
        Some(PropertyType::AdvancedColor)
    );
    assert_eq!(
        shapes.property("gauge", "shapeProps.font").map(|p| p.kind),
        Some(PropertyType::Other)
    );
}

#[test]
fn malformed_schema_is_a_validation_error() {
    let mut shapes = ShapeRegistry::empty();
    let err = shapes.extend_from_reader("[1, 2]".as_bytes()).unwrap_err();
    assert!(matches!(err, SchemeError::Validation(_)));
}
