use super::*;
use serde_json::json;

#[test]
fn reads_solid_and_gradient() {
    let solid = AdvancedColor::from_value(&json!({"type": "solid", "color": "rgba(1,2,3,1)"}));
    assert_eq!(
        solid,
        Some(AdvancedColor::Solid {
            color: "rgba(1,2,3,1)".to_owned()
        })
    );

    let gradient = AdvancedColor::from_value(&json!({
        "type": "gradient",
        "gradient": {
            "type": "radial",
            "direction": 90,
            "colors": [{"c": "rgba(0,0,0,1)", "p": 0}, {"c": "rgba(255,0,0,1)", "p": 100}]
        }
    }))
    .unwrap();
    let AdvancedColor::Gradient { gradient } = gradient else {
        panic!("expected gradient");
    };
    assert_eq!(gradient.kind, GradientKind::Radial);
    assert_eq!(gradient.direction, 90.0);
    assert_eq!(gradient.colors.len(), 2);
    assert_eq!(gradient.colors[1].p, 100.0);
}

#[test]
fn rejects_plain_strings_and_unknown_types() {
    assert!(AdvancedColor::from_value(&json!("rgba(0,0,0,1)")).is_none());
    assert!(AdvancedColor::from_value(&json!({"type": "image", "image": "a.png"})).is_none());
}

#[test]
fn unknown_gradient_keys_are_kept() {
    let raw = json!({
        "type": "gradient",
        "gradient": {"type": "linear", "direction": 0, "colors": [], "repeat": true}
    });
    let parsed = AdvancedColor::from_value(&raw).unwrap();
    assert_eq!(parsed.to_value()["gradient"]["repeat"], json!(true));
}
