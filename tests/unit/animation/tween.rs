use super::*;
use crate::color::GradientStop;
use serde_json::Map;

fn gradient(kind: GradientKind, direction: f64, stops: &[(&str, f64)]) -> Gradient {
    Gradient {
        kind,
        direction,
        colors: stops
            .iter()
            .map(|(c, p)| GradientStop {
                c: (*c).to_owned(),
                p: *p,
            })
            .collect(),
        extra: Map::new(),
    }
}

#[test]
fn number_tween_matches_weighted_sum() {
    let tween = NumberTween {
        start: 10.0,
        end: 30.0,
    };
    for t in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
        assert_eq!(tween.at(t), 10.0 * (1.0 - t) + 30.0 * t);
    }
    assert_eq!(tween.at(0.0), 10.0);
    assert_eq!(tween.at(1.0), 30.0);
}

#[test]
fn color_tween_requires_decodable_endpoints() {
    assert!(ColorTween::parse("rgba(0,0,0,1)", "not a color").is_none());
    let tween = ColorTween::parse("rgba(0,0,0,1)", "#ffffff").unwrap();
    assert_eq!(tween.rgba_at(0.5), Rgba::new(127.5, 127.5, 127.5, 1.0));
    assert_eq!(tween.at(1.0), "rgba(255,255,255,1)");
}

#[test]
fn gradient_tween_rejects_mismatched_stops() {
    let a = gradient(GradientKind::Linear, 0.0, &[("rgba(0,0,0,1)", 0.0)]);
    let b = gradient(
        GradientKind::Linear,
        90.0,
        &[("rgba(0,0,0,1)", 0.0), ("rgba(9,9,9,1)", 100.0)],
    );
    assert!(GradientTween::new(&a, &b).is_none());
}

#[test]
fn gradient_tween_interpolates_everything_but_kind() {
    let a = gradient(
        GradientKind::Linear,
        0.0,
        &[("rgba(0,0,0,1)", 0.0), ("rgba(0,0,0,0)", 50.0)],
    );
    let b = gradient(
        GradientKind::Radial,
        90.0,
        &[("rgba(200,100,0,1)", 20.0), ("rgba(0,0,0,1)", 100.0)],
    );
    let tween = GradientTween::new(&a, &b).unwrap();

    let mut g = tween.initial();
    assert_eq!(g.kind, GradientKind::Radial);
    assert_eq!(g.direction, 0.0);
    assert_eq!(g.colors, a.colors);

    tween.apply(&mut g, 0.5);
    assert_eq!(g.kind, GradientKind::Radial);
    assert_eq!(g.direction, 45.0);
    assert_eq!(g.colors[0].c, "rgba(100,50,0,1)");
    assert_eq!(g.colors[0].p, 10.0);
    assert_eq!(g.colors[1].c, "rgba(0,0,0,0.5)");
    assert_eq!(g.colors[1].p, 75.0);

    tween.apply(&mut g, 1.0);
    assert_eq!(g.direction, 90.0);
    assert_eq!(g.colors, b.colors);
}
