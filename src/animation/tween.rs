use crate::animation::lerp::Lerp;
use crate::color::{Gradient, GradientKind, Rgba, encode_color, parse_color};

/// Scalar interpolation between two numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberTween {
    /// Value at `t = 0`.
    pub start: f64,
    /// Value at `t = 1`.
    pub end: f64,
}

impl NumberTween {
    /// Value at progress `t`.
    pub fn at(&self, t: f64) -> f64 {
        f64::lerp(&self.start, &self.end, t)
    }
}

/// Channel-wise interpolation between two decoded colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTween {
    /// Color at `t = 0`.
    pub start: Rgba,
    /// Color at `t = 1`.
    pub end: Rgba,
}

impl ColorTween {
    /// Decode both endpoints; `None` if either is not a color.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            start: parse_color(start).ok()?,
            end: parse_color(end).ok()?,
        })
    }

    /// Decoded color at progress `t`.
    pub fn rgba_at(&self, t: f64) -> Rgba {
        Rgba::lerp(&self.start, &self.end, t)
    }

    /// Encoded color at progress `t`.
    pub fn at(&self, t: f64) -> String {
        encode_color(self.rgba_at(t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct StopTween {
    color: ColorTween,
    position: NumberTween,
}

/// Interpolation between two gradients with the same number of stops.
///
/// Direction, stop colors and stop positions are interpolated independently. The gradient kind
/// is not interpolated: the animated gradient takes the target's kind from the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTween {
    kind: GradientKind,
    direction: NumberTween,
    stops: Vec<StopTween>,
    initial: Gradient,
}

impl GradientTween {
    /// `None` when stop counts differ or a stop color cannot be decoded.
    pub fn new(start: &Gradient, end: &Gradient) -> Option<Self> {
        if start.colors.len() != end.colors.len() {
            return None;
        }

        let stops = start
            .colors
            .iter()
            .zip(&end.colors)
            .map(|(a, b)| {
                Some(StopTween {
                    color: ColorTween::parse(&a.c, &b.c)?,
                    position: NumberTween {
                        start: a.p,
                        end: b.p,
                    },
                })
            })
            .collect::<Option<Vec<_>>>()?;

        let mut initial = start.clone();
        initial.kind = end.kind;

        Some(Self {
            kind: end.kind,
            direction: NumberTween {
                start: start.direction,
                end: end.direction,
            },
            stops,
            initial,
        })
    }

    /// The gradient shown before the first frame: start values with the target's kind.
    pub fn initial(&self) -> Gradient {
        self.initial.clone()
    }

    /// Write the state at progress `t` into `gradient`, which must come from [`Self::initial`].
    pub fn apply(&self, gradient: &mut Gradient, t: f64) {
        gradient.kind = self.kind;
        gradient.direction = self.direction.at(t);
        for (stop, tween) in gradient.colors.iter_mut().zip(&self.stops) {
            stop.c = tween.color.at(t);
            stop.p = tween.position.at(t);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
