use std::fmt;

use crate::foundation::error::{SchemeError, SchemeResult};

/// Decoded color. `r`, `g`, `b` use the device range `0..=255`, `a` uses `0..=1`.
///
/// Channels are kept as `f64` so intermediate animation frames can carry fractional values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Build a color from its four channels.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Encode a color in the canonical `rgba(r,g,b,a)` form stored in schemes.
pub fn encode_color(color: Rgba) -> String {
    color.to_string()
}

/// Decode an encoded color.
///
/// Accepts `rgba(r,g,b,a)`, `rgb(r,g,b)`, `#rgb`, `#rrggbb` and `#rrggbbaa` (case-insensitive,
/// whitespace tolerated around components).
pub fn parse_color(s: &str) -> SchemeResult<Rgba> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(body) = function_body(&lower, "rgba") {
        let [r, g, b, a] = parse_components::<4>(body)?;
        return Ok(Rgba::new(r, g, b, a));
    }
    if let Some(body) = function_body(&lower, "rgb") {
        let [r, g, b] = parse_components::<3>(body)?;
        return Ok(Rgba::new(r, g, b, 1.0));
    }

    Err(SchemeError::validation(format!(
        "unsupported color \"{s}\", expected rgba(), rgb() or #hex"
    )))
}

fn function_body<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_components<const N: usize>(body: &str) -> SchemeResult<[f64; N]> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(SchemeError::validation(format!(
            "color needs {N} components, got {}",
            parts.len()
        )));
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|_| SchemeError::validation(format!("invalid color component \"{part}\"")))?;
    }
    Ok(out)
}

fn parse_hex(s: &str) -> SchemeResult<Rgba> {
    fn hex_byte(pair: &str) -> SchemeResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| SchemeError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SchemeError::validation(format!(
            "hex color \"#{s}\" has non-hex digits"
        )));
    }

    let (r, g, b, a) = match s.len() {
        3 => {
            let r = hex_byte(&s[0..1])? * 17;
            let g = hex_byte(&s[1..2])? * 17;
            let b = hex_byte(&s[2..3])? * 17;
            (r, g, b, 255)
        }
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err(SchemeError::validation(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA",
            ));
        }
    };

    Ok(Rgba::new(
        f64::from(r),
        f64::from(g),
        f64::from(b),
        f64::from(a) / 255.0,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/color/codec.rs"]
mod tests;
