use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Argb,
    math::{clamp_unit, lerp},
};

/// Linear per-channel ARGB interpolation from `from` toward `to`.
///
/// `t` is clamped to `[0, 1]`, so `blend(a, b, 0.0) == a` and `blend(a, b, 1.0) == b`.
pub fn blend(from: Argb, to: Argb, t: f64) -> Argb {
    fn channel(a: u8, b: u8, t: f64) -> u8 {
        lerp(f64::from(a), f64::from(b), t).round().clamp(0.0, 255.0) as u8
    }

    let t = clamp_unit(t);
    let [fa, fr, fg, fb] = from.channels();
    let [ta, tr, tg, tb] = to.channels();
    Argb::from_argb(
        channel(fa, ta, t),
        channel(fr, tr, t),
        channel(fg, tg, t),
        channel(fb, tb, t),
    )
}

/// Config-facing color representation.
///
/// Accepts `"#RRGGBB"`, `"#AARRGGBB"`, `[r, g, b]`, `[a, r, g, b]` or a packed `0xAARRGGBB`
/// integer, and serializes back to the `"#AARRGGBB"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDef(pub Argb);

impl From<ColorDef> for Argb {
    fn from(c: ColorDef) -> Self {
        c.0
    }
}

impl From<Argb> for ColorDef {
    fn from(c: Argb) -> Self {
        Self(c)
    }
}

impl Serialize for ColorDef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("#{:08X}", self.0.0))
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Packed(u32),
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Packed(v) => Ok(Self(Argb(v))),
            Repr::Hex(s) => parse_hex(&s).map(Self).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self(Argb::from_argb(0xFF, *r, *g, *b))),
                [a, r, g, b] => Ok(Self(Argb::from_argb(*a, *r, *g, *b))),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([a,r,g,b])",
                )),
            },
        }
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB` (leading `#` optional, case-insensitive).
pub fn parse_hex(s: &str) -> Result<Argb, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok(Argb::from_argb(
            0xFF,
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Argb::from_argb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #AARRGGBB (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/color.rs"]
mod tests;
