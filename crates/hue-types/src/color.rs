use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// A validated color in the sRGB space.
///
/// The only textual form of a `ColorValue` is canonical lowercase
/// `#rrggbb`. Any accepted input expression (hex, `rgb()`, `hsl()`, or a
/// CSS color name) is normalized on parse, so parsing the output of
/// [`ColorValue::to_hex`] always yields an equal value.
///
/// Accepted syntax, case-insensitive, surrounding whitespace ignored:
///
/// - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (alpha is discarded)
/// - `rgb(r, g, b)` and `rgba(r, g, b, a)` with 0–255 channels or percentages
/// - `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`
/// - CSS named colors such as `red` or `cornflowerblue`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue {
    red: u8,
    green: u8,
    blue: u8,
}

impl ColorValue {
    /// Create from raw 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Validate and normalize a color expression.
    pub fn parse(input: &str) -> TypeResult<Self> {
        parse_expression(input).ok_or_else(|| TypeError::InvalidColor(input.to_string()))
    }

    /// Returns `true` if `input` would parse.
    pub fn is_color(input: &str) -> bool {
        parse_expression(input).is_some()
    }

    /// Canonical `#rrggbb` representation.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// The `(red, green, blue)` channels.
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl From<Srgb<u8>> for ColorValue {
    fn from(rgb: Srgb<u8>) -> Self {
        Self::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl FromStr for ColorValue {
    type Err = TypeError;

    fn from_str(s: &str) -> TypeResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ColorValue {
    type Error = TypeError;

    fn try_from(value: String) -> TypeResult<Self> {
        Self::parse(&value)
    }
}

impl From<ColorValue> for String {
    fn from(value: ColorValue) -> Self {
        value.to_hex()
    }
}

impl fmt::Debug for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorValue({})", self.to_hex())
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn parse_expression(input: &str) -> Option<ColorValue> {
    let value = input.trim().to_ascii_lowercase();
    if value.is_empty() {
        return None;
    }
    if let Some(digits) = value.strip_prefix('#') {
        return parse_hex(digits);
    }
    if let Some((name, args)) = split_function(&value) {
        return match name {
            "rgb" | "rgba" => parse_rgb(&args),
            "hsl" | "hsla" => parse_hsl(&args),
            _ => None,
        };
    }
    palette::named::from_str(&value).map(ColorValue::from)
}

fn parse_hex(digits: &str) -> Option<ColorValue> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match digits.len() {
        // #rgb and #rgba
        3 | 4 => Some(ColorValue::new(nibble(0)?, nibble(1)?, nibble(2)?)),
        // #rrggbb and #rrggbbaa
        6 | 8 => Some(ColorValue::new(byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

/// Split `name(a, b, c)` into `("name", ["a", "b", "c"])`.
fn split_function(value: &str) -> Option<(&str, Vec<&str>)> {
    let body = value.strip_suffix(')')?;
    let open = body.find('(')?;
    let name = body[..open].trim_end();
    let args = body[open + 1..].split(',').map(str::trim).collect();
    Some((name, args))
}

fn parse_rgb(args: &[&str]) -> Option<ColorValue> {
    let (channels, alpha) = match args {
        [r, g, b] => ([*r, *g, *b], None),
        [r, g, b, a] => ([*r, *g, *b], Some(*a)),
        _ => return None,
    };
    if let Some(alpha) = alpha {
        parse_alpha(alpha)?;
    }
    Some(ColorValue::new(
        parse_channel(channels[0])?,
        parse_channel(channels[1])?,
        parse_channel(channels[2])?,
    ))
}

fn parse_hsl(args: &[&str]) -> Option<ColorValue> {
    let (hue, saturation, lightness, alpha) = match args {
        [h, s, l] => (*h, *s, *l, None),
        [h, s, l, a] => (*h, *s, *l, Some(*a)),
        _ => return None,
    };
    if let Some(alpha) = alpha {
        parse_alpha(alpha)?;
    }
    let hue = parse_number(hue.strip_suffix("deg").unwrap_or(hue))?.rem_euclid(360.0);
    let saturation = parse_percentage(saturation)?;
    let lightness = parse_percentage(lightness)?;

    let hsl: Hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Some(ColorValue::from(rgb.into_format::<u8>()))
}

/// An 8-bit channel given either as `0..=255` or as a percentage.
fn parse_channel(raw: &str) -> Option<u8> {
    let value = if raw.ends_with('%') {
        parse_percentage(raw)? * 255.0
    } else {
        parse_number(raw)?
    };
    (0.0..=255.0).contains(&value).then(|| value.round() as u8)
}

/// Alpha is validated but not kept.
fn parse_alpha(raw: &str) -> Option<f32> {
    let value = if raw.ends_with('%') {
        parse_percentage(raw)?
    } else {
        parse_number(raw)?
    };
    (0.0..=1.0).contains(&value).then_some(value)
}

/// A `0%..=100%` value as a fraction in `0.0..=1.0`.
fn parse_percentage(raw: &str) -> Option<f32> {
    let value = parse_number(raw.strip_suffix('%')?)?;
    (0.0..=100.0).contains(&value).then(|| value / 100.0)
}

fn parse_number(raw: &str) -> Option<f32> {
    let raw = raw.trim();
    // Reject forms Rust accepts but CSS does not ("inf", "nan", "1e3").
    let numeric = |b: u8| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+');
    if raw.is_empty() || !raw.bytes().all(numeric) {
        return None;
    }
    raw.parse::<f32>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hex(input: &str) -> String {
        ColorValue::parse(input).unwrap().to_hex()
    }

    #[test]
    fn parses_long_hex() {
        assert_eq!(hex("#ff0000"), "#ff0000");
        assert_eq!(hex("#FF00AA"), "#ff00aa");
        assert_eq!(hex("  #0a0B0c  "), "#0a0b0c");
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(hex("#f00"), "#ff0000");
        assert_eq!(hex("#abc"), "#aabbcc");
    }

    #[test]
    fn hex_alpha_is_discarded() {
        assert_eq!(hex("#f008"), "#ff0000");
        assert_eq!(hex("#12345680"), "#123456");
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(hex("red"), "#ff0000");
        assert_eq!(hex("Blue"), "#0000ff");
        assert_eq!(hex("white"), "#ffffff");
        assert_eq!(hex("CornflowerBlue"), "#6495ed");
    }

    #[test]
    fn parses_rgb_functions() {
        assert_eq!(hex("rgb(255, 0, 0)"), "#ff0000");
        assert_eq!(hex("rgba(0,128,255,0.5)"), "#0080ff");
        assert_eq!(hex("rgb(100%, 0%, 50%)"), "#ff0080");
        assert_eq!(hex("RGB( 1 , 2 , 3 )"), "#010203");
    }

    #[test]
    fn parses_hsl_functions() {
        assert_eq!(hex("hsl(0, 100%, 50%)"), "#ff0000");
        assert_eq!(hex("hsl(120, 100%, 50%)"), "#00ff00");
        assert_eq!(hex("hsla(240deg, 100%, 50%, 1)"), "#0000ff");
        assert_eq!(hex("hsl(0, 0%, 100%)"), "#ffffff");
        assert_eq!(hex("hsl(360, 100%, 50%)"), "#ff0000");
    }

    #[test]
    fn rejects_invalid_input() {
        for bad in [
            "",
            "   ",
            "#",
            "#ff",
            "#fffff",
            "#gggggg",
            "ff0000",
            "notacolor",
            "rgb(256, 0, 0)",
            "rgb(-1, 0, 0)",
            "rgb(1, 2)",
            "rgba(1, 2, 3, 2)",
            "rgb(1, 2, 3, 4, 5)",
            "hsl(0, 100, 50%)",
            "hsl(0, 120%, 50%)",
            "cmyk(0, 0, 0, 0)",
            "rgb(inf, 0, 0)",
        ] {
            assert!(ColorValue::parse(bad).is_err(), "accepted {bad:?}");
            assert!(!ColorValue::is_color(bad));
        }
    }

    #[test]
    fn error_carries_offending_value() {
        let err = ColorValue::parse("chartreuse-ish").unwrap_err();
        assert_eq!(err, TypeError::InvalidColor("chartreuse-ish".into()));
        assert_eq!(err.to_string(), "invalid hex color value: chartreuse-ish");
    }

    #[test]
    fn display_and_debug() {
        let c = ColorValue::new(1, 2, 255);
        assert_eq!(c.to_string(), "#0102ff");
        assert_eq!(format!("{c:?}"), "ColorValue(#0102ff)");
        assert_eq!(c.channels(), (1, 2, 255));
    }

    #[test]
    fn serde_uses_canonical_hex() {
        let c: ColorValue = serde_json::from_str("\"Red\"").unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ff0000\"");
        assert!(serde_json::from_str::<ColorValue>("\"nope\"").is_err());
    }

    proptest! {
        #[test]
        fn canonical_form_is_idempotent(r: u8, g: u8, b: u8, upper: bool) {
            let raw = format!("#{r:02x}{g:02x}{b:02x}");
            let raw = if upper { raw.to_uppercase() } else { raw };
            let first = ColorValue::parse(&raw).unwrap();
            let second = ColorValue::parse(&first.to_hex()).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.channels(), (r, g, b));
            prop_assert_eq!(second.to_hex(), first.to_hex());
        }

        #[test]
        fn rgb_function_matches_hex(r: u8, g: u8, b: u8) {
            let from_fn = ColorValue::parse(&format!("rgb({r}, {g}, {b})")).unwrap();
            prop_assert_eq!(from_fn, ColorValue::new(r, g, b));
        }

        #[test]
        fn arbitrary_strings_never_panic(s in "\\PC*") {
            let _ = ColorValue::parse(&s);
        }
    }
}
