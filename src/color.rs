//! Foreground selection against a badge background color.

use once_cell::sync::Lazy;
use regex::Regex;

/// Light foreground, used on dark backgrounds and as the fallback for
/// malformed color values.
pub const LIGHT_TEXT: &str = "#ffffff";
/// Dark foreground, used on light backgrounds.
pub const DARK_TEXT: &str = "#000000";

// Backgrounds whose relative luminance exceeds this get the dark foreground.
const LUMINANCE_THRESHOLD: f32 = 0.8;

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{6}$").unwrap());

/// Foreground color that stays readable on `background`.
///
/// The input is parsed as a 6-hex-digit RGB triple with an optional leading
/// `#`. Malformed values (wrong length, non-hex characters) yield the light
/// foreground rather than failing.
pub fn text_color_for(background: &str) -> &'static str {
    let hex = background.strip_prefix('#').unwrap_or(background);
    match parse_rgb(hex) {
        Some((r, g, b)) if relative_luminance(r, g, b) > LUMINANCE_THRESHOLD => DARK_TEXT,
        _ => LIGHT_TEXT,
    }
}

/// Relative luminance of an sRGB triple, 0.0 for black through 1.0 for white.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
}

/// Ensure a color value carries the leading `#` that SVG fill attributes
/// expect. Catalog entries store bare hex digits; overrides may arrive either
/// way.
pub fn normalize_hex(color: &str) -> String {
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}

fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if !HEX_COLOR_RE.is_match(hex) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
