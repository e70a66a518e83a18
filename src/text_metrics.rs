//! Deterministic label measurement for the badge font.
//!
//! The badge label is set in a fixed-advance monospace face, so width is a
//! pure function of character count. No font files are consulted.

/// Width of `text` in layout units at a fixed per-character advance.
pub fn text_width(text: &str, char_width: f32) -> f32 {
    text.chars().count() as f32 * char_width
}
