//! Single-badge composition: a rounded rectangle, the icon glyph and a
//! centered label.

use std::path::Path;

use anyhow::Result;

use crate::catalog::IconCatalog;
use crate::color;
use crate::config::BadgeConfig;
use crate::error::BadgeError;
use crate::text_metrics::text_width;

/// One badge render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    pub identifier: String,
    /// Label text; `None` falls back to the identifier.
    pub display_name: Option<String>,
    /// Background override as hex, with or without a leading `#`.
    pub color: Option<String>,
}

impl BadgeSpec {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: None,
            color: None,
        }
    }

    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }
}

/// A rendered badge: the drawable fragment plus its outer dimensions.
///
/// The fragment carries no outer `<svg>` wrapper, so the grid composer can
/// embed it directly instead of re-parsing serialized markup.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBadge {
    pub content: String,
    pub width: f32,
    pub height: f32,
}

/// Outer badge width for a label: side paddings, icon box, icon/text gap and
/// the measured label width.
pub fn badge_width(display_name: &str, config: &BadgeConfig) -> f32 {
    config.padding * 2.0
        + config.icon_size
        + config.text_padding
        + text_width(display_name, config.char_width)
}

/// Render one badge against the catalog.
///
/// Pure: identical inputs produce byte-identical markup.
pub fn render_badge(
    catalog: &IconCatalog,
    spec: &BadgeSpec,
    config: &BadgeConfig,
) -> Result<RenderedBadge, BadgeError> {
    let icon = catalog
        .resolve(&spec.identifier)
        .ok_or_else(|| BadgeError::IconNotFound(spec.identifier.clone()))?;

    let background = match &spec.color {
        Some(color) => color::normalize_hex(color),
        None => icon.color(),
    };
    let foreground = color::text_color_for(&background);

    let label = spec.label();
    let label_width = text_width(label, config.char_width);
    let width = badge_width(label, config);
    let height = config.height;

    // The document's outer attributes use the rounded width; the unrounded
    // value stays on the badge for grid cell math.
    let outer = width.round();
    let icon_y = (height - config.icon_size) / 2.0;
    let scale = config.icon_size / config.icon_viewbox;
    let text_x = config.padding + config.icon_size + config.text_padding + label_width / 2.0;
    let text_y = height / 2.0 + config.font_size * 0.35;

    let mut content = String::new();
    content.push_str(&format!(
        "<rect width=\"{outer}\" height=\"{height}\" rx=\"{}\" fill=\"{background}\"/>\n",
        config.border_radius
    ));
    content.push_str(&format!(
        "  <g transform=\"translate({}, {icon_y:.2}) scale({scale:.4})\" fill=\"{foreground}\">\n    <path d=\"{}\"/>\n  </g>\n",
        config.padding, icon.path
    ));
    content.push_str(&format!(
        "  <text x=\"{text_x:.2}\" y=\"{text_y:.2}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{foreground}\" text-anchor=\"middle\">{}</text>",
        config.font_family,
        config.font_size,
        config.font_weight,
        escape_xml(label)
    ));

    Ok(RenderedBadge {
        content,
        width,
        height,
    })
}

/// Wrap a rendered badge in a standalone SVG document.
pub fn badge_document(badge: &RenderedBadge, config: &BadgeConfig) -> String {
    let outer = badge.width.round();
    format!(
        "<svg width=\"{outer}\" height=\"{height}\" viewBox=\"0 0 {outer} {height}\" xmlns=\"http://www.w3.org/2000/svg\">\n{defs}  {content}\n</svg>",
        height = badge.height,
        defs = font_defs(config),
        content = badge.content
    )
}

pub(crate) fn font_defs(config: &BadgeConfig) -> String {
    format!(
        "  <defs>\n    <style type=\"text/css\">\n      @import url('{}');\n    </style>\n  </defs>\n",
        config.font_import
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
