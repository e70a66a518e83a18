//! Grid composition: rendered badges laid out row-major on a uniform grid.

use crate::catalog::IconCatalog;
use crate::config::BadgeConfig;
use crate::error::BadgeError;
use crate::render::{BadgeSpec, RenderedBadge, font_defs, render_badge};

/// A composed grid document and its canvas dimensions.
#[derive(Debug, Clone)]
pub struct GridResult {
    pub svg: String,
    pub width: f32,
    pub height: f32,
}

/// Lay out rendered badges on a uniform grid.
///
/// Every cell takes the maximum badge width and height across the whole set.
/// Badges are centered horizontally within their cell and anchored to the
/// cell's top edge; the vertical asymmetry is intentional.
pub fn compose_grid(
    badges: &[RenderedBadge],
    columns: usize,
    gap: f32,
    config: &BadgeConfig,
) -> Result<GridResult, BadgeError> {
    if badges.is_empty() {
        return Err(BadgeError::EmptyGrid);
    }
    let columns = columns.max(1);
    let rows = badges.len().div_ceil(columns);

    let cell_width = badges.iter().map(|badge| badge.width).fold(0.0, f32::max);
    let cell_height = badges.iter().map(|badge| badge.height).fold(0.0, f32::max);

    let width = cell_width * columns as f32 + gap * (columns as f32 - 1.0);
    let height = cell_height * rows as f32 + gap * (rows as f32 - 1.0);

    let mut svg = format!(
        "<svg width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\" xmlns=\"http://www.w3.org/2000/svg\">\n{}",
        font_defs(config)
    );

    for (index, badge) in badges.iter().enumerate() {
        let row = index / columns;
        let col = index % columns;
        let cell_x = col as f32 * (cell_width + gap);
        let cell_y = row as f32 * (cell_height + gap);
        let x = cell_x + (cell_width - badge.width) / 2.0;
        svg.push_str(&format!(
            "  <g transform=\"translate({x:.2}, {cell_y:.2})\">\n    {}\n  </g>\n",
            badge.content
        ));
    }

    svg.push_str("</svg>");

    Ok(GridResult { svg, width, height })
}

/// Render-boundary grid operation.
///
/// Resolves each identifier, labels resolved badges with their catalog title
/// and composes the resolved subset. Unresolved identifiers are skipped
/// silently; the call fails only when none of them resolve.
pub fn grid_from_identifiers(
    catalog: &IconCatalog,
    identifiers: &[String],
    columns: usize,
    gap: f32,
    config: &BadgeConfig,
) -> Result<GridResult, BadgeError> {
    if identifiers.is_empty() {
        return Err(BadgeError::MissingParameter("c"));
    }

    let mut badges = Vec::new();
    for identifier in identifiers {
        let Some(icon) = catalog.resolve(identifier) else {
            continue;
        };
        let spec = BadgeSpec {
            identifier: identifier.clone(),
            display_name: Some(icon.title.clone()),
            color: None,
        };
        if let Ok(badge) = render_badge(catalog, &spec, config) {
            badges.push(badge);
        }
    }

    if badges.is_empty() {
        return Err(BadgeError::NoIconsMatched(identifiers.join(",")));
    }
    compose_grid(&badges, columns, gap, config)
}
