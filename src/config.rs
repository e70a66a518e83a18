use serde::{Deserialize, Serialize};
use std::path::Path;

/// Badge geometry and typography. Every length is in SVG user units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeConfig {
    pub height: f32,
    pub padding: f32,
    pub icon_size: f32,
    pub text_padding: f32,
    pub border_radius: f32,
    pub font_size: f32,
    pub font_weight: u16,
    /// Fixed per-character advance of the badge font at `font_size`.
    pub char_width: f32,
    /// Side length of the coordinate space catalog glyphs are authored in.
    pub icon_viewbox: f32,
    pub font_family: String,
    /// Stylesheet URL imported into every emitted document, pre-escaped for
    /// embedding in markup.
    pub font_import: String,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            height: 30.0,
            padding: 16.0,
            icon_size: 20.0,
            text_padding: 12.0,
            border_radius: 15.0,
            font_size: 14.0,
            font_weight: 800,
            // JetBrains Mono bold at 14px
            char_width: 8.4,
            icon_viewbox: 24.0,
            font_family: "JetBrains Mono, monospace".to_string(),
            font_import:
                "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@800&amp;display=swap"
                    .to_string(),
        }
    }
}

/// Grid composition defaults, used when a request leaves them unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub columns: usize,
    pub gap: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            gap: 8.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub badge: BadgeConfig,
    pub grid: GridConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    badge: Option<BadgeVariables>,
    grid: Option<GridVariables>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BadgeVariables {
    height: Option<f32>,
    padding: Option<f32>,
    icon_size: Option<f32>,
    text_padding: Option<f32>,
    border_radius: Option<f32>,
    font_size: Option<f32>,
    font_weight: Option<u16>,
    char_width: Option<f32>,
    icon_viewbox: Option<f32>,
    font_family: Option<String>,
    font_import: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridVariables {
    columns: Option<usize>,
    gap: Option<f32>,
}

/// Load configuration overrides from a JSON file, merged over defaults.
/// `None` yields the defaults untouched.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;
    apply_config_file(&mut config, parsed);
    Ok(config)
}

fn apply_config_file(config: &mut Config, parsed: ConfigFile) {
    if let Some(vars) = parsed.badge {
        if let Some(v) = vars.height {
            config.badge.height = v;
        }
        if let Some(v) = vars.padding {
            config.badge.padding = v;
        }
        if let Some(v) = vars.icon_size {
            config.badge.icon_size = v;
        }
        if let Some(v) = vars.text_padding {
            config.badge.text_padding = v;
        }
        if let Some(v) = vars.border_radius {
            config.badge.border_radius = v;
        }
        if let Some(v) = vars.font_size {
            config.badge.font_size = v;
        }
        if let Some(v) = vars.font_weight {
            config.badge.font_weight = v;
        }
        if let Some(v) = vars.char_width {
            config.badge.char_width = v;
        }
        if let Some(v) = vars.icon_viewbox {
            config.badge.icon_viewbox = v;
        }
        if let Some(v) = vars.font_family {
            config.badge.font_family = v;
        }
        if let Some(v) = vars.font_import {
            config.badge.font_import = v;
        }
    }
    if let Some(vars) = parsed.grid {
        if let Some(v) = vars.columns {
            config.grid.columns = v;
        }
        if let Some(v) = vars.gap {
            config.grid.gap = v;
        }
    }
}
