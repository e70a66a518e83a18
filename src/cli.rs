use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::catalog::{self, IconCatalog};
use crate::config::load_config;
use crate::error::BadgeError;
use crate::generate::generate_all;
use crate::grid::grid_from_identifiers;
use crate::render::{BadgeSpec, badge_document, render_badge, write_output_svg};

#[derive(Parser, Debug)]
#[command(
    name = "sbdg",
    version,
    about = "Simple Icons badge renderer (SVG badges and grids)"
)]
pub struct Args {
    /// Icon catalog JSON file
    #[arg(short = 'C', long = "catalog", default_value = "simple-icons.json")]
    pub catalog: PathBuf,

    /// Config JSON file (badge geometry and grid defaults)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a single badge
    Badge {
        /// Icon identifier (catalog slug)
        icon: String,
        /// Label text; defaults to the identifier
        #[arg(short = 'n', long = "name")]
        name: Option<String>,
        /// Background color override (hex)
        #[arg(long = "color")]
        color: Option<String>,
        /// Output file; stdout if omitted
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Compose a grid of badges
    Grid {
        /// Comma-separated icon identifiers
        icons: String,
        /// Number of columns
        #[arg(long = "cols")]
        columns: Option<usize>,
        /// Gap between cells in pixels
        #[arg(long = "gap")]
        gap: Option<f32>,
        /// Output file; stdout if omitted
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// List catalog entries as JSON
    List {
        /// Filter by substring on slug or title
        #[arg(long = "search")]
        search: Option<String>,
        /// Maximum number of entries
        #[arg(long = "limit")]
        limit: Option<usize>,
    },
    /// Search catalog entries as JSON
    Search {
        /// Query substring
        query: String,
    },
    /// Generate one badge file per catalog entry
    Generate {
        /// Output directory
        #[arg(long = "out-dir", default_value = "badges")]
        out_dir: PathBuf,
        /// Stop after this many entries
        #[arg(long = "limit")]
        limit: Option<usize>,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let catalog = catalog::install(IconCatalog::load(&args.catalog)?);

    match args.command {
        Command::Badge {
            icon,
            name,
            color,
            output,
        } => {
            let spec = BadgeSpec {
                identifier: icon,
                display_name: name,
                color,
            };
            let badge = render_badge(catalog, &spec, &config.badge)?;
            write_output_svg(&badge_document(&badge, &config.badge), output.as_deref())?;
        }
        Command::Grid {
            icons,
            columns,
            gap,
            output,
        } => {
            let identifiers = split_identifiers(&icons);
            let result = grid_from_identifiers(
                catalog,
                &identifiers,
                columns.unwrap_or(config.grid.columns),
                gap.unwrap_or(config.grid.gap),
                &config.badge,
            )?;
            write_output_svg(&result.svg, output.as_deref())?;
        }
        Command::List { search, limit } => {
            let mut icons = match search.as_deref() {
                Some(query) => catalog.search(query),
                None => catalog.listing(),
            };
            if let Some(limit) = limit.filter(|limit| *limit > 0) {
                icons.truncate(limit);
            }
            let body = serde_json::json!({ "total": icons.len(), "icons": icons });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Command::Search { query } => {
            if query.trim().is_empty() {
                return Err(BadgeError::MissingParameter("q").into());
            }
            let icons = catalog.search(&query);
            let body =
                serde_json::json!({ "query": query, "total": icons.len(), "icons": icons });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Command::Generate { out_dir, limit } => {
            generate_all(catalog, &out_dir, limit, &config.badge)?;
        }
    }

    Ok(())
}

fn split_identifiers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
