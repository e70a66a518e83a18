pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod generate;
pub mod grid;
pub mod render;
pub mod text_metrics;

pub use catalog::{IconCatalog, IconDef, IconSummary};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{BadgeConfig, Config, GridConfig, load_config};
pub use error::BadgeError;
pub use generate::{GenerateSummary, generate_all};
pub use grid::{GridResult, compose_grid, grid_from_identifiers};
pub use render::{BadgeSpec, RenderedBadge, badge_document, badge_width, render_badge};
