//! Batch badge generation: one SVG document per catalog entry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::IconCatalog;
use crate::config::BadgeConfig;
use crate::render::{BadgeSpec, badge_document, render_badge};

// Entries are written in bounded batches so progress stays visible on large
// catalogs.
const BATCH_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateSummary {
    pub generated: usize,
    pub failed: usize,
}

/// Write one `{slug}_badge.svg` per catalog entry into `out_dir`, labeled
/// with the entry's title.
///
/// Per-entry failures are logged to stderr and skipped; they never abort the
/// rest of the batch.
pub fn generate_all(
    catalog: &IconCatalog,
    out_dir: &Path,
    limit: Option<usize>,
    config: &BadgeConfig,
) -> Result<GenerateSummary> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let entries = catalog.entries();
    let total = limit.map_or(entries.len(), |limit| limit.min(entries.len()));
    let mut summary = GenerateSummary::default();

    println!("Generating {total} badges...");

    for batch in entries[..total].chunks(BATCH_SIZE) {
        for entry in batch {
            let spec = BadgeSpec {
                identifier: entry.slug.clone(),
                display_name: Some(entry.title.clone()),
                color: None,
            };
            match render_badge(catalog, &spec, config) {
                Ok(badge) => {
                    let path = out_dir.join(format!("{}_badge.svg", entry.slug));
                    match fs::write(&path, badge_document(&badge, config)) {
                        Ok(()) => summary.generated += 1,
                        Err(err) => {
                            summary.failed += 1;
                            eprintln!("error writing badge for {}: {err}", entry.slug);
                        }
                    }
                }
                Err(err) => {
                    summary.failed += 1;
                    eprintln!("error generating badge for {}: {err}", entry.slug);
                }
            }
        }
        println!("Generated {}/{total} badges...", summary.generated);
    }

    println!(
        "Done: {} generated, {} failed",
        summary.generated, summary.failed
    );
    Ok(summary)
}
