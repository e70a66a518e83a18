//! The icon catalog: an ordered, read-only set of icon definitions with an
//! export-key index and the identifier resolution chain.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Prefix of every derived export key in the catalog index.
pub const KEY_PREFIX: &str = "si";

static CATALOG: OnceCell<IconCatalog> = OnceCell::new();

/// One catalog entry: lookup slug, display title, default brand color and
/// the glyph path in the catalog's native coordinate space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconDef {
    pub slug: String,
    pub title: String,
    /// Brand color as 6 hex digits without a leading `#`.
    pub hex: String,
    /// SVG path data for the glyph.
    pub path: String,
    /// Explicit export key, for dumps whose keys are not derivable from the
    /// slug. Absent keys are derived as `si` + capitalized slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl IconDef {
    pub fn lookup_key(&self) -> String {
        match &self.key {
            Some(key) => key.clone(),
            None => derive_key(&self.slug),
        }
    }

    /// Default brand color as a fill-ready value.
    pub fn color(&self) -> String {
        format!("#{}", self.hex)
    }
}

/// Listing/search row: the public shape of one catalog entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IconSummary {
    pub slug: String,
    pub title: String,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    entries: Vec<IconDef>,
    index: HashMap<String, usize>,
}

type Strategy = fn(&IconCatalog, &str) -> Option<usize>;

// Resolution order; the first strategy that matches wins.
const STRATEGIES: [Strategy; 3] = [
    IconCatalog::by_exact_key,
    IconCatalog::by_capitalized_key,
    IconCatalog::by_slug_scan,
];

impl IconCatalog {
    /// Build a catalog preserving `entries` order. Duplicate lookup keys keep
    /// the first entry.
    pub fn new(entries: Vec<IconDef>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            index.entry(entry.lookup_key()).or_insert(pos);
        }
        Self { entries, index }
    }

    /// Deserialize a catalog from a JSON array of entries.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading icon catalog {}", path.display()))?;
        let entries: Vec<IconDef> = serde_json::from_str(&contents)
            .with_context(|| format!("parsing icon catalog {}", path.display()))?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[IconDef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an identifier through the ordered strategy chain: exact key,
    /// capitalized key, then a linear slug scan in catalog order.
    pub fn resolve(&self, identifier: &str) -> Option<&IconDef> {
        STRATEGIES
            .iter()
            .find_map(|strategy| strategy(self, identifier))
            .map(|pos| &self.entries[pos])
    }

    fn by_exact_key(&self, identifier: &str) -> Option<usize> {
        self.index.get(&format!("{KEY_PREFIX}{identifier}")).copied()
    }

    fn by_capitalized_key(&self, identifier: &str) -> Option<usize> {
        self.index
            .get(&format!("{KEY_PREFIX}{}", capitalize(identifier)))
            .copied()
    }

    fn by_slug_scan(&self, identifier: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.slug == identifier)
    }

    /// Every entry as a summary row, sorted by slug.
    pub fn listing(&self) -> Vec<IconSummary> {
        let mut icons: Vec<IconSummary> = self
            .entries
            .iter()
            .map(|entry| IconSummary {
                slug: entry.slug.clone(),
                title: entry.title.clone(),
                color: entry.color(),
            })
            .collect();
        icons.sort_by(|a, b| a.slug.cmp(&b.slug));
        icons
    }

    /// Case-insensitive substring match on slug or title, over the sorted
    /// listing.
    pub fn search(&self, query: &str) -> Vec<IconSummary> {
        let needle = query.to_lowercase();
        self.listing()
            .into_iter()
            .filter(|icon| {
                icon.slug.to_lowercase().contains(&needle)
                    || icon.title.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

fn derive_key(slug: &str) -> String {
    format!("{KEY_PREFIX}{}", capitalize(slug))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Install the catalog as process-wide read-only state. The first call wins;
/// later calls return the already-installed catalog.
pub fn install(catalog: IconCatalog) -> &'static IconCatalog {
    CATALOG.get_or_init(|| catalog)
}

/// The installed catalog, if any.
pub fn global() -> Option<&'static IconCatalog> {
    CATALOG.get()
}
