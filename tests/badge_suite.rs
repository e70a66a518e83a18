use std::path::{Path, PathBuf};

use simple_badges::{
    BadgeConfig, BadgeError, BadgeSpec, IconCatalog, badge_document, compose_grid,
    grid_from_identifiers, render_badge,
};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("catalog.json")
}

fn fixture_catalog() -> IconCatalog {
    IconCatalog::load(&fixture_path()).expect("fixture catalog load failed")
}

fn spec(identifier: &str) -> BadgeSpec {
    BadgeSpec::new(identifier)
}

fn named(identifier: &str, name: &str) -> BadgeSpec {
    BadgeSpec {
        identifier: identifier.to_string(),
        display_name: Some(name.to_string()),
        color: None,
    }
}

#[test]
fn every_catalog_slug_resolves_to_itself() {
    let catalog = fixture_catalog();
    for entry in catalog.entries() {
        let resolved = catalog
            .resolve(&entry.slug)
            .unwrap_or_else(|| panic!("slug {} did not resolve", entry.slug));
        assert_eq!(resolved.slug, entry.slug);
    }
}

#[test]
fn explicit_key_entries_resolve_through_the_slug_scan() {
    let catalog = fixture_catalog();
    // "siCplusplus" misses the index (the dump key is "siCPlusPlus"), so only
    // the linear scan can find this entry.
    let icon = catalog.resolve("cplusplus").expect("scan hit");
    assert_eq!(icon.title, "C++");
}

#[test]
fn unknown_identifiers_do_not_resolve() {
    assert!(fixture_catalog().resolve("bogus-id").is_none());
}

#[test]
fn github_badge_matches_the_width_formula() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let badge = render_badge(&catalog, &named("github", "GitHub"), &config).expect("render");
    // 2*16 + 20 + 12 + 6*8.4 = 114.4
    assert!((badge.width - 114.4).abs() < 1e-3);
    assert_eq!(badge.height, 30.0);
    let svg = badge_document(&badge, &config);
    assert!(svg.starts_with("<svg width=\"114\" height=\"30\" viewBox=\"0 0 114 30\""));
}

#[test]
fn badge_defaults_to_the_catalog_color() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let badge = render_badge(&catalog, &named("github", "GitHub"), &config).expect("render");
    assert!(badge.content.contains("fill=\"#181717\""));
}

#[test]
fn display_name_defaults_to_the_identifier() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let badge = render_badge(&catalog, &spec("python"), &config).expect("render");
    assert!(badge.content.contains(">python</text>"));
}

#[test]
fn rendering_is_idempotent() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let request = named("docker", "Docker");
    let first = render_badge(&catalog, &request, &config).expect("render");
    let second = render_badge(&catalog, &request, &config).expect("render");
    assert_eq!(first.content, second.content);
    assert_eq!(
        badge_document(&first, &config),
        badge_document(&second, &config)
    );
}

#[test]
fn light_override_gets_dark_text() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let request = BadgeSpec {
        identifier: "github".to_string(),
        display_name: None,
        color: Some("#ffffff".to_string()),
    };
    let badge = render_badge(&catalog, &request, &config).expect("render");
    assert!(badge.content.contains("<text") && badge.content.contains("fill=\"#000000\""));
}

#[test]
fn malformed_override_keeps_the_light_text() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let request = BadgeSpec {
        identifier: "github".to_string(),
        display_name: None,
        color: Some("zzzzzz".to_string()),
    };
    let badge = render_badge(&catalog, &request, &config).expect("render");
    assert!(badge.content.contains("fill=\"#ffffff\""));
}

#[test]
fn missing_icon_surfaces_not_found() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let err = render_badge(&catalog, &spec("bogus-id"), &config).expect_err("must fail");
    assert_eq!(err, BadgeError::IconNotFound("bogus-id".to_string()));
}

#[test]
fn five_badges_fill_two_rows_at_four_columns() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let badges: Vec<_> = ["github", "python", "docker", "rust", "pytorch"]
        .into_iter()
        .map(|slug| render_badge(&catalog, &spec(slug), &config).expect("render"))
        .collect();

    let max_width = badges.iter().map(|b| b.width).fold(0.0, f32::max);
    let grid = compose_grid(&badges, 4, 8.0, &config).expect("compose");

    assert!((grid.width - (max_width * 4.0 + 8.0 * 3.0)).abs() < 1e-3);
    assert!((grid.height - (30.0 * 2.0 + 8.0)).abs() < 1e-3);
    // Index 4 lands at row 1, column 0: y = cell height + gap.
    assert!(grid.svg.contains(", 38.00)\">"));
    assert_eq!(grid.svg.matches("<g transform=\"translate(").count(), 5);
}

#[test]
fn empty_grid_is_an_error_not_an_empty_canvas() {
    let config = BadgeConfig::default();
    let err = compose_grid(&[], 4, 8.0, &config).expect_err("must fail");
    assert_eq!(err, BadgeError::EmptyGrid);
}

#[test]
fn grid_keeps_the_resolved_subset() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let identifiers: Vec<String> = ["python", "docker", "bogus-id"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let grid = grid_from_identifiers(&catalog, &identifiers, 4, 8.0, &config).expect("grid");
    assert_eq!(grid.svg.matches("<g transform=\"translate(").count(), 2);
    // Grid badges are labeled with catalog titles.
    assert!(grid.svg.contains(">Python</text>"));
    assert!(grid.svg.contains(">Docker</text>"));
}

#[test]
fn grid_fails_only_when_nothing_resolves() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let identifiers: Vec<String> = ["nope", "also-nope"].iter().map(|s| s.to_string()).collect();
    let err = grid_from_identifiers(&catalog, &identifiers, 4, 8.0, &config).expect_err("fail");
    assert_eq!(err, BadgeError::NoIconsMatched("nope,also-nope".to_string()));
}

#[test]
fn grid_rejects_an_empty_identifier_list() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let err = grid_from_identifiers(&catalog, &[], 4, 8.0, &config).expect_err("fail");
    assert_eq!(err, BadgeError::MissingParameter("c"));
}

#[test]
fn grid_document_holds_a_single_svg_wrapper() {
    let catalog = fixture_catalog();
    let config = BadgeConfig::default();
    let identifiers: Vec<String> = ["python", "rust"].iter().map(|s| s.to_string()).collect();
    let grid = grid_from_identifiers(&catalog, &identifiers, 2, 8.0, &config).expect("grid");
    assert_eq!(grid.svg.matches("<svg").count(), 1);
    assert_eq!(grid.svg.matches("</svg>").count(), 1);
    assert_eq!(grid.svg.matches("<defs>").count(), 1);
}

#[test]
fn listing_is_sorted_and_search_filters() {
    let catalog = fixture_catalog();
    let listing = catalog.listing();
    let slugs: Vec<&str> = listing.iter().map(|i| i.slug.as_str()).collect();
    let mut sorted = slugs.clone();
    sorted.sort();
    assert_eq!(slugs, sorted);
    assert_eq!(listing.len(), catalog.len());

    let hits = catalog.search("PY");
    let hit_slugs: Vec<&str> = hits.iter().map(|i| i.slug.as_str()).collect();
    assert_eq!(hit_slugs, vec!["python", "pytorch"]);

    // Title matches count too.
    assert_eq!(catalog.search("c++").len(), 1);
    assert!(catalog.search("no-such-icon").is_empty());
}
