//! End-to-end tests for the metadata export.
//!
//! These tests load a site config from disk and verify the files a static
//! host would serve.

use std::{fs, sync::Arc};

use chrono::NaiveDate;
use emergence_core::Config;
use emergence_site::{Exporter, FixedClock, PathResolver, RobotsResponder, SitemapResponder};

const SITE_TOML: &str = r#"
[site]
title = "Emergence: Out of the Shadows"
canonical_url = "https://sacda.ca/exhibits/emergence"
base_path = "/exhibits/emergence"
"#;

fn load_config(dir: &tempfile::TempDir) -> Config {
    let path = dir.path().join("site.toml");
    fs::write(&path, SITE_TOML).expect("write config");
    Config::load(&path).expect("Config should load")
}

#[test]
fn test_export_from_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = load_config(&dir);
    let today = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();

    let robots = RobotsResponder::new(&config);
    let sitemap = SitemapResponder::new(&config, Arc::new(FixedClock(today)));
    let out = dir.path().join("build");

    let stats = Exporter::new(&robots, &sitemap)
        .export(&out)
        .expect("export should succeed");
    assert_eq!(stats.files.len(), 2);

    let robots_txt = fs::read_to_string(out.join("robots.txt")).unwrap();
    assert!(robots_txt.contains("Sitemap: https://sacda.ca/exhibits/emergence/sitemap.xml"));
    assert!(robots_txt.contains("Crawl-delay: 1"));

    let sitemap_xml = fs::read_to_string(out.join("sitemap.xml")).unwrap();
    assert_eq!(sitemap_xml.matches("<url>").count(), 6);
    assert_eq!(sitemap_xml.matches("<lastmod>2025-09-30</lastmod>").count(), 6);
}

#[test]
fn test_resolver_from_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = load_config(&dir);

    let resolver = PathResolver::from_config(&config.site);
    assert_eq!(
        resolver.resolve(Some("images/hero.jpg")),
        "/exhibits/emergence/images/hero.jpg"
    );
    assert_eq!(resolver.resolve(Some("")), "");
}
