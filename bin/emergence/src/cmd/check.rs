//! Check command - validate configuration and generated documents

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use emergence_core::Config;
use emergence_site::{RobotsResponder, SitemapResponder};

use super::load_config;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration, the static directory and the generated documents.
pub fn run(config_path: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match load_config(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e:#}"));
            println!("  ✗ Configuration invalid: {e:#}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &mut result);

        println!("\nChecking static directory...");
        check_static_dir(cfg, &mut result);

        println!("\nChecking generated documents...");
        check_documents(cfg, &mut result);
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Path component of an absolute URL, without trailing slash.
fn url_path(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.find('/')
        .map_or("", |idx| &rest[idx..])
        .trim_end_matches('/')
}

fn check_config_values(config: &Config, result: &mut ValidationResult) {
    let canonical_path = url_path(&config.site.canonical_url);
    if canonical_path != config.site.base_path {
        result.add_warning(format!(
            "site.base_path {:?} differs from the canonical URL path {:?}; asset links may not match the public site",
            config.site.base_path, canonical_path
        ));
    } else {
        println!("  ✓ Base path matches canonical URL");
    }

    if config.robots.crawl_delay == 0 {
        result.add_warning("robots.crawl_delay is 0; crawlers will not be throttled");
    }
}

fn check_static_dir(config: &Config, result: &mut ValidationResult) {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_dir() {
        println!("  ✓ {}", dir.display());
    } else {
        result.add_warning(format!(
            "Static directory {} does not exist",
            dir.display()
        ));
    }
}

fn check_documents(config: &Config, result: &mut ValidationResult) {
    let robots = RobotsResponder::new(config).handle();
    let sitemap_line = format!("Sitemap: {}", config.url_for("/sitemap.xml"));
    if robots.body.contains(&sitemap_line) {
        println!("  ✓ robots.txt references {}", config.url_for("/sitemap.xml"));
    } else {
        result.add_error(format!("robots.txt is missing `{sitemap_line}`"));
    }

    let responder = SitemapResponder::with_system_clock(config);
    let expected = responder.pages().len();
    let sitemap = responder.handle();
    let urls = sitemap.body.matches("<url>").count();
    if urls == expected && sitemap.body.ends_with("</urlset>") {
        println!("  ✓ sitemap.xml lists {urls} pages");
    } else {
        result.add_error(format!(
            "sitemap.xml lists {urls} pages, expected {expected}"
        ));
    }
}
