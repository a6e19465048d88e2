//! Robots.txt generation.
//!
//! Produces the crawler policy served at `/robots.txt`.

use emergence_core::Config;
use tracing::debug;

use crate::document::{Document, TEXT_PLAIN};

/// Seconds robots.txt may be cached.
pub const ROBOTS_MAX_AGE: u32 = 86400;

/// Robots.txt responder.
///
/// The policy text is fixed for the process lifetime, so it is rendered once
/// at construction.
#[derive(Debug, Clone)]
pub struct RobotsResponder {
    body: String,
}

impl RobotsResponder {
    /// Create a new robots responder.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            body: render(config),
        }
    }

    /// Produce the robots.txt document.
    #[must_use]
    pub fn handle(&self) -> Document {
        debug!(bytes = self.body.len(), "serving robots.txt");
        Document::new(self.body.clone(), TEXT_PLAIN, ROBOTS_MAX_AGE)
    }
}

fn render(config: &Config) -> String {
    let site_url = config.url_for("/");
    let sitemap_url = config.url_for("/sitemap.xml");

    let mut txt = format!("# Robots.txt for {} Exhibit\n", config.site.title);
    txt.push_str(&format!("# {site_url}\n\n"));

    txt.push_str("User-agent: *\n");
    txt.push_str("Allow: /\n\n");

    txt.push_str("# Sitemap location\n");
    txt.push_str(&format!("Sitemap: {sitemap_url}\n\n"));

    txt.push_str("# Crawl-delay for respectful crawling\n");
    txt.push_str(&format!("Crawl-delay: {}\n", config.robots.crawl_delay));
    txt
}
