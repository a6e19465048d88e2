//! Sitemap generation.
//!
//! Generates the XML sitemap served at `/sitemap.xml`. The page list is
//! fixed; only `lastmod` changes, once per UTC day.

use std::sync::Arc;

use chrono::NaiveDate;
use emergence_core::Config;
use tracing::debug;

use crate::{
    clock::{Clock, SystemClock},
    document::{APPLICATION_XML, Document},
};

/// Seconds sitemap.xml may be cached.
pub const SITEMAP_MAX_AGE: u32 = 3600;

/// Sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Protocol spelling of the frequency.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A page fragment listed in the sitemap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitePage {
    /// Location relative to the canonical site URL.
    pub location: &'static str,

    /// Priority (0.0 to 1.0).
    pub priority: f32,

    /// Change frequency.
    pub change_frequency: ChangeFreq,
}

impl SitePage {
    const fn monthly(location: &'static str, priority: f32) -> Self {
        Self {
            location,
            priority,
            change_frequency: ChangeFreq::Monthly,
        }
    }
}

/// Pages of the exhibit, in sitemap order.
pub const PAGES: [SitePage; 6] = [
    SitePage::monthly("/", 1.0),
    SitePage::monthly("/#about", 0.8),
    SitePage::monthly("/#watch-now", 0.9),
    SitePage::monthly("/#cast", 0.7),
    SitePage::monthly("/#awards", 0.7),
    SitePage::monthly("/#other-links", 0.6),
];

/// Sitemap responder.
#[derive(Debug, Clone)]
pub struct SitemapResponder {
    site_url: String,
    pages: &'static [SitePage],
    clock: Arc<dyn Clock>,
}

impl SitemapResponder {
    /// Create a sitemap responder reading dates from `clock`.
    #[must_use]
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            site_url: config.site.canonical_url.trim_end_matches('/').to_string(),
            pages: &PAGES,
            clock,
        }
    }

    /// Create a sitemap responder using the system clock.
    #[must_use]
    pub fn with_system_clock(config: &Config) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    /// The listed pages.
    #[must_use]
    pub fn pages(&self) -> &[SitePage] {
        self.pages
    }

    /// Produce the sitemap document dated today.
    #[must_use]
    pub fn handle(&self) -> Document {
        let today = self.clock.today();
        debug!(count = self.pages.len(), %today, "generating sitemap");
        Document::new(self.generate(today), APPLICATION_XML, SITEMAP_MAX_AGE)
    }

    /// Generate sitemap XML with every entry dated `lastmod`.
    #[must_use]
    pub fn generate(&self, lastmod: NaiveDate) -> String {
        let lastmod = lastmod.format("%Y-%m-%d").to_string();

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        let urls: Vec<String> = self
            .pages
            .iter()
            .map(|page| self.url_to_xml(page, &lastmod))
            .collect();
        xml.push_str(&urls.join("\n"));

        xml.push_str("\n</urlset>");
        xml
    }

    /// Convert a page to its `<url>` element.
    fn url_to_xml(&self, page: &SitePage, lastmod: &str) -> String {
        let loc = format!("{}{}", self.site_url, page.location);

        let mut xml = String::from("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            page.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", page.priority));
        xml.push_str("  </url>");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
