//! Emergence Site Library
//!
//! Metadata surface of the Emergence exhibit site.
//!
//! # Modules
//!
//! - [`paths`] - Static asset path resolution under the deployment base path
//! - [`robots`] - robots.txt responder
//! - [`sitemap`] - sitemap.xml responder
//! - [`document`] - Generated documents and their response headers
//! - [`clock`] - Injectable date source for sitemap `lastmod`
//! - [`export`] - Prerendering the documents to disk

pub mod clock;
pub mod document;
pub mod export;
pub mod paths;
pub mod robots;
pub mod sitemap;

pub use clock::{Clock, FixedClock, SystemClock};
pub use document::Document;
pub use export::{ExportStats, Exporter};
pub use paths::PathResolver;
pub use robots::RobotsResponder;
pub use sitemap::{ChangeFreq, PAGES, SitePage, SitemapResponder};
