//! Static export.
//!
//! Prerenders the metadata documents into an output directory for hosts
//! that serve plain files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{document::Document, robots::RobotsResponder, sitemap::SitemapResponder};

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error.
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Summary of an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportStats {
    /// Files written, in write order.
    pub files: Vec<PathBuf>,

    /// Total bytes written.
    pub bytes: usize,
}

/// Writes robots.txt and sitemap.xml to disk.
#[derive(Debug)]
pub struct Exporter<'a> {
    robots: &'a RobotsResponder,
    sitemap: &'a SitemapResponder,
}

impl<'a> Exporter<'a> {
    /// Create an exporter over the given responders.
    #[must_use]
    pub fn new(robots: &'a RobotsResponder, sitemap: &'a SitemapResponder) -> Self {
        Self { robots, sitemap }
    }

    /// Write both documents into `output_dir`, creating it if needed.
    pub fn export(&self, output_dir: &Path) -> Result<ExportStats> {
        info!(output = %output_dir.display(), "exporting site metadata");

        fs::create_dir_all(output_dir).map_err(|source| ExportError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut stats = ExportStats::default();
        write_document(output_dir, "robots.txt", &self.robots.handle(), &mut stats)?;
        write_document(output_dir, "sitemap.xml", &self.sitemap.handle(), &mut stats)?;

        info!(files = stats.files.len(), bytes = stats.bytes, "export complete");
        Ok(stats)
    }
}

fn write_document(
    output_dir: &Path,
    name: &str,
    doc: &Document,
    stats: &mut ExportStats,
) -> Result<()> {
    let path = output_dir.join(name);
    debug!(path = %path.display(), content_type = doc.content_type, "writing document");

    fs::write(&path, &doc.body).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    stats.bytes += doc.body.len();
    stats.files.push(path);
    Ok(())
}
