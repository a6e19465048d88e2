//! Build command - prerenders robots.txt and sitemap.xml

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use emergence_core::Config;
use emergence_site::{Exporter, RobotsResponder, SitemapResponder};

/// Run the build command.
///
/// Writes the metadata documents into the output directory.
pub fn run(config: &Config, output: &Path) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?output, "Starting build");

    let robots = RobotsResponder::new(config);
    let sitemap = SitemapResponder::with_system_clock(config);
    let stats = Exporter::new(&robots, &sitemap)
        .export(output)
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    for file in &stats.files {
        println!("  Wrote:      {}", file.display());
    }
    println!("  Bytes:      {}", stats.bytes);
    println!("  Duration:   {:.2}ms", duration.as_secs_f64() * 1000.0);
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
