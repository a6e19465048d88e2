//! Emergence CLI Library
//!
//! Serving and exporting the metadata surface of the Emergence exhibit site.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, build, resolve, check)
//! - [`server`] - axum router for `/robots.txt`, `/sitemap.xml` and static assets
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use emergence::cmd;
//!
//! let config = cmd::load_config(None).unwrap();
//! cmd::build::run(&config, Path::new("build")).unwrap();
//! ```

pub mod cmd;
pub mod server;

pub use emergence_core::Config;
pub use emergence_site::{PathResolver, RobotsResponder, SitemapResponder};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
