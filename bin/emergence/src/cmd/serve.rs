//! Serve command - HTTP server for the metadata documents and static assets

use std::{path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use emergence_core::Config;
use tokio::net::TcpListener;

use crate::server::{AppState, create_router};

/// Run the serve command.
///
/// Serves `/robots.txt`, `/sitemap.xml` and the static directory until interrupted.
pub async fn run(config: &Config, open_browser: bool) -> Result<()> {
    let server = &config.server;
    let static_dir = Path::new(&server.static_dir);
    tracing::info!(
        host = %server.host,
        port = server.port,
        base_path = %config.site.base_path,
        ?static_dir,
        "Starting server"
    );

    if !static_dir.is_dir() {
        tracing::warn!(?static_dir, "Static directory does not exist, assets will 404");
    }

    let state = Arc::new(AppState::new(config));
    let app = create_router(&config.site.base_path, static_dir, state);
    let addr = format!("{}:{}", server.host, server.port);

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    let site_url = format!("http://{addr}{}/", config.site.base_path);
    println!();
    println!("  Server running at {site_url}");
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser {
        if let Err(e) = open::that(&site_url) {
            tracing::warn!("Failed to open browser: {e}");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
