//! HTTP server exposing the metadata documents and static assets

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use emergence_core::Config;
use emergence_site::{Document, RobotsResponder, SitemapResponder};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Responders shared by all requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub robots: RobotsResponder,
    pub sitemap: SitemapResponder,
}

impl AppState {
    /// Build the responders for a configuration, dating the sitemap with the system clock.
    pub fn new(config: &Config) -> Self {
        Self {
            robots: RobotsResponder::new(config),
            sitemap: SitemapResponder::with_system_clock(config),
        }
    }
}

/// Create the site router.
///
/// `/robots.txt` and `/sitemap.xml` are served at the root. With a non-empty
/// `base_path` they are also served under it, along with the static files;
/// otherwise static files are served from the root.
pub fn create_router(base_path: &str, static_dir: &Path, state: Arc<AppState>) -> Router {
    let site = metadata_routes().fallback_service(ServeDir::new(static_dir));

    let router = if base_path.is_empty() {
        site
    } else {
        metadata_routes().nest(base_path, site)
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn metadata_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap.xml", get(sitemap_handler))
}

async fn robots_handler(State(state): State<Arc<AppState>>) -> Response {
    document_response(state.robots.handle())
}

async fn sitemap_handler(State(state): State<Arc<AppState>>) -> Response {
    document_response(state.sitemap.handle())
}

fn document_response(doc: Document) -> Response {
    (doc.headers(), doc.body).into_response()
}
