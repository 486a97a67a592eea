pub mod cache;
pub mod pages;
mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::date::{Clock, SystemClock};
use crate::github::{DiscussionSearch, GithubClient};
use crate::posts::DiscussionFetcher;
use cache::PostsCache;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: DiscussionFetcher,
    pub cache: Arc<PostsCache>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Build state around a search collaborator and a clock.
    #[must_use]
    pub fn new(config: Config, search: Arc<dyn DiscussionSearch>, clock: Arc<dyn Clock>) -> Self {
        let cache = Arc::new(PostsCache::new(config.revalidate));
        Self {
            config: Arc::new(config),
            fetcher: DiscussionFetcher::new(search),
            cache,
            clock,
        }
    }
}

/// Start the web server, backed by the GitHub API, until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let github = GithubClient::new(&config).context("Failed to initialize GitHub client")?;
    let state = AppState::new(config, Arc::new(github), Arc::new(SystemClock));

    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    let static_dir = find_static_dir();
    info!(static_dir = ?static_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. ./static (development)
/// 2. /usr/share/hiring-board/static (installed)
/// 3. Falls back to ./static
fn find_static_dir() -> PathBuf {
    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/hiring-board/static"),
    ];

    for path in &candidates {
        if path.exists() && path.is_dir() {
            return path.clone();
        }
    }

    PathBuf::from("./static")
}
