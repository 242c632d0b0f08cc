//! HTTP server initialization and runtime setup.
//!
//! Handles cache and upstream client construction, dependency wiring and the
//! Axum server lifecycle.

use crate::application::services::ResolutionService;
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::upstream::HttpUrlResolver;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Connects the cache, falling back to [`NullCache`] if Redis is unreachable.
///
/// The connection attempt is bounded by
/// [`crate::infrastructure::cache::CONNECT_TIMEOUT`].
pub async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    match RedisCache::connect(&config.redis_url, config.cache_timeout()).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to connect to Redis: {}. Using NullCache; every lookup goes to the URL service.",
                e
            );
            Arc::new(NullCache::new())
        }
    }
}

/// Builds the shared resolution service from configuration.
///
/// # Errors
///
/// Returns an error if the upstream HTTP client cannot be constructed.
pub fn build_resolution_service(
    config: &Config,
    cache: Arc<dyn CacheService>,
) -> Result<ResolutionService> {
    let resolver = HttpUrlResolver::new(&config.url_service_base_url, config.upstream_timeout())
        .context("Failed to build URL service client")?;

    Ok(ResolutionService::new(
        cache,
        Arc::new(resolver),
        config.cache_ttl(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache (or NullCache fallback)
/// - Upstream URL service client
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The upstream client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = connect_cache(&config).await;
    let resolution_service = Arc::new(build_resolution_service(&config, cache.clone())?);

    let state = AppState::new(resolution_service, cache);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Redirect service listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when Ctrl-C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
