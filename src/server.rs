//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, state construction and the Axum server lifecycle.

use crate::config::{CacheType, Config};
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache, RedisCache};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Cache backend selected by `CACHE_TYPE`
/// - Application state
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The Redis backend cannot be reached after all retries
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = build_cache(&config).await?;

    let state = AppState::new(cache, config.cache_default_timeout);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the cache backend selected by the configuration.
///
/// The Redis connection is retried with jittered exponential backoff,
/// `redis_connect_retries` times after the first failure.
///
/// # Errors
///
/// Returns the last connection error when Redis stays unreachable.
pub async fn build_cache(config: &Config) -> Result<Arc<dyn CacheService>> {
    let cache: Arc<dyn CacheService> = match config.cache_type {
        CacheType::Redis => {
            let strategy = ExponentialBackoff::from_millis(100)
                .max_delay(std::time::Duration::from_secs(5))
                .map(jitter)
                .take(config.redis_connect_retries);

            let redis = Retry::spawn(strategy, || {
                RedisCache::connect(
                    &config.redis_url,
                    config.cache_default_timeout,
                    &config.cache_key_prefix,
                )
            })
            .await
            .context("Failed to connect to Redis")?;

            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        CacheType::Simple => {
            tracing::info!("Cache enabled (in-process)");
            Arc::new(MemoryCache::new(config.cache_default_timeout))
        }
        CacheType::Null => {
            tracing::info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    };

    Ok(cache)
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
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
