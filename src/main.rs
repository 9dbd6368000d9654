//! Vocab Cache - word definitions behind a cache-aside lookup

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::{signal, task::JoinHandle};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocab_cache::api::{create_router, AppState};
use vocab_cache::cache::{MemoryVocabCache, RedisVocabCache, VocabCache};
use vocab_cache::config::{CacheBackend, Config};
use vocab_cache::metrics::ApiMetrics;
use vocab_cache::upstream::{build_http_client, NinjaDefinitionClient, NinjaWordClient};
use vocab_cache::{spawn_cleanup_task, LookupService};

/// Entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load `.env` and the YAML configuration
/// 3. Connect the cache backend (PING for Redis, cleanup task for memory)
/// 4. Build the upstream clients and the metrics recorder
/// 5. Serve the router until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocab_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vocab Cache Server");

    if dotenvy::dotenv().is_ok() {
        info!("Loaded environment from .env");
    }

    let config = Config::from_env().context("failed to load config")?;
    info!(
        "Configuration loaded: listen={}, backend={:?}, cache_time={}s",
        config.listen_addr(),
        config.cache.backend,
        config.cache.cache_time
    );

    let (cache, cleanup_handle) = connect_cache(&config).await?;

    let http_client = build_http_client(
        config.upstream_timeout(),
        config.ninjas.insecure_skip_verify,
    )
    .context("failed to build HTTP client")?;
    let fetcher = NinjaDefinitionClient::new(
        http_client.clone(),
        &config.ninjas.definition_url,
        &config.ninjas.def_api_key,
    );
    let generator = NinjaWordClient::new(
        http_client,
        &config.ninjas.word_generator_url,
        config.ninjas.word_generator_api_key(),
    );

    let metrics = ApiMetrics::new().context("failed to build metrics recorder")?;
    let lookup = LookupService::new(
        cache,
        Arc::new(fetcher),
        Arc::new(generator),
        config.cache_ttl(),
        metrics.clone(),
    );
    let app = create_router(AppState::new(lookup, metrics));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the configured cache backend.
///
/// Redis must answer a PING before the server starts. The memory backend
/// returns its cleanup task handle so shutdown can abort it.
async fn connect_cache(
    config: &Config,
) -> anyhow::Result<(Arc<dyn VocabCache>, Option<JoinHandle<()>>)> {
    match config.cache.backend {
        CacheBackend::Redis => {
            let cache = RedisVocabCache::connect(&config.redis_url())
                .await
                .context("failed to connect to Redis")?;
            cache.ping().await.context("failed to connect to Redis")?;
            info!("Connected to Redis at {}", config.redis_url());
            let cache: Arc<dyn VocabCache> = Arc::new(cache);
            Ok((cache, None))
        }
        CacheBackend::Memory => {
            let cache = MemoryVocabCache::new();
            let handle = spawn_cleanup_task(
                cache.clone(),
                Duration::from_secs(config.cache.cleanup_interval.max(1)),
            );
            warn!("Using in-memory cache; entries are not shared between instances");
            let cache: Arc<dyn VocabCache> = Arc::new(cache);
            Ok((cache, Some(handle)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// Aborts the cleanup task, if any, once the signal arrives.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
