mod analysis;
mod catalog;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::assembly::UuidV4Generator;
use crate::analysis::extraction::LlmSkillExtractor;
use crate::catalog::JobCatalog;
use crate::config::{Config, StorageBackend};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{AnalysisStore, FileKvStore, KvStore, MemoryKvStore, RedisKvStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillmatch API v{}", env!("CARGO_PKG_VERSION"));

    let kv = open_kv_store(&config).await?;
    let store = Arc::new(AnalysisStore::new(kv));

    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let catalog = Arc::new(JobCatalog::seeded()?);
    info!("Job catalog loaded with {} jobs", catalog.len());

    let state = AppState {
        extractor: Arc::new(LlmSkillExtractor::new(llm)),
        catalog,
        store,
        ids: Arc::new(UuidV4Generator),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the key-value backend selected by `STORAGE_BACKEND`.
async fn open_kv_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    let kv: Arc<dyn KvStore> = match config.storage_backend {
        StorageBackend::File => {
            let store = FileKvStore::open(&config.data_dir).with_context(|| {
                format!("Cannot open data directory {}", config.data_dir.display())
            })?;
            info!("History stored in {}", config.data_dir.display());
            Arc::new(store)
        }
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis backend")?;
            Arc::new(RedisKvStore::connect(url).await?)
        }
        StorageBackend::Memory => {
            info!("History kept in memory only; it is lost on restart");
            Arc::new(MemoryKvStore::new())
        }
    };
    Ok(kv)
}
