//! Landmark Guide server binary.

use std::error::Error;
use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use landmark_guide::adapters::ai::{CloudFunctionConfig, CloudFunctionProvider};
use landmark_guide::adapters::http::{api_router, AppState};
use landmark_guide::adapters::purchase::SimulatedPurchaseProvider;
use landmark_guide::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use landmark_guide::application::handlers::ChatSessionHandler;
use landmark_guide::application::EntitlementStore;
use landmark_guide::config::{AppConfig, ServerConfig, StorageBackend};
use landmark_guide::ports::KeyValueStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let kv: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.storage.path)),
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
    };
    let store = EntitlementStore::new(kv, config.usage.free_analysis_quota);

    let mut remote = CloudFunctionConfig::new(&config.remote.vision_url, &config.remote.chat_url)
        .with_timeout(config.remote.timeout().max(config.remote.chat_timeout()));
    if let Some(key) = config.remote.api_key() {
        remote = remote.with_api_key(key);
    }
    let provider = Arc::new(CloudFunctionProvider::new(remote)?);

    let chat = ChatSessionHandler::new(
        provider.clone(),
        config.remote.chat_timeout(),
        config.usage.chat_history_limit,
    );

    let state = AppState {
        store,
        purchases: Arc::new(SimulatedPurchaseProvider::new()),
        vision: provider,
        vision_timeout: config.remote.timeout(),
        chat: Arc::new(chat),
    };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        storage = ?config.storage.backend,
        "landmark guide listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}

/// RUST_LOG wins over the configured level. JSON output in production.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}
