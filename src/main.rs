//! Service entry point: configuration, wiring, and the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use fractional_quest::adapters::agent::{AgentGatewayConfig, HttpAgentGateway};
use fractional_quest::adapters::http::{
    onboarding_routes, profile_routes, transcript_routes, OnboardingHandlers, ProfileHandlers,
    TranscriptHandlers,
};
use fractional_quest::adapters::memory::{HttpMemoryStore, MemoryStoreConfig, NoopMemoryStore};
use fractional_quest::adapters::postgres::PgProfileRepository;
use fractional_quest::application::handlers::onboarding::{
    GetOnboardingStateHandler, SubmitAnswerHandler,
};
use fractional_quest::application::handlers::profile::{
    DeleteProfileItemHandler, GetProfileSummaryHandler, ListProfileItemsHandler,
    UpsertProfileItemHandler,
};
use fractional_quest::application::handlers::transcript::LogTranscriptHandler;
use fractional_quest::config::AppConfig;
use fractional_quest::ports::{AgentGateway, MemoryStore, ProfileRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.server.log_level)?)
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting fractional-quest onboarding service"
    );

    // Database
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    // Adapters
    let repository: Arc<dyn ProfileRepository> = Arc::new(PgProfileRepository::new(pool));

    let mut gateway_config = AgentGatewayConfig::new(config.agent.base_url.clone())
        .with_timeout(config.agent.timeout())
        .with_max_retries(config.agent.max_retries);
    if let Some(key) = config.agent.api_key.clone() {
        gateway_config = gateway_config.with_api_key(key);
    }
    let gateway: Arc<dyn AgentGateway> = Arc::new(HttpAgentGateway::new(gateway_config));

    let memory: Arc<dyn MemoryStore> = match config.memory.api_key.clone() {
        Some(key) => {
            let store_config = MemoryStoreConfig::new(config.memory.base_url.clone(), key)
                .with_timeout(config.memory.timeout());
            Arc::new(HttpMemoryStore::new(store_config))
        }
        None => {
            tracing::info!("memory service not configured, transcripts will be dropped");
            Arc::new(NoopMemoryStore)
        }
    };

    // Application handlers
    let upsert_handler = Arc::new(UpsertProfileItemHandler::new(
        repository.clone(),
        memory.clone(),
    ));
    let delete_handler = Arc::new(DeleteProfileItemHandler::new(repository.clone()));
    let list_handler = Arc::new(ListProfileItemsHandler::new(repository.clone()));
    let summary_handler = Arc::new(GetProfileSummaryHandler::new(repository.clone()));
    let state_handler = Arc::new(GetOnboardingStateHandler::new(
        repository.clone(),
        gateway.clone(),
        config.agent.staleness_tolerance_secs,
    ));
    let answer_handler = Arc::new(SubmitAnswerHandler::new(gateway, memory.clone()));
    let log_handler = Arc::new(LogTranscriptHandler::new(memory));

    // Router
    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest(
            "/api/profile",
            profile_routes(ProfileHandlers::new(
                upsert_handler,
                delete_handler,
                list_handler,
                summary_handler,
            )),
        )
        .nest(
            "/api/onboarding",
            onboarding_routes(OnboardingHandlers::new(state_handler, answer_handler)),
        )
        .nest(
            "/api/transcripts",
            transcript_routes(TranscriptHandlers::new(log_handler)),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors_layer(&config)),
        );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<axum::http::HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
