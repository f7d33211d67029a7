//! Dramapay API server
//!
//! Binds the billing HTTP surface: the ASAAS webhook endpoint plus the
//! customer and payment management endpoints used by the front end.

use std::time::Duration;

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dramapay::adapters::asaas::{AsaasConfig, AsaasGateway};
use dramapay::adapters::http::{billing_router, BillingAppState};
use dramapay::adapters::postgres::PostgresProfileStore;
use dramapay::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before tracing so the configured filter applies
    // (this also loads .env when present)
    let config = AppConfig::load()?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Dramapay API server v{}", env!("CARGO_PKG_VERSION"));
    if config.asaas.is_sandbox() {
        tracing::info!("ASAAS gateway pointed at sandbox");
    }

    // Create database pool
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!("Database connection established");

    // Run migrations on startup when configured
    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations complete");
    }

    // Wire adapters into the application state
    let gateway = AsaasGateway::new(
        AsaasConfig::new(config.asaas.api_key.clone()).with_base_url(config.asaas.base_url.clone()),
    );
    let profiles = PostgresProfileStore::new(pool);

    let state = BillingAppState {
        gateway: Arc::new(gateway),
        profiles: Arc::new(profiles),
        rules: config.billing.to_rules(),
        payment_callback_url: config.asaas.webhook_callback_url.clone(),
    };

    // Webhook deliveries and front-end calls both cross origins, so the
    // CORS policy stays permissive, matching what clients already expect.
    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", billing_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .with_state(state);

    let addr = config.server.socket_addr()?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "OK"
}
