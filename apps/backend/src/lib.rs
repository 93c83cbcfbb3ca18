pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::store::QuestionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<QuestionStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = QuestionStore::new(config.questions_path.clone());
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Question routes
        .route("/api/questions", get(routes::questions::list))
        .route("/api/questions/dedupe", post(routes::questions::dedupe))
        .route("/api/questions/:id", get(routes::questions::get))
        // Import routes
        .route("/api/import/parse", post(routes::import::parse))
        .route("/api/import/merge", post(routes::import::merge))
        // Grading
        .route("/ai/grade", post(routes::grade::grade))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        path = %config.questions_path.display(),
        dedup_threshold = config.dedup_threshold,
        pass_threshold = config.pass_threshold,
        "Loaded configuration"
    );

    let addr = config.bind_addr();
    let app = build_router(AppState::new(config))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
