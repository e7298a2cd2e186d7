//! HTTP API for the expression evaluator
//!
//! Endpoints:
//! - `POST /api/eval` - evaluate an infix expression
//! - `POST /api/calc` - legacy two-operand calculation
//! - `GET /api/history` - most recent successful calculations
//! - `GET /health` - liveness probe
//!
//! CORS applies to the `/api` routes only.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::history::HistoryLog;
use crate::server::{
    config::ServerConfig,
    error::{ServerError, ServerResult},
    handlers::{calc_handler, eval_handler, health_handler, history_handler},
};

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Arc<HistoryLog>,
    /// Entries returned by the history endpoint
    pub view_limit: usize,
}

impl AppState {
    pub fn new(history: Arc<HistoryLog>, view_limit: usize) -> Self {
        Self {
            history,
            view_limit,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            Arc::new(HistoryLog::new(config.history_capacity)),
            config.history_view_limit,
        )
    }
}

fn cors_layer(config: &ServerConfig) -> ServerResult<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    match &config.cors_origin {
        None => Ok(cors.allow_origin(Any)),
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|_| ServerError::InvalidOrigin(origin.clone()))?;
            Ok(cors.allow_origin(origin))
        }
    }
}

/// Build the application router
pub fn create_app(state: AppState, config: &ServerConfig) -> ServerResult<Router> {
    let api = Router::new()
        .route("/eval", post(eval_handler))
        .route("/calc", post(calc_handler))
        .route("/history", get(history_handler))
        .layer(cors_layer(config)?);

    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(config.max_payload_size()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Start the HTTP server and serve until the process stops
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let state = AppState::from_config(&config);
    let app = create_app(state, &config)?;

    let addr = SocketAddr::from((config.host, config.port));
    info!(
        "Starting calculator API on http://{} (history capacity {})",
        addr, config.history_capacity
    );
    if config.cors_origin.is_none() {
        warn!("CORS enabled for all origins on /api");
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
