//! HTTP server.
//!
//! Provides two endpoints:
//! - `GET /` - unauthenticated greeting
//! - `POST /parse` - fetch a page and extract values with named selectors
//!   (requires the `X-API-Key` header)

mod auth;
mod handlers;
mod types;
mod validation;

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::fetch::HttpFetcher;

pub use auth::{authenticate, require_api_key};
pub use handlers::{parse_handler, root_handler};
pub use types::{AppState, ErrorResponse, ParseRequest, ParseResponse, RootResponse};
pub use validation::validate_request_url;

/// Builds the application router.
///
/// Authentication is a route layer on `/parse` only, so unknown paths answer
/// 404 rather than 401.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/parse", post(parse_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/", get(root_handler))
        .merge(protected)
        .with_state(state)
}

/// Creates the production state: reqwest fetcher plus the configured key.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP clients cannot be built.
pub fn init_state(config: &Config) -> Result<AppState, InitializationError> {
    let fetcher = HttpFetcher::new(config)?;
    if config.api_key.is_none() {
        log::warn!("No API key configured; every /parse request will fail with 500");
    }
    Ok(AppState::new(Arc::new(fetcher), config.api_key.clone()))
}

/// Binds the listener and serves until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn start_server(config: &Config, state: AppState) -> Result<(), anyhow::Error> {
    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| InitializationError::BindError {
            addr: addr.clone(),
            source,
        })?;

    log::info!("Listening on http://{}/", addr);
    log::info!("  - Parse: POST http://{}/parse", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
