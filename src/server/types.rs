//! Wire types of the HTTP API.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error_handling::ApiError;
use crate::extract::{ParseOptions, ResultMap, SelectorMap};
use crate::fetch::Fetcher;

/// Shared state of the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Fetch collaborator
    pub fetcher: Arc<dyn Fetcher>,
    /// Pre-shared API key, injected once at startup
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    /// Creates the state from a fetcher and the configured API key.
    pub fn new(fetcher: Arc<dyn Fetcher>, api_key: Option<String>) -> Self {
        Self {
            fetcher,
            api_key: api_key.map(Arc::from),
        }
    }
}

/// Body of `POST /parse`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParseRequest {
    /// Absolute http(s) URL of the page to fetch
    pub url: String,
    /// Named selectors, evaluated in the given order
    pub selectors: SelectorMap,
    /// Batch options; missing or `null` means the defaults
    #[serde(default)]
    pub options: Option<ParseOptions>,
}

/// Successful response of `POST /parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    /// Final upstream status code
    pub status_code: u16,
    /// `Location` of a 3xx response when redirects were not followed
    pub redirect_location: Option<String>,
    /// Final URL, present only when it differs from the requested one
    pub final_url: Option<String>,
    /// Selector key to extracted value
    pub data: ResultMap,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub detail: String,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Greeting
    pub message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            log::error!("Request failed ({}): {}", status.as_u16(), self);
        } else {
            log::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
