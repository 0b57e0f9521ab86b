//! Greeting handler.

use axum::Json;

use crate::server::types::RootResponse;

/// `GET /`: points callers at the parse endpoint. Not authenticated.
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Page extraction service. POST selectors to /parse with an X-API-Key header.",
    })
}
