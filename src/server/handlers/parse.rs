//! Parse handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::info;

use crate::error_handling::ApiError;
use crate::extract::{self, should_parse, ResultMap};
use crate::fetch::FetchResult;
use crate::server::types::{AppState, ParseRequest, ParseResponse};
use crate::server::validation::validate_request_url;

/// `POST /parse`: fetches the page and evaluates the selectors against it.
///
/// Selector failures are part of `data`; only fetch failures, invalid
/// requests and internal faults produce an error response.
pub async fn parse_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
    let url = validate_request_url(&request.url)?;
    let options = request.options.unwrap_or_default();

    info!(
        "Parsing {} with {} selector(s) (follow_redirects={}, text_only={})",
        url,
        request.selectors.len(),
        options.follow_redirects,
        options.text_only
    );

    let FetchResult {
        status_code,
        body,
        text,
        final_url,
        redirect_location,
    } = state
        .fetcher
        .fetch(url.as_str(), options.follow_redirects)
        .await?;

    let final_url = (final_url != url.as_str()).then_some(final_url);

    let data = if should_parse(status_code, options.follow_redirects) && !text.is_empty() {
        let selectors = request.selectors;
        // Tree construction is CPU-bound; keep it off the async workers
        tokio::task::spawn_blocking(move || extract::run(&body, &text, &selectors, &options))
            .await
            .map_err(|e| ApiError::Internal(format!("Extraction failed for URL {url}: {e}")))?
    } else {
        log::debug!("Skipping extraction for {url} (status {status_code})");
        ResultMap::new()
    };

    info!(
        "Parsed {} (status {}, {} value(s))",
        url,
        status_code,
        data.len()
    );

    Ok(Json(ParseResponse {
        status_code,
        redirect_location,
        final_url,
        data,
    }))
}
